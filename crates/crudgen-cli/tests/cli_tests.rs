//! Integration tests for the crudgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudgen() -> Command {
    Command::cargo_bin("crudgen").unwrap()
}

#[test]
fn help_lists_subcommands() {
    crudgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend"))
        .stdout(predicate::str::contains("frontend"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    crudgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn backend_generates_fifteen_files() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["backend", "billing.invoice", "--project-root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("15 backend files generated"));

    let src = temp
        .path()
        .join("backend/src/main/java/com/example/app/feature/api/billing/invoice");
    let tests = temp
        .path()
        .join("backend/src/test/java/com/example/app/feature/api/billing/invoice");
    let docs = temp.path().join("backend/docs/api/feature/billing/invoice");

    for name in [
        "GetInvoicesController",
        "GetByIdInvoiceController",
        "CreateInvoiceController",
        "UpdateInvoiceController",
        "DeleteInvoiceController",
    ] {
        assert!(src.join(format!("{name}.java")).is_file(), "missing {name}.java");
        assert!(
            tests.join(format!("{name}Test.java")).is_file(),
            "missing {name}Test.java"
        );
        assert!(docs.join(format!("{name}.md")).is_file(), "missing {name}.md");
    }

    let controller =
        std::fs::read_to_string(src.join("CreateInvoiceController.java")).unwrap();
    assert!(controller.contains("package com.example.app.feature.api.billing.invoice;"));
    assert!(controller.contains("RequestMethod.POST"));
}

#[test]
fn frontend_generates_four_files() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["frontend", "billing/invoice", "--project-root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 frontend files generated"));

    let pages = temp.path().join("frontend/src/pages/apps/billing/invoice");
    assert!(pages.join("list/index.vue").is_file());
    assert!(pages.join("list/composables.ts").is_file());
    assert!(pages.join("view/[id].vue").is_file());
    assert!(pages.join("view/composables.ts").is_file());

    let composable = std::fs::read_to_string(pages.join("list/composables.ts")).unwrap();
    assert!(composable.contains("useInvoiceList"));
    assert!(composable.contains("'/invoices'"));
}

#[test]
fn invalid_domain_path_exits_2() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["backend", ".", "--project-root"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));

    // Nothing was written.
    assert!(!temp.path().join("backend").exists());
}

#[test]
fn empty_template_catalog_exits_3() {
    let temp = TempDir::new().unwrap();
    let empty_templates = TempDir::new().unwrap();

    crudgen()
        .args(["backend", "billing.invoice", "--project-root"])
        .arg(temp.path())
        .arg("--templates")
        .arg(empty_templates.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("template not found"));
}

#[test]
fn regeneration_overwrites_byte_identically() {
    let temp = TempDir::new().unwrap();
    let file = temp
        .path()
        .join("backend/src/main/java/com/example/app/feature/api/hr/employee/GetEmployeesController.java");

    crudgen()
        .args(["backend", "hr.employee", "--project-root"])
        .arg(temp.path())
        .assert()
        .success();
    let first = std::fs::read_to_string(&file).unwrap();

    crudgen()
        .args(["backend", "hr.employee", "--project-root"])
        .arg(temp.path())
        .assert()
        .success();
    let second = std::fs::read_to_string(&file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn quiet_suppresses_progress_output() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["frontend", "billing.invoice", "--quiet", "--project-root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // Files are still written.
    assert!(
        temp.path()
            .join("frontend/src/pages/apps/billing/invoice/list/index.vue")
            .is_file()
    );
}

#[test]
fn completions_emit_bash_script() {
    crudgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen"));
}

#[test]
fn malformed_config_exits_4_with_suggestions() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("crudgen.toml");
    std::fs::write(&config, "layout = \"not-a-table\"\n").unwrap();

    crudgen()
        .args(["backend", "billing.invoice", "--project-root"])
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn missing_explicit_config_exits_4() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .args(["backend", "billing.invoice", "--project-root"])
        .arg(temp.path())
        .args(["--config", "/definitely/not/a/config.toml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_file_overrides_layout() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("crudgen.toml");
    std::fs::write(
        &config,
        "[layout]\nbackend_src_root = \"server/api\"\nbackend_ext = \"kt\"\n",
    )
    .unwrap();

    crudgen()
        .args(["backend", "billing.invoice", "--project-root"])
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(
        temp.path()
            .join("server/api/billing/invoice/CreateInvoiceController.kt")
            .is_file()
    );
}
