//! Built-in template set.
//!
//! These are the templates that ship with Crudgen, compiled into the binary
//! via `include_str!`. They target the conventional Spring + Vue layout and
//! are used whenever no external catalog directory is configured. An
//! external catalog (`--templates`) completely replaces this set — there is
//! no per-file merging.

/// All shipped templates as `(catalog-relative path, text)` pairs.
pub fn all_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "backend/simple-controller.hbs",
            include_str!("../../templates/backend/simple-controller.hbs"),
        ),
        (
            "backend/get-list-controller.hbs",
            include_str!("../../templates/backend/get-list-controller.hbs"),
        ),
        (
            "backend/test.hbs",
            include_str!("../../templates/backend/test.hbs"),
        ),
        (
            "backend/docs.hbs",
            include_str!("../../templates/backend/docs.hbs"),
        ),
        (
            "frontend/list.vue.hbs",
            include_str!("../../templates/frontend/list.vue.hbs"),
        ),
        (
            "frontend/list-composable.hbs",
            include_str!("../../templates/frontend/list-composable.hbs"),
        ),
        (
            "frontend/view.vue.hbs",
            include_str!("../../templates/frontend/view.vue.hbs"),
        ),
        (
            "frontend/view-composable.hbs",
            include_str!("../../templates/frontend/view-composable.hbs"),
        ),
    ]
}
