//! Naming derivation for domain paths.
//!
//! A single user input like `billing.invoice` or `billing/invoice` is turned
//! into the full set of naming variants every generated artifact needs:
//! capitalized type name, lowercase identifier, naive plural, and the
//! dot-joined package string.
//!
//! Derivation is a pure function of the input — this is the property that
//! keeps the rest of the engine deterministic and easy to test.

use std::path::PathBuf;

use crate::domain::error::DomainError;

/// The derived naming variants for one domain path.
///
/// Constructed once per invocation via [`NamingBundle::derive`] and read-only
/// afterwards. Nothing in the engine mutates a bundle after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingBundle {
    raw_path: String,
    segments: Vec<String>,
    domain: String,
    domain_lower: String,
    domain_plural: String,
    package_name: String,
}

impl NamingBundle {
    /// Derive a naming bundle from a dot- or slash-separated domain path.
    ///
    /// Both separators are accepted and equivalent:
    /// `derive("a.b.c") == derive("a/b/c")`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPath`] when, after normalization, no
    /// path segments remain (empty input, `"."`, `"/"`, ...).
    pub fn derive(input: &str) -> Result<Self, DomainError> {
        let normalized = input.replace('.', "/");

        let segments: Vec<String> = normalized
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        let Some(last) = segments.last() else {
            return Err(DomainError::InvalidPath {
                input: input.to_owned(),
                reason: "no path segments remain after normalization".into(),
            });
        };

        let domain_lower = last.to_lowercase();

        Ok(Self {
            raw_path: segments.join("/"),
            domain: capitalize(last),
            domain_plural: format!("{domain_lower}s"),
            domain_lower,
            package_name: segments.join("."),
            segments,
        })
    }

    /// The normalized input, slash-joined (`billing/invoice`).
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Ordered path components.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, first letter upper (`Invoice`). Used as a type name root.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Last segment, fully lowercased (`invoice`).
    pub fn domain_lower(&self) -> &str {
        &self.domain_lower
    }

    /// `domain_lower` + `"s"`. Naive by design: `policy` becomes `policys`.
    /// The same rule feeds both identifiers and URL segments, so callers
    /// depend on the naive form — do not "fix" irregular plurals here.
    pub fn domain_plural(&self) -> &str {
        &self.domain_plural
    }

    /// Segments joined with `.` (`billing.invoice`), used verbatim as the
    /// artifact namespace.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The domain path as a relative filesystem path (`billing/invoice`).
    pub fn as_rel_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest untouched.
pub fn camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
