//! Render data passed across the template-engine port.
//!
//! Templates only ever see scalar values: strings for identifiers and
//! booleans for shape flags (`isPlural`, `isPaginated`). Keeping the data
//! model this small is what makes the templating technology swappable —
//! any engine with named-placeholder substitution and basic conditionals
//! can consume a [`RenderData`].
//!
//! Unused keys are never an error; templates consume whatever subset they
//! need.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single scalar value available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderValue {
    Str(String),
    Bool(bool),
}

impl From<&str> for RenderValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for RenderValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for RenderValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The key/value bundle compiled against one template.
///
/// Ordered (BTreeMap) so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderData {
    values: BTreeMap<String, RenderValue>,
}

impl RenderData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RenderValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RenderValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RenderValue> {
        self.values.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(RenderValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Bool value for `key`, if present and a bool.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(RenderValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RenderValue)> {
        self.values.iter()
    }
}
