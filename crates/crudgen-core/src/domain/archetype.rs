//! The fixed controller matrix.
//!
//! Controller variants are encoded as data — a closed, ordered table — rather
//! than a trait hierarchy. Both generators iterate [`ControllerArchetype::TABLE`]
//! in order, so generation order and naming derivation stay trivially
//! testable against the whole set.

use std::fmt;

use serde::Serialize;

use crate::domain::naming::{NamingBundle, camel_case};

// ── HttpMethod ────────────────────────────────────────────────────────────────

/// HTTP method attached to a controller archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Lowercase form, used in test templates (`mockMvc.perform(get(...))`).
    pub const fn as_lower(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArchetypeShape ────────────────────────────────────────────────────────────

/// The (method, plurality) shape of an archetype.
///
/// Template resolution branches on the shape, never on the archetype name:
/// the paginated-list shape gets its own controller template, everything
/// else shares the simple one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArchetypeShape {
    pub method: HttpMethod,
    pub plural: bool,
}

impl ArchetypeShape {
    /// `true` for the paginated list endpoint (`GET` + plural).
    pub const fn is_paginated(&self) -> bool {
        self.plural && matches!(self.method, HttpMethod::Get)
    }
}

// ── ControllerArchetype ───────────────────────────────────────────────────────

/// One of the five fixed CRUD operation shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerArchetype {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl ControllerArchetype {
    /// The fixed archetype table. Order is significant and is reproduced in
    /// generation order.
    pub const TABLE: [ControllerArchetype; 5] = [
        Self::GetAll,
        Self::GetById,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetAll => "GetAll",
            Self::GetById => "GetById",
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::GetAll | Self::GetById => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Only the list endpoint addresses the plural resource.
    pub const fn plural(&self) -> bool {
        matches!(self, Self::GetAll)
    }

    pub const fn shape(&self) -> ArchetypeShape {
        ArchetypeShape {
            method: self.method(),
            plural: self.plural(),
        }
    }

    /// Derive the controller identifier for a capitalized domain name.
    ///
    /// Plural archetypes collapse to the `Get{Domain}sController` shape
    /// regardless of the archetype name; everything else is
    /// `{Name}{Domain}Controller`. Test and docs file names are derived from
    /// this same identifier, so the rule is load-bearing.
    pub fn controller_identifier(&self, domain: &str) -> String {
        if self.plural() {
            format!("Get{domain}sController")
        } else {
            format!("{}{domain}Controller", self.name())
        }
    }

    /// Handler method name: camelCased archetype name + domain
    /// (`getAllInvoice`).
    pub fn method_name(&self, domain: &str) -> String {
        format!("{}{domain}", camel_case(self.name()))
    }

    /// URL segment the archetype addresses: `/{domains}` for plural,
    /// `/{domain}` otherwise.
    pub fn endpoint(&self, naming: &NamingBundle) -> String {
        if self.plural() {
            format!("/{}", naming.domain_plural())
        } else {
            format!("/{}", naming.domain_lower())
        }
    }

    /// Fixed documentation sentence for this archetype.
    pub fn description(&self) -> &'static str {
        description_for(self.name())
    }
}

impl fmt::Display for ControllerArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human-readable sentence per archetype name, used only in generated docs.
///
/// The sentences are fixed English text and deliberately do not embed the
/// archetype or domain name; templates that want the domain interpolate
/// `{{domain}}` themselves next to `{{description}}`.
///
/// The generic fallback covers unrecognized names. The archetype set is
/// closed, so it cannot trigger from [`ControllerArchetype::description`],
/// but the lookup stays name-keyed so catalog tooling can reuse it.
pub fn description_for(name: &str) -> &'static str {
    match name {
        "GetAll" => "Retrieve paginated item list",
        "GetById" => "Retrieve single item by ID",
        "Create" => "Create new item",
        "Update" => "Update existing item",
        "Delete" => "Delete item by ID",
        _ => "Perform operation",
    }
}
