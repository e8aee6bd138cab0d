//! Core domain layer for Crudgen.
//!
//! Pure transformation logic with no I/O: path parsing, naming-convention
//! derivation, the controller matrix, and data-bundle construction. All
//! filesystem, catalog, and rendering concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: a [`NamingBundle`] is read-only after derivation

pub mod archetype;
pub mod artifact;
pub mod bundle;
pub mod error;
pub mod layout;
pub mod naming;
pub mod render_data;

// Re-exports for convenience
pub use archetype::{ArchetypeShape, ControllerArchetype, HttpMethod, description_for};
pub use artifact::ArtifactKind;
pub use error::{DomainError, ErrorCategory};
pub use layout::OutputLayout;
pub use naming::{NamingBundle, camel_case, capitalize};
pub use render_data::{RenderData, RenderValue};
