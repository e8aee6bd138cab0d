//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the generators, implemented by
//!   infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `TemplateCatalog`: raw template text lookup
//!   - `TemplateEngine`: placeholder compilation

pub mod output;

pub use output::{Filesystem, TemplateCatalog, TemplateEngine};
