//! Template catalog adapters.

pub mod builtin;
mod local;
mod memory;

pub use local::LocalCatalog;
pub use memory::MemoryCatalog;
