//! Application services - orchestrate generation use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! top-level use cases: "generate backend CRUD artifacts" and "generate
//! frontend pages".

pub mod backend;
pub mod frontend;

pub use backend::BackendGenerator;
pub use frontend::FrontendGenerator;

use std::path::PathBuf;

/// Files written by one `generate` invocation, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    created: Vec<PathBuf>,
}

impl GenerationReport {
    pub(crate) fn record(&mut self, path: PathBuf) {
        self.created.push(path);
    }

    /// Written files, in the order they were written.
    pub fn files(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}
