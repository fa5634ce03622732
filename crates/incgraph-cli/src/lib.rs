//! incgraph command-line interface.
//!
pub mod discovery;
pub mod pipeline;

use incgraph_core::Result;

pub use discovery::discover_files;
pub use pipeline::run_pipeline;

/// Options for running incgraph.
pub struct IncgraphOptions {
    /// Configuration file path; `None` means an empty configuration.
    pub config: Option<String>,
    /// Input directory roots to scan.
    pub dirs: Vec<String>,
}

/// Main entry point: returns the rendered DOT document.
///
/// Nothing is emitted on failure; the whole run is all-or-nothing.
pub fn run_main(opts: &IncgraphOptions) -> Result<String> {
    pipeline::run_pipeline(opts)
}
