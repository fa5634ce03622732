//! Core processing pipeline: load config → discover files → build graph → render.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use incgraph_core::{Config, Result, build_graph};
use incgraph_dot::render_graph;

use crate::IncgraphOptions;
use crate::discovery::discover_files;

/// Run the whole pipeline and return the rendered DOT document.
///
/// The configuration is loaded once and passed by reference into every
/// stage. Any unreadable selected file aborts the run before anything is
/// rendered.
pub fn run_pipeline(opts: &IncgraphOptions) -> Result<String> {
    let config = match &opts.config {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    };

    let discovery_start = Instant::now();
    let mut files = Vec::new();
    for dir in &opts.dirs {
        files.extend(discover_files(&config, dir)?);
    }
    info!(
        "Discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        files.len()
    );

    let build_start = Instant::now();
    let graph = build_graph(&config, &files)?;
    info!(
        "Graph building: {:.2}s ({} source nodes)",
        build_start.elapsed().as_secs_f64(),
        graph.len()
    );

    let render_start = Instant::now();
    let output = render_graph(&graph, &config);
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(output)
}
