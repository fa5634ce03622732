//! File discovery and filtering for incgraph.

use std::path::Path;
use std::time::Instant;

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use tracing::info;

use incgraph_core::{Config, Error, ErrorKind, Result, SourceFile};

/// Discover candidate source files under one input directory root.
///
/// The walk is recursive (the walker keeps its own worklist, so deep trees
/// cannot exhaust the stack) and skips hidden entries. `FilePatterns` globs
/// act as a whitelist; with no pattern configured every file is a candidate.
/// Results are sorted by their root-relative path so output is deterministic.
pub fn discover_files(config: &Config, dir: &str) -> Result<Vec<SourceFile>> {
    let discovery_start = Instant::now();
    let root = Path::new(dir);

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false);

    if !config.file_patterns.is_empty() {
        builder.overrides(build_overrides(config, root)?);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|err| {
            Error::new(
                ErrorKind::TraversalFailed,
                format!("failed to walk directory '{dir}'"),
            )
            .with_operation("discovery::discover_files")
            .set_source(err)
        })?;

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    info!(
        "File discovery: {:.2}s ({} files under {})",
        discovery_start.elapsed().as_secs_f64(),
        files.len(),
        dir
    );

    Ok(files)
}

/// Turn `FilePatterns` into a whitelist override for the walker.
fn build_overrides(config: &Config, root: &Path) -> Result<ignore::overrides::Override> {
    let mut overrides = OverrideBuilder::new(root);
    for pattern in &config.file_patterns {
        overrides.add(pattern).map_err(|err| {
            Error::pattern_invalid(pattern, "invalid FilePatterns glob")
                .with_operation("discovery::build_overrides")
                .set_source(err)
        })?;
    }
    overrides.build().map_err(|err| {
        Error::pattern_invalid("", "failed to compile FilePatterns globs")
            .with_operation("discovery::build_overrides")
            .set_source(err)
    })
}
