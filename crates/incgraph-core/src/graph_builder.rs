//! Graph construction: one pass over the discovered files.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, trace};

use crate::config::Config;
use crate::graph::Graph;
use crate::{include, node};
use incgraph_error::{Error, Result};

/// A discovered source file: where it lives on disk and its
/// input-dir-relative, `/`-separated path used for node identity.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative: String,
}

/// Matches `#include "..."` and `#include <...>` and captures the payload
/// exactly as written.
const INCLUDE_PATTERN: &str = r#"^#\s*include\s*["<]([^">]+)[">]"#;

/// Build the dependency graph over all discovered files.
///
/// Each file contributes its node plus one edge per resolvable include.
/// An unreadable file aborts the whole run; no partial graph escapes to the
/// caller. Malformed include lines are not errors, just non-matches.
pub fn build_graph(config: &Config, files: &[SourceFile]) -> Result<Graph> {
    let include_statement = Regex::new(INCLUDE_PATTERN).expect("include pattern is valid");

    let mut graph = Graph::new();
    for file in files {
        let source_node = node::resolve(config, &file.relative);
        if source_node.is_empty() {
            trace!(path = %file.relative, "skipped by FileIgnorePattern");
            continue;
        }
        scan_file(config, &include_statement, file, &source_node, &mut graph)?;
    }

    debug!(
        sources = graph.len(),
        nodes = graph.nodes().len(),
        "graph built"
    );
    Ok(graph)
}

/// Scan one file line by line and record its include edges.
fn scan_file(
    config: &Config,
    include_statement: &Regex,
    file: &SourceFile,
    source_node: &str,
    graph: &mut Graph,
) -> Result<()> {
    let bytes = fs::read(&file.path).map_err(|err| {
        Error::from(err)
            .with_operation("graph_builder::scan_file")
            .with_context("path", file.path.display().to_string())
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let source_dir = file.path.parent().unwrap_or_else(|| Path::new(""));

    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with('#') {
            continue;
        }
        let Some(captures) = include_statement.captures(line) else {
            continue;
        };
        let raw_include = &captures[1];

        let destination = include::resolve(config, source_node, source_dir, raw_include);
        if destination.is_empty() || destination == source_node {
            continue;
        }
        trace!(from = source_node, to = %destination, include = raw_include, "edge");
        graph.add_edge(source_node, &destination);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use incgraph_error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn source(dir: &Path, relative: &str, content: &str) -> SourceFile {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        SourceFile {
            path,
            relative: relative.to_string(),
        }
    }

    #[test]
    fn includes_become_edges() {
        let dir = tempdir().unwrap();
        let files = [
            source(
                dir.path(),
                "a/Foo.cpp",
                "#include \"Bar.h\"\n#include <vector>\nint main() {}\n",
            ),
            source(dir.path(), "a/Bar.h", ""),
        ];

        let graph = build_graph(&Config::default(), &files).unwrap();
        let deps = graph.dependencies("a/Foo").unwrap();
        assert!(deps.contains("a/Bar"));
        assert!(deps.contains("c++"));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn own_header_pair_makes_no_self_loop() {
        let dir = tempdir().unwrap();
        let files = [
            source(dir.path(), "src/X.cpp", "#include \"X.h\"\n"),
            source(dir.path(), "src/X.h", "#include <map>\n"),
        ];

        let graph = build_graph(&Config::default(), &files).unwrap();
        // X.cpp and X.h collapse to one node; only the <map> edge remains.
        assert_eq!(
            graph.dependencies("src/X").unwrap().iter().collect::<Vec<_>>(),
            vec!["c++"]
        );
    }

    #[test]
    fn malformed_include_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let files = [source(
            dir.path(),
            "a.cpp",
            "#include\n#pragma once\n# include weird\n//#include \"b.h\"\n",
        )];

        let graph = build_graph(&Config::default(), &files).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn indented_and_spaced_includes_match() {
        let dir = tempdir().unwrap();
        let files = [source(
            dir.path(),
            "a.cpp",
            "   #  include   <vector>\n\t#include<list>\n",
        )];

        let graph = build_graph(&Config::default(), &files).unwrap();
        assert_eq!(
            graph.dependencies("a").unwrap().iter().collect::<Vec<_>>(),
            vec!["c++"]
        );
    }

    #[test]
    fn ignored_files_contribute_nothing() {
        let dir = tempdir().unwrap();
        let config = Config::parse("FileIgnorePattern = \"moc_.*\"").unwrap();
        let files = [source(dir.path(), "moc_win.cpp", "#include <vector>\n")];

        let graph = build_graph(&config, &files).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn missing_file_aborts_the_build() {
        let dir = tempdir().unwrap();
        let files = [SourceFile {
            path: dir.path().join("gone.cpp"),
            relative: "gone.cpp".to_string(),
        }];

        let err = build_graph(&Config::default(), &files).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
