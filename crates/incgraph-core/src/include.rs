//! Include resolution: mapping a raw include text to its destination node.

use std::path::Path;

use crate::config::Config;
use crate::graph::Node;
use crate::node;

/// Synthetic node that absorbs all standard-library includes.
pub const STD_NODE: &str = "c++";

/// Resolve the destination node for an include directive found in the source
/// file identified by `source_node` (which must be non-empty) and located in
/// `source_dir`.
///
/// Heuristics are tried strictly in order; the first match wins:
/// 1. neither slash nor dot: a standard-library header, [`STD_NODE`];
/// 2. first path segment keys the prefixed-library table;
/// 3. a sibling file in `source_dir`: either the source's own header pair
///    (same stem suffix) or a sibling node next to the source node;
/// 4. the untouched text keys the known-library table;
/// 5. fallback: treat the include as a relative source path and resolve it
///    like any other file, whether or not it exists on disk.
///
/// The result is empty only when the fallback path matches the ignore
/// pattern; an empty result records no edge.
pub fn resolve(config: &Config, source_node: &str, source_dir: &Path, include: &str) -> Node {
    // Greedy assumption: <vector>, <iostream> and friends carry neither a
    // slash nor a dot.
    if !include.contains('/') && !include.contains('.') {
        return STD_NODE.to_string();
    }

    if let Some(first_slash) = include.find('/') {
        let prefix = &include[..first_slash];
        if let Some(name) = config.prefixed_libraries.get(prefix) {
            return name.clone();
        }
    } else if source_dir.join(include).exists() {
        let stem = match include.rfind('.') {
            Some(i) => &include[..i],
            None => include,
        };
        // src/X.cpp including X.h refers to its own header pair -> "src/X".
        if source_node.ends_with(stem) {
            return source_node.to_string();
        }
        return match source_node.rfind('/') {
            Some(i) => format!("{}/{}", &source_node[..i], stem),
            None => stem.to_string(),
        };
    }

    if let Some(name) = config.known_libraries.get(include) {
        return name.clone();
    }

    node::resolve(config, include)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn empty_dir() -> tempfile::TempDir {
        tempdir().unwrap()
    }

    #[test]
    fn bare_names_are_standard_library() {
        let config = Config::default();
        let dir = empty_dir();
        assert_eq!(resolve(&config, "src/A", dir.path(), "vector"), "c++");
        assert_eq!(resolve(&config, "src/A", dir.path(), "list"), "c++");
    }

    #[test]
    fn prefixed_library_maps_to_display_name() {
        let config = Config::parse("[PrefixedHeaders]\nboost = \"Boost\"").unwrap();
        let dir = empty_dir();
        assert_eq!(
            resolve(&config, "src/A", dir.path(), "boost/optional.hpp"),
            "Boost"
        );
    }

    #[test]
    fn unknown_prefix_falls_through_to_path_rule() {
        let config = Config::default();
        let dir = empty_dir();
        assert_eq!(
            resolve(&config, "src/A", dir.path(), "engine/core.h"),
            "engine/core"
        );
    }

    #[test]
    fn own_header_pair_returns_source_node() {
        let config = Config::default();
        let dir = empty_dir();
        fs::write(dir.path().join("X.h"), "").unwrap();
        assert_eq!(resolve(&config, "src/X", dir.path(), "X.h"), "src/X");
    }

    #[test]
    fn sibling_header_joins_source_directory() {
        let config = Config::default();
        let dir = empty_dir();
        fs::write(dir.path().join("Bar.h"), "").unwrap();
        assert_eq!(resolve(&config, "a/Foo", dir.path(), "Bar.h"), "a/Bar");
        // A source node without a separator keeps just the stem.
        assert_eq!(resolve(&config, "Foo", dir.path(), "Bar.h"), "Bar");
    }

    #[test]
    fn missing_sibling_skips_the_heuristic() {
        let config = Config::default();
        let dir = empty_dir();
        // Bar.h does not exist next to the source, so the include resolves
        // as a plain relative path instead.
        assert_eq!(resolve(&config, "a/Foo", dir.path(), "Bar.h"), "Bar");
    }

    #[test]
    fn known_library_matches_exact_text() {
        let config = Config::parse("[OtherKnownHeaders]\nSQLite = [\"sqlite3.h\"]").unwrap();
        let dir = empty_dir();
        assert_eq!(resolve(&config, "src/A", dir.path(), "sqlite3.h"), "SQLite");
    }

    #[test]
    fn fallback_resolves_like_a_source_file() {
        let config = Config::parse("Granularity = 1").unwrap();
        let dir = empty_dir();
        assert_eq!(
            resolve(&config, "src/A", dir.path(), "engine/core/math.h"),
            "engine/core"
        );
    }

    #[test]
    fn fallback_honors_ignore_pattern() {
        let config = Config::parse("FileIgnorePattern = \"generated/.*\"").unwrap();
        let dir = empty_dir();
        assert_eq!(resolve(&config, "src/A", dir.path(), "generated/api.h"), "");
    }
}
