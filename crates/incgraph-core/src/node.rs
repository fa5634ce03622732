//! Node resolution: mapping a source path to its canonical graph node.

use crate::config::{Config, Granularity};
use crate::graph::Node;

/// Resolve the canonical node for a source file path (relative to its input
/// directory, `/`-separated).
///
/// Returns the empty node when the path matches `FileIgnorePattern`; callers
/// must then skip the file entirely. At `Classes` granularity the node is the
/// extension-stripped path; coarser granularities keep only the directory
/// portion.
pub fn resolve(config: &Config, relative_path: &str) -> Node {
    if config.is_path_ignored(relative_path) {
        return Node::new();
    }

    let stripped = strip_extension(relative_path);
    if config.granularity == Granularity::Classes {
        return stripped.to_string();
    }

    // Modules and TopLevelModules both collapse to the containing directory.
    match stripped.rfind('/') {
        Some(i) => stripped[..i].to_string(),
        None => stripped.to_string(),
    }
}

/// Strip the extension from the final path component, if any.
fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        // A leading dot is a hidden file, not an extension.
        Some(i) if i > 0 => &path[..name_start + i],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(granularity: i64, ignore: &str) -> Config {
        let mut text = format!("Granularity = {granularity}\n");
        if !ignore.is_empty() {
            text.push_str(&format!("FileIgnorePattern = \"{ignore}\"\n"));
        }
        Config::parse(&text).unwrap()
    }

    #[test]
    fn classes_keeps_one_node_per_file() {
        let config = config(0, "");
        assert_eq!(resolve(&config, "src/Widget.cpp"), "src/Widget");
        assert_eq!(resolve(&config, "main.cpp"), "main");
    }

    #[test]
    fn modules_collapse_to_directory() {
        let config = config(1, "");
        assert_eq!(resolve(&config, "src/ui/Widget.cpp"), "src/ui");
        // No separator: the stripped path itself stands.
        assert_eq!(resolve(&config, "main.cpp"), "main");
    }

    #[test]
    fn toplevel_modules_match_modules() {
        let modules = config(1, "");
        let toplevel = config(2, "");
        for path in ["src/ui/Widget.cpp", "a/b/c/D.h", "main.cpp"] {
            assert_eq!(resolve(&modules, path), resolve(&toplevel, path));
        }
    }

    #[test]
    fn ignored_paths_yield_empty_node() {
        let config = config(0, "moc_.*");
        assert_eq!(resolve(&config, "moc_window.cpp"), "");
        assert_eq!(resolve(&config, "src/moc_window.cpp"), "");
        assert_eq!(resolve(&config, "window.cpp"), "window");
    }

    #[test]
    fn extension_stripping_edge_cases() {
        let config = config(0, "");
        // Only the last extension goes.
        assert_eq!(resolve(&config, "src/pb/msg.pb.h"), "src/pb/msg.pb");
        // Dotted directories stay intact.
        assert_eq!(resolve(&config, "v1.2/api.h"), "v1.2/api");
        // Hidden files keep their name.
        assert_eq!(resolve(&config, "src/.clangd"), "src/.clangd");
        // No extension at all.
        assert_eq!(resolve(&config, "src/README"), "src/README");
    }
}
