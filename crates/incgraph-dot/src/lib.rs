//! Graph rendering module for producing DOT format output.
//!
//! Serializes a built dependency graph into a fixed-grammar `strict digraph`
//! document: gray style lines for referenced libraries, colored style lines
//! for nodes that transitively reach a color seed, then one line per edge.
//! Layout is left entirely to the DOT consumer.

mod dot;

use std::fmt::Write;

use tracing::debug;

use incgraph_core::colorer::color_of;
use incgraph_core::{Config, Graph};

pub use dot::quoted;

/// Render the dependency graph as a `strict digraph` document.
///
/// - Every library display name that appears as a graph node and is not in
///   the ignore set gets a gray style line, regardless of any computed
///   color; a colored line for the same node may follow.
/// - Every non-ignored graph node with a computed color gets a colored
///   style line (an unconditional pass over all graph nodes).
/// - Every edge whose destination is not ignored gets an edge line. The
///   source side is deliberately not filtered: an edge from an ignored node
///   still appears.
pub fn render_graph(graph: &Graph, config: &Config) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("strict digraph{\n");

    let nodes = graph.nodes();

    let mut styled = 0usize;
    for library in config.library_names() {
        if nodes.contains(library) && !config.is_library_ignored(library) {
            let _ = writeln!(
                out,
                "{}[style=filled, fillcolor = \"Gray\"]",
                quoted(library)
            );
            styled += 1;
        }
    }

    let mut colored = 0usize;
    for node in &nodes {
        if config.is_library_ignored(node) {
            continue;
        }
        if let Some(color) = color_of(node, graph, &config.coloring) {
            let _ = writeln!(
                out,
                "{}[style=filled, fillcolor = \"{}\"]",
                quoted(node),
                color
            );
            colored += 1;
        }
    }

    let mut edges = 0usize;
    for (source, destinations) in graph.iter() {
        for destination in destinations {
            if config.is_library_ignored(destination) {
                continue;
            }
            let _ = writeln!(out, "{} -> {}", quoted(source), quoted(destination));
            edges += 1;
        }
    }

    out.push_str("}\n");

    debug!(
        nodes = nodes.len(),
        libraries = styled,
        colored,
        edges,
        "rendered graph"
    );
    out
}
