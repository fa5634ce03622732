//! Transitive color propagation.
//!
//! A node takes the additive blend of the colors of every seed it
//! transitively depends on. Blending saturates per channel, so it is
//! commutative and associative and the set of reachable seeds alone
//! determines the result.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::graph::Graph;

/// Compute the blended color of `node`, or `None` when no seed is reachable.
///
/// Each reachable seed contributes exactly once, no matter how many paths
/// (or cycles) lead to it.
pub fn color_of(node: &str, graph: &Graph, seeds: &BTreeMap<String, Color>) -> Option<Color> {
    let mut result: Option<Color> = None;
    for (seed, color) in seeds {
        if graph.depends_on(node, seed) {
            result = Some(match result {
                None => *color,
                Some(acc) => acc.blend(*color),
            });
        }
    }
    result
}
