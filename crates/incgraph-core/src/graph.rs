//! The collapsed dependency graph.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// A canonical node identifier: a file stem, a directory, or a synthetic
/// library name such as `"c++"`. Empty means "no node" and never enters the
/// graph.
pub type Node = String;

/// A directed "depends on" graph over [`Node`]s.
///
/// Built incrementally by the graph builder, then read-only for the rest of
/// the pipeline. Adjacency sets are unique and unordered in meaning; the
/// BTree storage just keeps iteration deterministic. An absent key means "no
/// known outgoing dependency", not an error.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency edge. Idempotent; empty endpoints and self-edges
    /// are discarded.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() || from == to {
            return;
        }
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    /// Direct dependencies of a node, if any are known.
    pub fn dependencies(&self, node: &str) -> Option<&BTreeSet<Node>> {
        self.edges.get(node)
    }

    /// Iterate over (source, adjacency set) pairs in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &BTreeSet<Node>)> {
        self.edges.iter()
    }

    /// Every node mentioned anywhere in the graph: sources and destinations.
    pub fn nodes(&self) -> BTreeSet<&str> {
        let mut result: BTreeSet<&str> = BTreeSet::new();
        for (source, destinations) in &self.edges {
            result.insert(source.as_str());
            result.extend(destinations.iter().map(String::as_str));
        }
        result
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `depender` transitively depends on `dependee`.
    ///
    /// Reflexive: every node depends on itself. The traversal keeps a
    /// visited set so cyclic graphs terminate.
    pub fn depends_on(&self, depender: &str, dependee: &str) -> bool {
        if depender == dependee {
            return true;
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: VecDeque<&str> = self
            .edges
            .get(depender)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();

        while let Some(node) = pending.pop_front() {
            if node == dependee {
                return true;
            }
            if !visited.insert(node) {
                continue;
            }
            if let Some(next) = self.edges.get(node) {
                pending.extend(next.iter().map(String::as_str));
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("c", "d");
        graph
    }

    #[test]
    fn self_edges_are_never_inserted() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a");
        assert!(graph.is_empty());

        graph.add_edge("a", "b");
        graph.add_edge("a", "a");
        assert_eq!(graph.dependencies("a").unwrap().len(), 1);
    }

    #[test]
    fn empty_endpoints_are_discarded() {
        let mut graph = Graph::new();
        graph.add_edge("", "b");
        graph.add_edge("a", "");
        assert!(graph.is_empty());
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");
        assert_eq!(graph.dependencies("a").unwrap().len(), 1);
    }

    #[test]
    fn nodes_cover_sources_and_destinations() {
        let graph = sample();
        let nodes = graph.nodes();
        assert_eq!(
            nodes.into_iter().collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn depends_on_is_reflexive() {
        let graph = sample();
        assert!(graph.depends_on("a", "a"));
        // Even for nodes the graph has never seen.
        assert!(graph.depends_on("zzz", "zzz"));
    }

    #[test]
    fn depends_on_is_transitive() {
        let graph = sample();
        assert!(graph.depends_on("a", "d"));
        assert!(graph.depends_on("b", "d"));
        assert!(!graph.depends_on("d", "a"));
        assert!(!graph.depends_on("a", "zzz"));
    }

    #[test]
    fn depends_on_terminates_on_cycles() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        graph.add_edge("b", "c");
        assert!(graph.depends_on("a", "c"));
        assert!(graph.depends_on("b", "a"));
        assert!(!graph.depends_on("c", "a"));
    }
}
