// Inheritance graph built from the class registry

use super::registry::ClassRegistry;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph with one node per class and edges pointing from base to derived
#[derive(Debug, Default)]
pub struct InheritanceGraph {
    pub graph: DiGraph<String, ()>,
    /// Map from class name to node for O(1) lookup
    node_index: HashMap<String, NodeIndex>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a finished registry.
    ///
    /// Nodes are added in registry order; each class with a parent
    /// contributes exactly one parent -> child edge.
    pub fn from_registry(registry: &ClassRegistry) -> Self {
        let mut graph = Self::new();

        for node in registry.iter() {
            graph.ensure_node(&node.name);
        }

        for node in registry.iter() {
            if let Some(parent) = node.parent.as_deref().filter(|p| !p.is_empty()) {
                let from = graph.ensure_node(parent);
                let to = graph.ensure_node(&node.name);
                graph.graph.add_edge(from, to, ());
            }
        }

        graph
    }

    /// Get or create the node for a class name
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Check for an edge from `parent` to `child`
    pub fn contains_edge(&self, parent: &str, child: &str) -> bool {
        match (self.node_index.get(parent), self.node_index.get(child)) {
            (Some(&from), Some(&to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Class names in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// (parent, child) pairs in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.raw_edges().iter().map(move |e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
            )
        })
    }
}
