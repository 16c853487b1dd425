//! Graph model adapter.
//!
//! The layout engine never owns the caller's graph. It reads a snapshot through [`GraphModel`]
//! once per layout run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Read-only view of a caller-owned directed graph.
///
/// Node and edge handles must be stable, hashable identifiers: the engine maps them to arena
/// slots by equality, never by position.
pub trait GraphModel {
    type Node: Clone + Eq + Hash + Debug;
    type Edge: Clone + Eq + Hash + Debug;

    /// Nodes in a deterministic order. Duplicates are collapsed to their first occurrence.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Edges in a deterministic order.
    fn edges(&self) -> Vec<Self::Edge>;

    fn edge_source(&self, edge: &Self::Edge) -> Self::Node;

    fn edge_target(&self, edge: &Self::Edge) -> Self::Node;

    /// Pixel size of a node, if the host knows it. Missing sizes lay out as [`Size::ZERO`].
    fn node_size(&self, _node: &Self::Node) -> Option<Size> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A node as seen by [`SimpleGraph::iter_nodes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleNode<'a> {
    pub id: &'a str,
    pub size: Size,
}

/// In-memory [`GraphModel`] keyed by string ids.
///
/// Serializes as `{"nodes": {"a": {"width": 10, "height": 5}}, "edges": [...]}` where each edge
/// carries `id`, `source` and `target`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleGraph {
    #[serde(default)]
    pub nodes: IndexMap<String, Size>,
    #[serde(default)]
    pub edges: Vec<SimpleEdge>,
}

impl SimpleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.nodes.entry(id.into()).or_insert(Size::ZERO);
        self
    }

    pub fn add_sized_node(&mut self, id: impl Into<String>, width: f64, height: f64) -> &mut Self {
        self.nodes.insert(id.into(), Size::new(width, height));
        self
    }

    /// Adds `source -> target`, creating missing endpoints. The edge id is `source->target`,
    /// suffixed with `#n` for parallel edges.
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        let source = source.into();
        let target = target.into();
        self.add_node(source.clone());
        self.add_node(target.clone());

        let base = format!("{source}->{target}");
        let mut id = base.clone();
        let mut n = 1usize;
        while self.edges.iter().any(|e| e.id == id) {
            id = format!("{base}#{n}");
            n += 1;
        }
        self.edges.push(SimpleEdge { id, source, target });
        self
    }

    /// Adds an edge without creating its endpoints.
    pub fn add_raw_edge(
        &mut self,
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Self {
        self.edges.push(SimpleEdge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        });
        self
    }

    pub fn add_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = SimpleNode<'_>> {
        self.nodes.iter().map(|(id, size)| SimpleNode {
            id: id.as_str(),
            size: *size,
        })
    }

    pub fn edge(&self, id: &str) -> Option<&SimpleEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

impl GraphModel for SimpleGraph {
    type Node = String;
    type Edge = SimpleEdge;

    fn nodes(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<SimpleEdge> {
        self.edges.clone()
    }

    fn edge_source(&self, edge: &SimpleEdge) -> String {
        edge.source.clone()
    }

    fn edge_target(&self, edge: &SimpleEdge) -> String {
        edge.target.clone()
    }

    fn node_size(&self, node: &String) -> Option<Size> {
        self.nodes.get(node).copied()
    }
}
