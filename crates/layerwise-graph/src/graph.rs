//! Vertex/edge arena.
//!
//! Vertices and edges live in flat vectors and refer to each other by index. Edge `s -> t`
//! makes `t` a *lower* neighbor of `s` and `s` an *upper* neighbor of `t`: lower means further
//! from the roots. Self-loops are recorded as edges but never as neighbor links.

use crate::error::{Error, Result};
use crate::model::{GraphModel, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Why a dummy vertex exists. Only `Bend` is produced by the layout pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DummyKind {
    #[default]
    Bend,
    Crossing,
    Hyperedge,
    Temporary,
}

#[derive(Debug, Clone)]
pub struct Vertex<N> {
    node: Option<N>,
    dummy: Option<(DummyKind, EdgeId)>,
    layer: i32,
    order: i32,
    x: i32,
    size: Size,
    upper: Vec<VertexId>,
    lower: Vec<VertexId>,
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl<N> Vertex<N> {
    fn new(node: Option<N>, size: Size) -> Self {
        Self {
            node,
            dummy: None,
            layer: -1,
            order: 0,
            x: 0,
            size,
            upper: Vec::new(),
            lower: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// The external node, or `None` for a dummy vertex.
    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    pub fn is_dummy(&self) -> bool {
        self.dummy.is_some()
    }

    pub fn dummy_kind(&self) -> Option<DummyKind> {
        self.dummy.map(|(kind, _)| kind)
    }

    /// The original edge a dummy vertex subdivides.
    pub fn original_edge(&self) -> Option<EdgeId> {
        self.dummy.map(|(_, e)| e)
    }

    /// Layer index, `-1` while unassigned.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// 1-based rank within the layer, `0` while unassigned.
    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.layer
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn upper_neighbors(&self) -> &[VertexId] {
        &self.upper
    }

    pub fn lower_neighbors(&self) -> &[VertexId] {
        &self.lower
    }

    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    // Layer and rank are written by `LayeredGraph`, which keeps layer membership in sync.
    // Calling these directly leaves the layered graph inconsistent.

    /// Moves the vertex to `layer` at rank `order`. `x` follows the rank.
    #[doc(hidden)]
    pub fn place(&mut self, layer: i32, order: i32) {
        self.layer = layer;
        self.order = order;
        self.x = order;
    }

    /// Updates the rank within the current layer. `x` follows the rank.
    #[doc(hidden)]
    pub fn set_order(&mut self, order: i32) {
        self.order = order;
        self.x = order;
    }

    #[doc(hidden)]
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }
}

#[derive(Debug, Clone)]
pub struct Edge<E> {
    source: VertexId,
    target: VertexId,
    external: Option<E>,
    origin: EdgeId,
    live: bool,
}

impl<E> Edge<E> {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    /// The external edge, or `None` for a dummy edge.
    pub fn external(&self) -> Option<&E> {
        self.external.as_ref()
    }

    pub fn is_dummy(&self) -> bool {
        self.external.is_none()
    }

    /// The original edge this edge was derived from (itself for an original edge).
    pub fn original(&self) -> EdgeId {
        self.origin
    }

    /// `false` once the edge has been subdivided by a dummy vertex.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    vertices: Vec<Vertex<N>>,
    edges: Vec<Edge<E>>,
    node_index: IndexMap<N, VertexId>,
    original_edge_count: usize,
    roots: Vec<VertexId>,
}

impl<N, E> DirectedGraph<N, E>
where
    N: Clone + Eq + Hash,
{
    /// Snapshots `model` into a fresh arena.
    ///
    /// Every node gets a vertex (isolated ones included), in model order. An edge whose source
    /// or target is not among the model's nodes is rejected.
    pub fn from_model<M>(model: &M) -> Result<Self>
    where
        M: GraphModel<Node = N, Edge = E>,
        E: Debug,
    {
        let mut g = Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            node_index: IndexMap::new(),
            original_edge_count: 0,
            roots: Vec::new(),
        };

        for node in model.nodes() {
            if g.node_index.contains_key(&node) {
                continue;
            }
            let size = model.node_size(&node).unwrap_or(Size::ZERO);
            let id = VertexId(g.vertices.len());
            g.vertices.push(Vertex::new(Some(node.clone()), size));
            g.node_index.insert(node, id);
        }

        for edge in model.edges() {
            let source = g.node_index.get(&model.edge_source(&edge)).copied();
            let target = g.node_index.get(&model.edge_target(&edge)).copied();
            let (Some(source), Some(target)) = (source, target) else {
                return Err(Error::MissingEndpoint {
                    edge: format!("{edge:?}"),
                });
            };
            g.push_edge(source, target, Some(edge), None);
        }
        g.original_edge_count = g.edges.len();

        g.roots = g
            .vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.upper.is_empty())
            .map(|(ix, _)| VertexId(ix))
            .collect();

        tracing::debug!(
            vertices = g.vertices.len(),
            edges = g.original_edge_count,
            roots = g.roots.len(),
            "built directed graph"
        );
        Ok(g)
    }

    pub fn vertex_for_node(&self, node: &N) -> Option<VertexId> {
        self.node_index.get(node).copied()
    }
}

impl<N, E> DirectedGraph<N, E> {
    fn push_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        external: Option<E>,
        origin: Option<EdgeId>,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            external,
            origin: origin.unwrap_or(id),
            live: true,
        });
        self.vertices[source.0].outgoing.push(id);
        self.vertices[target.0].incoming.push(id);
        if source != target {
            push_unique(&mut self.vertices[source.0].lower, target);
            push_unique(&mut self.vertices[target.0].upper, source);
        }
        id
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex<N> {
        &self.vertices[id.0]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<N> {
        &mut self.vertices[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<E> {
        &self.edges[id.0]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn dummy_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_dummy()).count()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + use<N, E> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<N>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(ix, v)| (VertexId(ix), v))
    }

    /// Edges that currently exist, dummy edges included.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.live)
            .map(|(ix, e)| (EdgeId(ix), e))
    }

    /// The model's edges in model order, whether or not they have been subdivided.
    pub fn original_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges[..self.original_edge_count]
            .iter()
            .enumerate()
            .map(|(ix, e)| (EdgeId(ix), e))
    }

    /// Vertices without incoming edges in the original graph.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Splits `edge` with a new dummy vertex and returns it.
    ///
    /// Afterwards `source -> dummy -> target` exists and `edge` is no longer live. Provenance
    /// always points at the original model edge, even when `edge` is itself a dummy edge. The
    /// direct neighbor link between source and target survives only while a parallel edge still
    /// joins them.
    pub fn insert_dummy_vertex(&mut self, edge: EdgeId, kind: DummyKind) -> VertexId {
        let (source, target, original) = {
            let e = &mut self.edges[edge.0];
            e.live = false;
            (e.source, e.target, e.origin)
        };

        let dummy = VertexId(self.vertices.len());
        let mut vertex = Vertex::new(None, Size::ZERO);
        vertex.dummy = Some((kind, original));
        self.vertices.push(vertex);

        let still_linked = self.vertices[source.0]
            .outgoing
            .iter()
            .any(|&e| e != edge && self.edges[e.0].target == target);

        let first = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target: dummy,
            external: None,
            origin: original,
            live: true,
        });
        let second = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source: dummy,
            target,
            external: None,
            origin: original,
            live: true,
        });

        replace_in(&mut self.vertices[source.0].outgoing, edge, first);
        replace_in(&mut self.vertices[target.0].incoming, edge, second);
        if still_linked || source == target {
            push_unique(&mut self.vertices[source.0].lower, dummy);
            push_unique(&mut self.vertices[target.0].upper, dummy);
        } else {
            replace_in(&mut self.vertices[source.0].lower, target, dummy);
            replace_in(&mut self.vertices[target.0].upper, source, dummy);
        }

        let d = &mut self.vertices[dummy.0];
        d.incoming.push(first);
        d.outgoing.push(second);
        d.upper.push(source);
        d.lower.push(target);

        tracing::trace!(
            edge = edge.0,
            original = original.0,
            dummy = dummy.0,
            "inserted dummy vertex"
        );
        dummy
    }

    /// Dummy vertices subdividing `original`, ordered from its source towards its target.
    pub fn dummy_chain(&self, original: EdgeId) -> Vec<VertexId> {
        let mut chain = Vec::new();
        let mut current = self.edges[original.0].source;
        loop {
            let next = self.vertices[current.0]
                .outgoing
                .iter()
                .map(|&e| &self.edges[e.0])
                .find(|e| e.is_dummy() && e.origin == original)
                .map(|e| e.target);
            let Some(next) = next else {
                break;
            };
            if self.vertices[next.0].original_edge() != Some(original) {
                break;
            }
            chain.push(next);
            current = next;
        }
        chain
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn replace_in<T: PartialEq + Copy>(list: &mut Vec<T>, old: T, new: T) {
    match list.iter().position(|x| *x == old) {
        Some(pos) => list[pos] = new,
        None => push_unique(list, new),
    }
}
