#![forbid(unsafe_code)]

//! Graph container APIs used by `layerwise`.
//!
//! A caller-owned graph is read through [`GraphModel`] and copied into a [`DirectedGraph`]: an
//! index-addressed arena of vertices and edges that the layout phases mutate in place (dummy
//! vertices included).

pub mod error;
pub mod graph;
pub mod model;

pub use error::{Error, Result};
pub use graph::{DirectedGraph, DummyKind, Edge, EdgeId, Vertex, VertexId};
pub use model::{GraphModel, SimpleEdge, SimpleGraph, SimpleNode, Size};
