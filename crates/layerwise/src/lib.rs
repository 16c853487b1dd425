#![forbid(unsafe_code)]

//! Deterministic hierarchical (layered) graph layout.
//!
//! The pipeline assigns every node a layer, splits edges that skip layers into chains of dummy
//! vertices, reorders each layer with barycenter sweeps to reduce crossings, and finally
//! assigns integer x-coordinates. Runs are synchronous and keep no state between calls.

pub use layerwise_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod layered;
pub mod normalize;
pub mod options;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod result;

pub use error::{Error, Result};
pub use layered::LayeredGraph;
pub use normalize::VertexInsertionLayerAssigner;
pub use options::LayoutOptions;
pub use order::{BarycenterCrossingMinimizer, crossing_count};
pub use pipeline::{CrossingMinimizer, HierarchicalLayout, LayerAssigner, XCoordinateAssigner};
pub use position::BarycenterXCoordinateAssigner;
pub use result::{BendPoint, EdgeRoute, LayoutResult, NodePlacement};

use crate::graph::GraphModel;

/// Lays out `model` with the default barycenter pipeline.
pub fn layout<M: GraphModel>(
    model: &M,
    options: &LayoutOptions,
) -> Result<LayoutResult<M::Node, M::Edge>> {
    HierarchicalLayout::new(options).layout(model)
}
