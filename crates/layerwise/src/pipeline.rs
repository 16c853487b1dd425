//! Layout pipeline.
//!
//! `model -> DirectedGraph -> layer assignment (+ dummy vertices) -> crossing minimization ->
//! x-coordinates -> LayoutResult`. Each phase is a strategy trait so hosts can swap one out.

use crate::error::Result;
use crate::graph::{DirectedGraph, GraphModel};
use crate::layered::LayeredGraph;
use crate::normalize::VertexInsertionLayerAssigner;
use crate::options::LayoutOptions;
use crate::order::{BarycenterCrossingMinimizer, crossing_count};
use crate::position::BarycenterXCoordinateAssigner;
use crate::result::LayoutResult;

/// Assigns layers and leaves a graph whose downward edges each span one layer.
pub trait LayerAssigner {
    fn assign_layers<N, E>(&self, graph: DirectedGraph<N, E>) -> LayeredGraph<N, E>;
}

/// Reorders vertices within their layers.
pub trait CrossingMinimizer {
    fn minimize_crossings<N, E>(&self, lg: &mut LayeredGraph<N, E>);
}

/// Turns the final within-layer order into x-coordinates.
pub trait XCoordinateAssigner {
    fn assign_coordinates<N, E>(&self, lg: &mut LayeredGraph<N, E>);
}

#[derive(Debug, Clone, Default)]
pub struct HierarchicalLayout<
    L = VertexInsertionLayerAssigner,
    C = BarycenterCrossingMinimizer,
    X = BarycenterXCoordinateAssigner,
> {
    pub layer_assigner: L,
    pub crossing_minimizer: C,
    pub x_coordinate_assigner: X,
}

impl HierarchicalLayout {
    pub fn new(options: &LayoutOptions) -> Self {
        Self {
            layer_assigner: VertexInsertionLayerAssigner::new(),
            crossing_minimizer: BarycenterCrossingMinimizer::from_options(options),
            x_coordinate_assigner: BarycenterXCoordinateAssigner::from_options(options),
        }
    }
}

impl<L, C, X> HierarchicalLayout<L, C, X>
where
    L: LayerAssigner,
    C: CrossingMinimizer,
    X: XCoordinateAssigner,
{
    pub fn with_strategies(
        layer_assigner: L,
        crossing_minimizer: C,
        x_coordinate_assigner: X,
    ) -> Self {
        Self {
            layer_assigner,
            crossing_minimizer,
            x_coordinate_assigner,
        }
    }

    /// Runs every phase over an already built graph and returns the layered result.
    pub fn layout_graph<N, E>(&self, graph: DirectedGraph<N, E>) -> LayeredGraph<N, E> {
        let mut lg = self.layer_assigner.assign_layers(graph);
        self.crossing_minimizer.minimize_crossings(&mut lg);
        self.x_coordinate_assigner.assign_coordinates(&mut lg);
        lg
    }

    /// Lays out a fresh snapshot of `model`.
    pub fn layout<M: GraphModel>(&self, model: &M) -> Result<LayoutResult<M::Node, M::Edge>> {
        let graph = DirectedGraph::from_model(model)?;
        let lg = self.layout_graph(graph);
        let result = LayoutResult::from_layered(&lg, crossing_count(&lg));
        tracing::debug!(
            nodes = result.nodes.len(),
            edges = result.edges.len(),
            layers = result.layer_count,
            crossings = result.crossings,
            "layout done"
        );
        Ok(result)
    }
}
