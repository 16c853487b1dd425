//! Normalize long edges by inserting dummy vertices.
//!
//! After [`VertexInsertionLayerAssigner`] runs, every edge that points down the layering spans
//! exactly one layer. A long edge becomes a chain of `Bend` dummy vertices, one per skipped
//! layer, each remembering the original edge it subdivides.

use crate::graph::{DirectedGraph, DummyKind, EdgeId};
use crate::layered::LayeredGraph;
use crate::pipeline::LayerAssigner;

#[derive(Debug, Clone, Copy, Default)]
pub struct VertexInsertionLayerAssigner;

impl VertexInsertionLayerAssigner {
    pub fn new() -> Self {
        Self
    }

    /// Splits every edge of `lg` that skips layers.
    ///
    /// Layers are visited top to bottom, so a dummy vertex placed one layer below its source is
    /// itself visited later and extends the chain by one more hop. Returns the number of dummy
    /// vertices inserted.
    pub fn insert_dummy_vertices<N, E>(&self, lg: &mut LayeredGraph<N, E>) -> usize {
        let mut inserted = 0usize;

        for index in 0..lg.layer_count() {
            // Insertion rewires the live adjacency lists; walk snapshots.
            let layer: Vec<_> = lg.layer(index).to_vec();
            for v in layer {
                let outgoing: Vec<EdgeId> = lg.graph().vertex(v).outgoing_edges().to_vec();
                let layer_index = lg.graph().vertex(v).layer();
                for e in outgoing {
                    let target = lg.graph().edge(e).target();
                    if lg.graph().vertex(target).layer() <= layer_index + 1 {
                        continue;
                    }
                    let dummy = lg.graph_mut().insert_dummy_vertex(e, DummyKind::Bend);
                    lg.assign_layer(dummy, index + 1);
                    inserted += 1;
                }
            }
        }

        tracing::debug!(dummies = inserted, "inserted dummy vertices");
        inserted
    }
}

impl LayerAssigner for VertexInsertionLayerAssigner {
    fn assign_layers<N, E>(&self, graph: DirectedGraph<N, E>) -> LayeredGraph<N, E> {
        let mut lg = LayeredGraph::create_graph(graph);
        self.insert_dummy_vertices(&mut lg);
        lg
    }
}
