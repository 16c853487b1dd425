//! Layout output consumed by renderers.

use crate::graph::EdgeId;
use crate::layered::LayeredGraph;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement<N> {
    pub node: N,
    pub layer: i32,
    /// 1-based rank within the layer.
    pub order: i32,
    pub x: i32,
    /// Always equal to `layer`.
    pub y: i32,
    pub width: f64,
    pub height: f64,
}

/// A dummy vertex on a long edge's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BendPoint {
    pub layer: i32,
    pub order: i32,
    pub x: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRoute<N, E> {
    pub edge: E,
    pub source: N,
    pub target: N,
    /// Bend points from source towards target; empty unless the edge spans several layers.
    pub bends: Vec<BendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult<N, E> {
    /// One entry per model node, in model order.
    pub nodes: Vec<NodePlacement<N>>,
    /// One entry per model edge, in model order.
    pub edges: Vec<EdgeRoute<N, E>>,
    pub layer_count: usize,
    pub crossings: usize,
}

impl<N: Clone, E: Clone> LayoutResult<N, E> {
    pub fn from_layered(lg: &LayeredGraph<N, E>, crossings: usize) -> Self {
        let g = lg.graph();

        let nodes = g
            .vertices()
            .filter_map(|(_, v)| {
                let node = v.node()?.clone();
                Some(NodePlacement {
                    node,
                    layer: v.layer(),
                    order: v.order(),
                    x: v.x(),
                    y: v.y(),
                    width: v.size().width,
                    height: v.size().height,
                })
            })
            .collect();

        let edges = g
            .original_edges()
            .filter_map(|(id, e)| {
                let edge = e.external()?.clone();
                let source = g.vertex(e.source()).node()?.clone();
                let target = g.vertex(e.target()).node()?.clone();
                Some(EdgeRoute {
                    edge,
                    source,
                    target,
                    bends: bend_points(lg, id),
                })
            })
            .collect();

        Self {
            nodes,
            edges,
            layer_count: lg.layer_count(),
            crossings,
        }
    }
}

fn bend_points<N, E>(lg: &LayeredGraph<N, E>, edge: EdgeId) -> Vec<BendPoint> {
    let g = lg.graph();
    g.dummy_chain(edge)
        .into_iter()
        .map(|d| {
            let v = g.vertex(d);
            BendPoint {
                layer: v.layer(),
                order: v.order(),
                x: v.x(),
            }
        })
        .collect()
}

impl<N: PartialEq, E: PartialEq> LayoutResult<N, E> {
    pub fn node(&self, node: &N) -> Option<&NodePlacement<N>> {
        self.nodes.iter().find(|p| &p.node == node)
    }

    pub fn edge(&self, edge: &E) -> Option<&EdgeRoute<N, E>> {
        self.edges.iter().find(|r| &r.edge == edge)
    }
}
