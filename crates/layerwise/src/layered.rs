//! Layer assignment and per-layer vertex lists.
//!
//! `LayeredGraph` owns the directed graph for the rest of the pipeline and is the only place
//! that moves vertices between layers or reorders them within a layer. Each layer's list order
//! and the vertices' 1-based `order` field are kept in sync at all times.

use crate::error::{Error, Result};
use crate::graph::{DirectedGraph, VertexId};
use rustc_hash::FxHashSet as HashSet;

#[derive(Debug, Clone)]
pub struct LayeredGraph<N, E> {
    graph: DirectedGraph<N, E>,
    layers: Vec<Vec<VertexId>>,
}

impl<N, E> LayeredGraph<N, E> {
    /// Wraps `graph` without assigning any layer.
    pub fn new(graph: DirectedGraph<N, E>) -> Self {
        Self {
            graph,
            layers: Vec::new(),
        }
    }

    /// Wraps `graph` and assigns every vertex a layer (longest path from the roots).
    pub fn create_graph(graph: DirectedGraph<N, E>) -> Self {
        let mut lg = Self::new(graph);
        lg.assign_all_layers();
        lg
    }

    fn assign_all_layers(&mut self) {
        let roots = self.graph.roots().to_vec();
        for root in roots {
            self.descend_from(root);
        }

        // Root-less cycles are never reached from a root; seed them so every vertex has a layer.
        let unassigned: Vec<VertexId> = self
            .graph
            .vertex_ids()
            .filter(|&v| self.graph.vertex(v).layer() < 0)
            .collect();
        for v in unassigned {
            if self.graph.vertex(v).layer() >= 0 {
                continue;
            }
            tracing::warn!(
                vertex = v.index(),
                "vertex is not reachable from any root; seeding it at layer 0"
            );
            self.descend_from(v);
        }

        tracing::debug!(layers = self.layers.len(), "assigned layers");
    }

    /// Propagates layers from `start` (placed at layer 0) through its lower neighbors.
    ///
    /// A vertex is re-descended only when the proposed layer strictly exceeds its current one.
    /// Proposals at or past the vertex count can only come from a cycle and are dropped, which
    /// bounds the walk on cyclic input.
    fn descend_from(&mut self, start: VertexId) {
        let limit = self.graph.vertex_count() as i32;
        let mut stack: Vec<(VertexId, i32)> = vec![(start, 0)];

        while let Some((v, proposed)) = stack.pop() {
            if self.graph.vertex(v).layer() >= proposed {
                continue;
            }
            if proposed >= limit {
                tracing::warn!(
                    vertex = v.index(),
                    proposed,
                    "layer proposal exceeds vertex count; graph has a cycle"
                );
                continue;
            }
            self.assign_layer(v, proposed as usize);
            for &w in self.graph.vertex(v).lower_neighbors().iter().rev() {
                stack.push((w, proposed + 1));
            }
        }
    }

    /// Moves `v` to the end of layer `index`, closing the gap it leaves in its previous layer.
    pub fn assign_layer(&mut self, v: VertexId, index: usize) {
        let previous = self.graph.vertex(v).layer();
        if previous >= 0 {
            let old = &mut self.layers[previous as usize];
            if let Some(pos) = old.iter().position(|&u| u == v) {
                old.remove(pos);
                for (i, &u) in old.iter().enumerate().skip(pos) {
                    self.graph.vertex_mut(u).set_order(i as i32 + 1);
                }
            }
        }

        if self.layers.len() <= index {
            self.layers.resize_with(index + 1, Vec::new);
        }
        let layer = &mut self.layers[index];
        layer.push(v);
        let order = layer.len() as i32;
        self.graph.vertex_mut(v).place(index as i32, order);
    }

    /// Swaps the vertices at positions `i` and `j` of layer `layer` and renumbers both.
    pub fn swap_in_layer(&mut self, layer: usize, i: usize, j: usize) {
        let vs = &mut self.layers[layer];
        vs.swap(i, j);
        let (a, b) = (vs[i], vs[j]);
        self.graph.vertex_mut(a).set_order(i as i32 + 1);
        self.graph.vertex_mut(b).set_order(j as i32 + 1);
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Vertices of layer `index`, left to right. Out-of-range layers are empty.
    pub fn layer(&self, index: usize) -> &[VertexId] {
        self.layers.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn layers(&self) -> &[Vec<VertexId>] {
        &self.layers
    }

    pub fn graph(&self) -> &DirectedGraph<N, E> {
        &self.graph
    }

    /// Mutable access to the arena. Use [`LayeredGraph::assign_layer`] for layer moves.
    pub fn graph_mut(&mut self) -> &mut DirectedGraph<N, E> {
        &mut self.graph
    }

    pub fn into_graph(self) -> DirectedGraph<N, E> {
        self.graph
    }

    /// `m[j][k]` is true when the `j`-th vertex of layer `upper` has the `k`-th vertex of layer
    /// `upper + 1` as a lower neighbor. Recomputed on every call.
    pub fn compute_adjacency_matrix(&self, upper: usize) -> Vec<Vec<bool>> {
        let upper_layer = self.layer(upper);
        let lower_len = self.layer(upper + 1).len();
        let lower_index = upper as i32 + 1;

        upper_layer
            .iter()
            .map(|&u| {
                let mut row = vec![false; lower_len];
                for &w in self.graph.vertex(u).lower_neighbors() {
                    let w = self.graph.vertex(w);
                    if w.layer() == lower_index && w.order() >= 1 {
                        row[w.order() as usize - 1] = true;
                    }
                }
                row
            })
            .collect()
    }

    /// For each vertex of layer `upper + 1`, the mean `x` of its upper neighbors in layer
    /// `upper`; `None` when it has none there.
    pub fn compute_lower_barycenters(&self, upper: usize) -> Vec<Option<f64>> {
        let matrix = self.compute_adjacency_matrix(upper);
        let upper_layer = self.layer(upper);

        (0..self.layer(upper + 1).len())
            .map(|k| {
                let mut sum = 0.0;
                let mut count = 0usize;
                for (j, row) in matrix.iter().enumerate() {
                    if row[k] {
                        sum += f64::from(self.graph.vertex(upper_layer[j]).x());
                        count += 1;
                    }
                }
                (count > 0).then(|| sum / count as f64)
            })
            .collect()
    }

    /// For each vertex of layer `upper`, the mean `x` of its lower neighbors in layer
    /// `upper + 1`; `None` when it has none there.
    pub fn compute_upper_barycenters(&self, upper: usize) -> Vec<Option<f64>> {
        let matrix = self.compute_adjacency_matrix(upper);
        let lower_layer = self.layer(upper + 1);

        matrix
            .iter()
            .map(|row| {
                let mut sum = 0.0;
                let mut count = 0usize;
                for (k, &adjacent) in row.iter().enumerate() {
                    if adjacent {
                        sum += f64::from(self.graph.vertex(lower_layer[k]).x());
                        count += 1;
                    }
                }
                (count > 0).then(|| sum / count as f64)
            })
            .collect()
    }

    /// Checks that every vertex sits in exactly one layer at the position its `order` names,
    /// and that each layer's orders are `1..=len`.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen: HashSet<VertexId> = HashSet::default();
        for (index, layer) in self.layers.iter().enumerate() {
            for (pos, &v) in layer.iter().enumerate() {
                if !seen.insert(v) {
                    return Err(Error::Invariant {
                        message: format!("vertex {} appears in more than one slot", v.index()),
                    });
                }
                let vertex = self.graph.vertex(v);
                if vertex.layer() != index as i32 {
                    return Err(Error::Invariant {
                        message: format!(
                            "vertex {} is listed in layer {index} but records layer {}",
                            v.index(),
                            vertex.layer()
                        ),
                    });
                }
                if vertex.order() != pos as i32 + 1 {
                    return Err(Error::Invariant {
                        message: format!(
                            "vertex {} is at position {} of layer {index} but records order {}",
                            v.index(),
                            pos + 1,
                            vertex.order()
                        ),
                    });
                }
            }
        }
        if seen.len() != self.graph.vertex_count() {
            return Err(Error::Invariant {
                message: format!(
                    "{} of {} vertices are assigned to a layer",
                    seen.len(),
                    self.graph.vertex_count()
                ),
            });
        }
        Ok(())
    }
}
