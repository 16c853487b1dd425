//! Integer x-coordinates (priority barycenter method).
//!
//! Starting from `x == order`, vertices move right towards the barycenter of their neighbors in
//! the adjacent layer. A vertex may push lower-priority vertices to its right out of the way but
//! stops one unit short of the nearest vertex with equal or higher priority. Dummy vertices
//! outrank every real vertex in their layer so long edges stay straight. Nothing ever moves
//! left, so the left-to-right order of a layer is preserved with a spacing of at least 1.

use crate::layered::LayeredGraph;
use crate::options::LayoutOptions;
use crate::pipeline::XCoordinateAssigner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toward {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarycenterXCoordinateAssigner {
    pub iterations: usize,
}

impl Default for BarycenterXCoordinateAssigner {
    fn default() -> Self {
        Self::from_options(&LayoutOptions::default())
    }
}

impl BarycenterXCoordinateAssigner {
    pub fn from_options(options: &LayoutOptions) -> Self {
        Self {
            iterations: options.coordinate_iterations,
        }
    }
}

impl XCoordinateAssigner for BarycenterXCoordinateAssigner {
    fn assign_coordinates<N, E>(&self, lg: &mut LayeredGraph<N, E>) {
        for index in 0..lg.layer_count() {
            let layer = lg.layer(index).to_vec();
            for v in layer {
                let order = lg.graph().vertex(v).order();
                lg.graph_mut().vertex_mut(v).set_x(order);
            }
        }

        let pairs = lg.layer_count().saturating_sub(1);
        for _ in 0..self.iterations {
            for i in 0..pairs {
                let barycenters = lg.compute_lower_barycenters(i);
                let priorities = layer_priorities(lg, i + 1, Toward::Upper);
                move_vertices(lg, i + 1, &barycenters, &priorities);
            }
            for i in (0..pairs).rev() {
                let barycenters = lg.compute_upper_barycenters(i);
                let priorities = layer_priorities(lg, i, Toward::Lower);
                move_vertices(lg, i, &barycenters, &priorities);
            }
        }

        tracing::debug!(layers = lg.layer_count(), "assigned x-coordinates");
    }
}

/// Neighbor counts towards `toward` for real vertices; dummies get the layer maximum plus one.
fn layer_priorities<N, E>(
    lg: &LayeredGraph<N, E>,
    layer: usize,
    toward: Toward,
) -> Vec<usize> {
    let g = lg.graph();
    let mut out: Vec<Option<usize>> = lg
        .layer(layer)
        .iter()
        .map(|&v| {
            let vertex = g.vertex(v);
            if vertex.is_dummy() {
                return None;
            }
            Some(match toward {
                Toward::Upper => vertex.upper_neighbors().len(),
                Toward::Lower => vertex.lower_neighbors().len(),
            })
        })
        .collect();

    let dummy_priority = out.iter().flatten().copied().max().unwrap_or(0) + 1;
    out.iter_mut()
        .map(|p| p.take().unwrap_or(dummy_priority))
        .collect()
}

/// Moves the vertices of `layer` right towards their barycenters. The scan runs twice so
/// shifts made late in the first pass can propagate.
fn move_vertices<N, E>(
    lg: &mut LayeredGraph<N, E>,
    layer: usize,
    barycenters: &[Option<f64>],
    priorities: &[usize],
) {
    let ids = lg.layer(layer).to_vec();
    let n = ids.len().min(barycenters.len()).min(priorities.len());
    let mut xs: Vec<i32> = ids.iter().map(|&v| lg.graph().vertex(v).x()).collect();

    for _ in 0..2 {
        for j in 0..n {
            let Some(barycenter) = barycenters[j] else {
                continue;
            };
            let ideal = barycenter.floor() as i32;
            if xs[j] >= ideal {
                continue;
            }

            let blocker = ((j + 1)..n).find(|&k| priorities[k] >= priorities[j]);
            let target = match blocker {
                Some(k) => ideal.min(xs[k] - (k - j) as i32),
                None => ideal,
            };
            if target <= xs[j] {
                continue;
            }

            xs[j] = target;
            for m in (j + 1)..blocker.unwrap_or(ids.len()) {
                xs[m] = xs[m].max(xs[m - 1] + 1);
            }
        }
    }

    for (v, x) in ids.into_iter().zip(xs) {
        lg.graph_mut().vertex_mut(v).set_x(x);
    }
}
