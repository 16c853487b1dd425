//! Barycenter sweeps.

use super::crossing_count;
use crate::layered::LayeredGraph;
use crate::options::LayoutOptions;
use crate::pipeline::CrossingMinimizer;

/// Reorders layer `layer` by `barycenters` (parallel to the layer's current order).
///
/// This is an exchange sort, not a library sort: for every pair `i < j` the two vertices swap
/// when `barycenters[j] < barycenters[i]`, or `<=` when `reverse_equal_barycenters` is set so that
/// ties flip. A `None` barycenter never takes part in a swap, so a vertex without neighbors in
/// the reference layer keeps its position. Swaps renumber the vertices and carry their
/// barycenters along. Returns whether anything moved.
pub fn sort_vertices<N, E>(
    lg: &mut LayeredGraph<N, E>,
    layer: usize,
    barycenters: &mut [Option<f64>],
    reverse_equal_barycenters: bool,
) -> bool {
    let n = lg.layer(layer).len().min(barycenters.len());
    let mut swapped = false;

    for i in 0..n {
        for j in (i + 1)..n {
            let (Some(bi), Some(bj)) = (barycenters[i], barycenters[j]) else {
                continue;
            };
            let swap = if reverse_equal_barycenters {
                bj <= bi
            } else {
                bj < bi
            };
            if swap {
                lg.swap_in_layer(layer, i, j);
                barycenters.swap(i, j);
                swapped = true;
            }
        }
    }
    swapped
}

/// Layer-by-layer sweep crossing minimization.
///
/// The schedule is fixed: `phase_one_iterations` rounds of phase I, then `phase_two_iterations`
/// rounds of phase II. Nothing stops early on a crossing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarycenterCrossingMinimizer {
    pub phase_one_iterations: usize,
    pub phase_two_iterations: usize,
}

impl Default for BarycenterCrossingMinimizer {
    fn default() -> Self {
        Self::from_options(&LayoutOptions::default())
    }
}

impl BarycenterCrossingMinimizer {
    pub fn from_options(options: &LayoutOptions) -> Self {
        Self {
            phase_one_iterations: options.phase_one_iterations,
            phase_two_iterations: options.phase_two_iterations,
        }
    }

    /// Phase I: a downward sweep ordering each layer by its upper neighbors, then an upward
    /// sweep ordering each layer by its lower neighbors. Ties keep their order.
    pub fn phase_one<N, E>(&self, lg: &mut LayeredGraph<N, E>) {
        let pairs = lg.layer_count().saturating_sub(1);
        for i in 0..pairs {
            sweep_down(lg, i, false);
        }
        for i in (0..pairs).rev() {
            sweep_up(lg, i, false);
        }
    }

    /// Phase II: an upward then a downward sweep with tie-flipping sorts, each layer step
    /// followed by a full phase I pass.
    pub fn phase_two<N, E>(&self, lg: &mut LayeredGraph<N, E>) {
        let pairs = lg.layer_count().saturating_sub(1);
        for i in (0..pairs).rev() {
            sweep_up(lg, i, true);
            self.phase_one(lg);
        }
        for i in 0..pairs {
            sweep_down(lg, i, true);
            self.phase_one(lg);
        }
    }
}

fn sweep_down<N, E>(lg: &mut LayeredGraph<N, E>, upper: usize, reverse: bool) -> bool {
    let mut barycenters = lg.compute_lower_barycenters(upper);
    sort_vertices(lg, upper + 1, &mut barycenters, reverse)
}

fn sweep_up<N, E>(lg: &mut LayeredGraph<N, E>, upper: usize, reverse: bool) -> bool {
    let mut barycenters = lg.compute_upper_barycenters(upper);
    sort_vertices(lg, upper, &mut barycenters, reverse)
}

impl CrossingMinimizer for BarycenterCrossingMinimizer {
    fn minimize_crossings<N, E>(&self, lg: &mut LayeredGraph<N, E>) {
        if lg.layer_count() <= 1 {
            return;
        }

        let debug = tracing::enabled!(tracing::Level::DEBUG);
        if debug {
            tracing::debug!(crossings = crossing_count(lg), "crossing minimization start");
        }

        for round in 0..self.phase_one_iterations {
            self.phase_one(lg);
            tracing::trace!(round, "phase I done");
        }
        for round in 0..self.phase_two_iterations {
            self.phase_two(lg);
            tracing::trace!(round, "phase II done");
        }

        if debug {
            tracing::debug!(crossings = crossing_count(lg), "crossing minimization done");
        }
    }
}
