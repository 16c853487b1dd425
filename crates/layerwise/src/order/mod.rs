//! Vertex ordering / crossing minimization.
//!
//! Barycenter sweeps reorder vertices within their layers; layer membership never changes here.

mod barycenter;
pub use barycenter::{BarycenterCrossingMinimizer, sort_vertices};

mod cross_count;
pub use cross_count::{crossing_count, layer_crossing_count};
