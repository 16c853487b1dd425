use crate::layered::LayeredGraph;

/// Total number of edge crossings between adjacent layers.
///
/// Parallel edges count separately. Edges that do not join adjacent layers (left over from
/// cyclic input) are ignored.
pub fn crossing_count<N, E>(lg: &LayeredGraph<N, E>) -> usize {
    (1..lg.layer_count())
        .map(|i| layer_crossing_count(lg, i - 1))
        .sum()
}

/// Crossings between layer `upper` and layer `upper + 1`, counted with an accumulator tree
/// over the lower endpoints.
pub fn layer_crossing_count<N, E>(lg: &LayeredGraph<N, E>, upper: usize) -> usize {
    let south_len = lg.layer(upper + 1).len();
    if south_len == 0 {
        return 0;
    }
    let g = lg.graph();
    let south_index = upper as i32 + 1;

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in lg.layer(upper) {
        let mut positions: Vec<usize> = g
            .vertex(v)
            .outgoing_edges()
            .iter()
            .filter_map(|&e| {
                let w = g.vertex(g.edge(e).target());
                (w.layer() == south_index).then(|| w.order() as usize - 1)
            })
            .collect();
        positions.sort_unstable();
        south_entries.extend(positions);
    }

    let mut first_index: usize = 1;
    while first_index < south_len {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }
    cc
}
