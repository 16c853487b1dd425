use layerwise::LayeredGraph;
use layerwise::graph::{DirectedGraph, SimpleEdge, SimpleGraph, VertexId};

fn layered(model: &SimpleGraph) -> LayeredGraph<String, SimpleEdge> {
    LayeredGraph::create_graph(DirectedGraph::from_model(model).unwrap())
}

fn vid(lg: &LayeredGraph<String, SimpleEdge>, id: &str) -> VertexId {
    lg.graph().vertex_for_node(&id.to_string()).unwrap()
}

fn layer_of(lg: &LayeredGraph<String, SimpleEdge>, id: &str) -> i32 {
    lg.graph().vertex(vid(lg, id)).layer()
}

fn layer_names(lg: &LayeredGraph<String, SimpleEdge>, index: usize) -> Vec<String> {
    lg.layer(index)
        .iter()
        .map(|&v| lg.graph().vertex(v).node().cloned().unwrap_or_default())
        .collect()
}

#[test]
fn create_graph_assigns_the_longest_path_layer() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b").add_edge("b", "c").add_edge("a", "c");
    let lg = layered(&model);

    assert_eq!(layer_of(&lg, "a"), 0);
    assert_eq!(layer_of(&lg, "b"), 1);
    assert_eq!(layer_of(&lg, "c"), 2);
    assert_eq!(lg.layer_count(), 3);
    lg.check_invariants().unwrap();
}

#[test]
fn create_graph_places_every_root_on_layer_zero() {
    let mut model = SimpleGraph::new();
    model
        .add_node("isolated")
        .add_path(&["a", "b", "c"])
        .add_edge("x", "c");
    let lg = layered(&model);

    for root in ["isolated", "a", "x"] {
        assert_eq!(layer_of(&lg, root), 0, "{root}");
    }
    assert_eq!(layer_of(&lg, "c"), 2);
    assert_eq!(layer_names(&lg, 0), vec!["isolated", "a", "x"]);
}

#[test]
fn create_graph_layer_matches_vertex_fields() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b").add_edge("a", "c").add_edge("a", "d");
    let lg = layered(&model);

    assert_eq!(layer_names(&lg, 1), vec!["b", "c", "d"]);
    for (pos, &v) in lg.layer(1).iter().enumerate() {
        let vertex = lg.graph().vertex(v);
        assert_eq!(vertex.order(), pos as i32 + 1);
        assert_eq!(vertex.x(), vertex.order());
        assert_eq!(vertex.y(), 1);
    }
}

#[test]
fn assign_layer_closes_the_gap_in_the_previous_layer() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b").add_edge("a", "c").add_edge("a", "d");
    let mut lg = layered(&model);
    let b = vid(&lg, "b");

    lg.assign_layer(b, 2);

    assert_eq!(layer_names(&lg, 1), vec!["c", "d"]);
    assert_eq!(layer_names(&lg, 2), vec!["b"]);
    assert_eq!(lg.graph().vertex(vid(&lg, "c")).order(), 1);
    assert_eq!(lg.graph().vertex(vid(&lg, "d")).order(), 2);
    assert_eq!(lg.graph().vertex(b).order(), 1);
    assert_eq!(lg.graph().vertex(b).layer(), 2);
    lg.check_invariants().unwrap();
}

#[test]
fn compute_adjacency_matrix_marks_lower_neighbors() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "c").add_edge("b", "d").add_edge("a", "d");
    let lg = layered(&model);

    assert_eq!(layer_names(&lg, 0), vec!["a", "b"]);
    assert_eq!(layer_names(&lg, 1), vec!["c", "d"]);
    assert_eq!(
        lg.compute_adjacency_matrix(0),
        vec![vec![true, true], vec![false, true]]
    );
}

#[test]
fn compute_barycenters_average_neighbor_positions() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "c").add_edge("b", "d").add_edge("a", "d");
    let lg = layered(&model);

    assert_eq!(lg.compute_lower_barycenters(0), vec![Some(1.0), Some(1.5)]);
    assert_eq!(lg.compute_upper_barycenters(0), vec![Some(1.5), Some(2.0)]);
}

#[test]
fn compute_barycenters_are_none_without_neighbors_in_the_adjacent_layer() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b").add_node("z");
    let lg = layered(&model);

    assert_eq!(layer_names(&lg, 0), vec!["a", "z"]);
    assert_eq!(lg.compute_upper_barycenters(0), vec![Some(1.0), None]);
    assert_eq!(lg.compute_lower_barycenters(0), vec![Some(1.0)]);
    assert!(lg.compute_lower_barycenters(1).is_empty());
}

#[test]
fn create_graph_terminates_on_a_cycle_below_a_root() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b").add_edge("b", "c").add_edge("c", "b");
    let lg = layered(&model);

    assert_eq!(layer_of(&lg, "a"), 0);
    assert_eq!(layer_of(&lg, "b"), 1);
    assert_eq!(layer_of(&lg, "c"), 2);
    lg.check_invariants().unwrap();
}

#[test]
fn create_graph_seeds_a_cycle_without_roots() {
    let mut model = SimpleGraph::new();
    model.add_edge("x", "y").add_edge("y", "x");
    let lg = layered(&model);

    assert!(lg.graph().roots().is_empty());
    assert_eq!(layer_of(&lg, "x"), 0);
    assert_eq!(layer_of(&lg, "y"), 1);
    lg.check_invariants().unwrap();
}

#[test]
fn check_invariants_reports_unassigned_vertices() {
    let mut model = SimpleGraph::new();
    model.add_edge("a", "b");
    let lg = LayeredGraph::new(DirectedGraph::from_model(&model).unwrap());

    let err = lg.check_invariants().unwrap_err();
    assert!(err.to_string().contains("0 of 2 vertices"), "{err}");
}
