use layerwise_graph::{GraphModel, SimpleGraph, Size};

#[test]
fn simple_graph_suffixes_parallel_edge_ids() {
    let mut g = SimpleGraph::new();
    g.add_edge("a", "b").add_edge("a", "b").add_edge("a", "b");

    let ids: Vec<&str> = g.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a->b", "a->b#1", "a->b#2"]);
    assert_eq!(GraphModel::nodes(&g), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn simple_graph_add_path_creates_consecutive_edges() {
    let mut g = SimpleGraph::new();
    g.add_path(&["a", "b", "c"]);

    let pairs: Vec<(String, String)> = g
        .edges()
        .iter()
        .map(|e| (g.edge_source(e), g.edge_target(e)))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string())
        ]
    );
}

#[test]
fn simple_graph_add_node_does_not_reset_a_known_size() {
    let mut g = SimpleGraph::new();
    g.add_sized_node("a", 10.0, 4.0).add_node("a");

    assert_eq!(g.node_size(&"a".to_string()), Some(Size::new(10.0, 4.0)));
    assert_eq!(g.node_size(&"missing".to_string()), None);
}

#[test]
fn simple_graph_loads_from_json() {
    let g: SimpleGraph = serde_json::from_str(
        r#"{
            "nodes": {
                "a": { "width": 30, "height": 10 },
                "b": { "width": 0, "height": 0 }
            },
            "edges": [{ "id": "e1", "source": "a", "target": "b" }]
        }"#,
    )
    .unwrap();

    let ids: Vec<&str> = g.iter_nodes().map(|n| n.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(g.node_size(&"a".to_string()), Some(Size::new(30.0, 10.0)));
    assert_eq!(g.edge("e1").map(|e| e.target.as_str()), Some("b"));
}
