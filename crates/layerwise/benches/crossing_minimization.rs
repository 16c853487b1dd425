use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use layerwise::graph::{DirectedGraph, SimpleGraph};
use layerwise::{
    BarycenterCrossingMinimizer, CrossingMinimizer, LayerAssigner, LayoutOptions,
    VertexInsertionLayerAssigner, layout,
};
use std::hint::black_box;
use std::time::Duration;

fn build_dag(name: &str, node_count: usize, fanout: usize) -> SimpleGraph {
    let ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut g = SimpleGraph::new();
    for id in &ids {
        g.add_node(id.clone());
    }

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        g.add_edge(ids[i].clone(), ids[i + 1].clone());
    }

    // Extra forward edges to create crossing pressure and long edges.
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k * 3);
            if to >= node_count {
                break;
            }
            g.add_edge(ids[i].clone(), ids[to].clone());
        }
    }
    g
}

fn bench_crossing_minimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing_minimization");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("dag_50_f2", 50usize, 2usize),
        ("dag_150_f3", 150usize, 3usize),
        ("dag_300_f3", 300usize, 3usize),
    ];

    for (name, nodes, fanout) in cases {
        let model = build_dag(name, nodes, fanout);
        group.bench_with_input(
            BenchmarkId::new("BarycenterCrossingMinimizer", name),
            &model,
            |b, model| {
                b.iter_batched(
                    || {
                        let graph = DirectedGraph::from_model(model).unwrap();
                        VertexInsertionLayerAssigner::new().assign_layers(graph)
                    },
                    |mut lg| {
                        let minimizer = BarycenterCrossingMinimizer::default();
                        minimizer.minimize_crossings(black_box(&mut lg));
                        black_box(lg.layer_count());
                    },
                    BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(BenchmarkId::new("layout", name), &model, |b, model| {
            b.iter(|| {
                let result = layout(black_box(model), &LayoutOptions::default()).unwrap();
                black_box(result.crossings);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_crossing_minimization);
criterion_main!(benches);
