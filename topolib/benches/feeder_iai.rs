use iai_callgrind::{black_box, library_benchmark, library_benchmark_group, main};
use topolib::io::TopologyInput;
use topolib::{EdgeId, Graph, VertexId};

/// Source behind a transformer, `feeders` radial chains of `length` buses leaving the busbar,
/// and a normally-open tie between the ends of neighboring feeders.
fn feeder_network(feeders: usize, length: usize) -> TopologyInput {
    let bus = |f: usize, j: usize| (2 + f * length + j) as VertexId;
    let vertex_ids: Vec<VertexId> = (0..(2 + feeders * length) as VertexId).collect();
    let mut edge_ids: Vec<EdgeId> = vec![0];
    let mut edge_vertex_id_pairs = vec![(0, 1)];
    let mut edge_enabled = vec![true];
    for f in 0..feeders {
        for j in 0..length {
            let from = if j == 0 { 1 } else { bus(f, j - 1) };
            edge_ids.push((1 + f * length + j) as EdgeId);
            edge_vertex_id_pairs.push((from, bus(f, j)));
            edge_enabled.push(true);
        }
    }
    for f in 1..feeders {
        edge_ids.push((1 + feeders * length + f) as EdgeId);
        edge_vertex_id_pairs.push((bus(f - 1, length - 1), bus(f, length - 1)));
        edge_enabled.push(false);
    }
    TopologyInput {
        vertex_ids,
        edge_ids,
        edge_vertex_id_pairs,
        edge_enabled,
        source_vertex_id: 0,
    }
}

fn setup_graph(feeders: usize, length: usize) -> Graph {
    feeder_network(feeders, length).build().unwrap()
}

#[library_benchmark]
#[bench::small(feeder_network(4, 25))]
#[bench::large(feeder_network(16, 250))]
fn build(input: TopologyInput) {
    black_box(input.build().unwrap());
}

#[library_benchmark]
#[bench::small(setup_graph(4, 25))]
#[bench::large(setup_graph(16, 250))]
fn downstream_first_feeder(graph: Graph) {
    black_box(graph.downstream_vertices(1).unwrap());
}

#[library_benchmark]
#[bench::small(setup_graph(4, 25))]
#[bench::large(setup_graph(16, 250))]
fn alternatives_first_feeder(graph: Graph) {
    black_box(graph.alternative_edges(1).unwrap());
}

#[library_benchmark]
#[bench::small(setup_graph(4, 25))]
fn all_contingencies(graph: Graph) {
    black_box(graph.contingencies());
}

library_benchmark_group!(
    name = topology_group;
    benchmarks = build, downstream_first_feeder, alternatives_first_feeder, all_contingencies
);

main!(library_benchmark_groups = topology_group);
