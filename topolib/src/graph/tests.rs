use super::*;
use bitvec::prelude::*;

const VERTEX_IDS: [VertexId; 5] = [0, 2, 4, 6, 10];
const EDGE_IDS: [EdgeId; 6] = [1, 3, 5, 7, 8, 9];
const EDGE_PAIRS: [(VertexId, VertexId); 6] = [(0, 2), (0, 4), (0, 6), (2, 4), (4, 6), (2, 10)];
const EDGE_ENABLED: [bool; 6] = [true, true, true, false, false, true];
const SOURCE: VertexId = 10;

fn build(
    vertex_ids: &[VertexId],
    edge_ids: &[EdgeId],
    pairs: &[(VertexId, VertexId)],
    enabled: &[bool],
    source: VertexId,
) -> Result<Graph, TopologyError> {
    Graph::new(vertex_ids, edge_ids, pairs, enabled, source)
}

#[test]
fn valid_construction() {
    let graph = build(&VERTEX_IDS, &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap();
    assert_eq!(graph.vertex_ids(), &VERTEX_IDS);
    assert_eq!(graph.edge_ids(), EDGE_IDS.to_vec());
    assert_eq!(graph.source_vertex_id(), 10);
    assert_eq!(graph.enabled_edge_ids(), vec![1, 3, 5, 9]);
    assert_eq!(graph.disabled_edge_ids(), vec![7, 8]);
    assert_eq!(graph.edge_vertices(9), Ok((2, 10)));
    assert_eq!(graph.is_enabled(7), Ok(false));
    assert_eq!(graph.is_enabled(42), Err(TopologyError::IdNotFound(42)));
    assert!(graph.contains_vertex(6));
    assert!(!graph.contains_vertex(9));
    // Spanning tree property
    assert_eq!(
        graph.enabled_edge_ids().len(),
        graph.vertex_ids().len() - 1
    );
}

#[test]
fn single_vertex() {
    let graph = build(&[3], &[], &[], &[], 3).unwrap();
    assert_eq!(graph.vertex_ids(), &[3]);
    assert!(graph.edge_ids().is_empty());
}

#[test]
fn id_not_unique() {
    assert_eq!(
        build(&[0, 2, 2, 6, 10], &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap_err(),
        TopologyError::IdNotUnique(2)
    );
    assert_eq!(
        build(&VERTEX_IDS, &[1, 3, 5, 7, 7, 9], &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap_err(),
        TopologyError::IdNotUnique(7)
    );
    // Vertex and edge ids live in separate namespaces.
    assert!(build(&[1, 2], &[1], &[(1, 2)], &[true], 1).is_ok());
}

#[test]
fn input_length_mismatch() {
    assert_eq!(
        build(&VERTEX_IDS, &[1, 3, 5, 7, 8], &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap_err(),
        TopologyError::InputLengthMismatch {
            expected: 5,
            found: 6
        }
    );
    assert_eq!(
        build(&VERTEX_IDS, &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED[..5], SOURCE).unwrap_err(),
        TopologyError::InputLengthMismatch {
            expected: 6,
            found: 5
        }
    );
}

#[test]
fn id_not_found() {
    assert_eq!(
        build(&VERTEX_IDS, &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED, 9).unwrap_err(),
        TopologyError::IdNotFound(9)
    );
    let mut pairs = EDGE_PAIRS;
    pairs[3] = (2, 5);
    assert_eq!(
        build(&VERTEX_IDS, &EDGE_IDS, &pairs, &EDGE_ENABLED, SOURCE).unwrap_err(),
        TopologyError::IdNotFound(5)
    );
}

#[test]
fn not_fully_connected() {
    assert_eq!(
        build(&[0, 2, 4, 6, 10, 5], &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap_err(),
        TopologyError::GraphNotFullyConnected
    );
    assert_eq!(
        build(
            &VERTEX_IDS,
            &EDGE_IDS,
            &EDGE_PAIRS,
            &[true, false, true, false, false, true],
            SOURCE
        )
        .unwrap_err(),
        TopologyError::GraphNotFullyConnected
    );
}

#[test]
fn cycle() {
    assert_eq!(
        build(
            &VERTEX_IDS,
            &EDGE_IDS,
            &EDGE_PAIRS,
            &[true, true, true, false, true, true],
            SOURCE
        )
        .unwrap_err(),
        TopologyError::GraphCycle
    );
    // Self loop
    assert_eq!(
        build(&[0, 1], &[1, 2], &[(0, 1), (1, 1)], &[true, true], 0).unwrap_err(),
        TopologyError::GraphCycle
    );
    // Parallel edges
    assert_eq!(
        build(&[0, 1], &[1, 2], &[(0, 1), (1, 0)], &[true, true], 0).unwrap_err(),
        TopologyError::GraphCycle
    );
}

#[test]
fn check_order() {
    // Duplicate ids win over every other problem.
    assert_eq!(
        build(&[0, 0], &[1], &[], &[], 9).unwrap_err(),
        TopologyError::IdNotUnique(0)
    );
    // Unknown pair vertices are reported before the enabled flag length.
    assert_eq!(
        build(&[0, 1], &[1], &[(0, 5)], &[], 9).unwrap_err(),
        TopologyError::IdNotFound(5)
    );
    // Flag length is reported before an unknown source.
    assert_eq!(
        build(&[0, 1], &[1], &[(0, 1)], &[], 9).unwrap_err(),
        TopologyError::InputLengthMismatch {
            expected: 1,
            found: 0
        }
    );
    // Connectivity is reported before cycles.
    assert_eq!(
        build(
            &[0, 1, 2, 3],
            &[1, 2, 3],
            &[(0, 1), (1, 2), (2, 0)],
            &[true, true, true],
            0
        )
        .unwrap_err(),
        TopologyError::GraphNotFullyConnected
    );
}

#[test]
fn inputs_are_not_mutated() {
    let enabled = EDGE_ENABLED.to_vec();
    let graph = build(&VERTEX_IDS, &EDGE_IDS, &EDGE_PAIRS, &enabled, SOURCE).unwrap();
    let _ = graph.alternative_edges(3).unwrap();
    let _ = graph.reconfigure(3, 7).unwrap();
    assert_eq!(enabled, EDGE_ENABLED.to_vec());
    assert_eq!(graph.edge_enabled(), EDGE_ENABLED.to_vec());
}

#[test]
fn reachable_without() {
    let graph = build(&VERTEX_IDS, &EDGE_IDS, &EDGE_PAIRS, &EDGE_ENABLED, SOURCE).unwrap();
    assert!(graph.reachable_without(None).all());
    // Edge 1 (0, 2) is at index 0; only vertices 2 and 10 stay reachable.
    assert_eq!(
        graph.reachable_without(Some(0)),
        bitvec![0, 1, 0, 0, 1]
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        TopologyError::IdNotUnique(2).to_string(),
        "ID 2 is not unique."
    );
    assert_eq!(
        TopologyError::InputLengthMismatch {
            expected: 6,
            found: 5
        }
        .to_string(),
        "Input length does not match! Expected 6 entries, found 5."
    );
    assert_eq!(
        TopologyError::EdgeAlreadyDisabled(7).to_string(),
        "Edge 7 is already disabled."
    );
}
