use crate::types::*;
use crate::utils::first_duplicate;
use crate::TopologyError;

use bitvec::prelude::*;
use itertools::izip;
use std::collections::VecDeque;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(test)]
mod tests;

/// A switchable connection between two vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub id: EdgeId,
    /// Arena indices of the endpoints. Order carries no meaning.
    pub vertices: (VertexIndex, VertexIndex),
    pub enabled: bool,
}

/// Validated topology of a radial network.
///
/// The enabled edges always form a spanning tree over all vertices. Disabled edges are kept
/// as latent alternative paths. The graph is immutable after construction; what-if queries
/// exclude edges during traversal instead of changing the stored flags.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Vertex ids in input order.
    pub(crate) vertices: Vec<VertexId>,
    /// All edges in input order, enabled or not.
    pub(crate) edges: Vec<Edge>,
    vertex_index: HashMap<VertexId, VertexIndex>,
    edge_index: HashMap<EdgeId, EdgeIndex>,
    /// Adjacency list over enabled edges only: `(neighbor, edge)` pairs.
    branches: Vec<Vec<(VertexIndex, EdgeIndex)>>,
    /// Index of the source vertex.
    source: VertexIndex,
}

impl Graph {
    /// Build and validate a topology.
    ///
    /// Checks are performed in the following order and the first failure is returned:
    /// 1. Vertex ids are unique. ([`TopologyError::IdNotUnique`])
    /// 2. Edge ids are unique. ([`TopologyError::IdNotUnique`])
    /// 3. There is one vertex pair per edge. ([`TopologyError::InputLengthMismatch`])
    /// 4. Vertex pairs only reference known vertices. ([`TopologyError::IdNotFound`])
    /// 5. There is one enabled flag per edge. ([`TopologyError::InputLengthMismatch`])
    /// 6. The source is a known vertex. ([`TopologyError::IdNotFound`])
    /// 7. Enabled edges reach every vertex. ([`TopologyError::GraphNotFullyConnected`])
    /// 8. Enabled edges contain no cycle. ([`TopologyError::GraphCycle`])
    pub fn new(
        vertex_ids: &[VertexId],
        edge_ids: &[EdgeId],
        edge_vertex_id_pairs: &[(VertexId, VertexId)],
        edge_enabled: &[bool],
        source_vertex_id: VertexId,
    ) -> Result<Graph, TopologyError> {
        if let Some(id) = first_duplicate(vertex_ids) {
            return Err(TopologyError::IdNotUnique(id));
        }
        if let Some(id) = first_duplicate(edge_ids) {
            return Err(TopologyError::IdNotUnique(id));
        }
        if edge_vertex_id_pairs.len() != edge_ids.len() {
            return Err(TopologyError::InputLengthMismatch {
                expected: edge_ids.len(),
                found: edge_vertex_id_pairs.len(),
            });
        }

        let vertex_index: HashMap<VertexId, VertexIndex> = vertex_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();
        let lookup = |id: VertexId| -> Result<VertexIndex, TopologyError> {
            vertex_index
                .get(&id)
                .copied()
                .ok_or(TopologyError::IdNotFound(id))
        };

        let mut endpoints: Vec<(VertexIndex, VertexIndex)> =
            Vec::with_capacity(edge_vertex_id_pairs.len());
        for &(a, b) in edge_vertex_id_pairs {
            endpoints.push((lookup(a)?, lookup(b)?));
        }

        if edge_enabled.len() != edge_ids.len() {
            return Err(TopologyError::InputLengthMismatch {
                expected: edge_ids.len(),
                found: edge_enabled.len(),
            });
        }
        let source = lookup(source_vertex_id)?;

        let edges: Vec<Edge> = izip!(edge_ids, endpoints, edge_enabled)
            .map(|(&id, vertices, &enabled)| Edge {
                id,
                vertices,
                enabled,
            })
            .collect();
        let edge_index: HashMap<EdgeId, EdgeIndex> =
            edges.iter().enumerate().map(|(i, e)| (e.id, i)).collect();

        let mut branches = vec![Vec::new(); vertex_ids.len()];
        let mut enabled_count = 0;
        for (i, edge) in edges.iter().enumerate().filter(|(_, e)| e.enabled) {
            let (a, b) = edge.vertices;
            branches[a].push((b, i));
            branches[b].push((a, i));
            enabled_count += 1;
        }

        let graph = Graph {
            vertices: vertex_ids.to_vec(),
            edges,
            vertex_index,
            edge_index,
            branches,
            source,
        };

        if graph.reachable_without(None).count_ones() != graph.vertices.len() {
            return Err(TopologyError::GraphNotFullyConnected);
        }
        // A connected graph is a tree iff it has exactly one edge less than it has vertices.
        if enabled_count != graph.vertices.len() - 1 {
            return Err(TopologyError::GraphCycle);
        }

        log::debug!(
            "Built topology with {} vertices, {} enabled and {} disabled edges",
            graph.vertices.len(),
            enabled_count,
            graph.edges.len() - enabled_count
        );
        Ok(graph)
    }

    /// Breadth-first search from the source over enabled edges, optionally pretending that the
    /// `excluded` edge is open. Returns the set of reached vertices, indexed by arena index.
    pub(crate) fn reachable_without(&self, excluded: Option<EdgeIndex>) -> BitVec {
        let mut visited = bitvec![0; self.vertices.len()];
        let mut queue = VecDeque::new();
        visited.set(self.source, true);
        queue.push_back(self.source);
        while let Some(i) = queue.pop_front() {
            for &(j, edge) in self.branches[i].iter() {
                if Some(edge) == excluded || visited[j] {
                    continue;
                }
                visited.set(j, true);
                queue.push_back(j);
            }
        }
        visited
    }

    /// Returns the arena index of the given edge.
    pub(crate) fn find_edge(&self, edge_id: EdgeId) -> Result<EdgeIndex, TopologyError> {
        self.edge_index
            .get(&edge_id)
            .copied()
            .ok_or(TopologyError::IdNotFound(edge_id))
    }

    /// Vertex ids in input order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edge ids in input order, enabled or not.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|e| e.id).collect()
    }

    pub fn source_vertex_id(&self) -> VertexId {
        self.vertices[self.source]
    }

    pub fn contains_vertex(&self, vertex_id: VertexId) -> bool {
        self.vertex_index.contains_key(&vertex_id)
    }

    /// Returns whether the given edge is enabled.
    pub fn is_enabled(&self, edge_id: EdgeId) -> Result<bool, TopologyError> {
        Ok(self.edges[self.find_edge(edge_id)?].enabled)
    }

    /// Returns the vertex ids at both ends of the given edge, in input order.
    pub fn edge_vertices(&self, edge_id: EdgeId) -> Result<(VertexId, VertexId), TopologyError> {
        let (a, b) = self.edges[self.find_edge(edge_id)?].vertices;
        Ok((self.vertices[a], self.vertices[b]))
    }

    /// Vertex id pairs of all edges in input order.
    pub fn edge_vertex_id_pairs(&self) -> Vec<(VertexId, VertexId)> {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.vertices.0], self.vertices[e.vertices.1]))
            .collect()
    }

    /// Enabled flags of all edges in input order.
    pub fn edge_enabled(&self) -> Vec<bool> {
        self.edges.iter().map(|e| e.enabled).collect()
    }

    pub fn enabled_edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().filter(|e| e.enabled).map(|e| e.id).collect()
    }

    pub fn disabled_edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().filter(|e| !e.enabled).map(|e| e.id).collect()
    }
}
