//! Finding the vertices that lose their supply when an edge is opened.
use crate::graph::Graph;
use crate::types::*;
use crate::utils::select_masked;
use crate::TopologyError;

use bitvec::vec::BitVec;

impl Graph {
    /// Given an edge id, returns every vertex downstream of that edge with respect to the source,
    /// including the endpoint of the edge itself.
    ///
    /// Vertices are returned in the order they were given at construction. A disabled edge
    /// carries no supply, so it yields an empty list.
    ///
    /// For example, with `source --e1-- v2 --e3-- v4`, edge `e1` yields `[v2, v4]` and edge `e3`
    /// yields `[v4]`.
    pub fn downstream_vertices(&self, edge_id: EdgeId) -> Result<Vec<VertexId>, TopologyError> {
        let edge = self.find_edge(edge_id)?;
        let downstream = match self.downstream_mask(edge) {
            Some(mask) => select_masked(&self.vertices, &mask),
            None => Vec::new(),
        };
        log::trace!("Edge {edge_id} feeds {} vertices", downstream.len());
        Ok(downstream)
    }

    /// Set of vertices cut off from the source if the given edge is opened.
    /// `None` if the edge is already disabled.
    pub(crate) fn downstream_mask(&self, edge: EdgeIndex) -> Option<BitVec> {
        if !self.edges[edge].enabled {
            return None;
        }
        Some(!self.reachable_without(Some(edge)))
    }
}
