//! N-1 contingency analysis: which normally-open edges can take over when an edge is cut.
use crate::graph::Graph;
use crate::types::*;
use crate::utils::select_masked;
use crate::TopologyError;

use bitvec::slice::BitSlice;
use serde::{Deserialize, Serialize};

/// Outcome of cutting a single enabled edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contingency {
    /// The edge that is cut.
    pub edge: EdgeId,
    /// Vertices that lose supply, in input order.
    pub downstream: Vec<VertexId>,
    /// Disabled edges that restore a spanning tree, in input order.
    pub alternatives: Vec<EdgeId>,
}

impl Graph {
    /// Given an enabled edge that is about to be disabled, returns the currently disabled edges
    /// whose enabling would make the graph fully connected and acyclic again.
    ///
    /// Cutting a tree edge leaves exactly two trees, so an alternative is valid iff its
    /// endpoints lie on different sides of the cut. Results follow the edge input order.
    ///
    /// Errors with [`TopologyError::IdNotFound`] for unknown ids and
    /// [`TopologyError::EdgeAlreadyDisabled`] if the edge is not enabled.
    pub fn alternative_edges(&self, edge_id: EdgeId) -> Result<Vec<EdgeId>, TopologyError> {
        let edge = self.find_edge(edge_id)?;
        let downstream = self
            .downstream_mask(edge)
            .ok_or(TopologyError::EdgeAlreadyDisabled(edge_id))?;
        Ok(self.spanning_alternatives(&downstream))
    }

    /// Disabled edges crossing the cut described by `downstream`.
    fn spanning_alternatives(&self, downstream: &BitSlice) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|e| !e.enabled && downstream[e.vertices.0] != downstream[e.vertices.1])
            .map(|e| e.id)
            .collect()
    }

    /// Runs the cut analysis for every enabled edge, in edge input order.
    pub fn contingencies(&self) -> Vec<Contingency> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let downstream = self.downstream_mask(i)?;
                Some(Contingency {
                    edge: e.id,
                    downstream: select_masked(&self.vertices, &downstream),
                    alternatives: self.spanning_alternatives(&downstream),
                })
            })
            .collect()
    }

    /// Builds a new topology in which `cut_edge` is disabled and `alternative_edge` is enabled.
    /// `self` is left untouched.
    ///
    /// The result is validated from scratch. An alternative that does not span the cut leaves
    /// the far side unsupplied and fails with [`TopologyError::GraphNotFullyConnected`].
    pub fn reconfigure(
        &self,
        cut_edge: EdgeId,
        alternative_edge: EdgeId,
    ) -> Result<Graph, TopologyError> {
        let cut = self.find_edge(cut_edge)?;
        let alternative = self.find_edge(alternative_edge)?;
        if !self.edges[cut].enabled {
            return Err(TopologyError::EdgeAlreadyDisabled(cut_edge));
        }

        let mut enabled = self.edge_enabled();
        // Cut last so that cutting and re-enabling the same edge leaves it open.
        enabled[alternative] = true;
        enabled[cut] = false;

        log::debug!("Reconfiguring: open edge {cut_edge}, close edge {alternative_edge}");
        Graph::new(
            &self.vertices,
            &self.edge_ids(),
            &self.edge_vertex_id_pairs(),
            &enabled,
            self.source_vertex_id(),
        )
    }
}
