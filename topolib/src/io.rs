//! Input output module.
//!
//! Contains structs to serialize and deserialize the inputs of a topology, either as the raw
//! constructor lists or as a low-voltage grid description.
use crate::types::*;
use crate::{Graph, TopologyError};

use serde::{Deserialize, Serialize};

pub mod fs;
mod grid;
pub use grid::*;


/// Raw constructor inputs of a [`Graph`], as supplied by a data loader.
///
/// `edge_vertex_id_pairs` and `edge_enabled` are index-aligned with `edge_ids`.
/// Pairs serialize as arrays of length 2.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopologyInput {
    pub vertex_ids: Vec<VertexId>,
    pub edge_ids: Vec<EdgeId>,
    pub edge_vertex_id_pairs: Vec<(VertexId, VertexId)>,
    pub edge_enabled: Vec<bool>,
    pub source_vertex_id: VertexId,
}

impl TopologyInput {
    /// Validate the inputs and build the topology.
    pub fn build(&self) -> Result<Graph, TopologyError> {
        Graph::new(
            &self.vertex_ids,
            &self.edge_ids,
            &self.edge_vertex_id_pairs,
            &self.edge_enabled,
            self.source_vertex_id,
        )
    }
}

impl From<&Graph> for TopologyInput {
    fn from(graph: &Graph) -> Self {
        TopologyInput {
            vertex_ids: graph.vertex_ids().to_vec(),
            edge_ids: graph.edge_ids(),
            edge_vertex_id_pairs: graph.edge_vertex_id_pairs(),
            edge_enabled: graph.edge_enabled(),
            source_vertex_id: graph.source_vertex_id(),
        }
    }
}
