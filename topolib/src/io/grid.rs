//! Low-voltage grid description and its conversion to a topology.
//!
//! The grid has a single source behind a single transformer. The transformer feeds the LV
//! busbar, and every feeder is a line leaving that busbar.
use super::TopologyInput;
use crate::types::*;
use crate::{Graph, TopologyError};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    pub id: VertexId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Line {
    pub id: EdgeId,
    pub from_node: VertexId,
    pub to_node: VertexId,
    pub from_status: u8,
    pub to_status: u8,
}

impl Line {
    /// A line carries power only if it is switched in at both ends.
    pub fn is_closed(&self) -> bool {
        self.from_status == 1 && self.to_status == 1
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transformer {
    pub id: EdgeId,
    pub from_node: VertexId,
    pub to_node: VertexId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    pub id: Id,
    pub node: VertexId,
}

/// Network description of a low-voltage grid.
/// Components are stored in lists, but exactly one transformer and one source are supported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LvGrid {
    pub node: Vec<Node>,
    pub line: Vec<Line>,
    pub transformer: Vec<Transformer>,
    pub source: Vec<Source>,
}

/// Additional information about an [`LvGrid`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridMetadata {
    /// Node fed by the transformer.
    pub lv_busbar: VertexId,
    /// Ids of the lines leaving the busbar.
    pub lv_feeders: Vec<EdgeId>,
}

/// Represents the reasons why a grid description is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid must have exactly one source.
    SourceCount(usize),
    /// The grid must have exactly one transformer.
    TransformerCount(usize),
    /// A feeder id is not a line id.
    FeederNotFound(EdgeId),
    /// The transformer does not feed the busbar named in the metadata.
    BusbarMismatch { busbar: VertexId, transformer_to: VertexId },
    /// A feeder line does not start at the busbar.
    FeederNotOnBusbar { feeder: EdgeId, from_node: VertexId },
    /// The resulting topology is invalid.
    Topology(TopologyError),
}

impl std::error::Error for GridError {}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GridError::SourceCount(n) => write!(f, "Expected exactly one source, found {}.", n),
            GridError::TransformerCount(n) => {
                write!(f, "Expected exactly one transformer, found {}.", n)
            }
            GridError::FeederNotFound(id) => write!(f, "Feeder {} is not a line.", id),
            GridError::BusbarMismatch {
                busbar,
                transformer_to,
            } => write!(
                f,
                "Transformer feeds node {} but the LV busbar is {}.",
                transformer_to, busbar
            ),
            GridError::FeederNotOnBusbar { feeder, from_node } => write!(
                f,
                "Feeder {} starts at node {} instead of the LV busbar.",
                feeder, from_node
            ),
            GridError::Topology(e) => write!(f, "Invalid topology: {}", e),
        }
    }
}

impl From<TopologyError> for GridError {
    fn from(e: TopologyError) -> Self {
        GridError::Topology(e)
    }
}

impl LvGrid {
    /// Convert the grid to topology inputs.
    ///
    /// Lines become edges in their given order, enabled iff closed at both ends. The
    /// transformer is appended as an always enabled edge. The source node is the root.
    pub fn to_topology_input(&self) -> Result<TopologyInput, GridError> {
        let source = self.single_source()?;
        let transformer = self.single_transformer()?;

        let mut input = TopologyInput {
            vertex_ids: self.node.iter().map(|n| n.id).collect(),
            edge_ids: self.line.iter().map(|l| l.id).collect(),
            edge_vertex_id_pairs: self.line.iter().map(|l| (l.from_node, l.to_node)).collect(),
            edge_enabled: self.line.iter().map(Line::is_closed).collect(),
            source_vertex_id: source.node,
        };
        input.edge_ids.push(transformer.id);
        input
            .edge_vertex_id_pairs
            .push((transformer.from_node, transformer.to_node));
        input.edge_enabled.push(true);
        Ok(input)
    }

    /// Check the grid against its metadata and build its topology.
    ///
    /// Checks, in order: source and transformer counts, every feeder is a line, the transformer
    /// feeds the busbar, every feeder starts at the busbar, and finally the topology itself.
    pub fn validate(&self, metadata: &GridMetadata) -> Result<Graph, GridError> {
        self.single_source()?;
        let transformer = self.single_transformer()?;

        let feeders = metadata
            .lv_feeders
            .iter()
            .map(|&id| {
                self.line
                    .iter()
                    .find(|l| l.id == id)
                    .ok_or(GridError::FeederNotFound(id))
            })
            .collect::<Result<Vec<&Line>, GridError>>()?;

        if transformer.to_node != metadata.lv_busbar {
            return Err(GridError::BusbarMismatch {
                busbar: metadata.lv_busbar,
                transformer_to: transformer.to_node,
            });
        }
        if let Some(feeder) = feeders.iter().find(|l| l.from_node != metadata.lv_busbar) {
            return Err(GridError::FeederNotOnBusbar {
                feeder: feeder.id,
                from_node: feeder.from_node,
            });
        }

        let graph = self.to_topology_input()?.build()?;
        log::info!(
            "Validated LV grid: {} nodes, {} lines, {} feeders",
            self.node.len(),
            self.line.len(),
            feeders.len()
        );
        Ok(graph)
    }

    fn single_source(&self) -> Result<&Source, GridError> {
        match self.source.as_slice() {
            [source] => Ok(source),
            other => Err(GridError::SourceCount(other.len())),
        }
    }

    fn single_transformer(&self) -> Result<&Transformer, GridError> {
        match self.transformer.as_slice() {
            [transformer] => Ok(transformer),
            other => Err(GridError::TransformerCount(other.len())),
        }
    }
}

impl GridMetadata {
    /// Downstream vertices of each feeder, in the order of [`GridMetadata::lv_feeders`].
    /// Loads connected to these vertices are supplied through that feeder.
    pub fn feeder_vertices(
        &self,
        graph: &Graph,
    ) -> Result<Vec<(EdgeId, Vec<VertexId>)>, TopologyError> {
        self.lv_feeders
            .iter()
            .map(|&feeder| Ok((feeder, graph.downstream_vertices(feeder)?)))
            .collect()
    }
}
