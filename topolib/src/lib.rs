//! # Radial Network Topology Library
//!
//! Validates the switching topology of a radial distribution network and answers the queries
//! that power-flow batch drivers need: which buses are cut off by opening a line, and which
//! normally-open lines can restore supply afterwards.

use serde::{Deserialize, Serialize};

mod contingency;
mod downstream;
mod graph;
pub mod io;
pub mod types;
pub mod utils;


pub use contingency::Contingency;
pub use graph::Graph;
pub use types::*;

/// Represents the reasons why a topology cannot be built or queried.
///
/// Only the first violated check is reported.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum TopologyError {
    /// A vertex or edge id appears more than once.
    IdNotUnique(Id),
    /// A list that must be index-aligned with the edge ids has a different length.
    InputLengthMismatch { expected: usize, found: usize },
    /// A referenced vertex, edge or source id does not exist.
    IdNotFound(Id),
    /// The enabled edges do not reach every vertex.
    GraphNotFullyConnected,
    /// The enabled edges contain a cycle.
    GraphCycle,
    /// A contingency query targets an edge that is already disabled.
    EdgeAlreadyDisabled(EdgeId),
}

impl std::error::Error for TopologyError {}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TopologyError::IdNotUnique(id) => write!(f, "ID {} is not unique.", id),
            TopologyError::InputLengthMismatch { expected, found } => {
                write!(
                    f,
                    "Input length does not match! Expected {} entries, found {}.",
                    expected, found
                )
            }
            TopologyError::IdNotFound(id) => write!(f, "ID {} not found.", id),
            TopologyError::GraphNotFullyConnected => write!(f, "Graph is not fully connected."),
            TopologyError::GraphCycle => write!(f, "Graph contains a cycle."),
            TopologyError::EdgeAlreadyDisabled(id) => {
                write!(f, "Edge {} is already disabled.", id)
            }
        }
    }
}
