//! Primitive data types.

/// Data type for external vertex and edge identifiers.
pub type Id = i64;
/// Data type for vertex identifiers.
pub type VertexId = Id;
/// Data type for edge identifiers.
pub type EdgeId = Id;
/// Data type for vertex indices in the arena.
pub type VertexIndex = usize;
/// Data type for edge indices in the arena.
pub type EdgeIndex = usize;
