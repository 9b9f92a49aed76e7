//! Content graph: record types, the query stage, nodes and their slug
//! derivation, and the filesystem-backed snapshot source.

pub mod node;
pub mod query;
pub mod source;
pub mod types;
