//! Collections backing the graph representation.

pub mod interner;

pub use interner::{NodeId, NodeInterner};
