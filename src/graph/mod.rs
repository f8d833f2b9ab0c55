//! Graph representation and traversals.
//!
//! - `basic`: the adjacency table, the component walker and enumeration
//! - `access`: traversal bookkeeping shared by the algorithms

pub mod access;
pub mod basic;

pub use access::VisitedSet;
pub use basic::{
    component_membership, enumerate_components, walk, Component, ComponentReport, Dfs,
    GraphStatistics, PipeGraph, Traversal, WalkObserver, WalkOptions,
};
