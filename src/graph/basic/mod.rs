//! Basic graph implementations.
//!
//! This module contains the adjacency table together with the traversal and
//! component algorithms that run over it.

pub mod components;
pub mod pipe_graph;
pub mod walker;

pub use components::{component_membership, enumerate_components, Component, ComponentReport};
pub use pipe_graph::{GraphStatistics, PipeGraph};
pub use walker::{walk, Dfs, Traversal, WalkObserver, WalkOptions};
