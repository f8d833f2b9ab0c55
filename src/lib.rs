//! # `pipegraph` - Connected Components of Pipe Networks
//!
//! Reads adjacency lists of the form `<program> <-> <program>, <program>, ...`
//! and reports the size of the component containing a root program and the
//! number of components in the whole network.
//!
//! ## Architecture
//!
//! 1. **Graph Builder** ([`parse`]): interns every label to a dense
//!    [`NodeId`] in first-seen order and accumulates neighbor lists into a
//!    [`PipeGraph`]. The root is seeded before any line is read.
//! 2. **Component Walker** ([`graph::walk`]): depth-first, recursive or with an
//!    explicit stack, counting newly visited nodes in a caller-owned
//!    [`VisitedSet`].
//! 3. **Component Enumeration** ([`graph::enumerate_components`]): walks the
//!    root, then every still-unvisited node in first-seen order.
//!
//! ## Guarantees
//!
//! - Every node, declared or only referenced as a neighbor, is visited exactly
//!   once per enumeration, so component sizes sum to the node count.
//! - Discovery order is deterministic for a given input.
//! - Malformed input is rejected as a whole; no partial graph is produced.
//!
//! ## Example
//!
//! ```rust
//! use pipegraph::{enumerate_components, parse_str, WalkOptions};
//!
//! let graph = parse_str("0 <-> 2\n1 <-> 1\n2 <-> 0\n", "0").unwrap();
//! let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
//!
//! assert_eq!(report.node_count, 3);
//! assert_eq!(report.root_size, 2);
//! assert_eq!(report.component_count(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod parse;
pub mod report;

pub use collections::{NodeId, NodeInterner};
pub use config::{Config, OutputFormat};
pub use error::{ParseErrorKind, PipeError, Result};
pub use graph::{
    component_membership, enumerate_components, walk, Component, ComponentReport, Dfs,
    GraphStatistics, PipeGraph, Traversal, VisitedSet, WalkObserver, WalkOptions,
};
pub use parse::{parse_line, parse_str, read_graph, GraphBuilder, ParsedLine};
pub use report::Summary;
