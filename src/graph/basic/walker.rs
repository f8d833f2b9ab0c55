//! Depth-first component walker.
//!
//! [`walk`] counts the nodes reachable from a start node that no earlier walk
//! has visited, marking them in a caller-owned [`VisitedSet`]. Two strategies
//! are available and produce the same count and the same edge order:
//!
//! - [`Traversal::Recursive`] recurses once per newly reached node. Stack depth
//!   grows with the longest DFS path, which is bounded by the node count; this
//!   is fine for puzzle-scale inputs of a few thousand nodes but not for
//!   adversarial ones.
//! - [`Traversal::Iterative`] keeps an explicit stack of `(node, next neighbor)`
//!   frames and never grows the call stack.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collections::NodeId;
use crate::error::PipeError;
use crate::graph::access::VisitedSet;
use crate::graph::basic::PipeGraph;

/// Depth-first traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Plain recursion.
    Recursive,
    /// Explicit frame stack.
    #[default]
    Iterative,
}

impl Traversal {
    const EXPECTED: &'static str = "recursive, iterative";
}

impl FromStr for Traversal {
    type Err = PipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            other => Err(PipeError::InvalidChoice {
                what: "traversal",
                value: other.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recursive => "recursive",
            Self::Iterative => "iterative",
        })
    }
}

/// Options shared by every walk of one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkOptions {
    /// Strategy used for each walk.
    pub traversal: Traversal,
}

/// Receives traversal events.
///
/// Both methods default to doing nothing, so `()` can be passed when no
/// observation is needed.
pub trait WalkObserver {
    /// Called for every edge the walk follows to a not-yet-visited node,
    /// before descending into `to`.
    fn on_edge(&mut self, _graph: &PipeGraph, _from: NodeId, _to: NodeId) {}

    /// Called once per component discovered after the root component.
    fn on_component(&mut self, _graph: &PipeGraph, _start: NodeId, _size: usize) {}
}

impl WalkObserver for () {}

impl<O: WalkObserver + ?Sized> WalkObserver for &mut O {
    fn on_edge(&mut self, graph: &PipeGraph, from: NodeId, to: NodeId) {
        (**self).on_edge(graph, from, to);
    }

    fn on_component(&mut self, graph: &PipeGraph, start: NodeId, size: usize) {
        (**self).on_component(graph, start, size);
    }
}

/// Walks from `start`, returning how many nodes were newly visited.
///
/// The count includes `start` itself. If `start` was already visited nothing
/// is marked and `0` is returned.
///
/// # Panics
/// Panics if `start` does not belong to `graph` or `visited` was sized for a
/// different graph.
pub fn walk<O>(
    graph: &PipeGraph,
    start: NodeId,
    visited: &mut VisitedSet,
    traversal: Traversal,
    observer: &mut O,
) -> usize
where
    O: WalkObserver + ?Sized,
{
    assert_eq!(
        visited.len(),
        graph.node_count(),
        "visited set does not match graph size"
    );
    if visited.is_visited(start.index()) {
        return 0;
    }
    match traversal {
        Traversal::Recursive => walk_recursive(graph, start, visited, observer),
        Traversal::Iterative => walk_iterative(graph, start, visited, observer),
    }
}

fn walk_recursive<O>(
    graph: &PipeGraph,
    node: NodeId,
    visited: &mut VisitedSet,
    observer: &mut O,
) -> usize
where
    O: WalkObserver + ?Sized,
{
    visited.try_visit(node.index());
    let mut total = 1;

    for &child in graph.neighbors(node) {
        if !visited.is_visited(child.index()) {
            trace!(from = graph.label(node), to = graph.label(child), "edge");
            observer.on_edge(graph, node, child);
            total += walk_recursive(graph, child, visited, observer);
        }
    }

    total
}

fn walk_iterative<O>(
    graph: &PipeGraph,
    start: NodeId,
    visited: &mut VisitedSet,
    observer: &mut O,
) -> usize
where
    O: WalkObserver + ?Sized,
{
    visited.try_visit(start.index());
    let mut total = 1;

    // (node, index of the next neighbor to inspect)
    let mut stack = vec![(start, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        if let Some(&child) = graph.neighbors(node).get(next) {
            frame.1 += 1;
            if visited.try_visit(child.index()) {
                trace!(from = graph.label(node), to = graph.label(child), "edge");
                observer.on_edge(graph, node, child);
                total += 1;
                stack.push((child, 0));
            }
        } else {
            stack.pop();
        }
    }

    total
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields node ids in the same pre-order that [`walk`] visits them. It owns
/// its visited set, so it is independent of any enumeration in progress.
pub struct Dfs<'g> {
    graph: &'g PipeGraph,
    visited: VisitedSet,
    stack: Vec<(NodeId, usize)>,
    pending: Option<NodeId>,
}

impl<'g> Dfs<'g> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` does not belong to `graph`.
    pub fn new(graph: &'g PipeGraph, start: NodeId) -> Self {
        let mut visited = VisitedSet::new(graph.node_count());
        visited.try_visit(start.index());
        Self {
            graph,
            visited,
            stack: vec![(start, 0)],
            pending: Some(start),
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        while let Some(frame) = self.stack.last_mut() {
            let (node, next) = *frame;
            if let Some(&child) = self.graph.neighbors(node).get(next) {
                frame.1 += 1;
                if self.visited.try_visit(child.index()) {
                    self.stack.push((child, 0));
                    return Some(child);
                }
            } else {
                self.stack.pop();
            }
        }

        None
    }
}
