//! Node-indexed adjacency table for pipe connections.
//!
//! Every label seen in the input (as a line root or as a neighbor) becomes a
//! dense [`NodeId`]. Adjacency lists are stored in a `Vec` indexed by that id,
//! so neighbor-only nodes simply have an empty list:
//! - neighbor order is preserved exactly as read
//! - repeated neighbors are kept (no deduplication)
//! - edges are directed as written; see [`PipeGraph::symmetrized`]
//!
//! Visited state is never stored here; traversals own a separate
//! [`VisitedSet`](crate::graph::access::VisitedSet).

use crate::collections::{NodeId, NodeInterner};

/// A graph of programs connected by pipes.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `node_id` | \(O(1)\) expected | Hash lookup in the interner |
/// | `neighbors` | \(O(1)\) | Returns a slice |
/// | `out_degree` | \(O(1)\) | returns `Vec::len` |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `asymmetric_edges` | \(O(m \cdot d)\) | One `has_edge` per edge |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeGraph {
    labels: NodeInterner,
    adjacency: Vec<Vec<NodeId>>,
    declared: Vec<bool>,
    root: NodeId,
}

impl PipeGraph {
    /// Creates a graph containing only `root`, declared with no neighbors.
    pub fn with_root(root: &str) -> Self {
        let mut graph = Self {
            labels: NodeInterner::new(),
            adjacency: Vec::new(),
            declared: Vec::new(),
            root: NodeId::new(0),
        };
        graph.root = graph.declare(root);
        graph
    }

    /// Returns the id for `label`, adding an undeclared node if it is new.
    pub(crate) fn add_node(&mut self, label: &str) -> NodeId {
        let (id, inserted) = self.labels.intern_full(label);
        if inserted {
            self.adjacency.push(Vec::new());
            self.declared.push(false);
        }
        id
    }

    /// Returns the id for `label` and marks it as a declared (line root) node.
    pub(crate) fn declare(&mut self, label: &str) -> NodeId {
        let id = self.add_node(label);
        self.declared[id.index()] = true;
        id
    }

    /// Appends `neighbors` to the adjacency list of `from`, in order.
    pub(crate) fn extend_neighbors<I>(&mut self, from: NodeId, neighbors: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.adjacency[from.index()].extend(neighbors);
    }

    /// The node whose component is reported separately.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of distinct nodes, declared or not.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges, counting repeats.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Iterates over every node id in first-seen order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Looks up the id of a label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.labels.get_id(label)
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this graph.
    pub fn label(&self, node: NodeId) -> &str {
        match self.labels.resolve(node) {
            Some(label) => label,
            None => panic!("node {node} out of bounds for n={}", self.node_count()),
        }
    }

    /// Returns the neighbors of a node in input order.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this graph.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node.index()]
    }

    /// Returns the out-degree of a node.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Checks if an edge exists from `from` to `to`.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Returns `true` if the node appeared as the root of some line.
    #[inline]
    pub fn is_declared(&self, node: NodeId) -> bool {
        self.declared[node.index()]
    }

    /// Labels that only ever appear as neighbors.
    pub fn undeclared(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes()
            .filter(|&n| !self.is_declared(n))
            .map(|n| self.label(n))
    }

    /// Returns every edge `a -> b` for which `b -> a` is missing.
    ///
    /// Repeated edges are reported once.
    pub fn asymmetric_edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut missing = Vec::new();
        for from in self.nodes() {
            for (i, &to) in self.neighbors(from).iter().enumerate() {
                if self.neighbors(from)[..i].contains(&to) {
                    continue;
                }
                if !self.has_edge(to, from) {
                    missing.push((from, to));
                }
            }
        }
        missing
    }

    /// Returns a copy in which every missing reverse edge has been appended.
    ///
    /// Reverse edges are appended after the existing neighbors, in the order
    /// [`asymmetric_edges`](Self::asymmetric_edges) reports them.
    #[must_use]
    pub fn symmetrized(&self) -> Self {
        let mut graph = self.clone();
        for (from, to) in self.asymmetric_edges() {
            graph.adjacency[to.index()].push(from);
        }
        graph
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.node_count();
        let edge_count = self.edge_count();
        let declared_count = self.declared.iter().filter(|&&d| d).count();

        let mut degrees: Vec<usize> = self.adjacency.iter().map(Vec::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        // For an odd count both middles are the same element.
        let median_degree = match degrees.len() {
            0 => 0,
            n => {
                let (lower, upper) = (degrees[(n - 1) / 2], degrees[n / 2]);
                lower + (upper - lower) / 2
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            declared_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges, counting repeats.
    pub edge_count: usize,
    /// Number of vertices that appeared as a line root.
    pub declared_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}
