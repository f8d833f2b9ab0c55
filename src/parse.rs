//! Graph builder for `<root> <-> <n1>, <n2>, ...` adjacency lists.
//!
//! Each non-blank line names a program and the programs it is piped to. Lines
//! for the same program accumulate: later neighbors are appended after earlier
//! ones, repeats included. The first malformed line aborts the build.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ParseErrorKind, PipeError, Result};
use crate::graph::PipeGraph;

/// Separator between a program and its neighbor list.
pub const SEPARATOR: &str = " <-> ";

/// One parsed input line, borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Program named before the separator, verbatim.
    pub root: &'a str,
    /// Neighbors in input order, each trimmed of surrounding whitespace.
    pub neighbors: Vec<&'a str>,
}

/// Splits one line into its root and neighbor labels.
///
/// Neighbors are separated by `,` with optional whitespace, so `"0, 3, 4"`
/// and `"0,3,4"` are equivalent. Labels are not validated: an empty token
/// (as in `"1 <-> "` or `"1 <-> 2,,3"`) is the label `""`.
///
/// # Errors
/// Returns [`ParseErrorKind::MissingSeparator`] if the line has no ` <-> `,
/// and [`ParseErrorKind::ExtraSeparator`] if it has more than one.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, ParseErrorKind> {
    let (root, rest) = line
        .split_once(SEPARATOR)
        .ok_or(ParseErrorKind::MissingSeparator)?;
    if rest.contains(SEPARATOR) {
        return Err(ParseErrorKind::ExtraSeparator);
    }

    let neighbors = rest.split(',').map(str::trim).collect();
    Ok(ParsedLine { root, neighbors })
}

/// Accumulates lines into a [`PipeGraph`].
#[derive(Debug)]
pub struct GraphBuilder {
    graph: PipeGraph,
    line: usize,
}

impl GraphBuilder {
    /// Starts a graph pre-seeded with `root` and no neighbors.
    pub fn new(root: &str) -> Self {
        Self {
            graph: PipeGraph::with_root(root),
            line: 0,
        }
    }

    /// Number of lines consumed so far, blank ones included.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Merges one input line into the graph.
    ///
    /// Blank lines are skipped. On error the builder should be discarded.
    ///
    /// # Errors
    /// Returns [`PipeError::Parse`] with the current line number if the line
    /// is malformed (see [`parse_line`]).
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        if line.trim().is_empty() {
            return Ok(());
        }

        let parsed = parse_line(line).map_err(|kind| kind.at_line(self.line))?;
        let from = self.graph.declare(parsed.root);
        let neighbors: Vec<_> = parsed
            .neighbors
            .into_iter()
            .map(|n| self.graph.add_node(n))
            .collect();
        self.graph.extend_neighbors(from, neighbors);
        Ok(())
    }

    /// Returns the finished graph.
    pub fn finish(self) -> PipeGraph {
        self.graph
    }
}

/// Builds a graph from the whole input text.
///
/// # Errors
/// Returns [`PipeError::Parse`] for the first malformed line; no partial
/// graph is returned.
pub fn parse_str(input: &str, root: &str) -> Result<PipeGraph> {
    let mut builder = GraphBuilder::new(root);
    for line in input.lines() {
        builder.push_line(line)?;
    }
    let lines = builder.lines_read();
    let graph = builder.finish();
    debug!(
        lines,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built pipe graph"
    );
    Ok(graph)
}

/// Reads and parses the file at `path`.
///
/// # Errors
/// Returns [`PipeError::Io`] if the file cannot be read, otherwise any error
/// from [`parse_str`].
pub fn read_graph(path: impl AsRef<Path>, root: &str) -> Result<PipeGraph> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| PipeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = input.len(), "read input");
    parse_str(&input, root)
}
