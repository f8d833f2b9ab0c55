//! Run summary and its renderings.

use serde::{Deserialize, Serialize};

use crate::graph::{ComponentReport, PipeGraph};

/// A component identified by the label its walk started from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Label of the start node.
    pub start: String,
    /// Number of nodes in the component.
    pub size: usize,
}

/// Label-based summary of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Total distinct nodes.
    pub nodes: usize,
    /// Root label.
    pub root: String,
    /// Size of the root component.
    pub root_size: usize,
    /// Number of components, root component included.
    pub components: usize,
    /// Every component in discovery order, root component first.
    pub discovered: Vec<ComponentEntry>,
}

impl Summary {
    /// Resolves the ids in `report` against `graph`.
    pub fn new(graph: &PipeGraph, report: &ComponentReport) -> Self {
        Self {
            nodes: report.node_count,
            root: graph.label(graph.root()).to_owned(),
            root_size: report.root_size,
            components: report.component_count(),
            discovered: report
                .components
                .iter()
                .map(|c| ComponentEntry {
                    start: graph.label(c.start).to_owned(),
                    size: c.size,
                })
                .collect(),
        }
    }

    /// The closing lines of the text output.
    pub fn render_text(&self) -> String {
        format!(
            "Nodes {}, and group {} had {}\nGroups {}\n",
            self.nodes, self.root, self.root_size, self.components
        )
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Line written when a non-root component is discovered.
pub fn component_line(start: &str, size: usize) -> String {
    format!("{start} connectsTo {size} other nodes")
}

/// Line written for each followed edge.
pub fn edge_line(from: &str, to: &str) -> String {
    format!("Node {from} is connected to {to}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{enumerate_components, WalkOptions};
    use crate::parse::parse_str;

    fn sample_summary() -> Summary {
        let graph = parse_str("0 <-> 2\n1 <-> 1\n2 <-> 0\n", "0").unwrap();
        let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
        Summary::new(&graph, &report)
    }

    #[test]
    fn text_summary() {
        assert_eq!(
            sample_summary().render_text(),
            "Nodes 3, and group 0 had 2\nGroups 2\n"
        );
    }

    #[test]
    fn json_summary_round_trips() {
        let summary = sample_summary();
        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["components"], 2);
        assert_eq!(value["discovered"][1]["start"], "1");

        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn trace_lines() {
        assert_eq!(edge_line("0", "2"), "Node 0 is connected to 2");
        assert_eq!(component_line("1", 1), "1 connectsTo 1 other nodes");
    }
}
