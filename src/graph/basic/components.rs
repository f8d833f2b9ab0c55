//! Connected-component enumeration.
//!
//! The root component is walked first and reported separately. Remaining
//! components are discovered by scanning nodes in first-seen order and walking
//! from each node that is still unvisited, so discovery order is reproducible
//! across runs.

use tracing::debug;

use crate::collections::NodeId;
use crate::graph::access::VisitedSet;
use crate::graph::basic::walker::{walk, WalkObserver, WalkOptions};
use crate::graph::basic::PipeGraph;

/// One discovered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Node the walk started from.
    pub start: NodeId,
    /// Number of nodes newly visited by that walk.
    pub size: usize,
}

/// Result of [`enumerate_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    /// Total number of distinct nodes.
    pub node_count: usize,
    /// Size of the component walked from the root.
    pub root_size: usize,
    /// Every component in discovery order; the root component is first.
    pub components: Vec<Component>,
}

impl ComponentReport {
    /// Number of components, root component included.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Sum of all component sizes; equals `node_count` after a full enumeration.
    pub fn sizes_sum(&self) -> usize {
        self.components.iter().map(|c| c.size).sum()
    }

    /// Components discovered after the root component.
    pub fn others(&self) -> &[Component] {
        self.components.get(1..).unwrap_or_default()
    }
}

/// Walks every component of `graph`, starting with its root.
///
/// `observer` sees every followed edge and every non-root component.
pub fn enumerate_components<O>(
    graph: &PipeGraph,
    options: WalkOptions,
    observer: &mut O,
) -> ComponentReport
where
    O: WalkObserver + ?Sized,
{
    let node_count = graph.node_count();
    let mut visited = VisitedSet::new(node_count);

    let root = graph.root();
    let root_size = walk(graph, root, &mut visited, options.traversal, observer);
    debug!(root = graph.label(root), size = root_size, "walked root component");

    let mut components = vec![Component {
        start: root,
        size: root_size,
    }];

    for node in graph.nodes() {
        if visited.is_complete() {
            break;
        }
        if visited.is_visited(node.index()) {
            continue;
        }
        let size = walk(graph, node, &mut visited, options.traversal, observer);
        observer.on_component(graph, node, size);
        components.push(Component { start: node, size });
    }

    debug_assert_eq!(visited.count(), node_count);
    debug!(
        nodes = node_count,
        components = components.len(),
        "enumeration complete"
    );

    ComponentReport {
        node_count,
        root_size,
        components,
    }
}

/// Assigns each node the index of the component that first reached it.
///
/// Indices follow the discovery order of [`enumerate_components`], so the root
/// component is `0`.
pub fn component_membership(graph: &PipeGraph, options: WalkOptions) -> Vec<usize> {
    struct Labeler {
        membership: Vec<usize>,
        current: usize,
    }

    impl WalkObserver for Labeler {
        fn on_edge(&mut self, _graph: &PipeGraph, _from: NodeId, to: NodeId) {
            self.membership[to.index()] = self.current;
        }
    }

    let mut labeler = Labeler {
        membership: vec![usize::MAX; graph.node_count()],
        current: 0,
    };
    let mut visited = VisitedSet::new(graph.node_count());

    for node in std::iter::once(graph.root()).chain(graph.nodes()) {
        if visited.is_visited(node.index()) {
            continue;
        }
        labeler.membership[node.index()] = labeler.current;
        walk(graph, node, &mut visited, options.traversal, &mut labeler);
        labeler.current += 1;
    }

    labeler.membership
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::walker::Traversal;
    use crate::parse::parse_str;

    const SAMPLE: &str = "0 <-> 2\n1 <-> 1\n2 <-> 0,3,4\n3 <-> 2,4\n4 <-> 2,3,6\n5 <-> 6\n6 <-> 4,5\n";

    #[derive(Default)]
    struct ComponentLog(Vec<(String, usize)>);

    impl WalkObserver for ComponentLog {
        fn on_component(&mut self, graph: &PipeGraph, start: NodeId, size: usize) {
            self.0.push((graph.label(start).to_owned(), size));
        }
    }

    #[test]
    fn sample_has_two_components() {
        let graph = parse_str(SAMPLE, "0").unwrap();
        let mut log = ComponentLog::default();
        let report = enumerate_components(&graph, WalkOptions::default(), &mut log);

        assert_eq!(report.node_count, 7);
        assert_eq!(report.root_size, 6);
        assert_eq!(report.component_count(), 2);
        assert_eq!(report.sizes_sum(), 7);
        assert_eq!(log.0, vec![("1".to_owned(), 1)]);
    }

    #[test]
    fn self_loop_only() {
        let graph = parse_str("0 <-> 0", "0").unwrap();
        let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
        assert_eq!(report.node_count, 1);
        assert_eq!(report.root_size, 1);
        assert_eq!(report.component_count(), 1);
        assert!(report.others().is_empty());
    }

    #[test]
    fn missing_root_line_still_counts_root() {
        let graph = parse_str("1 <-> 2\n2 <-> 1\n", "0").unwrap();
        let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
        assert_eq!(report.node_count, 3);
        assert_eq!(report.root_size, 1);
        assert_eq!(report.component_count(), 2);
    }

    #[test]
    fn discovery_follows_first_seen_order() {
        let graph = parse_str("0 <-> 0\n9 <-> 9\n4 <-> 4\n7 <-> 7\n", "0").unwrap();
        let report = enumerate_components(
            &graph,
            WalkOptions {
                traversal: Traversal::Recursive,
            },
            &mut (),
        );
        let starts: Vec<_> = report.others().iter().map(|c| graph.label(c.start)).collect();
        assert_eq!(starts, vec!["9", "4", "7"]);
    }

    #[test]
    fn membership_matches_enumeration() {
        let graph = parse_str(SAMPLE, "0").unwrap();
        let membership = component_membership(&graph, WalkOptions::default());
        let id = |l| graph.node_id(l).unwrap().index();

        for label in ["0", "2", "3", "4", "5", "6"] {
            assert_eq!(membership[id(label)], 0);
        }
        assert_eq!(membership[id("1")], 1);
    }
}
