use std::fs;

use pipegraph::{
    enumerate_components, parse_str, read_graph, Config, NodeId, ParseErrorKind, PipeError,
    PipeGraph, Summary, Traversal, WalkObserver, WalkOptions,
};

const SAMPLE: &str = "\
0 <-> 2
1 <-> 1
2 <-> 0,3,4
3 <-> 2,4
4 <-> 2,3,6
5 <-> 6
6 <-> 4,5
";

fn options(traversal: Traversal) -> WalkOptions {
    WalkOptions { traversal }
}

#[test]
fn sample_network() {
    let graph = parse_str(SAMPLE, "0").unwrap();
    for traversal in [Traversal::Recursive, Traversal::Iterative] {
        let report = enumerate_components(&graph, options(traversal), &mut ());
        assert_eq!(report.node_count, 7);
        assert_eq!(report.root_size, 6);
        assert_eq!(report.component_count(), 2);
    }
}

#[test]
fn single_self_loop() {
    let graph = parse_str("0 <-> 0", "0").unwrap();
    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(
        (report.node_count, report.root_size, report.component_count()),
        (1, 1, 1)
    );
}

#[test]
fn undeclared_neighbor_is_counted_once() {
    let graph = parse_str("0 <-> 1, 42\n1 <-> 0, 42\n", "0").unwrap();
    assert_eq!(graph.undeclared().collect::<Vec<_>>(), vec!["42"]);

    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(report.node_count, 3);
    assert_eq!(report.root_size, 3);
    assert_eq!(report.component_count(), 1);
}

#[test]
fn undeclared_node_outside_root_component() {
    let graph = parse_str("0 <-> 0\n5 <-> 8\n", "0").unwrap();
    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(report.node_count, 3);
    assert_eq!(report.component_count(), 2);
    assert_eq!(report.sizes_sum(), 3);
}

#[test]
fn malformed_line_fails_the_whole_parse() {
    let err = parse_str("0 <-> 1\n1 <=> 0\n", "0").unwrap_err();
    assert!(matches!(
        err,
        PipeError::Parse {
            line: 2,
            kind: ParseErrorKind::MissingSeparator
        }
    ));

    let err = parse_str(SAMPLE.replace("5 <-> 6", "5 <-> 6 <-> 4").as_str(), "0").unwrap_err();
    assert!(matches!(
        err,
        PipeError::Parse {
            line: 6,
            kind: ParseErrorKind::ExtraSeparator
        }
    ));
}

#[test]
fn empty_neighbor_tokens_are_programs_too() {
    // "" is a program reached only from 1.
    let graph = parse_str("0 <-> 1\n1 <-> ", "0").unwrap();
    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(report.node_count, 3);
    assert_eq!(report.root_size, 3);

    let graph = parse_str("0 <-> 1,,2\n", "0").unwrap();
    assert_eq!(graph.node_count(), 4);
    assert!(graph.node_id("").is_some());
}

#[test]
fn parsing_is_idempotent() {
    let a = parse_str(SAMPLE, "0").unwrap();
    let b = parse_str(SAMPLE, "0").unwrap();
    assert_eq!(a, b);
}

#[test]
fn custom_root() {
    let graph = parse_str(SAMPLE, "5").unwrap();
    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(graph.label(graph.root()), "5");
    assert_eq!(report.root_size, 6);
    assert_eq!(report.component_count(), 2);
}

#[test]
fn observer_sees_every_component_after_root() {
    struct Counter {
        edges: usize,
        components: Vec<usize>,
    }

    impl WalkObserver for Counter {
        fn on_edge(&mut self, _: &PipeGraph, _: NodeId, _: NodeId) {
            self.edges += 1;
        }

        fn on_component(&mut self, _: &PipeGraph, _: NodeId, size: usize) {
            self.components.push(size);
        }
    }

    let graph = parse_str(SAMPLE, "0").unwrap();
    let mut counter = Counter {
        edges: 0,
        components: Vec::new(),
    };
    let report = enumerate_components(&graph, WalkOptions::default(), &mut counter);

    // A DFS forest over n nodes with c trees has n - c tree edges.
    assert_eq!(counter.edges, report.node_count - report.component_count());
    assert_eq!(counter.components, vec![1]);
}

#[test]
fn read_graph_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, SAMPLE).unwrap();

    let graph = read_graph(&path, "0").unwrap();
    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    let summary = Summary::new(&graph, &report);

    assert_eq!(summary.nodes, 7);
    assert_eq!(summary.root_size, 6);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.discovered[1].start, "1");
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pipes.txt");
    fs::write(&input, "a <-> b\nb <-> a\nc <-> c\n").unwrap();

    let config_path = dir.path().join("pipes.json");
    let json = serde_json::json!({
        "input": input,
        "root": "a",
        "traversal": "recursive",
        "format": "json",
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = Config::from_path(&config_path).unwrap();
    assert!(!config.prints_trace());

    let graph = read_graph(&config.input, &config.root).unwrap();
    let report = enumerate_components(&graph, config.walk_options(), &mut ());
    assert_eq!(report.root_size, 2);
    assert_eq!(report.component_count(), 2);
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"traversal\": \"sideways\" }").unwrap();

    assert!(matches!(
        Config::from_path(&path),
        Err(PipeError::Config { .. })
    ));
}

#[test]
fn symmetrizing_joins_one_way_pipes() {
    // 3 is only reachable from the root through a reverse edge.
    let graph = parse_str("0 <-> 1\n1 <-> 0\n3 <-> 1\n", "0").unwrap();

    let report = enumerate_components(&graph, WalkOptions::default(), &mut ());
    assert_eq!(report.root_size, 2);
    assert_eq!(report.component_count(), 2);

    let sym = graph.symmetrized();
    let report = enumerate_components(&sym, WalkOptions::default(), &mut ());
    assert_eq!(report.root_size, 3);
    assert_eq!(report.component_count(), 1);
}
