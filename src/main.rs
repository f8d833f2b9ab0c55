//! `pipegraph` - count connected components in a pipe adjacency list.
//!
//! # Examples
//!
//! ```bash
//! # Read ./input.txt, trace every edge, print the summary
//! pipegraph
//!
//! # Another file and root, JSON summary only
//! pipegraph --input pipes.txt --root 17 --format json
//!
//! # Settings from a JSON file, overridden on the command line
//! pipegraph --config pipes.json --traversal recursive --no-trace
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pipegraph::report::{component_line, edge_line};
use pipegraph::{
    enumerate_components, read_graph, Config, NodeId, OutputFormat, PipeGraph, Summary, Traversal,
    WalkObserver,
};

/// Connected-component analysis for `<a> <-> <b>, <c>` pipe lists
#[derive(Parser)]
#[command(name = "pipegraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Adjacency-list file [default: input.txt]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Program whose component is reported separately [default: 0]
    #[arg(short, long)]
    root: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Depth-first strategy: recursive or iterative
    #[arg(long)]
    traversal: Option<Traversal>,

    /// Do not print a line per followed edge
    #[arg(long)]
    no_trace: bool,

    /// Add missing reverse edges before walking
    #[arg(long)]
    symmetrize: bool,

    /// Summary format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(traversal) = self.traversal {
            config.traversal = traversal;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_trace {
            config.trace = false;
        }
        if self.symmetrize {
            config.symmetrize = true;
        }

        Ok(config)
    }
}

/// Writes edge and component lines as the walk proceeds.
///
/// The first write error is kept and reported by [`LineTrace::finish`];
/// later lines are dropped.
struct LineTrace<W> {
    out: W,
    edges: bool,
    components: bool,
    error: Option<io::Error>,
}

impl<W: Write> LineTrace<W> {
    fn new(out: W, edges: bool, components: bool) -> Self {
        Self {
            out,
            edges,
            components,
            error: None,
        }
    }

    fn emit(&mut self, line: &str) {
        if self.error.is_none() {
            self.error = writeln!(self.out, "{line}").err();
        }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> WalkObserver for LineTrace<W> {
    fn on_edge(&mut self, graph: &PipeGraph, from: NodeId, to: NodeId) {
        if self.edges {
            self.emit(&edge_line(graph.label(from), graph.label(to)));
        }
    }

    fn on_component(&mut self, graph: &PipeGraph, start: NodeId, size: usize) {
        if self.components {
            self.emit(&component_line(graph.label(start), size));
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let mut graph = read_graph(&config.input, &config.root)
        .with_context(|| format!("building graph from {}", config.input.display()))?;

    let stats = graph.statistics();
    debug!(
        nodes = stats.vertex_count,
        edges = stats.edge_count,
        declared = stats.declared_count,
        max_degree = stats.max_degree,
        average_degree = stats.average_degree,
        "graph statistics"
    );

    let asymmetric = graph.asymmetric_edges();
    if !asymmetric.is_empty() {
        let (from, to) = asymmetric[0];
        warn!(
            count = asymmetric.len(),
            example = %format!("{} -> {}", graph.label(from), graph.label(to)),
            "input lists edges without their reverse"
        );
        if config.symmetrize {
            graph = graph.symmetrized();
            info!(edges = graph.edge_count(), "added missing reverse edges");
        }
    }

    let undeclared = graph.undeclared().count();
    if undeclared > 0 {
        debug!(count = undeclared, "programs referenced but never declared");
    }

    let mut trace = LineTrace::new(
        &mut *out,
        config.prints_trace(),
        config.format == OutputFormat::Text,
    );
    let report = enumerate_components(&graph, config.walk_options(), &mut trace);
    trace.finish().context("writing trace")?;
    let summary = Summary::new(&graph, &report);

    let rendered = match config.format {
        OutputFormat::Text => summary.render_text(),
        OutputFormat::Json => summary.to_json().context("serializing summary")? + "\n",
    };
    out.write_all(rendered.as_bytes()).context("writing summary")?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.into_config()?;
    debug!(?config, "resolved configuration");

    run(&config, &mut io::stdout().lock())
}
