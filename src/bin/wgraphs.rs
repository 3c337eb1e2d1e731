#![forbid(unsafe_code)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum, error::ErrorKind};
use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wgraphs::{algo::*, cover::*, io::*, prelude::*, report::GraphReport};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wgraphs: structural report and edge covers of a graph",
    long_about = None,
    group(ArgGroup::new("input").required(true).args(["matrix", "list", "config"]))
)]
struct Cli {
    /// Load a graph description into an adjacency matrix.
    #[arg(short, long, value_name = "FILE")]
    matrix: Option<PathBuf>,

    /// Load a graph description into adjacency lists.
    #[arg(short, long, value_name = "FILE")]
    list: Option<PathBuf>,

    /// Load a configuration file naming the backend followed by a graph description.
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Compute an edge cover with the given strategy.
    #[arg(long, value_enum)]
    cover: Option<Strategy>,

    /// Greediness of the GRASP construction, between 0 (random) and 1 (greedy).
    #[arg(long, default_value_t = 0.3)]
    alpha: f64,

    /// Number of GRASP iterations.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    iterations: Option<u64>,

    /// Number of candidate alphas of the reactive GRASP.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    alphas: u64,

    /// Seed of the random number generator; drawn at random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Append a vertex before reporting.
    #[arg(long)]
    insert_vertex: bool,

    /// Delete a vertex (1-based) before reporting.
    #[arg(short, long, value_name = "ID")]
    remove_vertex: Option<Node>,

    /// Print the weighted distance between two vertices (1-based).
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    distance: Option<Vec<Node>>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Greedy,
    Grasp,
    Reactive,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WGRAPHS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "wgraphs=debug,info"
        } else {
            "wgraphs=warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Converts a 1-based id from the command line into a node of `graph`
fn node_from_arg<G: GraphNodeOrder>(graph: &G, id: Node) -> anyhow::Result<Node> {
    let u = id
        .checked_sub(1)
        .with_context(|| format!("vertex ids start at 1, found {id}"))?;
    graph.check_node(u)?;
    Ok(u)
}

fn load(cli: &Cli) -> anyhow::Result<AnyGraph> {
    let graph = if let Some(path) = &cli.matrix {
        let graph: AdjMatrix = DescriptionReader::new().try_read_graph_file(path)?;
        AnyGraph::from(graph)
    } else if let Some(path) = &cli.list {
        let graph: AdjList = DescriptionReader::new().try_read_graph_file(path)?;
        AnyGraph::from(graph)
    } else if let Some(path) = &cli.config {
        ConfigReader::new().try_read_graph_file(path)?
    } else {
        anyhow::bail!("no input given");
    };
    Ok(graph)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut graph = load(&cli).context("failed to load graph")?;
    info!(
        backend = %graph.backend(),
        order = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "loaded graph"
    );

    if cli.insert_vertex {
        let u = graph.insert_vertex();
        println!("Inserted vertex {}", u + 1);
    }

    if let Some(id) = cli.remove_vertex {
        let u = node_from_arg(&graph, id).context("cannot remove vertex")?;
        graph.delete_vertex(u)?;
        println!("Removed vertex {id}");
    }

    println!("{}", GraphReport::new(&graph));

    if let Some(strategy) = cli.cover {
        let seed = cli.seed.unwrap_or_else(rand::random);
        debug!(seed, ?strategy, "computing cover");
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);

        let cover = match strategy {
            Strategy::Greedy => graph.greedy_cover(),
            Strategy::Grasp => {
                let mut grasp = Grasp::new().alpha(cli.alpha);
                if let Some(iterations) = cli.iterations {
                    grasp = grasp.iterations(iterations as usize);
                }
                grasp.solve(&graph, rng)
            }
            Strategy::Reactive => {
                let mut reactive = ReactiveGrasp::new().alphas(cli.alphas as usize);
                if let Some(iterations) = cli.iterations {
                    reactive = reactive.iterations(iterations as usize);
                }
                reactive.solve(&graph, rng)
            }
        };
        debug_assert!(graph.verify_cover(&cover));

        println!("Cover size: {}", cover.len());
        println!(
            "Cover vertices: {}",
            cover.iter().sorted().map(|u| u + 1).join(" ")
        );
    }

    if let Some(ids) = &cli.distance {
        let (from, to) = (
            node_from_arg(&graph, ids[0]).context("invalid origin")?,
            node_from_arg(&graph, ids[1]).context("invalid destination")?,
        );
        match graph.shortest_distance(from, to) {
            Some(distance) => println!("Distance {} -> {}: {distance}", ids[0], ids[1]),
            None => println!("Distance {} -> {}: -1", ids[0], ids[1]),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
