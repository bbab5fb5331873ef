//! Runs one of the traced algorithms on a graph given on the command line and
//! prints every snapshot.
//!
//! Edges are written `a-b` for an undirected edge or `a>b` for a directed one.
//! All edges of one invocation must use the same separator.  Quote directed
//! edges so the shell does not read `>` as a redirection.
//!
//! ```text
//! cargo run --example trace_walk -- euler-path 1-2 2-3 3-1
//! cargo run --example trace_walk -- hamiltonian-path '1>2' '2>3' '3>4'
//! ```

use std::{error::Error, process::ExitCode};

use clap::Parser;
use stepgraph::{Algorithm, Directedness, Snapshot, Workbench, tracing_support};

/// Replay a graph algorithm step by step
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run (euler-path, hamiltonian-cycle or hamiltonian-path)
    algorithm: Algorithm,

    /// Edges such as `1-2` (undirected) or '2>3' (directed, quoted)
    edges: Vec<String>,

    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Print per-algorithm span timings at the end
    #[arg(long)]
    timings: bool,
}

fn parse_edge(token: &str) -> Result<(u32, u32, Directedness), String> {
    let (separator, directedness) = if token.contains('>') {
        ('>', Directedness::Directed)
    } else {
        ('-', Directedness::Undirected)
    };
    let (a, b) = token
        .split_once(separator)
        .ok_or_else(|| format!("malformed edge {token:?}"))?;
    let parse = |label: &str| {
        label
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("bad node label {label:?} in edge {token:?}"))
    };
    Ok((parse(a)?, parse(b)?, directedness))
}

fn build_workbench(args: &Args) -> Result<Workbench, Box<dyn Error>> {
    let edges = args
        .edges
        .iter()
        .map(|token| parse_edge(token))
        .collect::<Result<Vec<_>, _>>()?;

    let directedness = edges
        .first()
        .map_or(Directedness::Undirected, |&(_, _, directedness)| directedness);
    if edges.iter().any(|&(_, _, d)| d != directedness) {
        return Err("cannot mix `-` and `>` edges in one graph".into());
    }

    let highest = edges
        .iter()
        .flat_map(|&(a, b, _)| [a, b])
        .max()
        .unwrap_or(0);

    let mut bench = Workbench::new(directedness);
    while bench.nodes().count() < highest as usize {
        bench.add_node();
    }
    for (a, b, _) in edges {
        if !bench.add_edge(a, b)? {
            eprintln!("ignoring edge {a}-{b}: loop or duplicate");
        }
    }
    Ok(bench)
}

fn join<T>(items: impl IntoIterator<Item = T>, render: impl Fn(T) -> String) -> String {
    items.into_iter().map(render).collect::<Vec<_>>().join(" ")
}

fn describe(step: usize, snapshot: &Snapshot<u32>) -> String {
    let node = |n: &u32| n.to_string();
    let edge = |(a, b): &(u32, u32)| format!("{a}>{b}");
    format!(
        "#{step:<4} frontier [{}] active [{}] confirmed [{}]\n      \
         active edges [{}] confirmed edges [{}]",
        join(&snapshot.frontier, node),
        join(&snapshot.active, node),
        join(&snapshot.confirmed, node),
        join(&snapshot.active_edges, edge),
        join(&snapshot.confirmed_edges, edge),
    )
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_support::init_tracing();

    let bench = build_workbench(&args)?;
    let run = bench.run(args.algorithm)?;

    if !args.quiet {
        for (step, snapshot) in run.trace().iter().enumerate() {
            println!("{}", describe(step, snapshot));
        }
    }
    println!("{}", run.summary());
    println!("{} snapshots in {:?}", run.trace().len(), run.elapsed());

    if args.timings {
        for (name, timing) in tracing_support::algorithm_timings() {
            println!("{name}: {:?} over {} call(s)", timing.total, timing.count);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
