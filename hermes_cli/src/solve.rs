use std::path::PathBuf;

use clap::Args;
use hermes_sssp::{DenseDijkstra, NodeIndex, ShortestPathAlgorithm};
use tracing::info;

use crate::{
    input::{CliWeight, WeightKind, read_matrix},
    output::distances_table,
};

#[derive(Args)]
pub struct SolveArgs {
    /// JSON file holding the adjacency matrix as an array of rows
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Start node index
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    #[arg(short, long, value_enum, default_value_t = WeightKind::Int)]
    weights: WeightKind,

    /// Print the distances as JSON, unreachable nodes as null
    #[arg(long)]
    json: bool,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    match args.weights {
        WeightKind::Int => solve_with::<u64>(&args),
        WeightKind::Float => solve_with::<f64>(&args),
    }
}

fn solve_with<W: CliWeight>(args: &SolveArgs) -> anyhow::Result<()> {
    let graph = read_matrix::<W>(&args.input)?;

    let mut dijkstra = DenseDijkstra::with_capacity(graph.node_count());
    let result = dijkstra.calc_distances(&graph, NodeIndex::new(args.start))?;

    info!(
        "Reached {}/{} nodes from {} in {:?}",
        result.distances.reachable_count(),
        graph.node_count(),
        args.start,
        result.duration
    );

    if args.json {
        println!("{}", serde_json::to_string(&result.distances)?);
    } else {
        println!("{}", distances_table(&result.distances));
    }

    Ok(())
}
