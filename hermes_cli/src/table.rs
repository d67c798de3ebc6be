use std::path::PathBuf;

use clap::Args;
use hermes_sssp::{DistanceTable, NodeIndex};

use crate::{
    input::{CliWeight, WeightKind, read_matrix},
    output::distance_matrix_table,
};

#[derive(Args)]
pub struct TableArgs {
    /// JSON file holding the adjacency matrix as an array of rows
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Comma separated start nodes, e.g. "0,3,4". Every node when omitted
    #[arg(short, long, value_delimiter = ',')]
    sources: Vec<usize>,

    #[arg(short, long, value_enum, default_value_t = WeightKind::Int)]
    weights: WeightKind,

    /// Print the table as JSON, unreachable nodes as null
    #[arg(long)]
    json: bool,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    match args.weights {
        WeightKind::Int => table_with::<u64>(&args),
        WeightKind::Float => table_with::<f64>(&args),
    }
}

fn table_with<W: CliWeight>(args: &TableArgs) -> anyhow::Result<()> {
    let graph = read_matrix::<W>(&args.input)?;

    let table = if args.sources.is_empty() {
        DistanceTable::all_pairs(&graph)
    } else {
        let sources: Vec<NodeIndex> = args.sources.iter().copied().map(NodeIndex::new).collect();
        DistanceTable::from_sources(&graph, &sources)?
    };

    if args.json {
        println!("{}", serde_json::to_string(&table)?);
    } else {
        println!("{}", distance_matrix_table(&table));
    }

    Ok(())
}
