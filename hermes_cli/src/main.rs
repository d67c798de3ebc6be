use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{solve::SolveArgs, table::TableArgs};

mod input;
mod output;
mod solve;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest distances from one start node to every node
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Shortest distances from several start nodes (all of them by default)
    #[command(visible_alias = "t")]
    Table {
        #[command(flatten)]
        args: TableArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Solve { args }) => solve::run(args)?,
        Some(Commands::Table { args }) => table::run(args)?,
        None => {}
    }

    Ok(())
}
