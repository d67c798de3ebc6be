use std::{fmt::Display, fs::File, io::BufReader, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use hermes_sssp::{AdjacencyMatrix, Weight};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum WeightKind {
    /// Unsigned integers, unreachable nodes saturate at u64::MAX
    #[default]
    Int,
    /// Floating point numbers, unreachable nodes are infinite
    Float,
}

/// Weight types the command line can read and print.
pub trait CliWeight: Weight + DeserializeOwned + Serialize + Display {}

impl<W: Weight + DeserializeOwned + Serialize + Display> CliWeight for W {}

/// Reads a JSON array of rows, e.g. `[[0, 2], [2, 0]]`.
pub fn read_matrix<W: CliWeight>(path: &Path) -> anyhow::Result<AdjacencyMatrix<W>> {
    let f = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let matrix: AdjacencyMatrix<W> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("Invalid adjacency matrix in {}", path.display()))?;

    debug!(
        "Read {}x{} matrix from {}",
        matrix.node_count(),
        matrix.node_count(),
        path.display()
    );

    Ok(matrix)
}
