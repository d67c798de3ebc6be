use thiserror::Error;

/// Invalid input handed to the solver. Every variant is raised before any
/// distance is computed, so callers never see a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("adjacency matrix has no nodes")]
    EmptyMatrix,
    #[error("adjacency matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("negative or NaN weight at row {row}, column {column}")]
    NegativeWeight { row: usize, column: usize },
    #[error("start node {start} is out of range for a graph of {node_count} nodes")]
    StartOutOfRange { start: usize, node_count: usize },
    #[error("edge {from} -> {to} is out of range for a graph of {node_count} nodes")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },
}
