use std::time::Duration;

use crate::{
    adjacency_matrix::AdjacencyMatrix, distances::Distances, error::SolverError,
    node_index::NodeIndex, weight::Weight,
};

pub struct ShortestPathResult<W: Weight> {
    pub distances: Distances<W>,
    /// Nodes whose distance was finalized before the search stopped.
    pub settled_nodes: usize,
    /// Relaxations that lowered a tentative distance.
    pub relaxations: usize,
    pub duration: Duration,
}

pub trait ShortestPathAlgorithm<W: Weight> {
    fn calc_distances(
        &mut self,
        graph: &AdjacencyMatrix<W>,
        start: NodeIndex,
    ) -> Result<ShortestPathResult<W>, SolverError>;
}
