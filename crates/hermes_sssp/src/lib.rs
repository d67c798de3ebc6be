pub mod adjacency_matrix;
pub mod dijkstra;
pub mod distance_table;
pub mod distances;
pub mod error;
pub mod node_index;
pub mod shortest_path_algorithm;
mod stopwatch;
pub mod weight;

mod test_utils;

pub use adjacency_matrix::AdjacencyMatrix;
pub use dijkstra::{DenseDijkstra, solve, solve_rows};
pub use distance_table::DistanceTable;
pub use distances::Distances;
pub use error::SolverError;
pub use node_index::NodeIndex;
pub use shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathResult};
pub use weight::Weight;
