use tracing::{debug, trace};

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    distances::Distances,
    error::SolverError,
    node_index::NodeIndex,
    shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathResult},
    stopwatch::Stopwatch,
    weight::Weight,
};

/// Array based Dijkstra for dense graphs, O(n²) with no priority queue.
///
/// Every iteration scans all unsettled nodes for the smallest tentative
/// distance, settles it and relaxes its outgoing edges. Working buffers are
/// kept between calls so one instance can serve many queries on graphs of
/// similar size.
pub struct DenseDijkstra<W: Weight> {
    distances: Vec<W>,
    settled: Vec<bool>,
}

impl<W: Weight> Default for DenseDijkstra<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> DenseDijkstra<W> {
    pub fn new() -> Self {
        DenseDijkstra {
            distances: Vec::new(),
            settled: Vec::new(),
        }
    }

    pub fn with_capacity(node_count: usize) -> Self {
        DenseDijkstra {
            distances: Vec::with_capacity(node_count),
            settled: Vec::with_capacity(node_count),
        }
    }

    fn init(&mut self, node_count: usize, start: NodeIndex) {
        self.distances.clear();
        self.distances.resize(node_count, W::INFINITY);
        self.settled.clear();
        self.settled.resize(node_count, false);

        self.distances[start] = W::ZERO;
    }

    /// Lowest tentative distance among unsettled nodes. The strict comparison
    /// keeps the first minimum found, so the lowest index wins ties.
    fn min_unsettled(&self) -> Option<NodeIndex> {
        let mut min_index: Option<usize> = None;

        for (node, &distance) in self.distances.iter().enumerate() {
            if self.settled[node] {
                continue;
            }

            match min_index {
                Some(current) if distance >= self.distances[current] => {}
                _ => min_index = Some(node),
            }
        }

        min_index.map(NodeIndex::new)
    }

    fn relax(&mut self, graph: &AdjacencyMatrix<W>, node: NodeIndex) -> usize {
        let base = self.distances[node];
        let mut relaxations = 0;

        for (adj_node, edge_weight) in graph.neighbours(node) {
            let candidate = base.add_weight(edge_weight);
            if candidate < self.distances[adj_node] {
                self.distances[adj_node] = candidate;
                relaxations += 1;
            }
        }

        relaxations
    }
}

impl<W: Weight> ShortestPathAlgorithm<W> for DenseDijkstra<W> {
    fn calc_distances(
        &mut self,
        graph: &AdjacencyMatrix<W>,
        start: NodeIndex,
    ) -> Result<ShortestPathResult<W>, SolverError> {
        let node_count = graph.node_count();
        if start.get() >= node_count {
            return Err(SolverError::StartOutOfRange {
                start: start.get(),
                node_count,
            });
        }

        Ok(self.run(graph, start))
    }
}

impl<W: Weight> DenseDijkstra<W> {
    /// `start` must already be checked against the graph size.
    pub(crate) fn run(&mut self, graph: &AdjacencyMatrix<W>, start: NodeIndex) -> ShortestPathResult<W> {
        let stopwatch = Stopwatch::new("dense_dijkstra/run");
        let node_count = graph.node_count();
        self.init(node_count, start);

        let mut settled_nodes = 0;
        let mut relaxations = 0;

        while let Some(node) = self.min_unsettled() {
            if self.distances[node].is_infinite() {
                trace!(
                    "Dijkstra: {} nodes unreachable from {}",
                    node_count - settled_nodes,
                    start
                );
                break;
            }

            self.settled[node] = true;
            settled_nodes += 1;

            relaxations += self.relax(graph, node);
        }

        debug!(
            "Dijkstra from {}: settled {}/{} nodes, {} relaxations",
            start, settled_nodes, node_count, relaxations
        );
        stopwatch.report();

        ShortestPathResult {
            distances: Distances::new(self.distances.clone()),
            settled_nodes,
            relaxations,
            duration: stopwatch.elapsed(),
        }
    }
}

/// Shortest distances from `start` to every node of `graph`.
pub fn solve<W: Weight>(
    graph: &AdjacencyMatrix<W>,
    start: NodeIndex,
) -> Result<Distances<W>, SolverError> {
    let mut dijkstra = DenseDijkstra::with_capacity(graph.node_count());
    dijkstra
        .calc_distances(graph, start)
        .map(|result| result.distances)
}

/// Same as [`solve`] on raw rows. Ragged rows and negative weights are
/// rejected before anything is computed.
pub fn solve_rows<W: Weight>(rows: &[Vec<W>], start: usize) -> Result<Distances<W>, SolverError> {
    let graph = AdjacencyMatrix::from_rows(rows.to_vec())?;
    solve(&graph, NodeIndex::new(start))
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use crate::test_utils::test_graph::{
        brute_force_distances, disconnected_graph, random_graph, reference_graph,
    };

    use super::*;

    #[test]
    fn test_reference_graph_from_first_node() {
        let graph = reference_graph();
        let distances = solve(&graph, NodeIndex::new(0)).unwrap();

        assert_eq!(distances.as_slice(), &[0, 2, 5, 1, 6]);
    }

    #[test]
    fn test_reference_graph_from_last_node() {
        let graph = reference_graph();
        let distances = solve(&graph, NodeIndex::new(4)).unwrap();

        assert_eq!(distances.as_slice(), &[6, 8, 9, 5, 0]);
    }

    #[test]
    fn test_solve_rows() {
        let rows = vec![
            vec![0, 2, 0, 1, 0],
            vec![2, 0, 3, 0, 0],
            vec![0, 3, 0, 4, 0],
            vec![1, 0, 4, 0, 5],
            vec![0, 0, 0, 5, 0],
        ];

        let distances = solve_rows(&rows, 0).unwrap();
        assert_eq!(distances.into_vec(), vec![0, 2, 5, 1, 6]);
    }

    #[test]
    fn test_single_node() {
        let distances = solve_rows(&[vec![0u32]], 0).unwrap();
        assert_eq!(distances.into_vec(), vec![0]);
    }

    #[test]
    fn test_disconnected_components() {
        let graph = disconnected_graph();
        let distances = solve(&graph, NodeIndex::new(0)).unwrap();

        assert_eq!(distances.as_slice(), &[0, 3, 4, u32::MAX, u32::MAX, u32::MAX]);
        assert_eq!(distances.reachable_count(), 3);
        assert!(!distances.is_reachable(NodeIndex::new(4)));

        let distances = solve(&graph, NodeIndex::new(5)).unwrap();
        assert_eq!(distances.as_slice(), &[u32::MAX, u32::MAX, u32::MAX, 2, 7, 0]);
    }

    #[test]
    fn test_stops_early_when_rest_is_unreachable() {
        let graph = disconnected_graph();
        let mut dijkstra = DenseDijkstra::<u32>::new();

        let result = dijkstra.calc_distances(&graph, NodeIndex::new(1)).unwrap();
        assert_eq!(result.settled_nodes, 3);
    }

    #[test]
    fn test_directed_graph() {
        // 0 -> 1 -> 2 with a shortcut 0 -> 2 and a 2 -> 0 back edge
        let graph = AdjacencyMatrix::from_rows(vec![
            vec![0, 1, 10],
            vec![0, 0, 2],
            vec![7, 0, 0],
        ])
        .unwrap();

        assert_eq!(solve(&graph, NodeIndex::new(0)).unwrap().as_slice(), &[0, 1, 3]);
        assert_eq!(solve(&graph, NodeIndex::new(1)).unwrap().as_slice(), &[9, 0, 2]);
        assert_eq!(solve(&graph, NodeIndex::new(2)).unwrap().as_slice(), &[7, 8, 0]);
    }

    #[test]
    fn test_float_weights() {
        let graph = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 0.5, 2.0],
            vec![0.5, 0.0, 0.25],
            vec![2.0, 0.25, 0.0],
        ])
        .unwrap();

        let distances = solve(&graph, NodeIndex::new(0)).unwrap();
        assert_eq!(distances.as_slice(), &[0.0, 0.5, 0.75]);
    }

    #[test]
    fn test_float_unreachable_is_infinity() {
        let graph = AdjacencyMatrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();

        let distances = solve(&graph, NodeIndex::new(1)).unwrap();
        assert!(distances[0].is_infinite());
        assert_eq!(distances[1], 0.0);
    }

    #[test]
    fn test_integer_overflow_saturates() {
        let big = u32::MAX - 1;
        let graph =
            AdjacencyMatrix::from_rows(vec![vec![0, big, 0], vec![big, 0, big], vec![0, big, 0]])
                .unwrap();

        let distances = solve(&graph, NodeIndex::new(0)).unwrap();
        assert_eq!(distances[1], big);
        assert_eq!(distances[2], u32::MAX);
        assert!(!distances.is_reachable(NodeIndex::new(2)));
    }

    #[test]
    fn test_self_loops_are_ignored() {
        let graph = AdjacencyMatrix::from_rows(vec![vec![4, 1], vec![1, 9]]).unwrap();
        let distances = solve(&graph, NodeIndex::new(0)).unwrap();

        assert_eq!(distances.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = reference_graph();
        let result = solve(&graph, NodeIndex::new(5));

        assert_eq!(
            result,
            Err(SolverError::StartOutOfRange {
                start: 5,
                node_count: 5
            })
        );
    }

    #[test]
    fn test_invalid_rows_are_rejected() {
        let ragged = solve_rows(&[vec![0, 1], vec![1]], 0);
        assert!(matches!(ragged, Err(SolverError::NotSquare { row: 1, .. })));

        let negative = solve_rows(&[vec![0, -1], vec![1, 0]], 0);
        assert_eq!(negative, Err(SolverError::NegativeWeight { row: 0, column: 1 }));

        let empty = solve_rows::<u32>(&[], 0);
        assert_eq!(empty, Err(SolverError::EmptyMatrix));
    }

    #[test]
    fn test_idempotent_with_reused_buffers() {
        let graph = reference_graph();
        let mut dijkstra = DenseDijkstra::<u32>::new();

        let first = dijkstra.calc_distances(&graph, NodeIndex::new(2)).unwrap();
        let other = dijkstra.calc_distances(&graph, NodeIndex::new(4)).unwrap();
        let second = dijkstra.calc_distances(&graph, NodeIndex::new(2)).unwrap();

        assert_eq!(first.distances, second.distances);
        assert_eq!(first.relaxations, second.relaxations);
        assert_ne!(first.distances, other.distances);
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..50 {
            let undirected = rng.random_bool(0.5);
            let graph = random_graph(&mut rng, 7, 0.35, 20, undirected);

            for start in 0..graph.node_count() {
                let distances = solve(&graph, NodeIndex::new(start)).unwrap();
                let expected = brute_force_distances(&graph, start);

                assert_eq!(distances.as_slice(), expected.as_slice());
                assert_eq!(distances[start], 0);
            }
        }
    }

    #[test]
    fn test_symmetric_graph_distances_are_symmetric() {
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 12, 0.3, 50, true);

        let all: Vec<_> = (0..graph.node_count())
            .map(|start| solve(&graph, NodeIndex::new(start)).unwrap())
            .collect();

        for a in 0..graph.node_count() {
            for b in 0..graph.node_count() {
                assert_eq!(all[a][b], all[b][a]);
            }
        }
    }
}
