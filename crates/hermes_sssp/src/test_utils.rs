#[cfg(test)]
pub mod test_graph {
    use rand::Rng;

    use crate::{adjacency_matrix::AdjacencyMatrix, node_index::NodeIndex};

    //      2       3
    //  0 ----- 1 ----- 2
    //  |               |
    //  | 1             | 4
    //  |               |
    //  3 --------------+
    //  |
    //  | 5
    //  |
    //  4
    pub fn reference_graph() -> AdjacencyMatrix<u32> {
        AdjacencyMatrix::from_rows(vec![
            vec![0, 2, 0, 1, 0],
            vec![2, 0, 3, 0, 0],
            vec![0, 3, 0, 4, 0],
            vec![1, 0, 4, 0, 5],
            vec![0, 0, 0, 5, 0],
        ])
        .unwrap()
    }

    /// Two triangles {0, 1, 2} and {3, 4, 5} with no edge between them.
    pub fn disconnected_graph() -> AdjacencyMatrix<u32> {
        AdjacencyMatrix::from_edges(
            6,
            &[
                (0, 1, 3),
                (1, 2, 1),
                (0, 2, 5),
                (3, 5, 2),
                (3, 4, 5),
                (4, 5, 9),
            ],
            true,
        )
        .unwrap()
    }

    pub fn random_graph(
        rng: &mut impl Rng,
        node_count: usize,
        density: f64,
        max_weight: u32,
        undirected: bool,
    ) -> AdjacencyMatrix<u32> {
        let mut edges = Vec::new();

        for from in 0..node_count {
            let first_to = if undirected { from + 1 } else { 0 };
            for to in first_to..node_count {
                if from != to && rng.random_bool(density) {
                    edges.push((from, to, rng.random_range(1..=max_weight)));
                }
            }
        }

        AdjacencyMatrix::from_edges(node_count, &edges, undirected).unwrap()
    }

    /// Ground truth by enumerating every simple path leaving `start`.
    /// Exponential, only meant for graphs of a handful of nodes.
    pub fn brute_force_distances(graph: &AdjacencyMatrix<u32>, start: usize) -> Vec<u32> {
        let mut best = vec![u32::MAX; graph.node_count()];
        let mut on_path = vec![false; graph.node_count()];

        fn walk(
            graph: &AdjacencyMatrix<u32>,
            node: usize,
            cost: u32,
            on_path: &mut [bool],
            best: &mut [u32],
        ) {
            best[node] = best[node].min(cost);
            on_path[node] = true;

            for (adj_node, weight) in graph.neighbours(NodeIndex::new(node)) {
                if !on_path[adj_node.get()] {
                    walk(graph, adj_node.get(), cost + weight, on_path, best);
                }
            }

            on_path[node] = false;
        }

        walk(graph, start, 0, &mut on_path, &mut best);
        best
    }
}
