use rayon::prelude::*;
use serde::{Serialize, ser::SerializeStruct};
use tracing::info;

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    dijkstra::DenseDijkstra,
    distances::Distances,
    error::SolverError,
    node_index::NodeIndex,
    stopwatch::Stopwatch,
    weight::Weight,
};

/// Distances from a set of sources to every node of the graph.
///
/// Rows follow the order of `sources`, stored flat: the distance from the
/// i-th source to `target` lives at `i * node_count + target`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<W: Weight> {
    sources: Vec<NodeIndex>,
    node_count: usize,
    distances: Vec<W>,
}

impl<W: Weight> DistanceTable<W> {
    /// One row per node of the graph.
    pub fn all_pairs(graph: &AdjacencyMatrix<W>) -> Self {
        let sources: Vec<NodeIndex> = (0..graph.node_count()).map(NodeIndex::new).collect();

        Self::compute(graph, sources)
    }

    pub fn from_sources(
        graph: &AdjacencyMatrix<W>,
        sources: &[NodeIndex],
    ) -> Result<Self, SolverError> {
        let node_count = graph.node_count();
        if let Some(source) = sources.iter().find(|source| source.get() >= node_count) {
            return Err(SolverError::StartOutOfRange {
                start: source.get(),
                node_count,
            });
        }

        Ok(Self::compute(graph, sources.to_vec()))
    }

    /// Sources must be in range.
    fn compute(graph: &AdjacencyMatrix<W>, sources: Vec<NodeIndex>) -> Self {
        let stopwatch = Stopwatch::new("distance_table/compute");
        let node_count = graph.node_count();

        let rows: Vec<Distances<W>> = sources
            .par_iter()
            .map_init(
                || DenseDijkstra::with_capacity(node_count),
                |dijkstra, &source| dijkstra.run(graph, source).distances,
            )
            .collect();

        let distances: Vec<W> = rows.into_iter().flat_map(Distances::into_vec).collect();

        info!(
            "Computed distance table for {} sources over {} nodes in {:?}",
            sources.len(),
            node_count,
            stopwatch.elapsed()
        );

        DistanceTable {
            sources,
            node_count,
            distances,
        }
    }

    pub fn sources(&self) -> &[NodeIndex] {
        &self.sources
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    fn source_row(&self, source: NodeIndex) -> Option<usize> {
        self.sources.iter().position(|&s| s == source)
    }

    /// Distances from `source`, or `None` if it is not one of the table's sources.
    pub fn row(&self, source: NodeIndex) -> Option<&[W]> {
        self.source_row(source).map(|row| {
            let start = row * self.node_count;
            &self.distances[start..start + self.node_count]
        })
    }

    /// `None` when `target` is unreachable, or when either node is not part of the table.
    pub fn distance(&self, source: NodeIndex, target: NodeIndex) -> Option<W> {
        self.row(source)?
            .get(target.get())
            .copied()
            .filter(|distance| !distance.is_infinite())
    }

    pub fn rows(&self) -> impl Iterator<Item = (NodeIndex, &[W])> {
        self.sources
            .iter()
            .copied()
            .zip(self.distances.chunks_exact(self.node_count))
    }

    /// Checks `d(a, b) == d(b, a)` for every pair of sources.
    pub fn is_symmetric(&self) -> bool {
        self.sources.iter().all(|&a| {
            self.sources.iter().all(|&b| {
                let forward = self.row(a).map(|row| row[b.get()]);
                let backward = self.row(b).map(|row| row[a.get()]);
                forward == backward
            })
        })
    }
}

impl<W: Weight + Serialize> Serialize for DistanceTable<W> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<Option<W>>> = self
            .rows()
            .map(|(_, row)| {
                row.iter()
                    .map(|&d| (!d.is_infinite()).then_some(d))
                    .collect()
            })
            .collect();

        let mut state = serializer.serialize_struct("DistanceTable", 2)?;
        state.serialize_field("sources", &self.sources)?;
        state.serialize_field("distances", &rows)?;
        state.end()
    }
}
