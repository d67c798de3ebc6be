use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::SolverError, node_index::NodeIndex, weight::Weight};

/// Dense n×n adjacency matrix stored as a flat row-major vector.
/// The weight of the edge `from -> to` lives at `from * node_count + to`.
///
/// A weight of zero means "no edge". Symmetry is not required, directed
/// graphs simply have `weight(a, b) != weight(b, a)`.
///
/// Shape and weights are validated on construction, so an existing matrix is
/// always square, non-empty and free of negative weights.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W: Weight> {
    weights: Vec<W>,
    node_count: usize,
}

impl<W: Weight> AdjacencyMatrix<W> {
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, SolverError> {
        validate_rows(&rows)?;

        let node_count = rows.len();
        Ok(AdjacencyMatrix {
            weights: rows.into_iter().flatten().collect(),
            node_count,
        })
    }

    /// Builds a matrix from an edge list. When `undirected` is set, every edge
    /// is written in both directions. Later edges overwrite earlier ones.
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize, W)],
        undirected: bool,
    ) -> Result<Self, SolverError> {
        if node_count == 0 {
            return Err(SolverError::EmptyMatrix);
        }

        let mut weights = vec![W::ZERO; node_count * node_count];

        for &(from, to, weight) in edges {
            if from >= node_count || to >= node_count {
                return Err(SolverError::EdgeOutOfRange {
                    from,
                    to,
                    node_count,
                });
            }

            if weight.is_negative_or_nan() {
                return Err(SolverError::NegativeWeight {
                    row: from,
                    column: to,
                });
            }

            weights[from * node_count + to] = weight;
            if undirected {
                weights[to * node_count + from] = weight;
            }
        }

        Ok(AdjacencyMatrix {
            weights,
            node_count,
        })
    }

    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline(always)]
    fn index(&self, from: NodeIndex, to: NodeIndex) -> usize {
        from.get() * self.node_count + to.get()
    }

    #[inline(always)]
    pub fn weight(&self, from: NodeIndex, to: NodeIndex) -> W {
        self.weights[self.index(from, to)]
    }

    #[inline(always)]
    pub fn row(&self, from: NodeIndex) -> &[W] {
        let start = from.get() * self.node_count;
        &self.weights[start..start + self.node_count]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[W]> {
        self.weights.chunks_exact(self.node_count)
    }

    /// Outgoing edges of `from`, skipping the zero "no edge" entries.
    pub fn neighbours(&self, from: NodeIndex) -> impl Iterator<Item = (NodeIndex, W)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|(_, weight)| weight.is_edge())
            .map(|(to, &weight)| (NodeIndex::new(to), weight))
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.node_count;
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[i * n + j] == self.weights[j * n + i]))
    }
}

pub(crate) fn validate_rows<W: Weight>(rows: &[Vec<W>]) -> Result<(), SolverError> {
    let expected = rows.len();
    if expected == 0 {
        return Err(SolverError::EmptyMatrix);
    }

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(SolverError::NotSquare {
                row: row_index,
                expected,
                actual: row.len(),
            });
        }

        if let Some(column) = row.iter().position(|weight| weight.is_negative_or_nan()) {
            return Err(SolverError::NegativeWeight {
                row: row_index,
                column,
            });
        }
    }

    Ok(())
}

impl<W: Weight> TryFrom<Vec<Vec<W>>> for AdjacencyMatrix<W> {
    type Error = SolverError;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self, Self::Error> {
        AdjacencyMatrix::from_rows(rows)
    }
}

impl<W: Weight + Serialize> Serialize for AdjacencyMatrix<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, W: Weight + Deserialize<'de>> Deserialize<'de> for AdjacencyMatrix<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<W>>::deserialize(deserializer)?;
        AdjacencyMatrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
