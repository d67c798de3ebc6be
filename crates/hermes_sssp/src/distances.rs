use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::{node_index::NodeIndex, weight::Weight};

/// Distance vector from a single start node, in node index order.
/// Unreachable nodes hold `W::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distances<W: Weight> {
    values: Vec<W>,
}

impl<W: Weight> Distances<W> {
    pub(crate) fn new(values: Vec<W>) -> Self {
        Distances { values }
    }

    /// Returns `None` when the node is unreachable or out of range.
    pub fn distance(&self, node: NodeIndex) -> Option<W> {
        self.values
            .get(node.get())
            .copied()
            .filter(|distance| !distance.is_infinite())
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.distance(node).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.values.iter().filter(|d| !d.is_infinite()).count()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.values
            .iter()
            .map(|&distance| (!distance.is_infinite()).then_some(distance))
    }

    pub fn as_slice(&self) -> &[W] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<W> {
        self.values
    }
}

impl<W: Weight> Index<usize> for Distances<W> {
    type Output = W;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<W: Weight> Index<NodeIndex> for Distances<W> {
    type Output = W;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.values[index]
    }
}

/// Unreachable entries are written as `null`, JSON has no infinity.
impl<W: Weight + Serialize> Serialize for Distances<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
