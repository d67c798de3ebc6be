use serde::{Deserialize, Serialize};

/// Position of a node in the adjacency matrix. Nodes carry no other identity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeIndex> for usize {
    fn from(index: NodeIndex) -> Self {
        index.0
    }
}

impl<T> std::ops::Index<NodeIndex> for Vec<T> {
    type Output = T;
    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self[index.0]
    }
}

impl<T> std::ops::IndexMut<NodeIndex> for Vec<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self[index.0]
    }
}

impl<T> std::ops::Index<NodeIndex> for [T] {
    type Output = T;
    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self[index.0]
    }
}

impl<T> std::ops::IndexMut<NodeIndex> for [T] {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self[index.0]
    }
}
