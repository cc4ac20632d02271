use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// A set of visited nodes.
pub trait VisitSet<N> {
    /// Marks the node as visited.
    ///
    /// Returns `true` when this is the first time the node is visited.
    fn visit(&mut self, node: N) -> bool;

    /// Returns `true` if the node is marked as visited.
    fn is_visited(&self, node: &N) -> bool;

    /// Returns the number of visited nodes.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited nodes to be empty.
    fn reset_visited(&mut self);
}

impl<N: Ord> VisitSet<N> for BTreeSet<N> {
    fn visit(&mut self, node: N) -> bool {
        self.insert(node)
    }

    fn is_visited(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<N: Eq + Hash, S: BuildHasher> VisitSet<N> for HashSet<N, S> {
    fn visit(&mut self, node: N) -> bool {
        self.insert(node)
    }

    fn is_visited(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
