//! Graph traversal visitors.
//!
//! Both traversals are **iterative** and keep their state detached from the
//! graph: a visitor borrows the graph only while advancing, never across
//! steps, so it can be passed around without lifetime problems. All state is
//! owned by the visitor and discarded when a new traversal is started, which
//! makes shared read-only traversals of one graph safe.
//!
//! Unlike adjacency abstractions with unspecified neighbor order, the order
//! here is deterministic: neighbors are expanded in edge insertion order, and
//! [`Dfs`] reports nodes in exactly the order the recursive formulation of
//! depth-first search would.

pub mod bfs;
pub mod dfs;

mod queue;
mod visit_set;

#[doc(inline)]
pub use self::{bfs::Bfs, dfs::Dfs, queue::FifoQueue, visit_set::VisitSet};

/// A traversal step function over a graph.
pub trait Visitor<G> {
    /// The element produced by each step of the traversal.
    type Item;

    /// Advances the traversal and returns the next element.
    ///
    /// Unlike [`Iterator::next`], the graph is passed in on every step, so
    /// the visitor holds no reference to it in between.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Borrows the visitor as an [`Iterator`] over the given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Consumes the visitor into an [`Iterator`] over the given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<V, G> Iterator for Iter<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<V, G> Iterator for IntoIter<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{core::marker::Undirected, storage::AdjMap};

    use super::*;

    fn fixture() -> AdjMap<u32, i32, Undirected> {
        let mut graph = AdjMap::new();

        for node in 0..6 {
            graph.add_node(node);
        }

        graph.add_edge(0, 1, None).unwrap();
        graph.add_edge(1, 2, None).unwrap();
        graph.add_edge(1, 3, None).unwrap();
        graph.add_edge(1, 4, None).unwrap();
        graph.add_edge(2, 5, None).unwrap();
        graph.add_edge(5, 4, None).unwrap();

        graph
    }

    #[test]
    fn bfs_connected() {
        let graph = fixture();

        let nodes = Bfs::new(&graph).start(0).iter(&graph).collect::<Vec<_>>();

        assert_eq!(nodes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn dfs_connected() {
        let graph = fixture();

        let nodes = Dfs::new(&graph).start(0).iter(&graph).collect::<Vec<_>>();

        // The order the recursive formulation would produce: the whole branch
        // behind the earliest-inserted edge is exhausted before the next one.
        assert_eq!(nodes, vec![0, 1, 2, 5, 4, 3]);
    }

    #[test]
    fn dfs_disconnected() {
        let mut graph = fixture();

        graph.add_node(6);
        graph.add_node(7);
        graph.add_edge(6, 7, None).unwrap();

        let nodes = Dfs::new(&graph).start(6).iter(&graph).collect::<Vec<_>>();

        assert_eq!(nodes, vec![6, 7]);
    }

    #[test]
    fn bfs_restart_discards_previous_state() {
        let graph = fixture();
        let mut bfs = Bfs::new(&graph);

        // Abandon a traversal halfway, leaving items in the queue.
        let mut partial = bfs.start(0);
        partial.visit_next(&graph);
        partial.visit_next(&graph);

        let nodes = bfs.start(3).iter(&graph).collect::<Vec<_>>();

        assert_eq!(nodes, vec![3, 1, 0, 2, 4, 5]);
    }

    #[test]
    fn dfs_visited_covers_component() {
        let graph = fixture();
        let mut dfs = Dfs::new(&graph);

        for _ in dfs.start(0).iter(&graph) {}

        assert_eq!(dfs.visited().visited_count(), 6);
    }

    struct CountingQueue<T> {
        inner: VecDeque<T>,
        enqueued: usize,
    }

    // Not derived: the derive would require `T: Default`, which the
    // `FifoQueue<T>: Default` bound does not grant.
    impl<T> Default for CountingQueue<T> {
        fn default() -> Self {
            Self {
                inner: VecDeque::new(),
                enqueued: 0,
            }
        }
    }

    impl<T> FifoQueue<T> for CountingQueue<T> {
        fn enqueue(&mut self, item: T) {
            self.enqueued += 1;
            self.inner.push_back(item);
        }

        fn dequeue(&mut self) -> Option<T> {
            self.inner.pop_front()
        }

        fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }

        fn clear(&mut self) {
            self.inner.clear();
        }
    }

    #[test]
    fn bfs_with_substituted_queue() {
        let graph = fixture();

        let mut bfs = Bfs::with_queue(&graph, CountingQueue::default());
        let nodes = bfs.start(0).iter(&graph).collect::<Vec<_>>();

        assert_eq!(nodes, vec![0, 1, 2, 3, 4, 5]);
    }
}
