use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::{FifoQueue, VisitSet, Visitor};

/// Breadth-first traversal over an injected FIFO queue.
///
/// Nodes are marked visited and recorded when enqueued, not when dequeued.
/// Since the queue hands items back in enqueue order, the reported order is
/// the breadth-first visitation order with ties broken by edge insertion
/// order.
///
/// The queue is a capability: any [`FifoQueue`] implementation can be
/// supplied through [`Bfs::with_queue`] in place of the default
/// [`VecDeque`].
pub struct Bfs<G, Q = VecDeque<<G as GraphBase>::Node>>
where
    G: GraphBase,
    Q: FifoQueue<G::Node>,
{
    queue: Q,
    visited: FxHashSet<G::Node>,
}

/// [`Bfs`] visitor started from a root.
pub struct BfsRooted<'a, G, Q>
where
    G: GraphBase,
    Q: FifoQueue<G::Node>,
{
    queue: &'a mut Q,
    visited: &'a mut FxHashSet<G::Node>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self::with_queue(graph, VecDeque::new())
    }
}

impl<G, Q> Bfs<G, Q>
where
    G: GraphBase,
    Q: FifoQueue<G::Node>,
{
    /// Creates the traversal with a custom queue implementation.
    pub fn with_queue(graph: &G, queue: Q) -> Self {
        let visited = match graph.node_count_hint() {
            Some(count) => {
                HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default())
            }
            None => FxHashSet::default(),
        };

        Self { queue, visited }
    }

    /// Starts the traversal from the root.
    ///
    /// Any state left over from a previous run, including items still waiting
    /// in the queue, is discarded first.
    pub fn start(&mut self, root: G::Node) -> BfsRooted<'_, G, Q> {
        self.queue.clear();
        self.visited.reset_visited();

        self.visited.visit(root.clone());
        self.queue.enqueue(root);

        BfsRooted {
            queue: &mut self.queue,
            visited: &mut self.visited,
        }
    }

    /// Set of nodes visited so far.
    pub fn visited(&self) -> &impl VisitSet<G::Node> {
        &self.visited
    }
}

impl<G, Q> Visitor<G> for BfsRooted<'_, G, Q>
where
    G: Neighbors,
    Q: FifoQueue<G::Node>,
{
    type Item = G::Node;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;

        for neighbor in graph.neighbors(&node) {
            if self.visited.visit(neighbor.clone()) {
                self.queue.enqueue(neighbor.clone());
            }
        }

        Some(node)
    }
}
