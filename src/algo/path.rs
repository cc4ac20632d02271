//! Path discovery between nodes.
//!
//! [`find_path`] runs a depth-first search and returns some path (the path
//! along the depth-first tree, not necessarily the shortest one).
//! [`find_shortest_path`] runs a breadth-first search and returns a path
//! with the minimum number of edges. Both validate their endpoints up front
//! and report the first missing one; an unreachable end is an absent result,
//! not an error.
//!
//! # Examples
//!
//! ```
//! use bondgraph::{algo::find_shortest_path, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new_undirected();
//!
//! for node in ["a", "b", "c", "d"] {
//!     graph.add_node(node);
//! }
//!
//! graph.add_edge("a", "b", None).unwrap();
//! graph.add_edge("b", "c", None).unwrap();
//! graph.add_edge("c", "d", None).unwrap();
//! graph.add_edge("d", "a", None).unwrap();
//!
//! let path = find_shortest_path(&graph, &"a", Some(&"c")).unwrap();
//! assert_eq!(path, Some(vec!["a", "b", "c"]));
//! ```

use std::{collections::VecDeque, hash::Hash};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{Neighbors, NodeNotFoundError, NodeSet},
    visit::{Bfs, Dfs, FifoQueue, VisitSet, Visitor},
};

/// Finds a path from `start` to `end` using depth-first search.
///
/// The returned path starts with `start` and ends with `end`; it is the path
/// along the depth-first tree and is not guaranteed to be the shortest.
/// `Ok(None)` means `end` is not reachable.
///
/// When `end` is `None` there is no target to miss: the result is always
/// `Ok(Some(..))` holding the full depth-first visitation order of the
/// component reachable from `start`, symmetric with
/// [`find_shortest_path`]. A search without a target never reports the
/// absence of a path.
pub fn find_path<G>(
    graph: &G,
    start: &G::Node,
    end: Option<&G::Node>,
) -> Result<Option<Vec<G::Node>>, NodeNotFoundError<G::Node>>
where
    G: Neighbors + NodeSet,
{
    graph.validate_endpoints(start, end)?;

    let Some(end) = end else {
        let order = Dfs::new(graph)
            .start(start.clone())
            .into_iter(graph)
            .collect();
        return Ok(Some(order));
    };

    Ok(dfs_path(graph, start, end))
}

/// Finds a path with the minimum number of edges from `start` to `end` using
/// breadth-first search.
///
/// Same contract as [`find_path`], including the `end = None` case: the
/// full breadth-first visitation order of the reachable component, never
/// `Ok(None)`.
pub fn find_shortest_path<G>(
    graph: &G,
    start: &G::Node,
    end: Option<&G::Node>,
) -> Result<Option<Vec<G::Node>>, NodeNotFoundError<G::Node>>
where
    G: Neighbors + NodeSet,
{
    find_shortest_path_with(graph, start, end, VecDeque::new())
}

/// [`find_shortest_path`] with an explicitly supplied FIFO queue.
///
/// The queue is cleared before use, so a previously used queue can be
/// injected safely.
pub fn find_shortest_path_with<G, Q>(
    graph: &G,
    start: &G::Node,
    end: Option<&G::Node>,
    queue: Q,
) -> Result<Option<Vec<G::Node>>, NodeNotFoundError<G::Node>>
where
    G: Neighbors + NodeSet,
    Q: FifoQueue<G::Node>,
{
    graph.validate_endpoints(start, end)?;

    let Some(end) = end else {
        let order = Bfs::with_queue(graph, queue)
            .start(start.clone())
            .into_iter(graph)
            .collect();
        return Ok(Some(order));
    };

    Ok(bfs_path(graph, start, end, queue))
}

fn dfs_path<G>(graph: &G, start: &G::Node, end: &G::Node) -> Option<Vec<G::Node>>
where
    G: Neighbors,
{
    let mut visited = FxHashSet::default();
    let mut pred: FxHashMap<G::Node, G::Node> = FxHashMap::default();
    let mut stack = vec![(start.clone(), None)];

    while let Some((node, parent)) = stack.pop() {
        // Only the pop that first visits the node defines its tree parent;
        // stale stack entries are skipped.
        if !visited.visit(node.clone()) {
            continue;
        }

        if let Some(parent) = parent {
            pred.insert(node.clone(), parent);
        }

        if &node == end {
            return Some(reconstruct(&pred, start, end));
        }

        for neighbor in graph.neighbors(&node).rev() {
            if !visited.is_visited(neighbor) {
                stack.push((neighbor.clone(), Some(node.clone())));
            }
        }
    }

    None
}

fn bfs_path<G, Q>(graph: &G, start: &G::Node, end: &G::Node, mut queue: Q) -> Option<Vec<G::Node>>
where
    G: Neighbors,
    Q: FifoQueue<G::Node>,
{
    let mut visited = FxHashSet::default();
    let mut pred: FxHashMap<G::Node, G::Node> = FxHashMap::default();

    queue.clear();
    visited.visit(start.clone());
    queue.enqueue(start.clone());

    while let Some(node) = queue.dequeue() {
        if &node == end {
            // Anything still waiting in the queue is abandoned.
            return Some(reconstruct(&pred, start, end));
        }

        for neighbor in graph.neighbors(&node) {
            if visited.visit(neighbor.clone()) {
                pred.insert(neighbor.clone(), node.clone());
                queue.enqueue(neighbor.clone());
            }
        }
    }

    None
}

fn reconstruct<N>(pred: &FxHashMap<N, N>, start: &N, end: &N) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        current = &pred[current];
        path.push(current.clone());
    }

    path.reverse();
    path
}
