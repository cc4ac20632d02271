//! Cycle detection in undirected graphs.
//!
//! A cycle exists when depth-first search encounters an already visited
//! neighbor that is not the parent it arrived from. The parent exclusion is
//! what makes this correct for undirected graphs, where every edge is
//! recorded in both directions; it is also why this check is restricted to
//! undirected edge policies.

use rustc_hash::FxHashSet;

use crate::{
    core::{marker::Undirected, GraphBase, Neighbors, NodeSet},
    visit::VisitSet,
};

/// Returns `true` if the graph contains a cycle.
///
/// All components are searched, so a cycle is found no matter which component
/// it lives in. A self-loop is a cycle, and so is a second edge between the
/// same pair of nodes.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + NodeSet + GraphBase<Policy = Undirected>,
{
    let mut visited = FxHashSet::default();

    for root in graph.nodes() {
        if visited.is_visited(root) {
            continue;
        }

        visited.visit(root.clone());

        // One frame per node on the current search path, holding its
        // remaining edge records. Records must be examined lazily: a
        // parallel edge is only recognizable as a back edge once the
        // subtree behind its first record has returned and the neighbor is
        // visited.
        let mut stack = vec![(root.clone(), None::<G::Node>, graph.neighbors(root))];

        while let Some((node, parent, neighbors)) = stack.last_mut() {
            let Some(neighbor) = neighbors.next() else {
                stack.pop();
                continue;
            };

            if !visited.is_visited(neighbor) {
                let from = node.clone();
                let neighbor = neighbor.clone();
                visited.visit(neighbor.clone());
                stack.push((neighbor.clone(), Some(from), graph.neighbors(&neighbor)));
            } else if parent.as_ref() != Some(neighbor) {
                return true;
            }
        }
    }

    false
}
