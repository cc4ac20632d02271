use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::{VisitSet, Visitor};

/// Iterative depth-first traversal.
///
/// The visitation order is exactly the order of the recursive formulation:
/// a node is reported when first reached, and its unvisited neighbors are
/// then explored one whole branch at a time, in edge insertion order.
pub struct Dfs<G>
where
    G: GraphBase,
{
    stack: Vec<G::Node>,
    visited: FxHashSet<G::Node>,
}

/// [`Dfs`] visitor started from a root.
pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    stack: &'a mut Vec<G::Node>,
    visited: &'a mut FxHashSet<G::Node>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        let visited = match graph.node_count_hint() {
            Some(count) => {
                HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default())
            }
            None => FxHashSet::default(),
        };

        Self {
            stack: Vec::new(),
            visited,
        }
    }

    /// Starts the traversal from the root.
    ///
    /// Any state left over from a previous run is discarded first, so the
    /// state of every traversal is local to that traversal.
    pub fn start(&mut self, root: G::Node) -> DfsRooted<'_, G> {
        self.stack.clear();
        self.visited.reset_visited();
        self.stack.push(root);

        DfsRooted {
            stack: &mut self.stack,
            visited: &mut self.visited,
        }
    }

    /// Set of nodes visited so far.
    pub fn visited(&self) -> &impl VisitSet<G::Node> {
        &self.visited
    }
}

impl<G> Visitor<G> for DfsRooted<'_, G>
where
    G: Neighbors,
{
    type Item = G::Node;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // A node can end up on the stack multiple times before its first
            // visit; only the first pop reports it.
            if !self.visited.visit(node.clone()) {
                continue;
            }

            // Reversed, so that the branch behind the earliest-inserted edge
            // is popped and exhausted first.
            for neighbor in graph.neighbors(&node).rev() {
                if !self.visited.is_visited(neighbor) {
                    self.stack.push(neighbor.clone());
                }
            }

            return Some(node);
        }

        None
    }
}
