use std::hash::Hash;

use super::{error::NodeNotFoundError, marker::EdgePolicy};

/// A single adjacency record: the neighbor endpoint and an optional weight.
///
/// In an undirected graph, two symmetric records represent one logical edge.
/// The weight is carried by both records but is not consulted by any of the
/// provided algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N, W> {
    neighbor: N,
    weight: Option<W>,
}

impl<N, W> Edge<N, W> {
    pub fn new(neighbor: N, weight: Option<W>) -> Self {
        Self { neighbor, weight }
    }

    pub fn neighbor(&self) -> &N {
        &self.neighbor
    }

    pub fn weight(&self) -> Option<&W> {
        self.weight.as_ref()
    }
}

pub trait GraphBase {
    /// The node type. Node identity is value equality; nodes are keys into
    /// the graph's storage, not owned objects with independent lifetime.
    type Node: Clone + Eq + Hash;

    /// The edge-insertion policy of the graph.
    type Policy: EdgePolicy;

    fn is_directed(&self) -> bool {
        Self::Policy::is_directed()
    }

    /// An estimate of the number of nodes, used to size traversal state.
    fn node_count_hint(&self) -> Option<usize> {
        None
    }
}

pub trait NodeSet: GraphBase {
    type NodesIter<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    /// Iterates over all nodes in unspecified order.
    fn nodes(&self) -> Self::NodesIter<'_>;

    fn node_count(&self) -> usize;

    fn contains_node(&self, node: &Self::Node) -> bool {
        self.nodes().any(|candidate| candidate == node)
    }

    /// Checks that `start` and `end` (when given, in that order) are present,
    /// reporting the first missing one.
    fn validate_endpoints(
        &self,
        start: &Self::Node,
        end: Option<&Self::Node>,
    ) -> Result<(), NodeNotFoundError<Self::Node>> {
        if !self.contains_node(start) {
            return Err(NodeNotFoundError(start.clone()));
        }
        if let Some(end) = end {
            if !self.contains_node(end) {
                return Err(NodeNotFoundError(end.clone()));
            }
        }

        Ok(())
    }
}

/// Neighbor access in edge insertion order.
///
/// The order is part of the contract: it is the tie-break for both
/// depth-first and breadth-first expansion, so traversal results are
/// deterministic. The iterator is double-ended so that depth-first traversal
/// can push neighbors in reverse and pop them in insertion order.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: DoubleEndedIterator<Item = &'a Self::Node>
    where
        Self: 'a;

    fn neighbors(&self, node: &Self::Node) -> Self::NeighborsIter<'_>;

    /// Number of edge records stored on the node. A node with a self-loop in
    /// an undirected graph counts it twice, one per record.
    fn degree(&self, node: &Self::Node) -> usize {
        self.neighbors(node).count()
    }
}
