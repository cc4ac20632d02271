use std::{
    collections::{hash_map, HashMap},
    hash::{BuildHasherDefault, Hash},
    iter, slice,
};

use rustc_hash::FxHashMap;

use crate::core::{
    marker::{EdgePolicy, Undirected},
    Edge, GraphBase, Neighbors, NodeNotFoundError, NodeSet,
};

/// Adjacency-map storage: every node maps to the ordered list of its edge
/// records.
///
/// Every node that has ever been added, explicitly or as an edge endpoint,
/// has an entry, even when its edge list is empty. Nodes and edges are never
/// removed. Edge-list order is insertion order and determines traversal
/// tie-breaks.
#[derive(Debug, Clone)]
pub struct AdjMap<N, W, P: EdgePolicy = Undirected> {
    nodes: FxHashMap<N, Vec<Edge<N, W>>>,
    ty: std::marker::PhantomData<fn() -> P>,
}

impl<N, W, P> AdjMap<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            ty: std::marker::PhantomData,
        }
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity_and_hasher(node_count, BuildHasherDefault::default()),
            ty: std::marker::PhantomData,
        }
    }

    /// Inserts the node with an empty edge list.
    ///
    /// Idempotent: a node that is already present keeps its edge list.
    pub fn add_node(&mut self, node: N) {
        self.nodes.entry(node).or_default();
    }

    /// Inserts one logical edge according to the edge policy `P`.
    ///
    /// Both endpoints must have been added before; the first missing one
    /// (`from` before `to`) is reported. A self-loop is permitted and, under
    /// [`Undirected`], stores two records on the same node.
    pub fn add_edge(&mut self, from: N, to: N, weight: Option<W>) -> Result<(), NodeNotFoundError<N>> {
        P::insert_edge(&mut self.nodes, from, to, weight)
    }

    /// Edge records of the node in insertion order. A node that is not
    /// present has no records.
    pub fn edges(&self, node: &N) -> slice::Iter<'_, Edge<N, W>> {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[]).iter()
    }
}

impl<N, W, P> Default for AdjMap<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W, P> GraphBase for AdjMap<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type Node = N;
    type Policy = P;

    fn node_count_hint(&self) -> Option<usize> {
        Some(self.nodes.len())
    }
}

impl<N, W, P> NodeSet for AdjMap<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type NodesIter<'a> = hash_map::Keys<'a, N, Vec<Edge<N, W>>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodesIter<'_> {
        self.nodes.keys()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }
}

impl<N, W, P> Neighbors for AdjMap<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type NeighborsIter<'a> = iter::Map<slice::Iter<'a, Edge<N, W>>, fn(&'a Edge<N, W>) -> &'a N>
    where
        Self: 'a;

    fn neighbors(&self, node: &N) -> Self::NeighborsIter<'_> {
        self.edges(node).map(Edge::neighbor as fn(&Edge<N, W>) -> &N)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::marker::Directed;

    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = AdjMap::<_, i32>::new();

        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", None).unwrap();

        graph.add_node("a");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges(&"a").count(), 1);
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut graph = AdjMap::<_, f64>::new();

        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", Some(1.5)).unwrap();

        let record = graph.edges(&"a").next().unwrap();
        assert_eq!(record.neighbor(), &"b");
        assert_eq!(record.weight(), Some(&1.5));

        let record = graph.edges(&"b").next().unwrap();
        assert_eq!(record.neighbor(), &"a");
        assert_eq!(record.weight(), Some(&1.5));
    }

    #[test]
    fn directed_edge_is_one_record() {
        let mut graph = AdjMap::<_, i32, Directed>::new();

        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", None).unwrap();

        assert_eq!(graph.edges(&"a").count(), 1);
        assert_eq!(graph.edges(&"b").count(), 0);
    }

    #[test]
    fn self_loop_stores_two_records() {
        let mut graph = AdjMap::<_, i32>::new();

        graph.add_node("a");
        graph.add_edge("a", "a", None).unwrap();

        let neighbors = graph.neighbors(&"a").collect::<Vec<_>>();
        assert_eq!(neighbors, vec![&"a", &"a"]);
    }

    #[test]
    fn add_edge_missing_endpoint() {
        let mut graph = AdjMap::<_, i32>::new();

        graph.add_node("a");

        assert_matches!(graph.add_edge("a", "b", None), Err(NodeNotFoundError("b")));
        assert_matches!(graph.add_edge("x", "b", None), Err(NodeNotFoundError("x")));

        // A failed insertion leaves no partial records behind.
        assert_eq!(graph.edges(&"a").count(), 0);
    }

    #[test]
    fn validate_endpoints_checks_start_first() {
        let mut graph = AdjMap::<_, i32>::new();

        graph.add_node("a");

        assert_matches!(graph.validate_endpoints(&"a", None), Ok(()));
        assert_matches!(graph.validate_endpoints(&"a", Some(&"b")), Err(NodeNotFoundError("b")));
        assert_matches!(graph.validate_endpoints(&"x", Some(&"b")), Err(NodeNotFoundError("x")));
    }

    #[test]
    fn edge_list_preserves_insertion_order() {
        let mut graph = AdjMap::<_, i32>::new();

        for node in ["a", "b", "c", "d"] {
            graph.add_node(node);
        }

        graph.add_edge("a", "c", None).unwrap();
        graph.add_edge("a", "b", None).unwrap();
        graph.add_edge("a", "d", None).unwrap();

        let neighbors = graph.neighbors(&"a").collect::<Vec<_>>();
        assert_eq!(neighbors, vec![&"c", &"b", &"d"]);
    }
}
