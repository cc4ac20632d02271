use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::{
    algo,
    core::{
        marker::{Directed, EdgePolicy, Undirected},
        Edge, GraphBase, Neighbors, NodeNotFoundError, NodeSet,
    },
    storage::AdjMap,
    visit::FifoQueue,
};

/// A mutable graph of value-keyed nodes with optionally weighted edges.
///
/// The node type `N` is any cloneable, hashable value; nodes are compared by
/// value equality. The weight type `W` defaults to `f64` and is stored on the
/// edge records without being consulted by any algorithm. The policy `P`
/// decides whether [`add_edge`](Graph::add_edge) records an edge in both
/// directions ([`Undirected`], the default) or only from `from` to `to`
/// ([`Directed`]).
///
/// Traversal order is deterministic: neighbors are always expanded in the
/// order their edges were inserted.
///
/// # Examples
///
/// ```
/// use bondgraph::Graph;
///
/// let mut graph: Graph<&str> = Graph::new_undirected();
///
/// for node in ["methane", "ethane", "propane"] {
///     graph.add_node(node);
/// }
///
/// graph.add_edge("methane", "ethane", Some(1.0))?;
/// graph.add_edge("ethane", "propane", Some(1.0))?;
///
/// let path = graph.find_shortest_path(&"methane", Some(&"propane"))?;
/// assert_eq!(path, Some(vec!["methane", "ethane", "propane"]));
///
/// assert!(!graph.is_cyclic());
/// # Ok::<_, bondgraph::core::NodeNotFoundError<&str>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, W = f64, P: EdgePolicy = Undirected> {
    storage: AdjMap<N, W, P>,
}

impl<N, W> Graph<N, W, Undirected>
where
    N: Clone + Eq + Hash,
    W: Clone,
{
    /// Creates an empty graph whose edges are recorded in both directions.
    pub fn new_undirected() -> Self {
        Self::new()
    }

    /// Returns `true` if the graph contains a cycle. A self-loop is a
    /// cycle, and so is a second edge between the same pair of nodes.
    pub fn is_cyclic(&self) -> bool {
        algo::is_cyclic(&self.storage)
    }
}

impl<N, W> Graph<N, W, Directed>
where
    N: Clone + Eq + Hash,
    W: Clone,
{
    /// Creates an empty graph whose edges are recorded one way only.
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<N, W, P> Graph<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    pub fn new() -> Self {
        Self {
            storage: AdjMap::new(),
        }
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            storage: AdjMap::with_capacity(node_count),
        }
    }

    /// Inserts the node with an empty edge list. A node that is already
    /// present keeps its edge list.
    pub fn add_node(&mut self, node: N) {
        self.storage.add_node(node);
    }

    /// Inserts one logical edge according to the edge policy.
    ///
    /// Both endpoints must have been added before; the first missing one
    /// (`from` before `to`) is reported and nothing is recorded.
    pub fn add_edge(
        &mut self,
        from: N,
        to: N,
        weight: Option<W>,
    ) -> Result<(), NodeNotFoundError<N>> {
        self.storage.add_edge(from, to, weight)
    }

    /// Edge records of the node in insertion order. A node that is not
    /// present has no records.
    pub fn edges(&self, node: &N) -> std::slice::Iter<'_, Edge<N, W>> {
        self.storage.edges(node)
    }

    /// Finds a path from `start` to `end` using depth-first search.
    ///
    /// See [`algo::find_path`].
    pub fn find_path(
        &self,
        start: &N,
        end: Option<&N>,
    ) -> Result<Option<Vec<N>>, NodeNotFoundError<N>> {
        algo::find_path(&self.storage, start, end)
    }

    /// Finds a path with the minimum number of edges from `start` to `end`
    /// using breadth-first search.
    ///
    /// See [`algo::find_shortest_path`].
    pub fn find_shortest_path(
        &self,
        start: &N,
        end: Option<&N>,
    ) -> Result<Option<Vec<N>>, NodeNotFoundError<N>> {
        algo::find_shortest_path(&self.storage, start, end)
    }

    /// [`find_shortest_path`](Graph::find_shortest_path) with an explicitly
    /// supplied FIFO queue.
    pub fn find_shortest_path_with<Q>(
        &self,
        start: &N,
        end: Option<&N>,
        queue: Q,
    ) -> Result<Option<Vec<N>>, NodeNotFoundError<N>>
    where
        Q: FifoQueue<N>,
    {
        algo::find_shortest_path_with(&self.storage, start, end, queue)
    }

    /// Collects every node that belongs to a connected component with at
    /// least one edge, flattened into a single set.
    ///
    /// See [`algo::connected_components`].
    pub fn connected_components(&self) -> FxHashSet<N> {
        algo::connected_components(&self.storage)
    }
}

impl<N, W, P> Default for Graph<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W, P> GraphBase for Graph<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type Node = N;
    type Policy = P;

    fn node_count_hint(&self) -> Option<usize> {
        self.storage.node_count_hint()
    }
}

impl<N, W, P> NodeSet for Graph<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type NodesIter<'a> = <AdjMap<N, W, P> as NodeSet>::NodesIter<'a>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodesIter<'_> {
        self.storage.nodes()
    }

    fn node_count(&self) -> usize {
        self.storage.node_count()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.storage.contains_node(node)
    }
}

impl<N, W, P> Neighbors for Graph<N, W, P>
where
    N: Clone + Eq + Hash,
    W: Clone,
    P: EdgePolicy,
{
    type NeighborsIter<'a> = <AdjMap<N, W, P> as Neighbors>::NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors(&self, node: &N) -> Self::NeighborsIter<'_> {
        self.storage.neighbors(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.storage.degree(node)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn policy_is_reported() {
        let undirected: Graph<u32> = Graph::new_undirected();
        let directed: Graph<u32, f64, Directed> = Graph::new_directed();

        assert!(!undirected.is_directed());
        assert!(directed.is_directed());
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut graph: Graph<&str, f64, Directed> = Graph::new_directed();

        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", None).unwrap();

        assert_eq!(
            graph.find_path(&"a", Some(&"b")).unwrap(),
            Some(vec!["a", "b"]),
        );
        assert_eq!(graph.find_path(&"b", Some(&"a")).unwrap(), None);
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let mut graph: Graph<&str> = Graph::new_undirected();

        graph.add_node("a");

        assert_matches!(
            graph.find_shortest_path(&"a", Some(&"b")),
            Err(NodeNotFoundError("b"))
        );
    }

    #[test]
    fn queries_delegate_to_storage() {
        let mut graph: Graph<u32, i32> = Graph::new_undirected();

        for node in 0..4 {
            graph.add_node(node);
        }

        graph.add_edge(0, 1, Some(1)).unwrap();
        graph.add_edge(1, 2, Some(1)).unwrap();
        graph.add_edge(2, 0, Some(1)).unwrap();

        assert!(graph.is_cyclic());
        assert_eq!(
            graph.connected_components(),
            rustc_hash::FxHashSet::from_iter([0, 1, 2]),
        );
        assert_eq!(graph.degree(&1), 2);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn weights_are_stored_verbatim() {
        let mut graph: Graph<&str> = Graph::new_undirected();

        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", Some(2.5)).unwrap();

        let record = graph.edges(&"a").next().unwrap();
        assert_eq!(record.weight(), Some(&2.5));
    }
}
