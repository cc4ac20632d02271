use rustc_hash::FxHashSet;

use crate::{
    core::{Neighbors, NodeSet},
    visit::{Dfs, Visitor},
};

/// Collects every node that belongs to a connected component with at least
/// one edge.
///
/// The components are flattened into a single set, so the result tells which
/// nodes are connected to something, not which nodes are connected to each
/// other. Isolated nodes (degree zero) are left out.
pub fn connected_components<G>(graph: &G) -> FxHashSet<G::Node>
where
    G: Neighbors + NodeSet,
{
    let mut result = FxHashSet::default();

    for root in graph.nodes() {
        if graph.degree(root) == 0 || result.contains(root) {
            continue;
        }

        // Components are disjoint, so a fresh traversal per root never
        // revisits nodes collected from an earlier root.
        for node in Dfs::new(graph).start(root.clone()).into_iter(graph) {
            result.insert(node);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::{core::marker::Undirected, storage::AdjMap};

    use super::*;

    #[test]
    fn edgeless_graph_has_no_components() {
        let mut graph = AdjMap::<_, i32, Undirected>::new();

        for node in ['a', 'b', 'c'] {
            graph.add_node(node);
        }

        assert!(connected_components(&graph).is_empty());
    }

    #[test]
    fn separate_components_are_merged_into_one_set() {
        let mut graph = AdjMap::<_, i32, Undirected>::new();

        for node in ['a', 'b', 'c', 'd'] {
            graph.add_node(node);
        }

        graph.add_edge('a', 'b', None).unwrap();
        graph.add_edge('c', 'd', None).unwrap();

        let components = connected_components(&graph);

        assert_eq!(components, FxHashSet::from_iter(['a', 'b', 'c', 'd']));
    }

    #[test]
    fn isolated_node_is_excluded() {
        let mut graph = AdjMap::<_, i32, Undirected>::new();

        for node in ['a', 'b', 'c', 'e'] {
            graph.add_node(node);
        }

        graph.add_edge('a', 'b', None).unwrap();
        graph.add_edge('b', 'c', None).unwrap();
        graph.add_edge('c', 'a', None).unwrap();

        let components = connected_components(&graph);

        assert_eq!(components, FxHashSet::from_iter(['a', 'b', 'c']));
    }

    #[test]
    fn self_loop_counts_as_an_edge() {
        let mut graph = AdjMap::<_, i32, Undirected>::new();

        graph.add_node('n');
        graph.add_edge('n', 'n', None).unwrap();

        assert_eq!(connected_components(&graph), FxHashSet::from_iter(['n']));
    }
}
