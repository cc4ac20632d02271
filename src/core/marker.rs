use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::{base::Edge, error::NodeNotFoundError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

/// Edge-insertion policy of a graph, selected at construction by a marker
/// type.
///
/// The policy decides how one logical edge is laid out in the adjacency
/// storage. [`Undirected`] inserts a symmetric pair of records so that the
/// edge is visible from both endpoints; [`Directed`] appends a single record
/// to the source list.
pub trait EdgePolicy: private::Sealed + 'static {
    fn is_directed() -> bool;

    /// Inserts one logical edge into the adjacency storage.
    ///
    /// Both endpoints must already be present. The first missing one (`from`
    /// is checked before `to`) is reported in the error.
    fn insert_edge<N, W>(
        adjacency: &mut FxHashMap<N, Vec<Edge<N, W>>>,
        from: N,
        to: N,
        weight: Option<W>,
    ) -> Result<(), NodeNotFoundError<N>>
    where
        N: Clone + Eq + Hash,
        W: Clone;
}

impl EdgePolicy for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn insert_edge<N, W>(
        adjacency: &mut FxHashMap<N, Vec<Edge<N, W>>>,
        from: N,
        to: N,
        weight: Option<W>,
    ) -> Result<(), NodeNotFoundError<N>>
    where
        N: Clone + Eq + Hash,
        W: Clone,
    {
        if !adjacency.contains_key(&from) {
            return Err(NodeNotFoundError(from));
        }
        if !adjacency.contains_key(&to) {
            return Err(NodeNotFoundError(to));
        }

        // A self-loop stores both records in the same list.
        let record = Edge::new(to.clone(), weight.clone());
        adjacency
            .get_mut(&from)
            .expect("endpoint presence checked above")
            .push(record);

        let record = Edge::new(from, weight);
        adjacency
            .get_mut(&to)
            .expect("endpoint presence checked above")
            .push(record);

        Ok(())
    }
}

impl EdgePolicy for Directed {
    fn is_directed() -> bool {
        true
    }

    fn insert_edge<N, W>(
        adjacency: &mut FxHashMap<N, Vec<Edge<N, W>>>,
        from: N,
        to: N,
        weight: Option<W>,
    ) -> Result<(), NodeNotFoundError<N>>
    where
        N: Clone + Eq + Hash,
        W: Clone,
    {
        if !adjacency.contains_key(&from) {
            return Err(NodeNotFoundError(from));
        }
        if !adjacency.contains_key(&to) {
            return Err(NodeNotFoundError(to));
        }

        adjacency
            .get_mut(&from)
            .expect("endpoint presence checked above")
            .push(Edge::new(to, weight));

        Ok(())
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
}
