use thiserror::Error;

/// An operation referred to a node that is not present in the graph.
///
/// Carries the first missing endpoint. Endpoints are always checked in
/// `start`/`from` before `end`/`to` order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("node not present in graph")]
pub struct NodeNotFoundError<N>(pub N);
