//! Graphs of value-keyed nodes with optionally weighted edges, deterministic
//! traversal, path discovery, connected components and cycle detection.
//!
//! The original motivation is representing molecular structures, where atoms
//! are nodes and bonds are weighted edges, but nothing in the crate is
//! specific to that domain. Weights are stored on edge records and handed
//! back on request; no algorithm consults them, so "shortest" always means
//! fewest edges.
//!
//! # Determinism
//!
//! Neighbors are expanded in the order their edges were inserted. Two runs of
//! any traversal or query over the same graph built by the same sequence of
//! insertions produce the same result.
//!
//! # Usage
//!
//! ```
//! use bondgraph::Graph;
//!
//! let mut graph: Graph<&str> = Graph::new_undirected();
//!
//! for node in ["a", "b", "c", "d"] {
//!     graph.add_node(node);
//! }
//!
//! graph.add_edge("a", "b", None)?;
//! graph.add_edge("b", "c", None)?;
//! graph.add_edge("c", "d", None)?;
//! graph.add_edge("d", "a", None)?;
//!
//! assert_eq!(
//!     graph.find_shortest_path(&"a", Some(&"c"))?,
//!     Some(vec!["a", "b", "c"]),
//! );
//! assert!(graph.is_cyclic());
//! # Ok::<_, bondgraph::core::NodeNotFoundError<&str>>(())
//! ```
//!
//! Lower-level building blocks are available too: the traversal visitors in
//! [`visit`], the algorithms in [`algo`] and the storage in [`storage`] all
//! work with any type implementing the [`core`] traits.

pub mod algo;
pub mod core;
pub mod graph;
pub mod storage;
pub mod visit;

pub use graph::Graph;

pub mod prelude {
    //! Common imports.

    #[doc(hidden)]
    pub use crate::{
        core::{GraphBase, Neighbors, NodeSet},
        visit::Visitor,
        Graph,
    };
}
