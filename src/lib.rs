//! A directed graph and an undirected weighted graph, together with the classic
//! algorithms on them.
//!
//! * [graph::DiGraph] stores unweighted directed edges in per-vertex
//!   [collections::AdjacencyList]s. It supports traversals, topological sorting and
//!   cycle detection.
//! * [graph::UGraph] stores vertices which own their weighted edges.
//!   Every connection is kept as a pair of reciprocal edges.
//!   It supports shortest paths, minimum spanning trees, cycle detection and
//!   grouping vertices into connected components.
//!
//! Vertices are keyed by their identity, a string.
//! Inside a graph they are addressed by lightweight [graph::VertexId]s, which
//! algorithms may freely copy and store.
//!
//! ```rust
//! use graphkit::{algorithm::*, graph::*};
//!
//! let mut g = UGraph::new();
//! for id in ["A", "B", "C", "D", "E"] {
//!     g.add(WeightedNode::new(id));
//! }
//! g.connect("A", "B", 5.0).unwrap();
//! g.connect("A", "D", 2.0).unwrap();
//! g.connect("D", "E", 1.0).unwrap();
//! g.connect("B", "E", 3.0).unwrap();
//! g.connect("E", "C", 4.0).unwrap();
//!
//! let path = g.path("A", "C").unwrap();
//! assert_eq!(path.weight(), 7.0);
//! let ids: Vec<_> = path.vertices().iter().map(|v| v.id()).collect();
//! assert_eq!(ids, vec!["A", "D", "E", "C"]);
//! ```

pub mod algorithm;
pub mod collections;
mod error;
pub use self::error::*;
pub mod graph;
