//! Vertices, edges and the two graph models.
//!
//! # Vertices and `VertexId`
//!
//! Callers bring their own vertex types by implementing [Vertex]
//! (or [WeightedVertex] for [UGraph]).
//! A graph keys its vertices by identity and hands out a [VertexId] for each of them.
//! [VertexId]s are lightweight and `Copy`; adjacency refers to neighbors through them,
//! so that no vertex ever holds a reference to another one.
//!
//! Queries accept anything implementing [Vertex], including a bare `&str` naming
//! the identity.
//!
//! # Graphs
//!
//! *   [DiGraph] keeps unweighted directed edges in singly-linked adjacency lists.
//! *   [UGraph] keeps weighted undirected connections as pairs of reciprocal
//!     [Edge]s owned by their source vertices.
//!
//! Both implement [QueryableGraph], against which the traversals in
//! [crate::algorithm] are written.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod path;
pub use self::path::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
pub use self::directed::DiGraph;
pub mod undirected;
pub use self::undirected::UGraph;
