/// Recoverable failures of graph operations.
///
/// Exhausting or overflowing a [FixedHeap](crate::collections::FixedHeap) is not
/// represented here: it is a sizing mistake of the caller and panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation referenced a vertex which is not a member of the graph.
    #[error("vertex is missing: {0}")]
    MissingVertex(String),
    /// Topological sorting was asked for on a graph with a cycle.
    #[error("cyclic graph")]
    CyclicGraph,
}

pub type Result<T> = std::result::Result<T, Error>;
