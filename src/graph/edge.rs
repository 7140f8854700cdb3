use super::VertexId;
use crate::collections::Weighted;

/// A weighted arc owned by its source vertex.
///
/// An undirected connection between `a` and `b` is a pair of arcs,
/// `a -> b` owned by `a` and `b -> a` owned by `b`, of the same weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: f64,
}

impl Edge {
    /// The same connection seen from the other endpoint.
    pub fn reciprocal(&self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
            weight: self.weight,
        }
    }
}

impl Weighted for Edge {
    fn weight(&self) -> f64 {
        self.weight
    }
}
