/// A route through a graph, as found by
/// [ShortestPath::path](crate::algorithm::ShortestPath::path).
#[derive(Debug, Clone)]
pub struct Path<'a, V> {
    weight: f64,
    vertices: Vec<&'a V>,
}

impl<'a, V> Path<'a, V> {
    pub(crate) fn new(weight: f64, vertices: Vec<&'a V>) -> Self {
        Self { weight, vertices }
    }

    /// Sum of edge weights along the route.
    ///
    /// Infinite if the destination is unreachable.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Vertices from the source to the destination, both included.
    ///
    /// Empty if the destination is unreachable.
    pub fn vertices(&self) -> &[&'a V] {
        &self.vertices
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }
}
