use crate::graph::*;

/// Read access shared by [DiGraph] and [UGraph], which algorithms are written against.
pub trait QueryableGraph {
    type Vertex: Vertex;

    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices without any specific order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;
    fn vertex_by_id(&self, vid: &VertexId) -> Option<&Self::Vertex>;
    /// Translates an identity into its [VertexId] in this graph.
    fn id_of(&self, name: &str) -> Option<VertexId>;
    /// Iterates over sinks of out-edges of a vertex, in insertion order.
    ///
    /// Absent vertices have no successors.
    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized + DirectedOrNot,
    {
        GraphDebug::new(self)
    }
}

/// Graphs whose edges carry weights.
pub trait WeightedGraph: QueryableGraph {
    /// Iterates over out-edges of a vertex, in insertion order.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
