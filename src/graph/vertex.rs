use super::Edge;

/// ID for vertices inside a graph, which are essentially `usize`.
///
/// They are only meaningful to the graph that handed them out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// What graphs require from their vertices.
///
/// Graphs key vertices by [Vertex::id] and two vertices with the same identity
/// are the same vertex, no matter what else they carry.
///
/// `str` and `String` are vertices too, so that any query may name a vertex
/// by its identity alone.
pub trait Vertex {
    /// The identity.
    fn id(&self) -> &str;

    /// A human-readable representation, for diagnostics.
    fn repr(&self) -> String {
        self.id().to_owned()
    }

    fn same_as<Q>(&self, other: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        self.id() == other.id()
    }
}

/// Vertices of [UGraph](super::UGraph), which own their out-edges.
pub trait WeightedVertex: Vertex {
    fn edges(&self) -> &[Edge];
    fn edges_mut(&mut self) -> &mut Vec<Edge>;
    /// A vertex of the same identity but without any edge.
    fn clone_without_edges(&self) -> Self
    where
        Self: Sized;
}

impl Vertex for str {
    fn id(&self) -> &str {
        self
    }
}

impl Vertex for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

/// A plain vertex for [DiGraph](super::DiGraph).
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Vertex for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Node {}

/// A plain vertex for [UGraph](super::UGraph).
#[derive(Debug, Clone)]
pub struct WeightedNode {
    id: String,
    edges: Vec<Edge>,
}

impl WeightedNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            edges: vec![],
        }
    }
}

impl Vertex for WeightedNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn repr(&self) -> String {
        format!("<V: {}>", self.id)
    }
}

impl WeightedVertex for WeightedNode {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    fn clone_without_edges(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl PartialEq for WeightedNode {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for WeightedNode {}
