use crate::{algorithm::Components, graph::*, Error, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::HashMap;

/// An undirected weighted graph whose vertices own their edges.
///
/// Connecting `a` and `b` stores `a -> b` in `a` and `b -> a` in `b`, both of the
/// same weight.
/// Every operation keeps the two halves of a connection in sync.
///
/// Besides vertices, the graph caches a group label for each vertex,
/// computed by [UGraph::group_vertices].
/// Any structural change throws the cache away.
#[derive(Clone)]
pub struct UGraph<V> {
    vid_factory: VertexIdFactory,
    ids: BiHashMap<VertexId, String, RandomState, RandomState>,
    vertices: HashMap<VertexId, V, RandomState>,
    groups: HashMap<VertexId, usize, RandomState>,
}

impl<V> DirectedOrNot for UGraph<V> {
    const DIRECTED_OR_NOT: bool = false;
}

impl<V> Default for UGraph<V>
where
    V: WeightedVertex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UGraph<V>
where
    V: WeightedVertex,
{
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            vertices: HashMap::with_hasher(RandomState::new()),
            groups: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn has<Q>(&self, v: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        self.ids.contains_right(v.id())
    }

    pub fn has_both<Q>(&self, a: &Q, b: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        self.has(a) && self.has(b)
    }

    /// The member vertex of the same identity.
    pub fn vertex<Q>(&self, v: &Q) -> Option<&V>
    where
        Q: Vertex + ?Sized,
    {
        self.ids
            .get_by_right(v.id())
            .and_then(|vid| self.vertices.get(vid))
    }

    /// Iterates over member vertices without any specific order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.values()
    }

    /// Adds a vertex unless one of the same identity is present.
    ///
    /// A vertex joins the graph without edges; whatever edges it carried are dropped.
    /// Returns the [VertexId] of the member vertex.
    pub fn add(&mut self, mut v: V) -> VertexId {
        if let Some(vid) = self.ids.get_by_right(v.id()) {
            return *vid;
        }
        if !v.edges().is_empty() {
            tracing::debug!(
                vertex = v.id(),
                edges = v.edges().len(),
                "dropped edges carried by a joining vertex"
            );
            v.edges_mut().clear();
        }
        let vid = self.vid_factory.one_more();
        self.ids.insert(vid, v.id().to_owned());
        self.vertices.insert(vid, v);
        self.groups.clear();
        vid
    }

    /// Removes a vertex together with both halves of all its connections.
    ///
    /// The returned vertex carries no edge.
    pub fn remove<Q>(&mut self, v: &Q) -> Option<V>
    where
        Q: Vertex + ?Sized,
    {
        let (vid, _) = self.ids.remove_by_right(v.id())?;
        let mut vertex = self.vertices.remove(&vid)?;
        for e in vertex.edges().iter() {
            if let Some(nbr) = self.vertices.get_mut(&e.sink) {
                nbr.edges_mut().retain(|x| x.sink != vid);
            }
        }
        tracing::debug!(
            vertex = v.id(),
            edges = vertex.edges().len(),
            "removed vertex from undirected graph"
        );
        vertex.edges_mut().clear();
        self.groups.clear();
        Some(vertex)
    }

    /// Connects two member vertices with an edge of `weight`.
    pub fn connect<Q>(&mut self, from: &Q, to: &Q, weight: f64) -> Result<()>
    where
        Q: Vertex + ?Sized,
    {
        let src = self.vid(from)?;
        let snk = self.vid(to)?;
        self.link(src, snk, weight);
        Ok(())
    }

    /// Whether either endpoint holds an edge to the other one.
    ///
    /// Absent vertices are connected to nothing.
    pub fn connected<Q>(&self, from: &Q, to: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        match (self.vid(from), self.vid(to)) {
            (Ok(src), Ok(snk)) => self.has_edge(&src, &snk) || self.has_edge(&snk, &src),
            _ => false,
        }
    }

    /// Same as [UGraph::connected].
    pub fn adjacent<Q>(&self, from: &Q, to: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        self.connected(from, to)
    }

    /// Removes one connection between two vertices.
    ///
    /// That is, the first `from -> to` edge and the first `to -> from` edge.
    /// Absent vertices and edges are ignored.
    pub fn disconnect<Q>(&mut self, from: &Q, to: &Q)
    where
        Q: Vertex + ?Sized,
    {
        if let (Ok(src), Ok(snk)) = (self.vid(from), self.vid(to)) {
            self.unlink_first(&src, &snk);
            self.unlink_first(&snk, &src);
            self.groups.clear();
        }
    }

    /// Labels every vertex with the connected component it belongs to.
    ///
    /// Vertices connected by a path share a label; vertices in different components
    /// do not. Returns the number of components.
    pub fn group_vertices(&mut self) -> usize {
        let groups = self.components();
        let count = groups.values().max().map_or(0, |x| x + 1);
        self.groups = groups;
        count
    }

    /// The label of a vertex, as of the latest [UGraph::group_vertices].
    pub fn group_of<Q>(&self, v: &Q) -> Option<usize>
    where
        Q: Vertex + ?Sized,
    {
        self.ids
            .get_by_right(v.id())
            .and_then(|vid| self.groups.get(vid))
            .copied()
    }

    /// Iterates over labelled vertices, as of the latest [UGraph::group_vertices].
    pub fn groups(&self) -> impl Iterator<Item = (&V, usize)> + '_ {
        self.groups
            .iter()
            .filter_map(|(vid, group)| self.vertices.get(vid).map(|v| (v, *group)))
    }

    /// Adds both halves of a connection between two member vertices.
    pub(crate) fn link(&mut self, src: VertexId, snk: VertexId, weight: f64) {
        debug_assert!(self.vertices.contains_key(&src));
        debug_assert!(self.vertices.contains_key(&snk));
        let e = Edge {
            source: src,
            sink: snk,
            weight,
        };
        if let Some(v) = self.vertices.get_mut(&src) {
            v.edges_mut().push(e);
        }
        if let Some(v) = self.vertices.get_mut(&snk) {
            v.edges_mut().push(e.reciprocal());
        }
        self.groups.clear();
    }

    fn unlink_first(&mut self, src: &VertexId, snk: &VertexId) {
        if let Some(v) = self.vertices.get_mut(src) {
            let edges = v.edges_mut();
            if let Some(pos) = edges.iter().position(|e| e.sink == *snk) {
                edges.remove(pos);
            }
        }
    }

    fn has_edge(&self, src: &VertexId, snk: &VertexId) -> bool {
        self.vertices
            .get(src)
            .map_or(false, |v| v.edges().iter().any(|e| e.sink == *snk))
    }

    fn vid<Q>(&self, v: &Q) -> Result<VertexId>
    where
        Q: Vertex + ?Sized,
    {
        self.ids
            .get_by_right(v.id())
            .copied()
            .ok_or_else(|| Error::MissingVertex(v.id().to_owned()))
    }
}

impl<V> QueryableGraph for UGraph<V>
where
    V: WeightedVertex,
{
    type Vertex = V;

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.keys().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains_key(v)
    }

    fn vertex_by_id(&self, vid: &VertexId) -> Option<&Self::Vertex> {
        self.vertices.get(vid)
    }

    fn id_of(&self, name: &str) -> Option<VertexId> {
        self.ids.get_by_right(name).copied()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_edges(v).map(|e| e.sink))
    }
}

impl<V> WeightedGraph for UGraph<V>
where
    V: WeightedVertex,
{
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        match self.vertices.get(v) {
            Some(vert) => Box::new(vert.edges().iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<V> std::fmt::Debug for UGraph<V>
where
    V: WeightedVertex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "UGraph {{")?;
        for v in self.vertices.values() {
            writeln!(f, "{}:", v.repr())?;
            for e in v.edges() {
                writeln!(
                    f,
                    "  -> {} by {:.2}",
                    self.vertices[&e.sink].repr(),
                    e.weight
                )?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{undirected::*, *};
    use crate::Error;
    use quickcheck_macros::quickcheck;

    fn graph(ids: &[&str]) -> UGraph<WeightedNode> {
        let mut g = UGraph::new();
        for id in ids {
            g.add(WeightedNode::new(*id));
        }
        g
    }

    #[test]
    fn add_is_idempotent() {
        let mut g = graph(&["A", "B", "C", "D"]);
        for id in ["A", "B", "C", "D"] {
            assert!(g.has(id));
        }
        assert!(!g.has("E"));
        g.connect("A", "B", 1.0).unwrap();
        let a = g.id_of("A").unwrap();
        assert_eq!(g.add(WeightedNode::new("A")), a);
        assert_eq!(g.size(), 4);
        assert_eq!(g.vertex("A").unwrap().edges().len(), 1);
    }

    #[test]
    fn joining_vertex_drops_foreign_edges() {
        let mut g = graph(&["A", "B"]);
        g.connect("A", "B", 1.0).unwrap();
        let carried = g.vertex("A").unwrap().clone();
        let mut h = UGraph::new();
        h.add(carried);
        assert!(h.vertex("A").unwrap().edges().is_empty());
    }

    #[test]
    fn connect() {
        let mut g = graph(&["A", "B", "C", "D", "E"]);
        assert_eq!(
            g.connect("A", "W", 1.0),
            Err(Error::MissingVertex("W".to_owned()))
        );
        g.connect("A", "B", 2.0).unwrap();
        g.connect("B", "E", 1.0).unwrap();
        assert_eq!(
            g.connect("Q", "A", 1.0),
            Err(Error::MissingVertex("Q".to_owned()))
        );
        g.connect("E", "A", 5.0).unwrap();
        assert!(g.adjacent("A", "B"));
        assert!(g.connected("B", "A"));
        assert!(g.connected("A", "E"));
        assert!(!g.connected("A", "C"));
        assert!(!g.connected("A", "Q"));
        let b = g.vertex("B").unwrap();
        assert_eq!(
            b.edges().iter().map(|e| e.weight).collect::<Vec<_>>(),
            vec![2.0, 1.0]
        );
    }

    #[test]
    fn disconnect() {
        let mut g = graph(&["A", "B", "C"]);
        g.connect("A", "B", 2.0).unwrap();
        g.connect("B", "C", 2.0).unwrap();
        for (from, to) in [("A", "B"), ("W", "B"), ("B", "C")] {
            g.disconnect(from, to);
            assert!(!g.connected(from, to), "{:?}", g);
            assert!(!g.connected(to, from), "{:?}", g);
        }
        assert!(g.vertices().all(|v| v.edges().is_empty()));
    }

    #[test]
    fn disconnect_removes_one_connection_at_a_time() {
        let mut g = graph(&["A", "B"]);
        g.connect("A", "B", 1.0).unwrap();
        g.connect("B", "A", 2.0).unwrap();
        g.disconnect("A", "B");
        assert!(g.connected("A", "B"));
        assert_eq!(g.vertex("A").unwrap().edges()[0].weight, 2.0);
        assert_eq!(g.vertex("B").unwrap().edges()[0].weight, 2.0);
        g.disconnect("B", "A");
        assert!(!g.connected("A", "B"));
    }

    #[test]
    fn remove_vertex() {
        let mut g = graph(&["A", "B", "C"]);
        g.connect("A", "B", 1.0).unwrap();
        g.connect("A", "C", 1.0).unwrap();
        g.connect("B", "C", 1.0).unwrap();
        let a = g.remove("A").unwrap();
        assert!(a.edges().is_empty());
        assert!(!g.has("A"));
        assert_eq!(g.vertex("B").unwrap().edges().len(), 1);
        assert_eq!(g.vertex("C").unwrap().edges().len(), 1);
        assert!(g.remove("A").is_none());
    }

    #[test]
    fn debug_dump() {
        let mut g = graph(&["A"]);
        g.connect("A", "A", 1.5).unwrap();
        assert_eq!(
            format!("{:?}", g),
            "UGraph {\n<V: A>:\n  -> <V: A> by 1.50\n  -> <V: A> by 1.50\n}\n"
        );
    }

    #[quickcheck]
    fn connections_are_reciprocal(ops: UOps) {
        let g = ops.build();
        for v in g.vertices() {
            for e in v.edges() {
                let mut here: Vec<_> = v
                    .edges()
                    .iter()
                    .filter(|x| x.sink == e.sink)
                    .map(|x| x.weight)
                    .collect();
                let mut there: Vec<_> = g
                    .vertex_by_id(&e.sink)
                    .unwrap()
                    .edges()
                    .iter()
                    .filter(|x| x.sink == e.source)
                    .map(|x| x.weight)
                    .collect();
                here.sort_by(|a, b| a.partial_cmp(b).unwrap());
                there.sort_by(|a, b| a.partial_cmp(b).unwrap());
                assert_eq!(here, there, "{:?}", g);
            }
        }
    }

    #[quickcheck]
    fn connected_is_symmetric(ops: UOps) {
        let g = ops.build();
        for a in NAMES {
            for b in NAMES {
                assert_eq!(g.connected(a, b), g.connected(b, a));
            }
        }
    }
}
