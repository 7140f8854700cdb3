use crate::{collections::AdjacencyList, graph::*, Error, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::HashMap;

/// A directed graph whose unweighted edges live in per-vertex [AdjacencyList]s.
///
/// Vertices are keyed by identity.
/// Adjacency lists refer to neighbors by [VertexId], never by reference.
///
/// |              | Complexity                                    |
/// | ------------ | --------------------------------------------- |
/// | `add`        | $O(1)$                                        |
/// | `connect`    | $O(1)$                                        |
/// | `disconnect` | $O(d)$, where $d$ is the out-degree of `from` |
/// | `remove`     | $O(\|V\| + \|E\|)$                            |
/// | `has`        | $O(1)$                                        |
#[derive(Clone)]
pub struct DiGraph<V> {
    vid_factory: VertexIdFactory,
    ids: BiHashMap<VertexId, String, RandomState, RandomState>,
    slots: HashMap<VertexId, Slot<V>, RandomState>,
}

#[derive(Clone)]
struct Slot<V> {
    vertex: V,
    edges: AdjacencyList<VertexId>,
}

impl<V> DirectedOrNot for DiGraph<V> {
    const DIRECTED_OR_NOT: bool = true;
}

impl<V> Default for DiGraph<V>
where
    V: Vertex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DiGraph<V>
where
    V: Vertex,
{
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            slots: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of edges, counting duplicates.
    pub fn edge_size(&self) -> usize {
        self.slots.values().map(|s| s.edges.len()).sum()
    }

    pub fn has<Q>(&self, v: &Q) -> bool
    where
        Q: Vertex + ?Sized,
    {
        self.ids.contains_right(v.id())
    }

    /// Adds a vertex unless one of the same identity is present.
    ///
    /// Either way, returns the adjacency list of the member vertex.
    pub fn add(&mut self, v: V) -> &AdjacencyList<VertexId> {
        let vid = match self.ids.get_by_right(v.id()) {
            Some(vid) => *vid,
            None => {
                let vid = self.vid_factory.one_more();
                self.ids.insert(vid, v.id().to_owned());
                self.slots.insert(
                    vid,
                    Slot {
                        vertex: v,
                        edges: AdjacencyList::new(),
                    },
                );
                vid
            }
        };
        &self.slots[&vid].edges
    }

    /// Removes a vertex together with every edge from or to it.
    pub fn remove<Q>(&mut self, v: &Q) -> Option<V>
    where
        Q: Vertex + ?Sized,
    {
        let (vid, _) = self.ids.remove_by_right(v.id())?;
        let slot = self.slots.remove(&vid)?;
        let mut dropped = 0;
        for other in self.slots.values_mut() {
            while other.edges.remove(&vid) {
                dropped += 1;
            }
        }
        tracing::debug!(
            vertex = v.id(),
            out_edges = slot.edges.len(),
            in_edges = dropped,
            "removed vertex from digraph"
        );
        Some(slot.vertex)
    }

    /// Adds an edge from `from` to `to`.
    pub fn connect<Q>(&mut self, from: &Q, to: &Q) -> Result<()>
    where
        Q: Vertex + ?Sized,
    {
        let (src, snk) = self.both(from, to)?;
        self.slot_mut(&src).edges.append(snk);
        Ok(())
    }

    /// Removes the first edge from `from` to `to`, if any.
    pub fn disconnect<Q>(&mut self, from: &Q, to: &Q) -> Result<()>
    where
        Q: Vertex + ?Sized,
    {
        let (src, snk) = self.both(from, to)?;
        self.slot_mut(&src).edges.remove(&snk);
        Ok(())
    }

    /// The adjacency list of a vertex.
    pub fn edges<Q>(&self, v: &Q) -> Result<&AdjacencyList<VertexId>>
    where
        Q: Vertex + ?Sized,
    {
        let vid = self.vid(v)?;
        Ok(&self.slots[&vid].edges)
    }

    /// Iterates over member vertices without any specific order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.values().map(|s| &s.vertex)
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

    fn both<Q>(&self, from: &Q, to: &Q) -> Result<(VertexId, VertexId)>
    where
        Q: Vertex + ?Sized,
    {
        Ok((self.vid(from)?, self.vid(to)?))
    }

    fn slot_mut(&mut self, vid: &VertexId) -> &mut Slot<V> {
        self.slots
            .get_mut(vid)
            .expect("every id in the bimap owns a slot")
    }
}

impl<V> QueryableGraph for DiGraph<V>
where
    V: Vertex,
{
    type Vertex = V;

    fn vertex_size(&self) -> usize {
        self.slots.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.slots.keys().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.slots.contains_key(v)
    }

    fn vertex_by_id(&self, vid: &VertexId) -> Option<&Self::Vertex> {
        self.slots.get(vid).map(|s| &s.vertex)
    }

    fn id_of(&self, name: &str) -> Option<VertexId> {
        self.ids.get_by_right(name).copied()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.slots.get(v) {
            Some(slot) => Box::new(slot.edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<V> std::fmt::Debug for DiGraph<V>
where
    V: Vertex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DiGraph {{")?;
        for slot in self.slots.values() {
            writeln!(f, "{}:", slot.vertex.repr())?;
            for snk in slot.edges.iter() {
                writeln!(f, "  -> {}", self.slots[snk].vertex.repr())?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
