use crate::{collections::FixedHeap, graph::*};
use ahash::RandomState;
use std::collections::HashMap;

pub trait MinimumSpanningTree
where
    Self: WeightedGraph + Sized,
    Self::Vertex: WeightedVertex,
{
    /// Grows a minimum spanning tree with Prim's algorithm.
    ///
    /// The tree starts from an arbitrary vertex, so it spans only the component
    /// of that vertex when the graph is disconnected.
    /// Vertices of the tree are edge-less clones of their counterparts; they carry
    /// only the connections of the tree.
    fn minimum_spanning_tree(&self) -> UGraph<Self::Vertex> {
        let mut tree = UGraph::new();
        let root = match self.iter_vertices().next() {
            Some(x) => x,
            None => return tree,
        };
        // every vertex pushes its out-edges once, when it joins the tree
        let cap = self
            .iter_vertices()
            .map(|vid| self.out_edges(&vid).count())
            .sum();
        let mut heap = FixedHeap::new(cap);
        let mut adopted: HashMap<VertexId, VertexId, RandomState> =
            HashMap::with_hasher(RandomState::new());

        adopt(self, &mut tree, &mut adopted, root);
        for e in self.out_edges(&root) {
            heap.push(e);
        }
        while tree.size() < self.vertex_size() && !heap.is_empty() {
            let e = heap.pop();
            if adopted.contains_key(&e.sink) {
                continue;
            }
            let Some(src) = adopted.get(&e.source).copied() else {
                continue;
            };
            let Some(snk) = adopt(self, &mut tree, &mut adopted, e.sink) else {
                continue;
            };
            tree.link(src, snk, e.weight);
            for nxt in self.out_edges(&e.sink) {
                heap.push(nxt);
            }
        }
        if tree.size() < self.vertex_size() {
            tracing::debug!(
                spanned = tree.size(),
                vertices = self.vertex_size(),
                "graph is disconnected, spanning tree covers one component"
            );
        }
        tree
    }
}

impl<V: WeightedVertex> MinimumSpanningTree for UGraph<V> {}

/// Clones a vertex, without its edges, into the tree.
fn adopt<G>(
    g: &G,
    tree: &mut UGraph<G::Vertex>,
    adopted: &mut HashMap<VertexId, VertexId, RandomState>,
    vid: VertexId,
) -> Option<VertexId>
where
    G: QueryableGraph,
    G::Vertex: WeightedVertex,
{
    let v = g.vertex_by_id(&vid)?;
    let new_vid = tree.add(v.clone_without_edges());
    adopted.insert(vid, new_vid);
    Some(new_vid)
}
