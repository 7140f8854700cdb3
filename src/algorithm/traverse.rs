use crate::{collections::Set, graph::*};
use std::collections::VecDeque;

/// Lazy depth-first and breadth-first walks from a root vertex.
///
/// Walks are pulled on demand; dropping one half-way leaves nothing behind.
///
/// A vertex is marked as visited when it is taken out of the frontier and yielded.
/// It may enter the frontier several times through different routes,
/// but it is yielded, and its successors examined, only once.
/// Walking from an absent root yields nothing.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    fn depth_first<Q>(&self, root: &Q) -> Traverse<'_, Self>
    where
        Q: Vertex + ?Sized,
    {
        Traverse::new(self, root.id(), Order::DepthFirst)
    }

    fn breadth_first<Q>(&self, root: &Q) -> Traverse<'_, Self>
    where
        Q: Vertex + ?Sized,
    {
        Traverse::new(self, root.id(), Order::BreadthFirst)
    }
}

impl<G: QueryableGraph> Traversal for G {}

/// Which end of the frontier a [Traverse] takes the next vertex from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// The most recently discovered one.
    DepthFirst,
    /// The earliest discovered one.
    BreadthFirst,
}

pub struct Traverse<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    order: Order,
    frontier: VecDeque<VertexId>,
    visited: Set<VertexId>,
}

impl<'a, G> Traverse<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, root: &str, order: Order) -> Self {
        let mut frontier = VecDeque::new();
        if let Some(vid) = graph.id_of(root) {
            frontier.push_back(vid);
        }
        Self {
            graph,
            order,
            frontier,
            visited: Set::new(),
        }
    }
}

impl<'a, G> Iterator for Traverse<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let vid = match self.order {
                Order::DepthFirst => self.frontier.pop_back(),
                Order::BreadthFirst => self.frontier.pop_front(),
            }?;
            if !self.visited.add(vid) {
                continue;
            }
            for nxt in graph.successors(&vid) {
                if !self.visited.contains(&nxt) {
                    self.frontier.push_back(nxt);
                }
            }
            return graph.vertex_by_id(&vid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed::*, undirected::UOps};
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn digraph(ids: &[&str], edges: &[(&str, &str)]) -> DiGraph<Node> {
        let mut g = DiGraph::new();
        for id in ids {
            g.add(Node::new(*id));
        }
        for (src, snk) in edges {
            g.connect(*src, *snk).unwrap();
        }
        g
    }

    fn ids<'a, V: Vertex + 'a>(it: impl Iterator<Item = &'a V>) -> Vec<String> {
        it.map(|v| v.id().to_owned()).collect()
    }

    #[test]
    fn depth_first() {
        let g = digraph(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B"),
                ("A", "E"),
                ("B", "C"),
                ("C", "D"),
                ("D", "E"),
                ("E", "D"),
            ],
        );
        assert_eq!(ids(g.depth_first("A")), vec!["A", "E", "D", "B", "C"]);
    }

    #[test]
    fn breadth_first() {
        let g = digraph(
            &["A", "B", "C", "D", "E", "K", "W", "Y", "X"],
            &[
                ("K", "A"),
                ("K", "B"),
                ("K", "C"),
                ("K", "D"),
                ("K", "E"),
                ("D", "W"),
                ("D", "Y"),
                ("W", "X"),
                ("X", "E"),
            ],
        );
        assert_eq!(
            ids(g.breadth_first("K")),
            vec!["K", "A", "B", "C", "D", "E", "W", "Y", "X"]
        );
        assert_eq!(g.breadth_first("MK").count(), 0);
        assert_eq!(g.depth_first("MK").count(), 0);
    }

    #[test]
    fn abandoned_walk_is_harmless() {
        let g = digraph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        let mut walk = g.depth_first("A");
        assert_eq!(walk.next().map(|v| v.id()), Some("A"));
        drop(walk);
        assert_eq!(g.depth_first("A").count(), 3);
    }

    #[test]
    fn walks_undirected_graphs_both_ways() {
        let mut g = UGraph::new();
        for id in ["A", "B", "C"] {
            g.add(WeightedNode::new(id));
        }
        g.connect("B", "A", 1.0).unwrap();
        g.connect("C", "B", 1.0).unwrap();
        assert_eq!(ids(g.breadth_first("A")), vec!["A", "B", "C"]);
    }

    fn check_walk<G: QueryableGraph>(g: &G, root: &str) {
        let dfs: Vec<_> = g.depth_first(root).map(|v| v.id().to_owned()).collect();
        let bfs: Vec<_> = g.breadth_first(root).map(|v| v.id().to_owned()).collect();
        let dfs_set: BTreeSet<_> = dfs.iter().cloned().collect();
        let bfs_set: BTreeSet<_> = bfs.iter().cloned().collect();
        assert_eq!(dfs.len(), dfs_set.len());
        assert_eq!(bfs.len(), bfs_set.len());
        assert_eq!(dfs_set, bfs_set);
        assert_eq!(dfs.first().map(|x| x.as_str()), g.id_of(root).map(|_| root));
        // closed under successors
        for name in dfs_set.iter() {
            let vid = g.id_of(name).unwrap();
            for snk in g.successors(&vid) {
                let snk = g.vertex_by_id(&snk).unwrap().id();
                assert!(dfs_set.contains(snk));
            }
        }
    }

    #[quickcheck]
    fn directed_walks_cover_reachable_vertices_once(ops: Ops) {
        let g = ops.build();
        for root in NAMES {
            check_walk(&g, root);
        }
    }

    #[quickcheck]
    fn undirected_walks_cover_reachable_vertices_once(ops: UOps) {
        let g = ops.build();
        for root in NAMES {
            check_walk(&g, root);
        }
    }
}
