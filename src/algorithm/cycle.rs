use crate::{collections::Set, graph::*};

/// Whether a graph contains a cycle.
///
/// *   For [DiGraph], a cycle is a directed one, self-loops included.
/// *   For [UGraph], the two halves of a connection do not form a cycle by themselves.
///     Self-loops and parallel connections do.
pub trait Cyclic {
    fn is_cyclic(&self) -> bool;
}

impl<V: Vertex> Cyclic for DiGraph<V> {
    fn is_cyclic(&self) -> bool {
        has_directed_cycle(self)
    }
}

impl<V: WeightedVertex> Cyclic for UGraph<V> {
    fn is_cyclic(&self) -> bool {
        has_undirected_cycle(self)
    }
}

/// Three-colored depth-first search from every vertex.
///
/// A vertex is "visiting" while it is on the search stack and "visited" once all of
/// its descendants are explored. Meeting a visiting vertex again closes a cycle.
fn has_directed_cycle<G>(g: &G) -> bool
where
    G: QueryableGraph,
{
    let mut visiting = Set::new();
    let mut visited = Set::with_capacity(g.vertex_size());
    for root in g.iter_vertices() {
        if visited.contains(&root) {
            continue;
        }
        visiting.add(root);
        let mut stack = vec![(root, g.successors(&root))];
        while let Some((vid, succ)) = stack.last_mut() {
            match succ.next() {
                Some(nxt) => {
                    if visiting.contains(&nxt) {
                        return true;
                    }
                    if !visited.contains(&nxt) {
                        visiting.add(nxt);
                        let succ = g.successors(&nxt);
                        stack.push((nxt, succ));
                    }
                }
                None => {
                    visiting.remove(vid);
                    visited.add(*vid);
                    stack.pop();
                }
            }
        }
    }
    false
}

struct Frame<'a> {
    vid: VertexId,
    /// Set until the edge back to the parent has been skipped.
    parent: Option<VertexId>,
    out_edges: Box<dyn Iterator<Item = Edge> + 'a>,
}

/// Depth-first search from every unvisited vertex.
///
/// Reaching an already visited vertex closes a cycle, except along the one edge
/// back to where the search came from.
fn has_undirected_cycle<G>(g: &G) -> bool
where
    G: WeightedGraph,
{
    let mut visited = Set::with_capacity(g.vertex_size());
    for root in g.iter_vertices() {
        if !visited.add(root) {
            continue;
        }
        let mut stack = vec![Frame {
            vid: root,
            parent: None,
            out_edges: g.out_edges(&root),
        }];
        while let Some(frame) = stack.last_mut() {
            match frame.out_edges.next() {
                Some(e) => {
                    if frame.parent == Some(e.sink) {
                        frame.parent = None;
                        continue;
                    }
                    let here = frame.vid;
                    if !visited.add(e.sink) {
                        return true;
                    }
                    stack.push(Frame {
                        vid: e.sink,
                        parent: Some(here),
                        out_edges: g.out_edges(&e.sink),
                    });
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed, undirected};
    use quickcheck_macros::quickcheck;

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

    #[test]
    fn directed_ring() {
        let g = digraph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(g.is_cyclic());
    }

    #[test]
    fn directed_self_loop() {
        let g = digraph(&["A"], &[("A", "A")]);
        assert!(g.is_cyclic());
    }

    #[test]
    fn directed_diamond_is_acyclic() {
        let g = digraph(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
        assert!(!g.is_cyclic());
    }

    #[test]
    fn directed_back_and_forth() {
        let mut g = digraph(&["A", "B"], &[("A", "B"), ("B", "A")]);
        assert!(g.is_cyclic());
        g.disconnect("B", "A").unwrap();
        assert!(!g.is_cyclic());
    }

    #[test]
    fn undirected() {
        let mut g = UGraph::new();
        for id in ["A", "B", "C", "D", "E"] {
            g.add(WeightedNode::new(id));
        }
        g.connect("A", "B", 5.0).unwrap();
        g.connect("A", "D", 2.0).unwrap();
        g.connect("D", "E", 1.0).unwrap();
        g.connect("B", "E", 3.0).unwrap();
        g.connect("E", "C", 4.0).unwrap();
        assert!(g.is_cyclic());
        g.disconnect("D", "A");
        assert!(!g.is_cyclic(), "{:?}", g);
    }

    #[test]
    fn undirected_single_connection_is_no_cycle() {
        let mut g = UGraph::new();
        g.add(WeightedNode::new("A"));
        g.add(WeightedNode::new("B"));
        g.connect("A", "B", 1.0).unwrap();
        assert!(!g.is_cyclic());
        g.connect("B", "A", 1.0).unwrap();
        assert!(g.is_cyclic());
    }

    #[test]
    fn undirected_self_loop() {
        let mut g = UGraph::new();
        g.add(WeightedNode::new("A"));
        g.connect("A", "A", 1.0).unwrap();
        assert!(g.is_cyclic());
    }

    #[quickcheck]
    fn directed_agrees_with_petgraph(ops: directed::Ops) {
        let g = ops.build();
        let (pg, _) = directed::to_petgraph(&g);
        assert_eq!(g.is_cyclic(), petgraph::algo::is_cyclic_directed(&pg));
    }

    #[quickcheck]
    fn undirected_agrees_with_petgraph(ops: undirected::UOps) {
        let g = ops.build();
        let (pg, _) = undirected::to_petgraph(&g);
        assert_eq!(g.is_cyclic(), petgraph::algo::is_cyclic_undirected(&pg));
    }
}
