use crate::{algorithm::Cyclic, collections::Set, graph::*, Error, Result};

pub trait TopologicalSort
where
    Self: QueryableGraph + Cyclic + Sized,
{
    /// Orders vertices so that every edge points from an earlier vertex to a later one.
    ///
    /// Fails with [Error::CyclicGraph] if there is no such order.
    /// Among vertices not constrained by edges, the order is unspecified.
    fn toposort(&self) -> Result<Vec<&Self::Vertex>> {
        if self.is_cyclic() {
            tracing::debug!(vertices = self.vertex_size(), "refused to sort a cyclic graph");
            return Err(Error::CyclicGraph);
        }
        // vertices in post-order, i.e., every vertex after all of its descendants
        let mut finished = Vec::with_capacity(self.vertex_size());
        let mut visited = Set::with_capacity(self.vertex_size());
        for root in self.iter_vertices() {
            if !visited.add(root) {
                continue;
            }
            let mut stack = vec![(root, self.successors(&root))];
            while let Some((vid, succ)) = stack.last_mut() {
                match succ.next() {
                    Some(nxt) => {
                        if visited.add(nxt) {
                            let succ = self.successors(&nxt);
                            stack.push((nxt, succ));
                        }
                    }
                    None => {
                        finished.push(*vid);
                        stack.pop();
                    }
                }
            }
        }
        let res = finished
            .iter()
            .rev()
            .filter_map(|vid| self.vertex_by_id(vid))
            .collect();
        Ok(res)
    }
}

impl<V: Vertex> TopologicalSort for DiGraph<V> {}
