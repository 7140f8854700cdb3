use crate::{collections::Set, graph::*};
use ahash::RandomState;
use std::collections::HashMap;

/// Connected components of undirected graphs.
pub trait Components
where
    Self: QueryableGraph + Sized,
{
    /// Labels every vertex by flood-filling from each vertex not yet labelled.
    ///
    /// Labels count up from 0, one per flood-fill, so they range over `0..n` for
    /// `n` components. Which component gets which label is unspecified.
    fn components(&self) -> HashMap<VertexId, usize, RandomState> {
        let mut labels = HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        let mut visited = Set::with_capacity(self.vertex_size());
        let mut count = 0;
        for root in self.iter_vertices() {
            if !visited.add(root) {
                continue;
            }
            let mut stack = vec![root];
            while let Some(vid) = stack.pop() {
                labels.insert(vid, count);
                for nxt in self.successors(&vid) {
                    if visited.add(nxt) {
                        stack.push(nxt);
                    }
                }
            }
            count += 1;
        }
        tracing::debug!(vertices = self.vertex_size(), components = count, "grouped vertices");
        labels
    }
}

impl<V: WeightedVertex> Components for UGraph<V> {}
