use crate::{collections::Set, graph::*, Error, Result};
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

pub trait ShortestPath
where
    Self: WeightedGraph + Sized,
{
    /// A cheapest route from `from` to `to`.
    ///
    /// Fails with [Error::MissingVertex] unless both are members of the graph.
    /// An unreachable destination yields a [Path] of infinite weight and no vertex.
    ///
    /// Vertices are settled in FIFO order, each relaxing all of its out-edges.
    /// A settled vertex which is later reached more cheaply is queued again,
    /// so the result is exact for non-negative weights.
    /// Negative weights are not supported.
    fn path<Q>(&self, from: &Q, to: &Q) -> Result<Path<'_, Self::Vertex>>
    where
        Q: Vertex + ?Sized,
    {
        let src = self
            .id_of(from.id())
            .ok_or_else(|| Error::MissingVertex(from.id().to_owned()))?;
        let snk = self
            .id_of(to.id())
            .ok_or_else(|| Error::MissingVertex(to.id().to_owned()))?;

        let mut table: HashMap<VertexId, Row, RandomState> =
            HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for vid in self.iter_vertices() {
            table.insert(vid, Row::default());
        }
        table.insert(
            src,
            Row {
                weight: 0.0,
                previous: Some(src),
            },
        );

        let mut visited = Set::with_capacity(self.vertex_size());
        let mut queue = VecDeque::new();
        queue.push_back(src);
        while let Some(vid) = queue.pop_front() {
            if visited.contains(&vid) {
                continue;
            }
            let here = table[&vid].weight;
            for e in self.out_edges(&vid) {
                let dis = here + e.weight;
                if let Some(row) = table.get_mut(&e.sink) {
                    if dis < row.weight {
                        tracing::trace!(
                            vertex = e.sink.to_raw(),
                            from = row.weight,
                            to = dis,
                            "relaxed"
                        );
                        row.weight = dis;
                        row.previous = Some(vid);
                        visited.remove(&e.sink);
                    }
                }
            }
            visited.add(vid);
            for e in self.out_edges(&vid) {
                if !visited.contains(&e.sink) {
                    queue.push_back(e.sink);
                }
            }
        }
        Ok(trace_back(self, &table, snk))
    }
}

impl<V: WeightedVertex> ShortestPath for UGraph<V> {}

/// Follows predecessors back from `to`, stopping at the source which is its own predecessor.
fn trace_back<'a, G>(
    g: &'a G,
    table: &HashMap<VertexId, Row, RandomState>,
    to: VertexId,
) -> Path<'a, G::Vertex>
where
    G: QueryableGraph,
{
    let weight = table[&to].weight;
    if table[&to].previous.is_none() {
        return Path::new(weight, vec![]);
    }
    let mut vids = vec![to];
    let mut cur = to;
    while let Some(prev) = table[&cur].previous {
        if prev == cur {
            break;
        }
        vids.push(prev);
        cur = prev;
    }
    let vertices = vids
        .iter()
        .rev()
        .filter_map(|vid| g.vertex_by_id(vid))
        .collect();
    Path::new(weight, vertices)
}

/// What is known about the cheapest route to a vertex.
#[derive(Debug, Clone, Copy)]
struct Row {
    weight: f64,
    previous: Option<VertexId>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            weight: f64::INFINITY,
            previous: None,
        }
    }
}
