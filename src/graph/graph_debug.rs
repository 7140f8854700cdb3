use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// The output is meant for humans and may change at any time.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    graph: &'a G,
    indent: Indention,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            indent: Indention {
                spaces: 0,
                step: 2,
            },
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.indent = Indention { spaces: init, step };
        self
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph + DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = if G::DIRECTED_OR_NOT { "->" } else { "--" };
        let indent = self.indent.one_more_level();
        for vid in self.graph.iter_vertices() {
            if let Some(vert) = self.graph.vertex_by_id(&vid) {
                writeln!(f, "{}{}", self.indent, vert.repr())?;
            }
            for snk in self.graph.successors(&vid) {
                if let Some(vert) = self.graph.vertex_by_id(&snk) {
                    writeln!(f, "{}{} {}", indent, dir, vert.repr())?;
                }
            }
        }
        Ok(())
    }
}

struct Indention {
    spaces: usize,
    step: usize,
}

impl std::fmt::Display for Indention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.spaces {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl Indention {
    fn one_more_level(&self) -> Self {
        Self {
            spaces: self.spaces + self.step,
            step: self.step,
        }
    }
}
