/*!
The input graph --- an undirected simple graph, as supplied by the caller.

A graph is built once, read during construction of the
[graph database](crate::db::graph), and otherwise only consulted for vertex
names when writing a proof model.

Vertices are identified by dense external ids `0..size`.
Self loops and out-of-range endpoints are rejected when an edge is added, so
a constructed graph is always simple.

[edges](Graph::edges) yields every undirected edge in both directions.
Degree accumulation and adjacency row construction read only the first
endpoint of each yielded pair, and rely on this.
*/

use crate::generic::bitset::{BitSet, SvoBitSet};
use crate::types::err::BuildError;

/// A vertex identifier --- external, or permuted, depending on context.
pub type Vertex = u32;

/// An undirected simple graph over vertices `0..size`.
pub struct Graph {
    size: usize,
    rows: Vec<SvoBitSet>,
    names: Vec<Option<String>>,
}

impl Graph {
    /// A graph over `size` vertices, with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rows: vec![SvoBitSet::empty(size); size],
            names: vec![None; size],
        }
    }

    /// The number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adds the undirected edge between `u` and `v`.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), BuildError> {
        if u as usize >= self.size {
            return Err(BuildError::VertexOutOfRange(u));
        }
        if v as usize >= self.size {
            return Err(BuildError::VertexOutOfRange(v));
        }
        if u == v {
            return Err(BuildError::SelfLoop(u));
        }

        self.rows[u as usize].set(v as usize);
        self.rows[v as usize].set(u as usize);
        Ok(())
    }

    /// Whether `u` and `v` are adjacent. False for out-of-range vertices.
    pub fn adjacent(&self, u: Vertex, v: Vertex) -> bool {
        if u as usize >= self.size || v as usize >= self.size {
            return false;
        }
        self.rows[u as usize].contains(v as usize)
    }

    /// The number of neighbours of `v`.
    pub fn degree(&self, v: Vertex) -> usize {
        self.rows[v as usize].count()
    }

    /// Every undirected edge, yielded in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        (0..self.size).flat_map(move |u| {
            (0..self.size).filter_map(move |v| {
                if self.rows[u].contains(v) {
                    Some((u as Vertex, v as Vertex))
                } else {
                    None
                }
            })
        })
    }

    /// Names `v` for the proof model.
    pub fn set_vertex_name(&mut self, v: Vertex, name: String) {
        self.names[v as usize] = Some(name);
    }

    /// The name of `v`, defaulting to its decimal id.
    pub fn vertex_name(&self, v: Vertex) -> String {
        match &self.names[v as usize] {
            Some(name) => name.clone(),
            None => v.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = Graph::new(4);
        assert!(graph.add_edge(0, 2).is_ok());

        assert!(graph.adjacent(0, 2));
        assert!(graph.adjacent(2, 0));
        assert!(!graph.adjacent(0, 1));

        let edges: Vec<(Vertex, Vertex)> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 2), (2, 0)]);
    }

    #[test]
    fn malformed_edges_are_rejected() {
        let mut graph = Graph::new(3);
        assert_eq!(graph.add_edge(1, 1), Err(BuildError::SelfLoop(1)));
        assert_eq!(graph.add_edge(0, 3), Err(BuildError::VertexOutOfRange(3)));
        assert_eq!(graph.add_edge(7, 0), Err(BuildError::VertexOutOfRange(7)));
    }

    #[test]
    fn degrees() {
        let mut graph = Graph::new(4);
        assert!(graph.add_edge(0, 1).is_ok());
        assert!(graph.add_edge(0, 2).is_ok());
        assert!(graph.add_edge(0, 3).is_ok());

        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn vertex_names() {
        let mut graph = Graph::new(2);
        graph.set_vertex_name(0, "a".to_string());

        assert_eq!(graph.vertex_name(0), "a");
        assert_eq!(graph.vertex_name(1), "1");
    }
}
