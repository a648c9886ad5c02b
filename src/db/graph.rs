/*!
The permuted view of the input graph a solve works over.

# Ordering

Vertex ids as supplied by the caller are mapped to dense search indices
through a permutation fixed for the whole run: `order[i]` is the external id
of search index `i`, and `invorder` is its inverse.
Every internal structure --- adjacency rows, candidate sets, cliques,
nogoods --- speaks search indices; results are unpermuted on the way out.

The default criterion sorts by descending degree, with ties broken by
ascending external id.
The colouring procedures consume vertices lowest index first, so high degree
vertices seed the early (large) colour classes, and the expander --- which
branches from the tail of the colour order --- tries the late, tightly
bounded vertices first.

# Adjacency

One bit row per search index; bit `j` of row `i` is set iff `i` and `j` are
adjacent.
Rows are symmetric and the diagonal is clear, as the input graph admits no
self loops.
Rows are built once and read-only thereafter.
*/

use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{Config, VertexOrder};
use crate::generic::bitset::BitSet;
use crate::generic::splitmix::SplitMix64;
use crate::misc::log::targets;
use crate::structures::graph::{Graph, Vertex};

/// The permuted adjacency matrix, with its order and inverse order tables.
pub struct GraphDB<B: BitSet> {
    /// The number of vertices.
    pub size: usize,

    /// Row per search index; bit `j` set iff `i` and `j` are adjacent.
    pub adj: Vec<B>,

    /// `order[i]` is the external id of search index `i`.
    pub order: Vec<Vertex>,

    /// `invorder[external]` is the search index of an external id.
    pub invorder: Vec<Vertex>,
}

impl<B: BitSet> GraphDB<B> {
    /// Builds the permuted view of `graph` under the configured vertex order.
    pub fn new(graph: &Graph, config: &Config) -> Self {
        let size = graph.size();

        let mut order: Vec<Vertex> = (0..size as Vertex).collect();

        let mut degrees = vec![0_usize; size];
        for (u, _) in graph.edges() {
            degrees[u as usize] += 1;
        }

        match config.vertex_order {
            VertexOrder::Degree => {
                order.sort_by(|&a, &b| {
                    degrees[b as usize]
                        .cmp(&degrees[a as usize])
                        .then(a.cmp(&b))
                });
            }

            VertexOrder::Input => {}

            VertexOrder::Random => {
                let mut rng = SplitMix64::from_seed(config.random_seed.to_le_bytes());
                order.shuffle(&mut rng);
            }
        }

        log::trace!(target: targets::ORDERING, "Search order {order:?}");

        let mut invorder = vec![0 as Vertex; size];
        for (index, vertex) in order.iter().enumerate() {
            invorder[*vertex as usize] = index as Vertex;
        }

        let mut adj = vec![B::empty(size); size];
        for (u, v) in graph.edges() {
            adj[invorder[u as usize] as usize].set(invorder[v as usize] as usize);
        }

        Self {
            size,
            adj,
            order,
            invorder,
        }
    }

    /// External ids of a sequence of search indices.
    pub fn unpermute(&self, vertices: &[Vertex]) -> Vec<Vertex> {
        vertices
            .iter()
            .map(|vertex| self.order[*vertex as usize])
            .collect()
    }

    /// External ids of the members of a candidate set.
    pub fn unpermute_set(&self, set: &B) -> Vec<Vertex> {
        let mut remaining = set.clone();
        let mut result = Vec::new();
        while let Some(vertex) = remaining.find_first() {
            remaining.reset(vertex);
            result.push(self.order[vertex]);
        }
        result
    }

    /// External ids paired with clique membership, covering every vertex.
    ///
    /// Clique members come first, in clique order, as the proof layer
    /// requires a full assignment with the selected vertices leading.
    pub fn unpermute_and_finish(&self, clique: &[Vertex]) -> Vec<(Vertex, bool)> {
        let mut result: Vec<(Vertex, bool)> = clique
            .iter()
            .map(|vertex| (self.order[*vertex as usize], true))
            .collect();

        for vertex in 0..self.size as Vertex {
            if !result.iter().any(|(member, _)| *member == vertex) {
                result.push((vertex, false));
            }
        }

        result
    }
}
