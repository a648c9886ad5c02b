//! A learnt prohibition on extending a partial clique.

use crate::structures::graph::Vertex;

/// An ordered sequence of permuted vertices which cannot all appear in a
/// clique beating the incumbent.
///
/// The first two vertices are the watched positions; the order of the rest
/// carries no meaning and is disturbed as watches relocate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nogood {
    pub vertices: Vec<Vertex>,
}
