/*!
Error types used in the library.

- Build errors are external, and surface malformed input before any search
  begins.
- Proof errors are fatal, and propagate out of a solve without any cleanup
  beyond release of the search state.

Internal control flow of the search (restarts, aborts, decided instances)
is never expressed as an error.
*/

use crate::structures::graph::Vertex;

/// A union of varied error kinds.
#[derive(Debug)]
pub enum ErrorKind {
    /// An error when building a graph or context.
    Build(BuildError),

    /// An error from the proof sink.
    Proof(ProofError),
}

/// Noted errors when building a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An edge from a vertex to itself.
    SelfLoop(Vertex),

    /// An edge endpoint outside the vertex range of the graph.
    VertexOutOfRange(Vertex),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors from writing a proof.
#[derive(Debug)]
pub enum ProofError {
    /// The underlying sink failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for ProofError {
    fn from(e: std::io::Error) -> Self {
        ProofError::Io(e)
    }
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}
