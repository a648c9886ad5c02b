/*!
Proof logging for a run.

A run may be asked to justify its answer to an external audit.
The justification has two parts:

- A *model*, written once before search begins: a binary variable per vertex,
  an objective over those variables, and a constraint per non-adjacent pair
  stating that at most one of the pair may be selected.
- A stream of *search events*, emitted by the expander as it works: node
  expansions, colour-class bound witnesses, incumbent updates, level
  bookkeeping, and a final step closing the argument that nothing better
  than the incumbent exists.

The sequence of events is part of the contract: an external checker replays
them against the model, so implementations of [Proof] must be prepared for
exactly the order the expander produces, and the expander must not reorder
or elide events.
Both model and events use external vertex ids; the search permutation is
invisible to the proof layer.

A failure to record an event is fatal to the run and propagates out of
[solve](crate::procedures::solve::solve) as an
[ErrorKind::Proof](crate::types::err::ErrorKind).

Runs which do not need a proof leave the sink unset and pay only an optional
check per event site.
[Transcriber] is a reference sink which writes one line per event.
*/

pub mod transcriber;
pub use transcriber::Transcriber;

use crate::structures::graph::Vertex;
use crate::types::err::ProofError;

/// A sink for the proof of a run.
pub trait Proof {
    /// Whether the model has already been written.
    fn has_clique_model(&self) -> bool;

    /// Introduces the binary variable selecting `vertex` into the model.
    fn create_binary_variable(&mut self, vertex: Vertex, name: &str) -> Result<(), ProofError>;

    /// States the objective over `size` variables, and the decide target, if
    /// any.
    fn create_objective(&mut self, size: usize, decide: Option<usize>) -> Result<(), ProofError>;

    /// At most one of the non-adjacent pair `p`, `q` may be selected.
    fn create_non_edge_constraint(&mut self, p: Vertex, q: Vertex) -> Result<(), ProofError>;

    /// Completes the model.
    fn finalise_model(&mut self) -> Result<(), ProofError>;

    /// A node at `depth` is expanded, with the current `clique` and the
    /// `candidates` still eligible to extend it.
    fn expanding(
        &mut self,
        depth: usize,
        clique: &[Vertex],
        candidates: &[Vertex],
    ) -> Result<(), ProofError>;

    /// The node at `depth` has been fully explored.
    fn unexpanding(&mut self, depth: usize, clique: &[Vertex]) -> Result<(), ProofError>;

    /// The remaining candidates, grouped into colour `classes`, cannot beat
    /// the incumbent.
    fn colour_bound(&mut self, classes: &[Vec<Vertex>]) -> Result<(), ProofError>;

    /// Subsequent derivations hold at `level`.
    fn start_level(&mut self, level: usize) -> Result<(), ProofError>;

    /// Derivations made at `level` may be discarded.
    fn forget_level(&mut self, level: usize) -> Result<(), ProofError>;

    /// A backtrack away from the assignment selecting `clique`.
    fn backtrack_from_binary_variables(&mut self, clique: &[Vertex]) -> Result<(), ProofError>;

    /// A new best clique; `assignment` gives a value to every vertex.
    fn new_incumbent(&mut self, assignment: &[(Vertex, bool)]) -> Result<(), ProofError>;

    /// Decide mode found a solution.
    fn post_solution(&mut self, clique: &[Vertex]) -> Result<(), ProofError>;

    /// Closes the argument that nothing better than the incumbent exists.
    fn finish_unsat_proof(&mut self) -> Result<(), ProofError>;
}
