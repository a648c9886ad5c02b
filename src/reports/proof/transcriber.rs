/*!
A reference proof sink: one line per model item or search event.

Lines are short opcodes followed by space-separated fields, with vertex lists
bracketed.
Steps are buffered and flushed to the sink when the model is finalised, when
a solution is posted, and when the proof finishes --- a run which is aborted
mid-search may leave steps unflushed, and a caller who cares can
[flush](Transcriber::flush) explicitly.

The format is deliberately plain so a checker (or a test) can replay a run
by reading lines.
*/

use std::fmt::Write as _;
use std::io::Write;

use super::Proof;
use crate::structures::graph::Vertex;
use crate::types::err::ProofError;

/// Writes each proof event as a line to an underlying sink.
pub struct Transcriber<W: Write> {
    sink: W,

    /// Buffered steps not yet written to the sink.
    step_buffer: Vec<String>,

    model_finalised: bool,
}

impl<W: Write> Transcriber<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            step_buffer: Vec::new(),
            model_finalised: false,
        }
    }

    fn step(&mut self, step: String) {
        self.step_buffer.push(step);
    }

    /// Flushes any buffered steps to the sink.
    pub fn flush(&mut self) -> Result<(), ProofError> {
        for step in &self.step_buffer {
            writeln!(self.sink, "{step}")?;
        }
        self.step_buffer.clear();
        self.sink.flush()?;
        Ok(())
    }

    fn write_vertices(step: &mut String, vertices: &[Vertex]) {
        let _ = write!(step, "[");
        for (position, vertex) in vertices.iter().enumerate() {
            if position > 0 {
                let _ = write!(step, " ");
            }
            let _ = write!(step, "{vertex}");
        }
        let _ = write!(step, "]");
    }
}

impl<W: Write> Proof for Transcriber<W> {
    fn has_clique_model(&self) -> bool {
        self.model_finalised
    }

    fn create_binary_variable(&mut self, vertex: Vertex, name: &str) -> Result<(), ProofError> {
        self.step(format!("var {vertex} {name}"));
        Ok(())
    }

    fn create_objective(&mut self, size: usize, decide: Option<usize>) -> Result<(), ProofError> {
        match decide {
            Some(target) => self.step(format!("objective {size} target {target}")),
            None => self.step(format!("objective {size}")),
        }
        Ok(())
    }

    fn create_non_edge_constraint(&mut self, p: Vertex, q: Vertex) -> Result<(), ProofError> {
        self.step(format!("nonedge {p} {q}"));
        Ok(())
    }

    fn finalise_model(&mut self) -> Result<(), ProofError> {
        self.step("end model".to_string());
        self.model_finalised = true;
        self.flush()
    }

    fn expanding(
        &mut self,
        depth: usize,
        clique: &[Vertex],
        candidates: &[Vertex],
    ) -> Result<(), ProofError> {
        let mut step = format!("expand {depth} ");
        Self::write_vertices(&mut step, clique);
        let _ = write!(step, " ");
        Self::write_vertices(&mut step, candidates);
        self.step(step);
        Ok(())
    }

    fn unexpanding(&mut self, depth: usize, clique: &[Vertex]) -> Result<(), ProofError> {
        let mut step = format!("unexpand {depth} ");
        Self::write_vertices(&mut step, clique);
        self.step(step);
        Ok(())
    }

    fn colour_bound(&mut self, classes: &[Vec<Vertex>]) -> Result<(), ProofError> {
        let mut step = "bound ".to_string();
        for class in classes {
            Self::write_vertices(&mut step, class);
        }
        self.step(step);
        Ok(())
    }

    fn start_level(&mut self, level: usize) -> Result<(), ProofError> {
        self.step(format!("level {level}"));
        Ok(())
    }

    fn forget_level(&mut self, level: usize) -> Result<(), ProofError> {
        self.step(format!("forget {level}"));
        Ok(())
    }

    fn backtrack_from_binary_variables(&mut self, clique: &[Vertex]) -> Result<(), ProofError> {
        let mut step = "backtrack ".to_string();
        Self::write_vertices(&mut step, clique);
        self.step(step);
        Ok(())
    }

    fn new_incumbent(&mut self, assignment: &[(Vertex, bool)]) -> Result<(), ProofError> {
        let mut step = "incumbent".to_string();
        for (vertex, selected) in assignment {
            let _ = write!(step, " {vertex}={}", if *selected { 1 } else { 0 });
        }
        self.step(step);
        Ok(())
    }

    fn post_solution(&mut self, clique: &[Vertex]) -> Result<(), ProofError> {
        let mut step = "solution ".to_string();
        Self::write_vertices(&mut step, clique);
        self.step(step);
        self.flush()
    }

    fn finish_unsat_proof(&mut self) -> Result<(), ProofError> {
        self.step("end proof".to_string());
        self.flush()
    }
}
