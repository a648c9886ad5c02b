/*!
Reports from a run.
*/

use std::collections::BTreeSet;

use crate::structures::graph::Vertex;

pub mod proof;

/// How a run concluded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The search space was exhausted.
    ///
    /// The incumbent is a maximum clique --- or, in decide mode, no clique of
    /// the target size exists and the incumbent is empty.
    Complete,

    /// Decide mode found a clique of the target size.
    DecidedTrue,

    /// The timeout fired; the incumbent is the best clique seen so far.
    Aborted,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "Complete"),
            Self::DecidedTrue => write!(f, "DecidedTrue"),
            Self::Aborted => write!(f, "Aborted"),
        }
    }
}

/// The outcome of a run, in external vertex ids.
#[derive(Debug)]
pub struct CliqueResult {
    /// The largest clique found.
    pub clique: BTreeSet<Vertex>,

    /// How the run concluded.
    pub report: Report,

    /// Search tree nodes visited.
    pub nodes: u64,

    /// Nodes charged to finding the incumbent.
    pub find_nodes: u64,

    /// Nodes since the incumbent last improved, charged to proving it best.
    pub prove_nodes: u64,

    /// `key = value` strings for anything schedule specific.
    pub extra_stats: Vec<String>,
}
