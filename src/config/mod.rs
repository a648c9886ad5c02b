/*!
Configuration of a context.

Plain options live in [Config], which is cheap to clone and carries a
[default](Config::default) tuned for deterministic results on a library of
tests.

The collaborators a run consumes --- the restart schedule, the timeout, and
the optional proof sink --- are bundled alongside a config in [Params] and
are moved into the context at construction.
*/

use crate::misc::timeout::{Timeout, WallClockTimeout};
use crate::reports::proof::Proof;
use crate::schedules::{NoRestartsSchedule, RestartsSchedule};

/// How vertices are permuted before search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Descending degree, ties broken by ascending vertex id.
    #[default]
    Degree,

    /// The order the graph supplied.
    Input,

    /// A seeded random shuffle.
    Random,
}

/// How the colouring procedures order coloured vertices for branching.
///
/// All three produce the same greedy colour classes; they differ only in the
/// order vertices are emitted, and so in the order the expander branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColourClassOrder {
    /// Emit vertices in the order they were coloured.
    #[default]
    ColourOrder,

    /// Withdraw colour classes of exactly one vertex and re-emit them at the
    /// tail, each as a fresh colour --- the expander branches from the tail,
    /// so singletons are tried first.
    SingletonsFirst,

    /// Emit whole colour classes in descending size order.
    Sorted,
}

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// How vertices are permuted before search.
    pub vertex_order: VertexOrder,

    /// How the colouring procedures order colour classes for branching.
    pub colour_class_order: ColourClassOrder,

    /// If set, stop as soon as a clique of this size is known to exist.
    pub decide: Option<usize>,

    /// Seed for [VertexOrder::Random].
    pub random_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vertex_order: VertexOrder::default(),
            colour_class_order: ColourClassOrder::default(),
            decide: None,
            random_seed: 0,
        }
    }
}

/// A configuration together with the collaborators a run consumes.
pub struct Params {
    /// Plain options.
    pub config: Config,

    /// Decides when a descent is abandoned for a fresh one.
    pub restarts_schedule: Box<dyn RestartsSchedule>,

    /// Polled for cooperative interruption.
    pub timeout: Box<dyn Timeout>,

    /// An optional sink for proof events.
    pub proof: Option<Box<dyn Proof>>,
}

impl Default for Params {
    /// No restarts, no timeout, no proof.
    fn default() -> Self {
        Params {
            config: Config::default(),
            restarts_schedule: Box::new(NoRestartsSchedule),
            timeout: Box::new(WallClockTimeout::unlimited()),
            proof: None,
        }
    }
}
