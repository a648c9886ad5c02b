/*!
The context --- the state a solve owns across restarts.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to the bit set representation of
candidate sets, as the right representation depends on the size of the
graph.
[Context] fixes the parameter to [SvoBitSet], which is the sensible choice
unless you know better.

A context is built from a [graph](crate::structures::graph::Graph) and
[Params] with [new](GenericContext::new), and driven to a
[CliqueResult](crate::reports::CliqueResult) with
[run](GenericContext::run).
For the common case, [solve](crate::procedures::solve::solve) does both.

# Example

```rust
# use marten_clique::config::Params;
# use marten_clique::context::Context;
# use marten_clique::reports::Report;
# use marten_clique::structures::graph::Graph;
let mut graph = Graph::new(4);
for (u, v) in [(0, 1), (0, 2), (1, 2), (2, 3)] {
    assert!(graph.add_edge(u, v).is_ok());
}

let mut context = Context::new(&graph, Params::default());
let result = context.run().unwrap();

assert_eq!(result.report, Report::Complete);
assert_eq!(result.clique.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::{ColourClassOrder, Config, Params},
    db::{graph::GraphDB, watches::WatchDB},
    generic::bitset::{BitSet, SvoBitSet},
    misc::{log::targets, timeout::Timeout},
    reports::proof::Proof,
    schedules::RestartsSchedule,
    structures::graph::{Graph, Vertex},
};

/// The best clique found so far. Monotonic over a run.
#[derive(Default)]
pub struct Incumbent {
    /// The size of the clique.
    pub value: usize,

    /// The clique, in search indices.
    pub clique: Vec<Vertex>,
}

impl Incumbent {
    /// Notes `clique` if it improves on the best so far, rolling the proof
    /// effort spent since the last improvement into the find count.
    pub fn update(&mut self, clique: &[Vertex], counters: &mut Counters) {
        if clique.len() > self.value {
            counters.find_nodes += counters.prove_nodes;
            counters.prove_nodes = 0;
            self.value = clique.len();
            self.clique = clique.to_vec();
            log::info!(target: targets::INCUMBENT, "Clique of size {}", self.value);
        }
    }
}

/// A context generic over the bit set representation of candidate sets.
pub struct GenericContext<B: BitSet> {
    /// The configuration of the run.
    pub config: Config,

    /// Counters for the run.
    pub counters: Counters,

    /// The permuted adjacency database.
    /// See [db::graph](crate::db::graph) for details.
    pub graph_db: GraphDB<B>,

    /// The nogood store.
    /// See [db::watches](crate::db::watches) for details.
    pub watch_db: WatchDB,

    /// The best clique found so far.
    pub incumbent: Incumbent,

    /// Decides when a descent is abandoned for a fresh one.
    pub restarts_schedule: Box<dyn RestartsSchedule>,

    /// Polled for cooperative interruption.
    pub timeout: Box<dyn Timeout>,

    /// An optional sink for proof events.
    pub proof: Option<Box<dyn Proof>>,

    /// Scratch for the colouring procedures: one frame per depth, acquired
    /// once here and threaded through the recursion by sub-slicing.
    pub(crate) scratch: Vec<u32>,

    /// Words of scratch per expansion frame.
    pub(crate) frame_len: usize,
}

/// A context over the default bit set.
pub type Context = GenericContext<SvoBitSet>;

impl<B: BitSet> GenericContext<B> {
    /// Builds the permuted view of `graph` and acquires the search state.
    pub fn new(graph: &Graph, params: Params) -> Self {
        let Params {
            config,
            restarts_schedule,
            timeout,
            proof,
        } = params;

        let size = graph.size();
        let graph_db = GraphDB::new(graph, &config);

        // watch tables are only worth their memory when restarts may happen
        let watch_db = match restarts_schedule.might_restart() {
            true => WatchDB::new(size),
            false => WatchDB::new(0),
        };

        // a frame holds the colour order and bounds, and for the deferral
        // variant a third region for withdrawn singletons
        let frame_len = match config.colour_class_order {
            ColourClassOrder::SingletonsFirst => 3 * size,
            _ => 2 * size,
        };

        Self {
            config,
            counters: Counters::default(),
            graph_db,
            watch_db,
            incumbent: Incumbent::default(),
            restarts_schedule,
            timeout,
            proof,
            scratch: vec![0; frame_len * (size + 1)],
            frame_len,
        }
    }
}
