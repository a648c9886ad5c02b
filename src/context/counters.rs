/// Counts kept across the restarts of a run.
#[derive(Default)]
pub struct Counters {
    /// Search tree nodes visited.
    pub nodes: u64,

    /// Nodes charged to finding the incumbent.
    pub find_nodes: u64,

    /// Nodes since the incumbent last improved.
    ///
    /// Rolled into `find_nodes` whenever the incumbent improves, so on
    /// termination this is the cost of proving the incumbent best.
    pub prove_nodes: u64,

    /// Iterations of the restart loop, counting the first descent.
    pub restarts: u64,
}
