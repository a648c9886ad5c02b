/*!
The restart loop, and the solve entry point.

# Overview

[run](GenericContext::run) owns everything which survives a restart: the
root candidate set, the incumbent, the counters, and the nogood store.
Each iteration applies the nogoods posted during the previous descent at the
root --- unit nogoods permanently shrink the root candidates, and an empty
nogood ends the run --- then hands a fresh copy of the root candidates to
the [expander](crate::procedures::expand).

```none
    +-------------------------------------------+
    | apply fresh nogoods  --- empty? --> done  |
    +-------------------------------------------+
                        |
                        v
    +-------------------------------------------+
    | expand from the root                      |
    |   Complete / DecidedTrue / Aborted: done  |
    |   Restart: tell the schedule, loop        |
    +-------------------------------------------+
```

On termination the incumbent is unpermuted into external vertex ids and
packaged with the counters.

[solve] wraps the loop for the common case, writing the proof model first
when a proof sink is configured.
*/

use std::collections::BTreeSet;

use crate::{
    config::Params,
    context::{Context, GenericContext},
    generic::bitset::BitSet,
    misc::log::targets,
    procedures::expand::SearchResult,
    reports::{CliqueResult, Report},
    structures::graph::{Graph, Vertex},
    types::err::ErrorKind,
};

impl<B: BitSet> GenericContext<B> {
    /// Runs the search to a conclusion, restarting as the schedule directs.
    pub fn run(&mut self) -> Result<CliqueResult, ErrorKind> {
        // seed one below the target, so a clique of the target size is an
        // improvement
        if let Some(target) = self.config.decide {
            self.incumbent.value = target.saturating_sub(1);
        }

        let size = self.graph_db.size;

        let mut p = B::empty(size);
        for index in 0..size {
            p.set(index);
        }

        let mut scratch = std::mem::take(&mut self.scratch);

        let mut done = false;
        let mut report = Report::Complete;

        while !done {
            self.counters.restarts += 1;

            done = self.watch_db.apply_fresh_nogoods(|v| p.reset(v as usize));
            if done {
                break;
            }
            self.watch_db.clear_fresh_nogoods();

            let mut root_p = p.clone();
            let mut clique: Vec<Vertex> = Vec::new();

            match self.expand(0, &mut clique, &mut root_p, &mut scratch) {
                Ok(SearchResult::Complete) => done = true,

                Ok(SearchResult::DecidedTrue) => {
                    report = Report::DecidedTrue;
                    done = true;
                }

                Ok(SearchResult::Aborted) => {
                    report = Report::Aborted;
                    done = true;
                }

                Ok(SearchResult::Restart) => {
                    log::info!(target: targets::RESTARTS, "Restart {}", self.counters.restarts);
                }

                Err(e) => {
                    self.scratch = scratch;
                    return Err(e);
                }
            }

            self.restarts_schedule.did_a_restart();
        }

        self.scratch = scratch;

        // an optimality proof always concludes; a decide proof concludes
        // only when no clique of the target size was found
        if let Some(proof) = &mut self.proof {
            if self.config.decide.is_none() || self.incumbent.clique.is_empty() {
                proof.finish_unsat_proof()?;
            }
        }

        let clique: BTreeSet<Vertex> = self
            .incumbent
            .clique
            .iter()
            .map(|vertex| self.graph_db.order[*vertex as usize])
            .collect();

        let mut extra_stats = Vec::new();
        if self.restarts_schedule.might_restart() {
            extra_stats.push(format!("restarts = {}", self.counters.restarts));
        }

        Ok(CliqueResult {
            clique,
            report,
            nodes: self.counters.nodes,
            find_nodes: self.counters.find_nodes,
            prove_nodes: self.counters.prove_nodes,
            extra_stats,
        })
    }
}

/// Finds a maximum clique of `graph` --- or, with a decide target
/// configured, decides whether a clique of the target size exists.
///
/// When a proof sink is present and has no model yet, the clique model is
/// written before search begins: a binary variable per vertex, the
/// objective, and a constraint per non-adjacent pair.
///
/// # Example
///
/// ```rust
/// # use marten_clique::config::Params;
/// # use marten_clique::structures::graph::Graph;
/// let mut graph = Graph::new(5);
/// for (u, v) in [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)] {
///     assert!(graph.add_edge(u, v).is_ok());
/// }
///
/// let result = marten_clique::solve(&graph, Params::default()).unwrap();
/// assert_eq!(result.clique.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn solve(graph: &Graph, mut params: Params) -> Result<CliqueResult, ErrorKind> {
    if let Some(proof) = &mut params.proof {
        if !proof.has_clique_model() {
            for q in 0..graph.size() as Vertex {
                proof.create_binary_variable(q, &graph.vertex_name(q))?;
            }

            proof.create_objective(graph.size(), params.config.decide)?;

            for p in 0..graph.size() as Vertex {
                for q in 0..p {
                    if !graph.adjacent(p, q) {
                        proof.create_non_edge_constraint(p, q)?;
                    }
                }
            }

            proof.finalise_model()?;
        }
    }

    let mut context = Context::new(graph, params);
    context.run()
}
