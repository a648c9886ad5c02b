/*!
The branch and bound recursion.

# Overview

Each call owns one node of the search tree: a partial clique `clique` and a
candidate set `p` of vertices adjacent to everything in it.
The node colours `p` (see [colour](crate::procedures::colour)), then walks
the emitted order from the tail:

```none
        +-----------------------------------------+
        | colour p into p_order / p_bounds        |
        +-----------------------------------------+
                            |
              for n from p_end - 1 down to 0
                            |
        timeout? ----------------------> Aborted
                            |
        |clique| + bound(n) ≤ incumbent ---> stop the loop
                            |                (nothing left can win)
        bound(n) = n + 1 ------------------> the prefix is a clique;
                            |                take it whole, stop the loop
                            v
        take p_order[n]: filter p by adjacency, propagate nogoods,
        recurse into the child; then drop p_order[n] and continue
```

The bound cut is sound because every colouring variant emits non-decreasing
bounds: a failure at position `n` rules out every earlier position too.

# Restarts

After the loop the restart schedule is told a backtrack happened and may
request a restart.
The node then posts its partial clique as a nogood and unwinds with
[SearchResult::Restart]; each ancestor on the way out additionally posts one
nogood per already-dropped branch, so the abandoned part of the subtree is
never explored again.

# Decide mode

When a target size is configured the incumbent is seeded one below it, so
any clique of the target size registers as an improvement, and the recursion
short-circuits with [SearchResult::DecidedTrue] the moment one exists.
*/

use crate::{
    config::ColourClassOrder,
    context::GenericContext,
    generic::bitset::BitSet,
    misc::log::targets,
    structures::graph::Vertex,
    types::err::ErrorKind,
};

/// How a descent concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchResult {
    /// The timeout fired.
    Aborted,

    /// The schedule requested a restart; nogoods were posted on the way up.
    Restart,

    /// The subtree was exhausted.
    Complete,

    /// Decide mode reached its target.
    DecidedTrue,
}

impl<B: BitSet> GenericContext<B> {
    /// Expands one node: `clique` is the partial clique, `p` the candidate
    /// set, and `scratch` the unused tail of the colouring buffer.
    ///
    /// `clique` and `p` are restored to their incoming state on every exit
    /// path except [SearchResult::Aborted] and [SearchResult::DecidedTrue],
    /// which unwind immediately.
    pub(crate) fn expand(
        &mut self,
        depth: usize,
        clique: &mut Vec<Vertex>,
        p: &mut B,
        scratch: &mut [u32],
    ) -> Result<SearchResult, ErrorKind> {
        self.counters.nodes += 1;
        self.counters.prove_nodes += 1;
        log::trace!(target: targets::EXPAND, "Node {} at depth {depth}", self.counters.nodes);

        if let Some(proof) = &mut self.proof {
            proof.expanding(
                depth,
                &self.graph_db.unpermute(clique),
                &self.graph_db.unpermute_set(p),
            )?;
        }

        let size = self.graph_db.size;
        let (frame, rest) = scratch.split_at_mut(self.frame_len);
        let (p_order, tail) = frame.split_at_mut(size);
        let (p_bounds, defer) = tail.split_at_mut(size.min(tail.len()));

        let p_end = match self.config.colour_class_order {
            ColourClassOrder::ColourOrder => self.colour_class_order(p, p_order, p_bounds),
            ColourClassOrder::SingletonsFirst => {
                self.colour_class_order_singletons_first(p, p_order, p_bounds, defer)
            }
            ColourClassOrder::Sorted => self.colour_class_order_sorted(p, p_order, p_bounds),
        };

        for n in (0..p_end).rev() {
            if self.timeout.should_abort() {
                return Ok(SearchResult::Aborted);
            }

            // bounds are non-decreasing, so a failure here fails everywhere
            if clique.len() + p_bounds[n] as usize <= self.incumbent.value {
                if let Some(proof) = &mut self.proof {
                    let mut classes: Vec<Vec<Vertex>> = Vec::new();
                    for v in 0..=n {
                        if v == 0 || p_bounds[v - 1] != p_bounds[v] {
                            classes.push(Vec::new());
                        }
                        if let Some(class) = classes.last_mut() {
                            class.push(self.graph_db.order[p_order[v] as usize]);
                        }
                    }
                    proof.colour_bound(&classes)?;
                }
                break;
            }

            // n + 1 colours over n + 1 vertices: the prefix is a clique
            if p_bounds[n] as usize == n + 1 {
                let saved = clique.len();
                for m in (0..=n).rev() {
                    clique.push(p_order[m]);
                }
                self.incumbent.update(clique, &mut self.counters);

                if self.config.decide.is_none() {
                    if let Some(proof) = &mut self.proof {
                        proof.start_level(0)?;
                        proof.new_incumbent(&self.graph_db.unpermute_and_finish(clique))?;
                        proof.start_level(depth + 1)?;
                    }
                }

                if let Some(target) = self.config.decide {
                    if self.incumbent.value >= target {
                        if let Some(proof) = &mut self.proof {
                            proof.post_solution(&self.graph_db.unpermute(clique))?;
                        }
                        return Ok(SearchResult::DecidedTrue);
                    }
                }

                clique.truncate(saved);
                break;
            }

            let v = p_order[n];

            // consider taking v
            clique.push(v);

            if let Some(target) = self.config.decide {
                self.incumbent.update(clique, &mut self.counters);
                if self.incumbent.value >= target {
                    if let Some(proof) = &mut self.proof {
                        proof.post_solution(&self.graph_db.unpermute(clique))?;
                    }
                    return Ok(SearchResult::DecidedTrue);
                }
            }

            let mut new_p = p.clone();
            new_p.intersect_with(&self.graph_db.adj[v as usize]);

            if self.restarts_schedule.might_restart() {
                self.watch_db.propagate(
                    v,
                    |w| !clique.contains(&w),
                    |w| new_p.reset(w as usize),
                );
            }

            if let Some(proof) = &mut self.proof {
                proof.start_level(depth + 1)?;
            }

            if new_p.any() {
                match self.expand(depth + 1, clique, &mut new_p, rest)? {
                    SearchResult::Aborted => return Ok(SearchResult::Aborted),

                    SearchResult::DecidedTrue => return Ok(SearchResult::DecidedTrue),

                    SearchResult::Complete => {}

                    SearchResult::Restart => {
                        // restore the clique before posting nogoods
                        clique.pop();

                        // one nogood per branch already dropped at this node
                        for m in ((n + 1)..p_end).rev() {
                            clique.push(p_order[m]);
                            self.watch_db.post_nogood(clique.clone());
                            clique.pop();
                        }

                        return Ok(SearchResult::Restart);
                    }
                }
            } else {
                self.incumbent.update(clique, &mut self.counters);
                if self.config.decide.is_none() {
                    if let Some(proof) = &mut self.proof {
                        proof.start_level(0)?;
                        proof.new_incumbent(&self.graph_db.unpermute_and_finish(clique))?;
                        proof.start_level(depth + 1)?;
                    }
                }
            }

            if let Some(proof) = &mut self.proof {
                proof.start_level(depth)?;
                proof.backtrack_from_binary_variables(&self.graph_db.unpermute(clique))?;
                proof.forget_level(depth + 1)?;
            }

            // now consider not taking v
            clique.pop();
            p.reset(v as usize);
        }

        if let Some(proof) = &mut self.proof {
            proof.unexpanding(depth, &self.graph_db.unpermute(clique))?;
        }

        self.restarts_schedule.did_a_backtrack();
        if self.restarts_schedule.should_restart() {
            self.watch_db.post_nogood(clique.clone());
            Ok(SearchResult::Restart)
        } else {
            Ok(SearchResult::Complete)
        }
    }
}
