/*!
The nogood store, with two-vertex watching.

# Theory

A nogood records that a partial clique explored before a restart cannot be
extended into anything beating the incumbent: for a nogood `[v₁, …, vₖ]`,
whenever `v₁ … vₖ₋₁` are all in the current clique, `vₖ` may be removed from
the candidate set of the child node.

This is the clause discipline of a SAT solver with the polarity fixed: every
vertex of a nogood plays the role of a negative literal, falsified when the
vertex joins the clique.
As in a SAT solver, scanning every nogood at every node would swamp the
search, so each nogood is watched by two of its vertices, and only the
nogoods watched by the vertex just taken are examined.
When a watched vertex joins the clique the watch tries to relocate to a
vertex outside the clique; when it cannot, every vertex of the nogood except
the other watch is in the clique, and the other watch is forbidden from the
child's candidate set.

# Implementation

Nogoods are stored in a growing vector and addressed by index; the watch
table maps each vertex to the indices of the nogoods it watches.
Relocating a watch during [propagate](WatchDB::propagate) swap-removes the
entry from the list under iteration, mirroring how the candidate list
shrinks during the scan.

Nogoods are posted mid-descent but only start being watched at the root of
the next restart, via [apply_fresh_nogoods](WatchDB::apply_fresh_nogoods):
a unit nogood permanently removes its vertex from the root candidates
instead of being watched, and an empty nogood means the root itself cannot
be improved on, closing the search.
The expander therefore sees a stable watch table throughout any one descent.
*/

use crate::misc::log::targets;
use crate::structures::{graph::Vertex, nogood::Nogood};

/// Index of a nogood in the store.
type NogoodId = usize;

/// The nogood store, with per-vertex watch lists.
pub struct WatchDB {
    /// Every nogood posted during the run.
    nogoods: Vec<Nogood>,

    /// Nogoods posted since the last restart, not yet watched.
    fresh: Vec<NogoodId>,

    /// For each vertex, the nogoods it watches.
    table: Vec<Vec<NogoodId>>,
}

impl WatchDB {
    pub fn new(size: usize) -> Self {
        Self {
            nogoods: Vec::new(),
            fresh: Vec::new(),
            table: vec![Vec::new(); size],
        }
    }

    /// Records `vertices` as a nogood. Watches are set up at the next
    /// restart.
    pub fn post_nogood(&mut self, vertices: Vec<Vertex>) {
        log::trace!(target: targets::NOGOODS, "Nogood of length {}", vertices.len());
        self.nogoods.push(Nogood { vertices });
        self.fresh.push(self.nogoods.len() - 1);
    }

    /// Sets up watches for nogoods posted since the last restart.
    ///
    /// Unit nogoods have their vertex removed from the root candidates via
    /// `remove`.
    /// Returns true on an empty nogood: no clique beats the incumbent, and
    /// the search is over.
    pub fn apply_fresh_nogoods(&mut self, mut remove: impl FnMut(Vertex)) -> bool {
        for id in &self.fresh {
            let nogood = &self.nogoods[*id];
            match nogood.vertices.len() {
                0 => return true,

                1 => remove(nogood.vertices[0]),

                _ => {
                    self.table[nogood.vertices[0] as usize].push(*id);
                    self.table[nogood.vertices[1] as usize].push(*id);
                }
            }
        }
        false
    }

    pub fn clear_fresh_nogoods(&mut self) {
        self.fresh.clear();
    }

    /// Walks the nogoods watched by `vertex`, just taken into the clique.
    ///
    /// `outside_clique` tests whether a vertex is not in the current clique;
    /// `forbid` removes a vertex from the child's candidate set.
    pub fn propagate(
        &mut self,
        vertex: Vertex,
        mut outside_clique: impl FnMut(Vertex) -> bool,
        mut forbid: impl FnMut(Vertex),
    ) {
        let mut watch_list = std::mem::take(&mut self.table[vertex as usize]);

        let mut index = 0;
        let mut length = watch_list.len();

        while index < length {
            let id = watch_list[index];

            let relocated = {
                let nogood = &mut self.nogoods[id];

                // the triggering vertex sits in the first watch position
                if nogood.vertices[0] != vertex {
                    nogood.vertices.swap(0, 1);
                }

                let mut relocated = None;
                for position in 2..nogood.vertices.len() {
                    if outside_clique(nogood.vertices[position]) {
                        nogood.vertices.swap(0, position);
                        relocated = Some(nogood.vertices[0]);
                        break;
                    }
                }
                relocated
            };

            match relocated {
                Some(replacement) => {
                    self.table[replacement as usize].push(id);
                    watch_list.swap_remove(index);
                    length -= 1;
                }

                None => {
                    // everything but the other watch is in the clique
                    forbid(self.nogoods[id].vertices[1]);
                    index += 1;
                }
            }
        }

        self.table[vertex as usize] = watch_list;
    }
}
