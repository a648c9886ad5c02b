/*!
Greedy colouring, as an upper bound on extendability.

# Theory

A proper colouring of the candidate set gives each colour class at most one
member of any clique, so the number of colours bounds the clique number of
the induced subgraph.
More usefully, the bound holds prefix-wise: writing coloured vertices out in
an order where the bound recorded against each vertex is non-decreasing, the
bound at position `i` caps any clique drawn from the first `i + 1` emitted
vertices.
The [expander](crate::procedures::expand) branches from the tail of the
emitted order and stops the whole loop at the first position whose bound
cannot beat the incumbent.

# The variants

All three procedures build identical colour classes: take the lowest
uncoloured search index, open a class, and sweep the remaining uncoloured
vertices lowest-first, moving each non-adjacent vertex into the class.
They differ only in emission:

- [colour_class_order](crate::context::GenericContext::colour_class_order)
  emits vertices as they are coloured.
- [colour_class_order_singletons_first](crate::context::GenericContext::colour_class_order_singletons_first)
  withdraws classes which end up with a single member and re-emits them at
  the tail, each as its own fresh colour, so the expander tries them first.
- [colour_class_order_sorted](crate::context::GenericContext::colour_class_order_sorted)
  emits whole classes in descending size order, renumbering colours in
  emission order.

Each writes parallel `p_order` / `p_bounds` arrays into a caller-provided
scratch frame and returns the number of vertices coloured.
*/

use crate::{
    context::GenericContext,
    generic::bitset::BitSet,
    structures::graph::Vertex,
};

impl<B: BitSet> GenericContext<B> {
    pub(crate) fn colour_class_order(
        &self,
        p: &B,
        p_order: &mut [u32],
        p_bounds: &mut [u32],
    ) -> usize {
        let mut p_left = p.clone();
        let mut colour = 0_u32;
        let mut p_end = 0_usize;

        while p_left.any() {
            colour += 1;
            let mut q = p_left.clone();

            while let Some(v) = q.find_first() {
                p_left.reset(v);
                q.reset(v);

                // neighbours of v cannot share its colour
                q.intersect_with_complement(&self.graph_db.adj[v]);

                p_bounds[p_end] = colour;
                p_order[p_end] = v as Vertex;
                p_end += 1;
            }
        }

        p_end
    }

    pub(crate) fn colour_class_order_singletons_first(
        &self,
        p: &B,
        p_order: &mut [u32],
        p_bounds: &mut [u32],
        defer: &mut [u32],
    ) -> usize {
        let mut p_left = p.clone();
        let mut colour = 0_u32;
        let mut p_end = 0_usize;

        let mut deferred = 0_usize;

        while p_left.any() {
            colour += 1;
            let mut q = p_left.clone();

            let mut class_size = 0_usize;
            while let Some(v) = q.find_first() {
                p_left.reset(v);
                q.reset(v);

                q.intersect_with_complement(&self.graph_db.adj[v]);

                p_bounds[p_end] = colour;
                p_order[p_end] = v as Vertex;
                p_end += 1;
                class_size += 1;
            }

            // withdraw a class of one, to re-emit at the tail
            if class_size == 1 {
                p_end -= 1;
                colour -= 1;
                defer[deferred] = p_order[p_end];
                deferred += 1;
            }
        }

        for n in 0..deferred {
            colour += 1;
            p_order[p_end] = defer[n];
            p_bounds[p_end] = colour;
            p_end += 1;
        }

        p_end
    }

    pub(crate) fn colour_class_order_sorted(
        &self,
        p: &B,
        p_order: &mut [u32],
        p_bounds: &mut [u32],
    ) -> usize {
        let size = self.graph_db.size;

        let mut p_left = p.clone();
        let mut colour = 0_usize;
        let mut p_end = 0_usize;

        let mut prelim = vec![0 as Vertex; size];
        let mut class_sizes = vec![0_usize; size];
        let mut class_start = vec![0_usize; size];

        while p_left.any() {
            class_start[colour] = p_end;
            class_sizes[colour] = 0;
            colour += 1;

            let mut q = p_left.clone();
            while let Some(v) = q.find_first() {
                p_left.reset(v);
                q.reset(v);

                q.intersect_with_complement(&self.graph_db.adj[v]);

                prelim[p_end] = v as Vertex;
                p_end += 1;
                class_sizes[colour - 1] += 1;
            }
        }

        // descending class size, earlier classes first on ties
        let mut emit_order: Vec<usize> = (0..colour).collect();
        emit_order.sort_by(|&a, &b| class_sizes[b].cmp(&class_sizes[a]).then(a.cmp(&b)));

        let mut out = 0_usize;
        for (new_colour, class) in emit_order.iter().enumerate() {
            for position in class_start[*class]..class_start[*class] + class_sizes[*class] {
                p_bounds[out] = (new_colour + 1) as u32;
                p_order[out] = prelim[position];
                out += 1;
            }
        }

        out
    }
}
