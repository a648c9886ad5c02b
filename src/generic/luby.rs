/*!
An iterator to generate the luby sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

Terms are computed by index from the defining recurrence: the term at index
2<sup>k</sup> − 1 is 2<sup>k − 1</sup>, and any other index folds back into
the previous block of the sequence.
This takes logarithmically many steps per term, which is irrelevant next to
the cost of the backtracks a term meters out.
*/

/// Representation used for terms of the luby sequence.
pub type LubyTerm = u64;

/// An iterator over the luby sequence, from the first term.
#[derive(Default)]
pub struct Luby {
    index: LubyTerm,
}

impl Iterator for Luby {
    type Item = LubyTerm;

    fn next(&mut self) -> Option<Self::Item> {
        self.index = self.index.checked_add(1)?;
        Some(term(self.index))
    }
}

/// The term of the luby sequence at `index`, one-indexed.
fn term(mut index: LubyTerm) -> LubyTerm {
    loop {
        if (index + 1).is_power_of_two() {
            return (index + 1) >> 1;
        }

        // fold back to the copy of the sequence this block repeats
        let block = (index + 1).next_power_of_two() >> 1;
        index -= block - 1;
    }
}
