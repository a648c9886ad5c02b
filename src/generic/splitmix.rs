/*!
A simple pseudorandom number generator.

Specifically, SplitMix64, following the reference implementation by Sebastiano
Vigna at <https://prng.di.unimi.it/splitmix64.c>, implemented to satisfy the
[RngCore](rand_core::RngCore) trait.

SplitMix64 was chosen as the source of (pseudo)random numbers for the random
vertex order as it is tiny, fast, and passes through every 64 bit value over
its full period --- so distinct seeds give usefully distinct permutations.

Randomness only influences a solve when
[VertexOrder::Random](crate::config::VertexOrder::Random) is configured, and
then only through the seed fixed in the [configuration](crate::config::Config),
so solves remain reproducible.
*/

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State of the generator.
#[derive(Default)]
pub struct SplitMix64 {
    state: u64,
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut mixed = self.state;
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D049BB133111EB);
        mixed ^ (mixed >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}
