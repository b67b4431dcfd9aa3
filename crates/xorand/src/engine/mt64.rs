use crate::Engine;
use core::fmt;

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
const LOWER_MASK: u64 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// 64-bit Mersenne Twister (MT19937-64): the large-state engine.
///
/// - State: 312 words (2.5 KiB) plus a cursor
/// - Seed: `[u64; 1]`, expanded with the reference initialisation recurrence
/// - Period: 2^19937 - 1
///
/// Pick this engine when equidistribution in high dimensions matters more
/// than memory footprint or speed.
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937_64 {
    mt: [u64; NN],
    index: usize,
}

impl Mt19937_64 {
    /// Expands `seed` into a full state, without warm-up.
    pub(crate) fn from_state(seed: u64) -> Self {
        let mut mt = [0u64; NN];
        mt[0] = seed;
        for i in 1..NN {
            let prev = mt[i - 1];
            mt[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        Self { mt, index: NN }
    }

    /// Regenerates all 312 words of the state.
    fn twist(&mut self) {
        for i in 0..NN {
            let x = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % NN] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.mt[i] = self.mt[(i + MM) % NN] ^ x_a;
        }
        self.index = 0;
    }
}

impl Engine for Mt19937_64 {
    type Seed = [u64; 1];
    const SEED_WORDS: usize = 1;

    fn from_seed(seed: Self::Seed) -> Self {
        let mut engine = Self::from_state(seed[0]);
        engine.warm_up();
        engine
    }

    fn seed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed(seed);
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }

        let mut x = self.mt[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^ (x >> 43)
    }
}

impl fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937_64")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
