use crate::{ClockSource, EntropySource, SeedStatus};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Builds non-reproducible seed words from an [`EntropySource`] and a
/// [`ClockSource`].
///
/// Every word packs a fresh 32-bit entropy sample into its high half and the
/// low 32 bits of a fresh clock reading into its low half:
///
/// ```text
/// word = (entropy32 << 32) | (nanos & 0xFFFF_FFFF)
/// ```
///
/// Both halves are sampled again for every word so that words of the same
/// seed are not correlated with each other.
///
/// If the entropy source fails for a word, that word is derived from the
/// clock reading alone (mixed with the word index) and the returned
/// [`SeedStatus`] is [`SeedStatus::Degraded`]. Seeding never aborts.
///
/// # Example
/// ```
/// use xorand::{ClockSource, EntropySource, Result, SeedStatus, Seeder};
///
/// struct Counter(u32);
/// impl EntropySource for Counter {
///     fn try_next_u32(&mut self) -> Result<u32> {
///         self.0 += 1;
///         Ok(self.0)
///     }
/// }
///
/// struct FixedClock;
/// impl ClockSource for FixedClock {
///     fn current_nanos(&self) -> u64 {
///         0xAAAA_BBBB_CCCC_DDDD
///     }
/// }
///
/// let mut seeder = Seeder::new(Counter(0), FixedClock);
/// let mut words = [0u64; 2];
/// let status = seeder.fill(&mut words);
///
/// assert_eq!(status, SeedStatus::Entropy);
/// assert_eq!(words, [0x0000_0001_CCCC_DDDD, 0x0000_0002_CCCC_DDDD]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Seeder<S, C>
where
    S: EntropySource,
    C: ClockSource,
{
    entropy: S,
    clock: C,
}

impl<S, C> Seeder<S, C>
where
    S: EntropySource,
    C: ClockSource,
{
    /// Creates a seeder that owns the given sources for its whole lifetime.
    pub const fn new(entropy: S, clock: C) -> Self {
        Self { entropy, clock }
    }

    /// Fills `words` with seed material and reports how it was obtained.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(words = words.len())))]
    pub fn fill(&mut self, words: &mut [u64]) -> SeedStatus {
        let mut failure = None;
        let mut clock_only_words = 0;

        for (index, word) in words.iter_mut().enumerate() {
            let nanos = self.clock.current_nanos();
            *word = match self.entropy.try_next_u32() {
                Ok(sample) => (u64::from(sample) << 32) | (nanos & 0xFFFF_FFFF),
                Err(error) => {
                    failure = Some(error);
                    clock_only_words += 1;
                    clock_only_word(nanos, index)
                }
            };
        }

        match failure {
            None => SeedStatus::Entropy,
            Some(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    %error,
                    clock_only_words,
                    total_words = words.len(),
                    "entropy unavailable, seeding from the clock only"
                );
                SeedStatus::Degraded {
                    error,
                    clock_only_words,
                }
            }
        }
    }

    /// Consumes the seeder, returning its sources.
    pub fn into_parts(self) -> (S, C) {
        (self.entropy, self.clock)
    }
}

#[cfg(feature = "std")]
impl Seeder<crate::OsEntropy, crate::MonotonicClock> {
    /// Creates a seeder backed by the operating system entropy source and a
    /// [`MonotonicClock`].
    ///
    /// [`MonotonicClock`]: crate::MonotonicClock
    pub fn os() -> Self {
        Self::new(crate::OsEntropy::new(), crate::MonotonicClock::new())
    }
}

/// Derives a seed word from a clock reading alone.
///
/// Two words read within the same clock tick still differ because the index
/// is folded in before SplitMix64 finalisation.
fn clock_only_word(nanos: u64, index: usize) -> u64 {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut z = nanos.wrapping_add(GOLDEN_GAMMA.wrapping_mul(index as u64 + 1));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
