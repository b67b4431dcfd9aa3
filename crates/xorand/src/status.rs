use crate::Error;
use core::fmt;

/// Describes where the seed material of a generator came from.
///
/// Entropy seeding never fails outright. When the operating system source
/// cannot be read, the seeder keeps going with clock-only words and reports
/// [`SeedStatus::Degraded`] so the reduced unpredictability stays visible to
/// the caller.
///
/// # Example
///
/// ```
/// use xorand::{Random, SeedStatus, Xoshiro256StarStar};
///
/// let rng = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
/// assert_eq!(rng.seed_status(), SeedStatus::Explicit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStatus {
    /// The caller supplied the seed. The stream is reproducible.
    Explicit,

    /// Every seed word combined a fresh entropy sample with a clock reading.
    Entropy,

    /// At least one seed word was built from the clock alone.
    Degraded {
        /// The error reported by the entropy source.
        error: Error,
        /// How many seed words fell back to the clock.
        clock_only_words: usize,
    },
}

impl SeedStatus {
    /// Returns `true` if seeding had to fall back to the clock.
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

impl fmt::Display for SeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("explicit seed"),
            Self::Entropy => f.write_str("entropy seed"),
            Self::Degraded {
                error,
                clock_only_words,
            } => write!(
                f,
                "degraded seed ({clock_only_words} clock-only words: {error})"
            ),
        }
    }
}
