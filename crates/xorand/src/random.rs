use crate::{
    Bounds, ClockSource, Engine, EntropySource, Result, SampleUniform, SeedStatus, Seeder,
    Xoshiro256StarStar, fill_bytes, next_double,
};

/// A seeded random source bundling an [`Engine`] with sampling and byte
/// filling.
///
/// `Random` defaults to [`Xoshiro256StarStar`]; any other engine can be
/// selected through the type parameter. Each instance owns its engine and is
/// meant to be used by one thread at a time (all generating methods take
/// `&mut self`). See [`with_thread_random`] for a per-thread instance.
///
/// ## Seeding
/// - [`Random::new`]: operating system entropy mixed with a clock,
///   non-reproducible
/// - [`Random::from_seed`]: explicit seed words, reproducible across
///   platforms for a given engine
/// - [`Random::from_seeder`]: custom entropy and clock sources
///
/// # Example
/// ```
/// use xorand::{Random, Xorshift128Plus};
///
/// let mut rng = Random::<Xorshift128Plus>::from_seed([
///     0x1111_1111_1111_1111,
///     0x2222_2222_2222_2222,
/// ]);
///
/// assert_eq!(rng.next_u64(), 0xAF9C_5377_1F39_7705);
///
/// let die: u8 = rng.next(1, 6);
/// let x: f64 = rng.next_double();
/// let bytes = rng.generate_bytes(16);
///
/// assert!((1..=6).contains(&die));
/// assert!((0.0..1.0).contains(&x));
/// assert_eq!(bytes.len(), 16);
/// ```
///
/// [`with_thread_random`]: crate::with_thread_random
#[derive(Clone, Debug)]
pub struct Random<E: Engine = Xoshiro256StarStar> {
    engine: E,
    status: SeedStatus,
}

impl<E: Engine> Random<E> {
    /// Creates a generator seeded from operating system entropy and a
    /// [`MonotonicClock`].
    ///
    /// Never fails. If the entropy source is unavailable the seed is built
    /// from the clock alone; check [`Self::seed_status`] to detect it.
    ///
    /// [`MonotonicClock`]: crate::MonotonicClock
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::from_seeder(&mut Seeder::os())
    }

    /// Creates a generator seeded from `seeder`.
    pub fn from_seeder<S, C>(seeder: &mut Seeder<S, C>) -> Self
    where
        S: EntropySource,
        C: ClockSource,
    {
        let mut seed = E::Seed::default();
        let status = seeder.fill(seed.as_mut());

        #[cfg(feature = "tracing")]
        tracing::debug!(%status, words = E::SEED_WORDS, "seeded generator");

        Self {
            engine: E::from_seed(seed),
            status,
        }
    }

    /// Creates a reproducible generator from explicit seed words.
    pub fn from_seed(seed: E::Seed) -> Self {
        Self::from_engine(E::from_seed(seed))
    }

    /// Wraps an already seeded engine.
    pub const fn from_engine(engine: E) -> Self {
        Self {
            engine,
            status: SeedStatus::Explicit,
        }
    }

    /// Re-seeds the engine with explicit words, warm-up included.
    pub fn reseed(&mut self, seed: E::Seed) {
        self.engine.seed(seed);
        self.status = SeedStatus::Explicit;
    }

    /// Reports where the current seed came from.
    pub const fn seed_status(&self) -> SeedStatus {
        self.status
    }

    /// Returns the next raw word from the engine.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.engine.next_word()
    }

    /// Returns a value uniformly distributed over `[0, 1)`.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        next_double(&mut self.engine)
    }

    /// Returns a value uniformly distributed over `[min, max]` for integral
    /// `T`, or over `[min, max)` for floating-point `T`.
    ///
    /// `min == max` returns `min` without advancing the engine.
    ///
    /// # Panics
    /// Panics if `max < min` or if a floating bound is not finite. Use
    /// [`Self::try_next`] to get an error instead.
    #[inline]
    #[track_caller]
    pub fn next<T: SampleUniform>(&mut self, min: T, max: T) -> T {
        Bounds::new(min, max).sample(&mut self.engine)
    }

    /// A fallible version of [`Self::next`].
    ///
    /// # Errors
    /// - Returns [`Error::InvalidRange`] if `max < min` or if a floating
    ///   bound is not finite. The engine is not advanced.
    ///
    /// [`Error::InvalidRange`]: crate::Error::InvalidRange
    #[inline]
    pub fn try_next<T: SampleUniform>(&mut self, min: T, max: T) -> Result<T> {
        Ok(Bounds::try_new(min, max)?.sample(&mut self.engine))
    }

    /// Fills `dst` in place, one engine step per 8 bytes.
    pub fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes(&mut self.engine, dst);
    }

    /// Allocates and fills a buffer of `count` bytes.
    #[cfg(feature = "alloc")]
    pub fn generate_bytes(&mut self, count: usize) -> alloc::vec::Vec<u8> {
        crate::generate_bytes(&mut self.engine, count)
    }

    /// Gives direct access to the engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the generator, returning its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

#[cfg(feature = "std")]
impl<E: Engine> Default for Random<E> {
    /// Equivalent to [`Random::new`].
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Error, Mt19937_64, Xorshift128Plus};
    use core::cell::Cell;

    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn try_next_u32(&mut self) -> Result<u32> {
            Err(Error::EntropyUnavailable)
        }
    }

    struct MockEntropy {
        next: u32,
    }

    impl EntropySource for MockEntropy {
        fn try_next_u32(&mut self) -> Result<u32> {
            self.next = self.next.wrapping_mul(2_654_435_761).wrapping_add(1);
            Ok(self.next)
        }
    }

    struct StepClock {
        nanos: Cell<u64>,
    }

    impl ClockSource for StepClock {
        fn current_nanos(&self) -> u64 {
            let now = self.nanos.get();
            self.nanos.set(now + 1_000);
            now
        }
    }

    const GOLDEN_SEED: [u64; 2] = [0x1111_1111_1111_1111, 0x2222_2222_2222_2222];

    #[test]
    fn explicit_seed_reproduces_the_golden_stream() {
        let mut rng = Random::<Xorshift128Plus>::from_seed(GOLDEN_SEED);
        assert_eq!(rng.seed_status(), SeedStatus::Explicit);
        assert_eq!(rng.next_u64(), 0xAF9C_5377_1F39_7705);

        rng.reseed(GOLDEN_SEED);
        assert_eq!(rng.next_u64(), 0xAF9C_5377_1F39_7705);
    }

    #[test]
    fn identical_seeds_give_identical_mixed_calls() {
        let mut a = Random::<Mt19937_64>::from_seed([2024]);
        let mut b = Random::<Mt19937_64>::from_seed([2024]);

        for _ in 0..1_000 {
            assert_eq!(a.next::<i16>(-300, 300), b.next::<i16>(-300, 300));
            assert_eq!(a.next_double().to_bits(), b.next_double().to_bits());
            assert_eq!(a.generate_bytes(5), b.generate_bytes(5));
        }
    }

    #[test]
    fn degenerate_integer_range() {
        let mut rng = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
        for _ in 0..1_000 {
            assert_eq!(rng.next::<i32>(5, 5), 5);
        }
    }

    #[test]
    fn generate_zero_bytes_is_empty_and_leaves_the_stream_alone() {
        let mut a = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
        let mut b = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);

        assert!(a.generate_bytes(0).is_empty());
        a.fill_bytes(&mut []);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn try_next_reports_invalid_ranges_without_advancing() {
        let mut a = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
        let mut b = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);

        assert_eq!(a.try_next(9u64, 3), Err(Error::InvalidRange));
        assert_eq!(a.try_next(0.0, f64::INFINITY), Err(Error::InvalidRange));
        assert_eq!(a.next_u64(), b.next_u64());

        let v = a.try_next(3u64, 9).unwrap();
        assert!((3..=9).contains(&v));
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn next_panics_on_inverted_range() {
        let mut rng = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
        let _ = rng.next(1.0, 0.0);
    }

    #[test]
    fn entropy_seeded_generators_diverge() {
        let mut a = Random::<Xoshiro256StarStar>::new();
        let mut b = Random::<Xoshiro256StarStar>::new();

        assert_eq!(a.seed_status(), SeedStatus::Entropy);
        let xs: [u64; 4] = core::array::from_fn(|_| a.next_u64());
        let ys: [u64; 4] = core::array::from_fn(|_| b.next_u64());
        assert_ne!(xs, ys);
    }

    #[test]
    fn failing_entropy_is_reported_as_degraded() {
        let mut seeder = Seeder::new(
            FailingEntropy,
            StepClock {
                nanos: Cell::new(1),
            },
        );
        let mut rng = Random::<Xoshiro256StarStar>::from_seeder(&mut seeder);

        assert_eq!(
            rng.seed_status(),
            SeedStatus::Degraded {
                error: Error::EntropyUnavailable,
                clock_only_words: 4,
            }
        );
        // Still produces usable output.
        let x = rng.next_double();
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn custom_seeder_is_deterministic() {
        let build = || {
            let mut seeder = Seeder::new(
                MockEntropy { next: 7 },
                StepClock {
                    nanos: Cell::new(500),
                },
            );
            Random::<Mt19937_64>::from_seeder(&mut seeder)
        };
        let mut a = build();
        let mut b = build();

        assert_eq!(a.seed_status(), SeedStatus::Entropy);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn reseeding_marks_the_seed_explicit() {
        let mut seeder = Seeder::new(FailingEntropy, StepClock { nanos: Cell::new(0) });
        let mut rng = Random::<Xorshift128Plus>::from_seeder(&mut seeder);
        assert!(rng.seed_status().is_degraded());

        rng.reseed(GOLDEN_SEED);
        assert_eq!(rng.seed_status(), SeedStatus::Explicit);
        assert_eq!(rng.next_u64(), 0xAF9C_5377_1F39_7705);
    }

    #[test]
    fn engine_access_shares_the_stream() {
        let mut rng = Random::<Xorshift128Plus>::from_seed(GOLDEN_SEED);
        assert_eq!(rng.engine_mut().next_word(), 0xAF9C_5377_1F39_7705);
        assert_eq!(rng.into_engine().next_word(), 0x51B9_D0C4_8B27_7A31);
    }
}
