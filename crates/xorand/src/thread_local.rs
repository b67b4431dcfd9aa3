//! Per-thread random generation.
//!
//! Each thread lazily builds its own [`Random`] (default engine) the first
//! time one of these functions runs on it, seeded from operating system
//! entropy. Nothing is shared between threads, so no locking is involved.
//!
//! # Example
//! ```rust
//! use xorand::{fill_random, random_double, random_in};
//!
//! let x = random_double();
//! let roll: u32 = random_in(1, 6);
//! let mut key = [0u8; 16];
//! fill_random(&mut key);
//!
//! assert!((0.0..1.0).contains(&x));
//! assert!((1..=6).contains(&roll));
//! ```

use crate::{Random, Result, SampleUniform};
use core::cell::RefCell;

thread_local! {
    /// The calling thread's generator, seeded on first use.
    static THREAD_RANDOM: RefCell<Random> = RefCell::new(Random::new());
}

/// Runs `f` with exclusive access to the calling thread's generator.
///
/// # Panics
/// Panics if called re-entrantly from within `f`.
///
/// # Example
/// ```rust
/// use xorand::with_thread_random;
///
/// let (a, b) = with_thread_random(|rng| (rng.next_u64(), rng.next_u64()));
/// assert_ne!(a, b);
/// ```
pub fn with_thread_random<R>(f: impl FnOnce(&mut Random) -> R) -> R {
    THREAD_RANDOM.with(|cell| f(&mut cell.borrow_mut()))
}

/// Returns a value uniformly distributed over `[0, 1)`.
pub fn random_double() -> f64 {
    with_thread_random(Random::next_double)
}

/// Returns a value in `[min, max]` (integral) or `[min, max)` (floating).
///
/// # Panics
/// Panics if `max < min` or a floating bound is not finite.
#[track_caller]
pub fn random_in<T: SampleUniform>(min: T, max: T) -> T {
    let bounds = crate::Bounds::new(min, max);
    with_thread_random(|rng| bounds.sample(rng.engine_mut()))
}

/// A fallible version of [`random_in`].
///
/// # Errors
/// - Returns [`Error::InvalidRange`] for an inverted or non-finite range.
///
/// [`Error::InvalidRange`]: crate::Error::InvalidRange
pub fn try_random_in<T: SampleUniform>(min: T, max: T) -> Result<T> {
    with_thread_random(|rng| rng.try_next(min, max))
}

/// Fills `dst` from the calling thread's generator.
pub fn fill_random(dst: &mut [u8]) {
    with_thread_random(|rng| rng.fill_bytes(dst));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SeedStatus};
    use std::{collections::HashSet, thread};

    #[test]
    fn thread_generator_is_entropy_seeded() {
        let status = with_thread_random(|rng| rng.seed_status());
        assert_eq!(status, SeedStatus::Entropy);
    }

    #[test]
    fn free_functions_respect_their_ranges() {
        for _ in 0..10_000 {
            let x = random_double();
            assert!((0.0..1.0).contains(&x));

            let v = random_in(-10i64, 10);
            assert!((-10..=10).contains(&v));

            let f = random_in(2.0f32, 3.0);
            assert!((2.0..3.0).contains(&f));
        }
        assert_eq!(random_in(7u8, 7), 7);
    }

    #[test]
    fn try_random_in_reports_invalid_ranges() {
        assert_eq!(try_random_in(5i32, 4), Err(Error::InvalidRange));
        assert_eq!(try_random_in(f64::NAN, 1.0), Err(Error::InvalidRange));
        assert!(try_random_in(0u16, 3).is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn random_in_panics_on_inverted_range() {
        let _ = random_in(1u32, 0);
    }

    #[test]
    fn fill_random_writes_every_byte() {
        // 64 zero bytes from a healthy generator is vanishingly unlikely.
        let mut buf = [0u8; 64];
        fill_random(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn threads_get_independent_generators() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| with_thread_random(|rng| rng.next_u64())))
            .collect();

        let firsts: HashSet<u64> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert_eq!(firsts.len(), 8);
    }
}
