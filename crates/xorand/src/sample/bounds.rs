use crate::{Engine, Error, Result, SampleUniform};

/// A validated `(min, max)` pair for a [`SampleUniform`] type.
///
/// Integral bounds describe `[min, max]`, floating bounds `[min, max)`. A
/// `Bounds` can be built once and sampled many times.
///
/// # Example
/// ```
/// use xorand::{Bounds, Engine, Xoshiro256StarStar};
///
/// let dice = Bounds::new(1u8, 6);
/// let mut engine = Xoshiro256StarStar::from_seed([1, 2, 3, 4]);
///
/// let roll = dice.sample(&mut engine);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: SampleUniform> Bounds<T> {
    /// Creates bounds from `min` and `max`.
    ///
    /// # Panics
    /// Panics if `max < min`, or if a floating bound is NaN or infinite. An
    /// inverted range is a logic error in the caller; use
    /// [`Self::try_new`] to handle it as a value instead.
    #[track_caller]
    pub fn new(min: T, max: T) -> Self {
        match Self::try_new(min, max) {
            Ok(bounds) => bounds,
            Err(_) => panic!("invalid range: {min:?}..{max:?}"),
        }
    }

    /// Creates bounds from `min` and `max`.
    ///
    /// # Errors
    /// - Returns [`Error::InvalidRange`] if `max < min`, or if a floating
    ///   bound is NaN or infinite.
    pub fn try_new(min: T, max: T) -> Result<Self> {
        if T::is_valid_range(min, max) {
            Ok(Self { min, max })
        } else {
            Err(Error::InvalidRange)
        }
    }

    pub const fn min(&self) -> T {
        self.min
    }

    pub const fn max(&self) -> T {
        self.max
    }

    /// Draws one value.
    #[inline]
    pub fn sample<E: Engine>(&self, engine: &mut E) -> T {
        T::sample_in(engine, self.min, self.max)
    }
}
