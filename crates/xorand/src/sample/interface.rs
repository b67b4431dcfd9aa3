use crate::Engine;
use core::fmt;

/// The numeric category a [`SampleUniform`] type belongs to.
///
/// The category fixes the interval convention: integral types sample the
/// closed interval `[min, max]`, floating types the half-open `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Closed interval `[min, max]`.
    Integral,
    /// Half-open interval `[min, max)`.
    Floating,
}

/// A numeric type that can be sampled uniformly from an [`Engine`].
///
/// Implemented for every primitive integer up to 64 bits and for `f32` and
/// `f64`. Integral implementations use Lemire's widening multiply with
/// rejection, so every value of the interval has exactly the same
/// probability whatever its width. Floating implementations scale a `[0, 1)`
/// unit value into the interval.
pub trait SampleUniform: Copy + PartialOrd + fmt::Debug {
    /// Which interval convention applies.
    const KIND: NumericKind;

    /// Returns `true` if `(min, max)` is a range this type can sample.
    ///
    /// Requires `min <= max`; floating types additionally require both
    /// bounds to be finite.
    fn is_valid_range(min: Self, max: Self) -> bool;

    /// Draws one value from the interval described by `(min, max)`.
    ///
    /// Callers must ensure [`SampleUniform::is_valid_range`] holds; the
    /// result is unspecified otherwise. Use [`Bounds`] or the facade methods
    /// for checked access.
    ///
    /// [`Bounds`]: crate::Bounds
    fn sample_in<E: Engine>(engine: &mut E, min: Self, max: Self) -> Self;
}
