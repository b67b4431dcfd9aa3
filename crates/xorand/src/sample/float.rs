use crate::{Engine, NumericKind, SampleUniform};

/// Maps a word to `[0, 1)` using its top 53 bits.
#[inline]
pub(crate) fn unit_f64(word: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (word >> 11) as f64 * SCALE
}

/// Maps a word to `[0, 1)` using its top 24 bits.
#[inline]
pub(crate) fn unit_f32(word: u64) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (word >> 40) as f32 * SCALE
}

/// Returns a value uniformly distributed over `[0, 1)`.
///
/// # Example
/// ```
/// use xorand::{Engine, Xoshiro256StarStar, next_double};
///
/// let mut engine = Xoshiro256StarStar::from_seed([1, 2, 3, 4]);
/// let x = next_double(&mut engine);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[inline]
pub fn next_double<E: Engine>(engine: &mut E) -> f64 {
    unit_f64(engine.next_word())
}

macro_rules! impl_sample_float {
    ($($ty:ty => $unit:ident),* $(,)?) => {$(
        impl SampleUniform for $ty {
            const KIND: NumericKind = NumericKind::Floating;

            #[inline]
            fn is_valid_range(min: Self, max: Self) -> bool {
                min.is_finite() && max.is_finite() && min <= max
            }

            /// `[min, max)`, except that the empty interval `min == max`
            /// returns `min` without drawing a word.
            #[inline]
            fn sample_in<E: Engine>(engine: &mut E, min: Self, max: Self) -> Self {
                if min == max {
                    return min;
                }

                // `max - min` overflows to infinity for bounds of opposite
                // sign near the type limits.
                let scale = max - min;
                loop {
                    let unit = $unit(engine.next_word());
                    let value = if scale.is_finite() {
                        min + scale * unit
                    } else {
                        min * (1.0 - unit) + max * unit
                    };

                    // Rounding can land exactly on `max`; redraw.
                    if value >= min && value < max {
                        return value;
                    }
                }
            }
        }
    )*};
}

impl_sample_float!(f64 => unit_f64, f32 => unit_f32);
