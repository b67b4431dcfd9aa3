use crate::{Engine, NumericKind, SampleUniform};

/// Returns a value uniformly distributed over `[0, span]`.
///
/// Lemire's method: the full 128-bit product `word * (span + 1)` puts the
/// result in its high half. Products whose low half falls below
/// `2^64 mod (span + 1)` would over-represent some results and are redrawn,
/// which happens with probability below `(span + 1) / 2^64`.
///
/// A zero span returns `0` without drawing a word.
#[inline]
pub(crate) fn sample_span<E: Engine>(engine: &mut E, span: u64) -> u64 {
    if span == 0 {
        return 0;
    }
    if span == u64::MAX {
        return engine.next_word();
    }

    let range = span + 1;
    let mut product = u128::from(engine.next_word()) * u128::from(range);
    let mut low = product as u64;

    if low < range {
        let threshold = range.wrapping_neg() % range;
        while low < threshold {
            product = u128::from(engine.next_word()) * u128::from(range);
            low = product as u64;
        }
    }

    (product >> 64) as u64
}

macro_rules! impl_sample_int {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl SampleUniform for $ty {
            const KIND: NumericKind = NumericKind::Integral;

            #[inline]
            fn is_valid_range(min: Self, max: Self) -> bool {
                min <= max
            }

            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn sample_in<E: Engine>(engine: &mut E, min: Self, max: Self) -> Self {
                // Two's complement distance, exact for signed types too.
                let span = (max as $unsigned).wrapping_sub(min as $unsigned) as u64;
                let offset = sample_span(engine, span) as $unsigned;
                (min as $unsigned).wrapping_add(offset) as $ty
            }
        }
    )*};
}

impl_sample_int!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
);
