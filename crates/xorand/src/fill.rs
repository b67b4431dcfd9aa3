use crate::Engine;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Fills `dst` with engine output.
///
/// Each 8-byte chunk of `dst` receives the little-endian bytes of one fresh
/// word; a trailing partial chunk takes the leading bytes of its word. This
/// costs exactly `dst.len().div_ceil(8)` engine steps, and an empty buffer
/// draws nothing. The byte order is fixed so seeded output is identical on
/// every platform.
///
/// # Example
/// ```
/// use xorand::{Engine, Xorshift128Plus, fill_bytes};
///
/// let mut engine = Xorshift128Plus::from_seed([0x1111_1111_1111_1111, 0x2222_2222_2222_2222]);
/// let mut buf = [0u8; 3];
/// fill_bytes(&mut engine, &mut buf);
///
/// assert_eq!(buf, [0x05, 0x77, 0x39]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = dst.len())))]
pub fn fill_bytes<E: Engine>(engine: &mut E, dst: &mut [u8]) {
    for chunk in dst.chunks_mut(8) {
        let bytes = engine.next_word().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

/// Allocates a buffer of `count` bytes and fills it with engine output.
///
/// Ownership of the buffer passes to the caller. `count == 0` returns an
/// empty vector without touching the engine.
#[cfg(feature = "alloc")]
pub fn generate_bytes<E: Engine>(engine: &mut E, count: usize) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0u8; count];
    fill_bytes(engine, &mut out);
    out
}
