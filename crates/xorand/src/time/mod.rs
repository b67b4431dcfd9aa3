mod interface;
#[cfg(feature = "std")]
mod mono_clock;

pub use interface::*;
#[cfg(feature = "std")]
pub use mono_clock::*;
