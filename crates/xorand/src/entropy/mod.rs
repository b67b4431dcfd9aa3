mod interface;
#[cfg(feature = "std")]
mod os;
mod seeder;

pub use interface::*;
#[cfg(feature = "std")]
pub use os::*;
pub use seeder::*;
