mod bounds;
mod float;
mod int;
mod interface;

pub use bounds::*;
pub use float::next_double;
pub use interface::*;
