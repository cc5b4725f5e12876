pub mod hash;
pub use hash::*;

pub mod index;
pub use index::*;
