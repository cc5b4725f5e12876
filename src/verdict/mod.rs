pub mod error;
pub use error::*;

pub mod verdict;
pub use verdict::*;
