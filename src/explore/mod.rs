pub mod choice;
pub use choice::*;

pub mod error;
pub use error::*;

pub mod explorer;
pub use explorer::*;

pub mod walk;
pub use walk::*;
