pub mod room;
pub use room::*;

pub mod scenario;
pub use scenario::*;

pub mod side;
pub use side::*;
