pub mod detective;
pub use detective::*;

pub mod event;
pub use event::*;

pub mod session;
pub use session::*;
