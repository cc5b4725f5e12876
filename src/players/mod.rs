//! Detectives that can play a session.
//!
//! - [`Human`] prompts at the terminal (requires `cli` feature)
//! - [`Scripted`] replays fixed inputs and keeps a transcript
//! - [`Wanderer`] walks at random and accuses at random
#[cfg(feature = "cli")]
mod human;
mod scripted;
mod wanderer;

#[cfg(feature = "cli")]
pub use human::*;
pub use scripted::*;
pub use wanderer::*;
