pub mod entry;
pub use entry::*;

pub mod ledger;
pub use ledger::*;
