//! Command implementations for `warsim`.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod odds;
mod resolve;

pub use odds::Odds;
pub use resolve::Resolve;
