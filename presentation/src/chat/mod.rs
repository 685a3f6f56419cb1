//! Interactive chat module
//!
//! Provides a readline-based interactive loop over the responder.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
