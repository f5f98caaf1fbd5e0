//! Lock scripts for the `locker run` command.
//!
//! A script is a plain text file with one step per line:
//!
//! ```text
//! # two holders, released out of order
//! acquire a
//! acquire b
//! release a
//! expect 1
//! release b
//! expect unlocked
//! ```
//!
//! Lines are split with shell-words, so token names may be quoted.

mod parser;
mod types;


// Re-export public API
pub use types::{Expectation, Script, ScriptLine, Step};
