//! Binary chunk listing tool
//!
//! Decodes a compiled Lua 5.3 chunk and prints its functions, instructions
//! and debug tables in the style of `luac -l`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod listing;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use listing::{list_chunk, list_file, ListOptions};
