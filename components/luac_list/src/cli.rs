//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::listing::ListOptions;

/// List the contents of a compiled Lua 5.3 chunk
#[derive(Parser, Debug)]
#[command(name = "luac-list")]
#[command(about = "List the functions and instructions of a Lua 5.3 binary chunk")]
#[command(version)]
pub struct Cli {
    /// Binary chunk to list
    pub file: PathBuf,

    /// Log loader activity (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Also print constants, locals and upvalues
    #[arg(short, long)]
    pub constants: bool,

    /// Only list the main function
    #[arg(long)]
    pub no_nested: bool,
}

impl Cli {
    /// Listing options selected by the flags
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            constants: self.constants,
            nested: !self.no_nested,
        }
    }
}
