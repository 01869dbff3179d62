//! Error types for the CLI

use std::path::PathBuf;

use bytecode_system::{ChunkError, DecodeError};
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Chunk file could not be read
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid binary chunk
    #[error("bad chunk: {0}")]
    Chunk(#[from] ChunkError),

    /// Instruction with an unknown opcode
    #[error("bad instruction: {0}")]
    Decode(#[from] DecodeError),

    /// Listing text could not be formatted
    #[error("cannot format listing")]
    Format(#[from] std::fmt::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
