//! Errors raised by the execution stack and the VM state

use bytecode_system::ChunkError;
use thiserror::Error;

/// Result type for VM state operations
pub type Result<T> = std::result::Result<T, LuaError>;

/// Violation of the stack discipline.
///
/// These are contract violations by the caller; the stack is left
/// unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push with no free slot
    #[error("stack overflow")]
    Overflow,
    /// Pop from an empty stack, or a negative resolved top
    #[error("stack underflow")]
    Underflow,
    /// Write to an index outside `[1, top]`
    #[error("invalid index {0}")]
    InvalidIndex(isize),
    /// Rotation by more positions than the segment holds
    #[error("cannot rotate {n} positions from index {idx}")]
    InvalidRotation {
        /// Start of the rotated segment
        idx: isize,
        /// Requested shift
        n: isize,
    },
}

/// Any failure of a `LuaState` operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LuaError {
    /// Stack discipline violated
    #[error(transparent)]
    Stack(#[from] StackError),
    /// Chunk could not be loaded
    #[error(transparent)]
    Chunk(#[from] ChunkError),
    /// Code access before any chunk was loaded
    #[error("no chunk loaded")]
    NoChunk,
    /// Constant index outside the pool of the loaded prototype
    #[error("constant index {0} out of range")]
    BadConstant(usize),
}
