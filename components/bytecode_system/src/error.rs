//! Errors raised while loading a binary chunk or decoding an instruction.

use thiserror::Error;

/// Result type for chunk loading
pub type Result<T> = std::result::Result<T, ChunkError>;

/// A binary chunk could not be loaded.
///
/// Loading stops at the first error; the byte cursor is meaningless after
/// the format has been violated, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The first four bytes are not `"\x1bLua"`
    #[error("not a precompiled chunk")]
    Signature,
    /// Version byte differs from 5.3
    #[error("version mismatch")]
    Version,
    /// Format byte differs from the official format
    #[error("format mismatch")]
    Format,
    /// LUAC_DATA bytes differ (text-mode conversion or truncation)
    #[error("corrupted chunk")]
    CorruptedData,
    /// `sizeof(int)` differs
    #[error("int size mismatch")]
    IntSize,
    /// `sizeof(size_t)` differs
    #[error("size_t size mismatch")]
    SizetSize,
    /// `sizeof(Instruction)` differs
    #[error("Instruction size mismatch")]
    InstructionSize,
    /// `sizeof(lua_Integer)` differs
    #[error("lua_Integer size mismatch")]
    IntegerSize,
    /// `sizeof(lua_Number)` differs
    #[error("lua_Number size mismatch")]
    NumberSize,
    /// LUAC_INT did not read back as 0x5678
    #[error("endianness mismatch")]
    SentinelInt,
    /// LUAC_NUM did not read back as 370.5
    #[error("float format mismatch")]
    SentinelFloat,
    /// A read ran past the end of the buffer
    #[error("truncated chunk: {needed} bytes needed at offset {offset}, {available} available")]
    UnexpectedEof {
        /// Cursor position of the failed read
        offset: usize,
        /// Bytes the read asked for
        needed: u64,
        /// Bytes left in the buffer
        available: usize,
    },
    /// A constant carried a tag byte the format does not define
    #[error("corrupted chunk: unknown constant tag {tag:#04x} at offset {offset}")]
    CorruptedConstant {
        /// The offending tag
        tag: u8,
        /// Position of the tag byte
        offset: usize,
    },
    /// A string's bytes are not valid UTF-8
    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidString {
        /// Position of the first string byte
        offset: usize,
    },
    /// Functions are nested deeper than the loader accepts
    #[error("function at offset {offset} nested too deeply")]
    TooDeep {
        /// Position of the rejected prototype
        offset: usize,
    },
    /// Bytes remain after the main function
    #[error("{count} trailing bytes after main function")]
    TrailingBytes {
        /// Number of unread bytes
        count: usize,
    },
}

/// An instruction word could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Opcode field is outside the defined range
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),
}
