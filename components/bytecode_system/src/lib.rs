//! Binary chunk loading and instruction decoding for the Lunar VM
//!
//! This crate reads Lua 5.3 precompiled chunks (`luac` output) into a tree
//! of function prototypes and decodes their 32-bit instruction words.
//!
//! # Features
//!
//! - Byte-exact header validation with a distinct error per field
//! - Recursive prototype decoding, including optional debug tables
//! - Chunk writer producing the same format, for tools and tests
//! - Static opcode table with ABC / ABx / AsBx / Ax operand extraction
//!
//! # Example
//!
//! ```
//! use bytecode_system::{dump, undump, Chunk, Instruction, OpCode, Prototype};
//! use core_types::Value;
//!
//! let main = Prototype {
//!     source: "@hello.lua".to_string(),
//!     max_stack_size: 2,
//!     code: vec![
//!         Instruction::encode_abx(OpCode::LoadK, 0, 0).word(),
//!         Instruction::encode_abc(OpCode::Return, 0, 1, 0).word(),
//!     ],
//!     constants: vec![Value::Integer(42)],
//!     ..Prototype::default()
//! };
//! let bytes = dump(&Chunk { header_upvalues: 1, main });
//!
//! let chunk = undump(&bytes).unwrap();
//! let first = chunk.main.instruction(0).unwrap();
//! assert_eq!(first.to_string(), "LOADK 0 -1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod error;
pub mod header;
pub mod instruction;
pub mod opcode;
pub mod reader;
pub mod writer;

// Re-export main types at crate root
pub use chunk::{check_header, read_prototype, undump, Chunk, LocVar, Prototype, Upvalue};
pub use error::{ChunkError, DecodeError};
pub use instruction::Instruction;
pub use opcode::{OpArgMode, OpCode, OpInfo, OpMode, OPCODES};
pub use reader::ChunkReader;
pub use writer::{dump, ChunkWriter};
