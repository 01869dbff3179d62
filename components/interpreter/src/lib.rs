//! Execution stack and VM state for Lua 5.3 bytecode
//!
//! This crate provides:
//! - A 1-based execution stack with relative indexing and in-place rotation
//! - `LuaState`, the aggregate that owns the stack and the loaded function
//! - Push, type-query and coercion surfaces over stack slots
//! - Instruction fetch and constant/RK operand access for a dispatch loop
//!
//! # Example
//!
//! ```
//! use interpreter::LuaState;
//! use core_types::LuaType;
//!
//! let mut state = LuaState::new();
//! for n in 1..=5 {
//!     state.push_integer(n).unwrap();
//! }
//! state.rotate(1, 2).unwrap();
//! assert_eq!(state.to_integer(1), 4);
//!
//! assert_eq!(state.to_string(5), "3");
//! assert_eq!(state.type_of(5), LuaType::String);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api_access;
mod api_push;
mod api_stack;
pub mod error;
pub mod stack;
pub mod state;

pub use error::{LuaError, Result, StackError};
pub use stack::{LuaStack, LUAI_MAXSTACK};
pub use state::{LuaState, LUA_MINSTACK};
