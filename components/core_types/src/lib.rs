//! Core Lua value types and numeric semantics.
//!
//! This crate provides the foundational types for the Lunar VM: the
//! tagged value representation, the type partition used by the stack API,
//! and the integer/float helpers whose rounding rules the language fixes.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of Lua scalars
//! - [`LuaType`] - Basic type tags, numbered as in the reference manual
//! - [`number`] - Floor division, floored modulo, shifts and conversions
//! - [`ArithError`] - Integer division or modulo by zero
//!
//! # Examples
//!
//! ```
//! use core_types::{number, LuaType, Value};
//!
//! let v = Value::Integer(42);
//! assert_eq!(v.type_of(), LuaType::Number);
//! assert_eq!(v.to_string_value().as_deref(), Some("42"));
//!
//! assert_eq!(number::ifloor_div(10, -4), Ok(-3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
pub mod number;
mod value;

pub use error::ArithError;
pub use value::{LuaType, Value};
