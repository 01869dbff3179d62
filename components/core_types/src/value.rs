//! Lua value representation.
//!
//! This module provides the core `Value` enum covering every scalar a
//! compiled chunk can carry, along with the `LuaType` partition used by
//! the stack API and the coercion rules of the language.

use std::fmt;

use crate::number;

/// The basic type tags of the Lua reference manual.
///
/// Only the first five kinds can be produced by this core; the remaining
/// tags exist so that type queries keep the manual's numbering.
///
/// # Examples
///
/// ```
/// use core_types::LuaType;
///
/// assert_eq!(LuaType::None as i8, -1);
/// assert_eq!(LuaType::Number.name(), "number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum LuaType {
    /// No value: an index outside the valid stack range
    None = -1,
    /// nil
    Nil = 0,
    /// true or false
    Boolean = 1,
    /// Light userdata
    LightUserdata = 2,
    /// Integer or float
    Number = 3,
    /// Immutable text
    String = 4,
    /// Associative array
    Table = 5,
    /// Lua or host function
    Function = 6,
    /// Full userdata
    Userdata = 7,
    /// Coroutine
    Thread = 8,
}

impl LuaType {
    /// Human readable name, as printed by `type()` and error messages.
    pub fn name(self) -> &'static str {
        match self {
            LuaType::None => "no value",
            LuaType::Nil => "nil",
            LuaType::Boolean => "boolean",
            LuaType::LightUserdata | LuaType::Userdata => "userdata",
            LuaType::Number => "number",
            LuaType::String => "string",
            LuaType::Table => "table",
            LuaType::Function => "function",
            LuaType::Thread => "thread",
        }
    }
}

impl fmt::Display for LuaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents any Lua value this core can hold.
///
/// Exactly one variant is active at a time. Integers and floats are both
/// of type `number` but keep distinct representations, as Lua 5.3 does.
///
/// # Examples
///
/// ```
/// use core_types::{LuaType, Value};
///
/// let n = Value::Integer(42);
/// assert_eq!(n.type_of(), LuaType::Number);
/// assert!(n.to_boolean());
/// assert!(!Value::Nil.to_boolean());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// nil
    #[default]
    Nil,
    /// Boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// IEEE 754 double
    Float(f64),
    /// Text
    String(String),
}

impl Value {
    /// Returns the type tag of this value.
    pub fn type_of(&self) -> LuaType {
        match self {
            Value::Nil => LuaType::Nil,
            Value::Boolean(_) => LuaType::Boolean,
            Value::Integer(_) | Value::Float(_) => LuaType::Number,
            Value::String(_) => LuaType::String,
        }
    }

    /// Lua truthiness: only `nil` and `false` are false.
    ///
    /// Numeric zero and the empty string are true.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Integer(0).to_boolean());
    /// assert!(Value::String(String::new()).to_boolean());
    /// assert!(!Value::Boolean(false).to_boolean());
    /// ```
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Boolean(b) => *b,
            Value::Integer(_) | Value::Float(_) | Value::String(_) => true,
        }
    }

    /// Converts a number to a float.
    ///
    /// Strings are not parsed here; text-to-number conversion belongs to
    /// the lexer, so any non-number yields `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Nil | Value::Boolean(_) | Value::String(_) => None,
        }
    }

    /// Converts a number to an integer.
    ///
    /// Floats convert only when they hold an exact integral value that fits
    /// in an `i64`.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) => number::float_to_integer(*f),
            Value::Nil | Value::Boolean(_) | Value::String(_) => None,
        }
    }

    /// Renders strings and numbers as text.
    ///
    /// This is the pure half of `lua_tolstring`; writing the rendered text
    /// back into the stack slot is done by the caller that owns the slot.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Integer(42).to_string_value().as_deref(), Some("42"));
    /// assert_eq!(Value::Float(370.5).to_string_value().as_deref(), Some("370.5"));
    /// assert_eq!(Value::Nil.to_string_value(), None);
    /// ```
    pub fn to_string_value(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(number::float_to_string(*f)),
            Value::Nil | Value::Boolean(_) => None,
        }
    }

    /// Returns true for `Value::Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns true for integer and float values.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}

/// Renders a value the way `print` would, with `nil`, `true` and `false`
/// spelled out.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(n) => f.write_str(&number::float_to_string(*n)),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
