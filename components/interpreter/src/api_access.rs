//! Type queries and coercions on stack slots
//!
//! Every query takes an acceptable index. An index that does not address
//! a value on the stack has type [`LuaType::None`].

use core_types::{LuaType, Value};

use crate::state::LuaState;

impl LuaState {
    /// Name of a type tag
    pub fn type_name(&self, tp: LuaType) -> &'static str {
        tp.name()
    }

    /// Type of the value at `idx`, or [`LuaType::None`] for an invalid index
    pub fn type_of(&self, idx: isize) -> LuaType {
        if self.stack.is_valid(idx) {
            self.stack.get(idx).type_of()
        } else {
            LuaType::None
        }
    }

    /// True when `idx` is not a valid index
    pub fn is_none(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::None
    }

    /// True when the value at `idx` is `nil`
    pub fn is_nil(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::Nil
    }

    /// True when `idx` is invalid or holds `nil`
    pub fn is_none_or_nil(&self, idx: isize) -> bool {
        matches!(self.type_of(idx), LuaType::None | LuaType::Nil)
    }

    /// True when the value at `idx` is a boolean
    pub fn is_boolean(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::Boolean
    }

    /// True when the value at `idx` is a table
    pub fn is_table(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::Table
    }

    /// True when the value at `idx` is a function
    pub fn is_function(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::Function
    }

    /// True when the value at `idx` is a thread
    pub fn is_thread(&self, idx: isize) -> bool {
        self.type_of(idx) == LuaType::Thread
    }

    /// True for strings and for numbers, which render as strings
    pub fn is_string(&self, idx: isize) -> bool {
        matches!(self.type_of(idx), LuaType::String | LuaType::Number)
    }

    /// True when the value at `idx` is a number
    pub fn is_number(&self, idx: isize) -> bool {
        self.to_number_x(idx).is_some()
    }

    /// True only for integer-represented numbers
    pub fn is_integer(&self, idx: isize) -> bool {
        matches!(self.stack.get(idx), Value::Integer(_))
    }

    /// Truthiness of the value at `idx`; invalid indices are false
    pub fn to_boolean(&self, idx: isize) -> bool {
        self.stack.get(idx).to_boolean()
    }

    /// Integer value at `idx`, or 0 when it is not convertible
    pub fn to_integer(&self, idx: isize) -> i64 {
        self.to_integer_x(idx).unwrap_or(0)
    }

    /// Integer value at `idx`, or `None` when it is not convertible
    pub fn to_integer_x(&self, idx: isize) -> Option<i64> {
        self.stack.get(idx).to_integer()
    }

    /// Float value at `idx`, or 0.0 when it is not a number
    pub fn to_number(&self, idx: isize) -> f64 {
        self.to_number_x(idx).unwrap_or(0.0)
    }

    /// Float value at `idx`, or `None` when it is not a number
    pub fn to_number_x(&self, idx: isize) -> Option<f64> {
        self.stack.get(idx).to_number()
    }

    /// Text of the value at `idx`, or an empty string when it has none.
    ///
    /// Same side effect as [`LuaState::to_string_x`].
    pub fn to_string(&mut self, idx: isize) -> String {
        self.to_string_x(idx).unwrap_or_default()
    }

    /// Text of the value at `idx`, or `None` for non-string, non-number
    /// values.
    ///
    /// A number is converted in place: its slot is overwritten with the
    /// rendered string, so a later read of `idx` sees a string.
    pub fn to_string_x(&mut self, idx: isize) -> Option<String> {
        match self.stack.get(idx) {
            Value::String(s) => Some(s),
            value @ (Value::Integer(_) | Value::Float(_)) => {
                let s = value.to_string_value()?;
                // idx is valid here: invalid indices read as Nil
                self.stack.set(idx, Value::String(s.clone())).ok()?;
                Some(s)
            }
            Value::Nil | Value::Boolean(_) => None,
        }
    }
}
