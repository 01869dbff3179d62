//! Pushing primitive values

use core_types::Value;

use crate::error::StackError;
use crate::state::LuaState;

impl LuaState {
    /// Push `nil`
    pub fn push_nil(&mut self) -> Result<(), StackError> {
        self.stack.push(Value::Nil)
    }

    /// Push a boolean
    pub fn push_boolean(&mut self, b: bool) -> Result<(), StackError> {
        self.stack.push(Value::Boolean(b))
    }

    /// Push an integer
    pub fn push_integer(&mut self, n: i64) -> Result<(), StackError> {
        self.stack.push(Value::Integer(n))
    }

    /// Push a float
    pub fn push_number(&mut self, n: f64) -> Result<(), StackError> {
        self.stack.push(Value::Float(n))
    }

    /// Push a string
    pub fn push_string(&mut self, s: impl Into<String>) -> Result<(), StackError> {
        self.stack.push(Value::String(s.into()))
    }
}
