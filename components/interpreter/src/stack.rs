//! Execution stack with 1-based external addressing

use core_types::Value;
use tracing::trace;

use crate::error::StackError;

/// Most slots a stack may grow to
pub const LUAI_MAXSTACK: usize = 1_000_000;

/// Slot array plus a logical top.
///
/// Index `i > 0` addresses slot `i - 1`; a negative index counts back from
/// the top, so `-1` is the topmost value. An index is valid when its
/// absolute form lies in `[1, top]`. Slots at or above `top` always hold
/// `Nil`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuaStack {
    slots: Vec<Value>,
    top: usize,
}

impl LuaStack {
    /// Create a stack with `size` preallocated slots and nothing pushed
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![Value::Nil; size],
            top: 0,
        }
    }

    /// Number of values on the stack
    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of slots, used or free
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Make sure at least `n` free slots exist above the top.
    ///
    /// Grows the slot array when needed; never shrinks it. Returns false,
    /// without growing, when `top + n` exceeds [`LUAI_MAXSTACK`].
    pub fn check(&mut self, n: usize) -> bool {
        let free = self.slots.len() - self.top;
        if free >= n {
            return true;
        }
        match self.top.checked_add(n) {
            Some(needed) if needed <= LUAI_MAXSTACK => {
                self.slots.resize(needed, Value::Nil);
                trace!(capacity = self.slots.len(), "stack grown");
                true
            }
            _ => false,
        }
    }

    /// Push a value. Pushing never grows the stack; see [`LuaStack::check`].
    pub fn push(&mut self, value: Value) -> Result<(), StackError> {
        if self.top == self.slots.len() {
            return Err(StackError::Overflow);
        }
        self.slots[self.top] = value;
        self.top += 1;
        Ok(())
    }

    /// Pop the top value, clearing its slot.
    pub fn pop(&mut self) -> Result<Value, StackError> {
        if self.top == 0 {
            return Err(StackError::Underflow);
        }
        self.top -= 1;
        Ok(std::mem::take(&mut self.slots[self.top]))
    }

    /// Convert a relative index to an absolute one.
    ///
    /// Non-negative indices are returned unchanged.
    pub fn abs_index(&self, idx: isize) -> isize {
        if idx >= 0 {
            idx
        } else {
            self.top as isize + idx + 1
        }
    }

    /// True when `idx` addresses a value currently on the stack
    pub fn is_valid(&self, idx: isize) -> bool {
        let abs = self.abs_index(idx);
        abs >= 1 && abs <= self.top as isize
    }

    /// Read a value; invalid indices read as `Nil`.
    pub fn get(&self, idx: isize) -> Value {
        if self.is_valid(idx) {
            self.slots[self.abs_index(idx) as usize - 1].clone()
        } else {
            Value::Nil
        }
    }

    /// Overwrite a value; writing to an invalid index is an error.
    pub fn set(&mut self, idx: isize, value: Value) -> Result<(), StackError> {
        if !self.is_valid(idx) {
            return Err(StackError::InvalidIndex(idx));
        }
        let slot = self.abs_index(idx) as usize - 1;
        self.slots[slot] = value;
        Ok(())
    }

    /// Reverse the slots `from..=to` (0-based, inclusive) in place.
    ///
    /// Does nothing when `from >= to`.
    pub fn reverse(&mut self, from: isize, to: isize) {
        if from >= 0 && from < to {
            self.slots[from as usize..=to as usize].reverse();
        }
    }
}
