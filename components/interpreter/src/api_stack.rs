//! Basic stack manipulation

use crate::error::StackError;
use crate::state::LuaState;

impl LuaState {
    /// Index of the top element, which is also the number of elements
    pub fn get_top(&self) -> isize {
        self.stack.top() as isize
    }

    /// Convert an acceptable index into an absolute one
    pub fn abs_index(&self, idx: isize) -> isize {
        self.stack.abs_index(idx)
    }

    /// Ensure `n` free slots. Returns false, leaving the stack as it was,
    /// when that would take the stack past [`LUAI_MAXSTACK`](crate::stack::LUAI_MAXSTACK) slots.
    pub fn check_stack(&mut self, n: usize) -> bool {
        self.stack.check(n)
    }

    /// Pop `n` values. Popping more than the stack holds pops nothing.
    pub fn pop(&mut self, n: usize) -> Result<(), StackError> {
        if n > self.stack.top() {
            return Err(StackError::Underflow);
        }
        for _ in 0..n {
            self.stack.pop()?;
        }
        Ok(())
    }

    /// Copy the value at `from` into `to`
    pub fn copy(&mut self, from: isize, to: isize) -> Result<(), StackError> {
        let value = self.stack.get(from);
        self.stack.set(to, value)
    }

    /// Push a copy of the value at `idx`
    pub fn push_value(&mut self, idx: isize) -> Result<(), StackError> {
        let value = self.stack.get(idx);
        self.stack.push(value)
    }

    /// Pop the top value and store it at `idx`, which is resolved against
    /// the stack as it is after the pop.
    pub fn replace(&mut self, idx: isize) -> Result<(), StackError> {
        let top = self.stack.top() as isize;
        if top == 0 {
            return Err(StackError::Underflow);
        }
        let target = if idx >= 0 { idx } else { top + idx };
        if target < 1 || target >= top {
            return Err(StackError::InvalidIndex(idx));
        }
        let value = self.stack.pop()?;
        self.stack.set(target, value)
    }

    /// Move the top value to `idx`, shifting the values above it up
    pub fn insert(&mut self, idx: isize) -> Result<(), StackError> {
        self.rotate(idx, 1)
    }

    /// Remove the value at `idx`, shifting the values above it down
    pub fn remove(&mut self, idx: isize) -> Result<(), StackError> {
        self.rotate(idx, -1)?;
        self.pop(1)
    }

    /// Rotate the values from `idx` to the top by `n` positions toward
    /// the top (`n > 0`) or toward the bottom (`n < 0`).
    ///
    /// Implemented as three reversals; `|n|` may not exceed the length of
    /// the segment.
    pub fn rotate(&mut self, idx: isize, n: isize) -> Result<(), StackError> {
        if !self.stack.is_valid(idx) {
            return Err(StackError::InvalidIndex(idx));
        }
        let t = self.stack.top() as isize - 1;
        let p = self.stack.abs_index(idx) - 1;
        if n.unsigned_abs() as isize > t - p + 1 {
            return Err(StackError::InvalidRotation { idx, n });
        }
        let m = if n >= 0 { t - n } else { p - n - 1 };
        self.stack.reverse(p, m);
        self.stack.reverse(m + 1, t);
        self.stack.reverse(p, t);
        Ok(())
    }

    /// Set the top to `idx`, popping values or pushing nils as needed.
    ///
    /// A resolved index below zero is a stack underflow; one past the
    /// allocated slots is an overflow. Neither changes the stack.
    pub fn set_top(&mut self, idx: isize) -> Result<(), StackError> {
        let new_top = self.stack.abs_index(idx);
        if new_top < 0 {
            return Err(StackError::Underflow);
        }
        if new_top as usize > self.stack.capacity() {
            return Err(StackError::Overflow);
        }
        let n = self.stack.top() as isize - new_top;
        if n > 0 {
            self.pop(n as usize)?;
        } else {
            for _ in 0..-n {
                self.push_nil()?;
            }
        }
        Ok(())
    }
}
