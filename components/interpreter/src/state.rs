//! VM state: one execution stack plus the loaded function
//!
//! The stack, push and access surfaces live in `api_stack`, `api_push`
//! and `api_access`; this module holds the state itself and the
//! code-facing operations an instruction loop is built on.

use std::rc::Rc;

use bytecode_system::{undump, Instruction, Prototype};
use tracing::{debug, instrument};

use crate::error::{LuaError, Result, StackError};
use crate::stack::LuaStack;

/// Slots available to a fresh state
pub const LUA_MINSTACK: usize = 20;

/// The owning aggregate of the VM.
///
/// A state is single-threaded. The loaded prototype is shared through
/// `Rc`, so one compiled chunk can back several states.
#[derive(Debug, Clone)]
pub struct LuaState {
    pub(crate) stack: LuaStack,
    proto: Option<Rc<Prototype>>,
    pc: usize,
}

impl LuaState {
    /// Create a state with [`LUA_MINSTACK`] slots
    pub fn new() -> Self {
        Self::with_stack_size(LUA_MINSTACK)
    }

    /// Create a state with `size` preallocated slots
    pub fn with_stack_size(size: usize) -> Self {
        Self {
            stack: LuaStack::new(size),
            proto: None,
            pc: 0,
        }
    }

    /// Load a binary chunk and make its main function current.
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::{dump, Chunk, Prototype};
    /// use interpreter::LuaState;
    ///
    /// let bytes = dump(&Chunk { header_upvalues: 1, main: Prototype::default() });
    /// let mut state = LuaState::new();
    /// state.load(&bytes).unwrap();
    /// assert!(state.prototype().is_some());
    /// ```
    #[instrument(skip_all, fields(len = chunk.len()))]
    pub fn load(&mut self, chunk: &[u8]) -> Result<()> {
        let chunk = undump(chunk)?;
        self.load_prototype(Rc::new(chunk.main))
    }

    /// Make an already decoded prototype current and reset the program
    /// counter. Reserves enough free slots for its registers; when the
    /// stack cannot grow that far the state is left unchanged.
    pub fn load_prototype(&mut self, proto: Rc<Prototype>) -> Result<()> {
        debug!(
            source = %proto.source,
            instructions = proto.code.len(),
            max_stack_size = proto.max_stack_size,
            "prototype loaded"
        );
        if !self.stack.check(proto.max_stack_size as usize) {
            return Err(StackError::Overflow.into());
        }
        self.proto = Some(proto);
        self.pc = 0;
        Ok(())
    }

    /// The current prototype
    pub fn prototype(&self) -> Option<&Rc<Prototype>> {
        self.proto.as_ref()
    }

    /// Index of the next instruction to fetch
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Move the program counter by `n` instructions (jumps).
    pub fn add_pc(&mut self, n: isize) {
        self.pc = self.pc.saturating_add_signed(n);
    }

    /// Return the instruction at the program counter and advance past it.
    ///
    /// Returns `None` when no chunk is loaded or the code is exhausted.
    pub fn fetch(&mut self) -> Option<Instruction> {
        let inst = self.proto.as_ref()?.instruction(self.pc)?;
        self.pc += 1;
        Some(inst)
    }

    /// Push constant `idx` of the current prototype.
    pub fn get_const(&mut self, idx: usize) -> Result<()> {
        let proto = self.proto.as_ref().ok_or(LuaError::NoChunk)?;
        let value = proto
            .constants
            .get(idx)
            .cloned()
            .ok_or(LuaError::BadConstant(idx))?;
        self.stack.push(value)?;
        Ok(())
    }

    /// Push an RK operand: a constant when bit 8 is set, otherwise a copy of
    /// register `rk` (stack index `rk + 1`).
    pub fn get_rk(&mut self, rk: u32) -> Result<()> {
        if rk > 0xFF {
            self.get_const((rk & 0xFF) as usize)
        } else {
            self.push_value(rk as isize + 1)?;
            Ok(())
        }
    }
}

impl Default for LuaState {
    fn default() -> Self {
        Self::new()
    }
}
