//! 32-bit instruction words and their operand fields.
//!
//! ```text
//!  31       23       14       6      0
//!  |   B:9   |   C:9  |  A:8  | op:6 |   ABC
//!  |     Bx:18        |  A:8  | op:6 |   ABx / AsBx
//!  |          Ax:26           | op:6 |   Ax
//! ```

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::{OpArgMode, OpCode, OpInfo, OpMode};

/// Largest value of the A field
pub const MAXARG_A: u32 = (1 << 8) - 1;
/// Largest value of the B field
pub const MAXARG_B: u32 = (1 << 9) - 1;
/// Largest value of the C field
pub const MAXARG_C: u32 = (1 << 9) - 1;
/// Largest value of the Bx field
pub const MAXARG_BX: u32 = (1 << 18) - 1;
/// Bias of the signed sBx field
pub const MAXARG_SBX: i32 = (MAXARG_BX >> 1) as i32;
/// Largest value of the Ax field
pub const MAXARG_AX: u32 = (1 << 26) - 1;
/// Set in a B or C field when it indexes the constant pool
pub const BITRK: u32 = 1 << 8;

/// True when an RK operand refers to a constant rather than a register.
pub fn is_k(field: u32) -> bool {
    field & BITRK != 0
}

/// Constant-pool index carried by an RK operand.
pub fn index_k(field: u32) -> u32 {
    field & !BITRK
}

/// A raw instruction word.
///
/// Nothing is decoded eagerly; every accessor extracts its field from the
/// word on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction(pub u32);

impl Instruction {
    /// Build an ABC instruction. Fields are masked to their widths.
    pub fn encode_abc(op: OpCode, a: u32, b: u32, c: u32) -> Self {
        Self(
            (op as u32)
                | (a & MAXARG_A) << 6
                | (c & MAXARG_C) << 14
                | (b & MAXARG_B) << 23,
        )
    }

    /// Build an ABx instruction.
    pub fn encode_abx(op: OpCode, a: u32, bx: u32) -> Self {
        Self((op as u32) | (a & MAXARG_A) << 6 | (bx & MAXARG_BX) << 14)
    }

    /// Build an AsBx instruction from a signed offset.
    pub fn encode_asbx(op: OpCode, a: u32, sbx: i32) -> Self {
        Self::encode_abx(op, a, (sbx + MAXARG_SBX) as u32)
    }

    /// Build an Ax instruction.
    pub fn encode_ax(op: OpCode, ax: u32) -> Self {
        Self((op as u32) | (ax & MAXARG_AX) << 6)
    }

    /// The raw word
    pub fn word(self) -> u32 {
        self.0
    }

    /// Low 6 bits
    pub fn opcode(self) -> u8 {
        (self.0 & 0x3F) as u8
    }

    /// Operands of the ABC layout, as `(a, b, c)`
    pub fn abc(self) -> (u32, u32, u32) {
        let a = (self.0 >> 6) & 0xFF;
        let c = (self.0 >> 14) & 0x1FF;
        let b = (self.0 >> 23) & 0x1FF;
        (a, b, c)
    }

    /// Operands of the ABx layout, as `(a, bx)`
    pub fn abx(self) -> (u32, u32) {
        let a = (self.0 >> 6) & 0xFF;
        let bx = self.0 >> 14;
        (a, bx)
    }

    /// Operands of the AsBx layout, as `(a, sbx)`
    pub fn asbx(self) -> (u32, i32) {
        let (a, bx) = self.abx();
        (a, bx as i32 - MAXARG_SBX)
    }

    /// Operand of the Ax layout
    pub fn ax(self) -> u32 {
        self.0 >> 6
    }

    /// Decoded opcode
    pub fn op(self) -> Result<OpCode, DecodeError> {
        let code = self.opcode();
        OpCode::from_u8(code).ok_or(DecodeError::UnknownOpcode(code))
    }

    /// Static metadata for the opcode
    pub fn op_info(self) -> Result<&'static OpInfo, DecodeError> {
        self.op().map(OpCode::info)
    }

    /// Mnemonic
    pub fn op_name(self) -> Result<&'static str, DecodeError> {
        self.op_info().map(|info| info.name)
    }

    /// Bit layout
    pub fn op_mode(self) -> Result<OpMode, DecodeError> {
        self.op_info().map(|info| info.op_mode)
    }

    /// Usage of operand B
    pub fn b_mode(self) -> Result<OpArgMode, DecodeError> {
        self.op_info().map(|info| info.arg_b_mode)
    }

    /// Usage of operand C
    pub fn c_mode(self) -> Result<OpArgMode, DecodeError> {
        self.op_info().map(|info| info.arg_c_mode)
    }

    /// Operand text in `luac -l` form.
    ///
    /// Constant references print as negative one-based pool indices.
    pub fn operands(self) -> Result<String, DecodeError> {
        let info = self.op_info()?;
        let text = match info.op_mode {
            OpMode::ABC => {
                let (a, b, c) = self.abc();
                let mut parts = vec![a.to_string()];
                for (mode, field) in [(info.arg_b_mode, b), (info.arg_c_mode, c)] {
                    if mode == OpArgMode::N {
                        continue;
                    }
                    if mode == OpArgMode::K && field > 0xFF {
                        parts.push((-1 - (field & 0xFF) as i64).to_string());
                    } else {
                        parts.push(field.to_string());
                    }
                }
                parts.join(" ")
            }
            OpMode::ABx => {
                let (a, bx) = self.abx();
                match info.arg_b_mode {
                    OpArgMode::K => format!("{} {}", a, -1 - bx as i64),
                    OpArgMode::U => format!("{} {}", a, bx),
                    OpArgMode::N | OpArgMode::R => a.to_string(),
                }
            }
            OpMode::AsBx => {
                let (a, sbx) = self.asbx();
                format!("{} {}", a, sbx)
            }
            OpMode::Ax => (-1 - self.ax() as i64).to_string(),
        };
        Ok(text)
    }
}

impl From<u32> for Instruction {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

/// `NAME operands`, or `UNKNOWN(n)` for an unassigned opcode.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.op_name(), self.operands()) {
            (Ok(name), Ok(operands)) => write!(f, "{} {}", name, operands),
            _ => write!(f, "UNKNOWN({})", self.opcode()),
        }
    }
}
