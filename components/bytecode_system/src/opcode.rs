//! Lua 5.3 opcodes and their static metadata table.
//!
//! The table is indexed by the 6-bit opcode field and is never mutated.

/// Instruction layout: how the 26 bits above the opcode are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpMode {
    /// A:8 C:9 B:9
    ABC,
    /// A:8 Bx:18 (unsigned)
    ABx,
    /// A:8 sBx:18 (signed, excess-K)
    AsBx,
    /// Ax:26 (unsigned)
    Ax,
}

/// How an operand is used, as far as a listing needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpArgMode {
    /// Argument is not used
    N,
    /// Argument is used as a plain number
    U,
    /// Argument is a register or a jump offset
    R,
    /// Argument is a constant or register/constant
    K,
}

/// Every opcode of the Lua 5.3 virtual machine, numbered as in `lopcodes.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// R(A) := R(B)
    Move = 0,
    /// R(A) := Kst(Bx)
    LoadK,
    /// R(A) := Kst(extra arg)
    LoadKx,
    /// R(A) := (Bool)B; if (C) pc++
    LoadBool,
    /// R(A), R(A+1), ..., R(A+B) := nil
    LoadNil,
    /// R(A) := UpValue[B]
    GetUpval,
    /// R(A) := UpValue[B][RK(C)]
    GetTabUp,
    /// R(A) := R(B)[RK(C)]
    GetTable,
    /// UpValue[A][RK(B)] := RK(C)
    SetTabUp,
    /// UpValue[B] := R(A)
    SetUpval,
    /// R(A)[RK(B)] := RK(C)
    SetTable,
    /// R(A) := {} (size = B,C)
    NewTable,
    /// R(A+1) := R(B); R(A) := R(B)[RK(C)]
    OpSelf,
    /// R(A) := RK(B) + RK(C)
    Add,
    /// R(A) := RK(B) - RK(C)
    Sub,
    /// R(A) := RK(B) * RK(C)
    Mul,
    /// R(A) := RK(B) % RK(C)
    Mod,
    /// R(A) := RK(B) ^ RK(C)
    Pow,
    /// R(A) := RK(B) / RK(C)
    Div,
    /// R(A) := RK(B) // RK(C)
    IDiv,
    /// R(A) := RK(B) & RK(C)
    BAnd,
    /// R(A) := RK(B) | RK(C)
    BOr,
    /// R(A) := RK(B) ~ RK(C)
    BXor,
    /// R(A) := RK(B) << RK(C)
    Shl,
    /// R(A) := RK(B) >> RK(C)
    Shr,
    /// R(A) := -R(B)
    Unm,
    /// R(A) := ~R(B)
    BNot,
    /// R(A) := not R(B)
    Not,
    /// R(A) := length of R(B)
    Len,
    /// R(A) := R(B).. ... ..R(C)
    Concat,
    /// pc+=sBx; if (A) close all upvalues >= R(A - 1)
    Jmp,
    /// if ((RK(B) == RK(C)) ~= A) then pc++
    Eq,
    /// if ((RK(B) <  RK(C)) ~= A) then pc++
    Lt,
    /// if ((RK(B) <= RK(C)) ~= A) then pc++
    Le,
    /// if not (R(A) <=> C) then pc++
    Test,
    /// if (R(B) <=> C) then R(A) := R(B) else pc++
    TestSet,
    /// R(A), ... ,R(A+C-2) := R(A)(R(A+1), ... ,R(A+B-1))
    Call,
    /// return R(A)(R(A+1), ... ,R(A+B-1))
    TailCall,
    /// return R(A), ... ,R(A+B-2)
    Return,
    /// R(A)+=R(A+2); if R(A) <?= R(A+1) then { pc+=sBx; R(A+3)=R(A) }
    ForLoop,
    /// R(A)-=R(A+2); pc+=sBx
    ForPrep,
    /// R(A+3), ... ,R(A+2+C) := R(A)(R(A+1), R(A+2))
    TForCall,
    /// if R(A+1) ~= nil then { R(A)=R(A+1); pc += sBx }
    TForLoop,
    /// R(A)[(C-1)*FPF+i] := R(A+i), 1 <= i <= B
    SetList,
    /// R(A) := closure(KPROTO[Bx])
    Closure,
    /// R(A), R(A+1), ..., R(A+B-2) = vararg
    Vararg,
    /// extra (larger) argument for previous opcode
    ExtraArg,
}

/// Number of defined opcodes.
pub const NUM_OPCODES: usize = 47;

/// Static description of one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    /// Mnemonic, as printed by `luac -l`
    pub name: &'static str,
    /// Instruction is a test: the next instruction must be a jump
    pub test_flag: bool,
    /// Instruction writes register A
    pub set_a_flag: bool,
    /// Usage of operand B
    pub arg_b_mode: OpArgMode,
    /// Usage of operand C
    pub arg_c_mode: OpArgMode,
    /// Bit layout
    pub op_mode: OpMode,
}

const fn op(
    name: &'static str,
    test_flag: bool,
    set_a_flag: bool,
    arg_b_mode: OpArgMode,
    arg_c_mode: OpArgMode,
    op_mode: OpMode,
) -> OpInfo {
    OpInfo {
        name,
        test_flag,
        set_a_flag,
        arg_b_mode,
        arg_c_mode,
        op_mode,
    }
}

use OpArgMode::{K, N, R, U};
use OpMode::{ABx, AsBx, Ax, ABC};

/// Opcode metadata indexed by opcode number.
pub static OPCODES: [OpInfo; NUM_OPCODES] = [
    //  name        T      A      B  C  mode
    op("MOVE", false, true, R, N, ABC),
    op("LOADK", false, true, K, N, ABx),
    op("LOADKX", false, true, N, N, ABx),
    op("LOADBOOL", false, true, U, U, ABC),
    op("LOADNIL", false, true, U, N, ABC),
    op("GETUPVAL", false, true, U, N, ABC),
    op("GETTABUP", false, true, U, K, ABC),
    op("GETTABLE", false, true, R, K, ABC),
    op("SETTABUP", false, false, K, K, ABC),
    op("SETUPVAL", false, false, U, N, ABC),
    op("SETTABLE", false, false, K, K, ABC),
    op("NEWTABLE", false, true, U, U, ABC),
    op("SELF", false, true, R, K, ABC),
    op("ADD", false, true, K, K, ABC),
    op("SUB", false, true, K, K, ABC),
    op("MUL", false, true, K, K, ABC),
    op("MOD", false, true, K, K, ABC),
    op("POW", false, true, K, K, ABC),
    op("DIV", false, true, K, K, ABC),
    op("IDIV", false, true, K, K, ABC),
    op("BAND", false, true, K, K, ABC),
    op("BOR", false, true, K, K, ABC),
    op("BXOR", false, true, K, K, ABC),
    op("SHL", false, true, K, K, ABC),
    op("SHR", false, true, K, K, ABC),
    op("UNM", false, true, R, N, ABC),
    op("BNOT", false, true, R, N, ABC),
    op("NOT", false, true, R, N, ABC),
    op("LEN", false, true, R, N, ABC),
    op("CONCAT", false, true, R, R, ABC),
    op("JMP", false, false, R, N, AsBx),
    op("EQ", true, false, K, K, ABC),
    op("LT", true, false, K, K, ABC),
    op("LE", true, false, K, K, ABC),
    op("TEST", true, false, N, U, ABC),
    op("TESTSET", true, true, R, U, ABC),
    op("CALL", false, true, U, U, ABC),
    op("TAILCALL", false, true, U, U, ABC),
    op("RETURN", false, false, U, N, ABC),
    op("FORLOOP", false, true, R, N, AsBx),
    op("FORPREP", false, true, R, N, AsBx),
    op("TFORCALL", false, false, N, U, ABC),
    op("TFORLOOP", false, true, R, N, AsBx),
    op("SETLIST", false, false, U, U, ABC),
    op("CLOSURE", false, true, U, N, ABx),
    op("VARARG", false, true, U, N, ABC),
    op("EXTRAARG", false, false, U, U, Ax),
];

const ALL: [OpCode; NUM_OPCODES] = [
    OpCode::Move,
    OpCode::LoadK,
    OpCode::LoadKx,
    OpCode::LoadBool,
    OpCode::LoadNil,
    OpCode::GetUpval,
    OpCode::GetTabUp,
    OpCode::GetTable,
    OpCode::SetTabUp,
    OpCode::SetUpval,
    OpCode::SetTable,
    OpCode::NewTable,
    OpCode::OpSelf,
    OpCode::Add,
    OpCode::Sub,
    OpCode::Mul,
    OpCode::Mod,
    OpCode::Pow,
    OpCode::Div,
    OpCode::IDiv,
    OpCode::BAnd,
    OpCode::BOr,
    OpCode::BXor,
    OpCode::Shl,
    OpCode::Shr,
    OpCode::Unm,
    OpCode::BNot,
    OpCode::Not,
    OpCode::Len,
    OpCode::Concat,
    OpCode::Jmp,
    OpCode::Eq,
    OpCode::Lt,
    OpCode::Le,
    OpCode::Test,
    OpCode::TestSet,
    OpCode::Call,
    OpCode::TailCall,
    OpCode::Return,
    OpCode::ForLoop,
    OpCode::ForPrep,
    OpCode::TForCall,
    OpCode::TForLoop,
    OpCode::SetList,
    OpCode::Closure,
    OpCode::Vararg,
    OpCode::ExtraArg,
];

impl OpCode {
    /// Look up an opcode by number. Numbers 47..=63 are unassigned.
    pub fn from_u8(code: u8) -> Option<OpCode> {
        ALL.get(code as usize).copied()
    }

    /// Static metadata for this opcode
    pub fn info(self) -> &'static OpInfo {
        &OPCODES[self as usize]
    }

    /// Mnemonic
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Bit layout of instructions carrying this opcode
    pub fn mode(self) -> OpMode {
        self.info().op_mode
    }
}
