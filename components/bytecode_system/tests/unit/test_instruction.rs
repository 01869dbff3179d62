//! Tests for Instruction decoding and rendering

use bytecode_system::instruction::{MAXARG_BX, MAXARG_SBX};
use bytecode_system::{DecodeError, Instruction, OpArgMode, OpCode, OpMode};

#[test]
fn test_abc_decode_opcode_zero() {
    let word = (1u32 << 6) | (3 << 14) | (2 << 23);
    let inst = Instruction(word);
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.abc(), (1, 2, 3));
    assert_eq!(inst.op(), Ok(OpCode::Move));
}

#[test]
fn test_c_is_adjacent_to_a() {
    // C occupies bits 14..23, B bits 23..32
    let inst = Instruction(0x1FF << 14);
    assert_eq!(inst.abc(), (0, 0, 0x1FF));
    let inst = Instruction(0x1FF << 23);
    assert_eq!(inst.abc(), (0, 0x1FF, 0));
}

#[test]
fn test_abx_decode() {
    let inst = Instruction::encode_abx(OpCode::LoadK, 7, MAXARG_BX);
    assert_eq!(inst.abx(), (7, MAXARG_BX));
}

#[test]
fn test_asbx_zero_at_bias() {
    let word = (OpCode::Jmp as u32) | (131071 << 14);
    assert_eq!(Instruction(word).asbx(), (0, 0));
}

#[test]
fn test_asbx_extremes() {
    let low = Instruction(OpCode::Jmp as u32);
    assert_eq!(low.asbx().1, -MAXARG_SBX);
    let high = Instruction((OpCode::Jmp as u32) | (MAXARG_BX << 14));
    assert_eq!(high.asbx().1, MAXARG_SBX + 1);
}

#[test]
fn test_ax_decode() {
    let inst = Instruction((OpCode::ExtraArg as u32) | (12345 << 6));
    assert_eq!(inst.ax(), 12345);
}

#[test]
fn test_metadata_accessors() {
    let inst = Instruction::encode_abc(OpCode::GetTabUp, 0, 0, 0x100);
    assert_eq!(inst.op_name(), Ok("GETTABUP"));
    assert_eq!(inst.op_mode(), Ok(OpMode::ABC));
    assert_eq!(inst.b_mode(), Ok(OpArgMode::U));
    assert_eq!(inst.c_mode(), Ok(OpArgMode::K));
}

#[test]
fn test_render_move_omits_unused_c() {
    let inst = Instruction::encode_abc(OpCode::Move, 1, 0, 9);
    assert_eq!(inst.operands(), Ok("1 0".to_string()));
    assert_eq!(inst.to_string(), "MOVE 1 0");
}

#[test]
fn test_render_constant_operands() {
    let inst = Instruction::encode_abc(OpCode::Add, 2, 0x100, 0x101);
    assert_eq!(inst.to_string(), "ADD 2 -1 -2");
    let inst = Instruction::encode_abc(OpCode::Add, 2, 0, 0x1FF);
    assert_eq!(inst.to_string(), "ADD 2 0 -256");
}

#[test]
fn test_render_gettabup() {
    let inst = Instruction::encode_abc(OpCode::GetTabUp, 0, 0, 0x100);
    assert_eq!(inst.to_string(), "GETTABUP 0 0 -1");
}

#[test]
fn test_render_plain_number_above_255_not_negated() {
    // B of NEWTABLE is a plain number even when large
    let inst = Instruction::encode_abc(OpCode::NewTable, 0, 300, 0);
    assert_eq!(inst.to_string(), "NEWTABLE 0 300 0");
}

#[test]
fn test_render_abx() {
    assert_eq!(
        Instruction::encode_abx(OpCode::LoadK, 3, 4).to_string(),
        "LOADK 3 -5"
    );
    assert_eq!(
        Instruction::encode_abx(OpCode::Closure, 1, 0).to_string(),
        "CLOSURE 1 0"
    );
    assert_eq!(
        Instruction::encode_abx(OpCode::LoadKx, 1, 0).to_string(),
        "LOADKX 1"
    );
}

#[test]
fn test_render_asbx() {
    let inst = Instruction::encode_asbx(OpCode::ForPrep, 4, -3);
    assert_eq!(inst.to_string(), "FORPREP 4 -3");
    let inst = Instruction::encode_asbx(OpCode::Jmp, 0, 2);
    assert_eq!(inst.to_string(), "JMP 0 2");
}

#[test]
fn test_render_ax() {
    let inst = Instruction::encode_ax(OpCode::ExtraArg, 7);
    assert_eq!(inst.to_string(), "EXTRAARG -8");
}

#[test]
fn test_unknown_opcode_errors() {
    let inst = Instruction(50);
    assert_eq!(inst.op_info(), Err(DecodeError::UnknownOpcode(50)));
    assert_eq!(inst.operands(), Err(DecodeError::UnknownOpcode(50)));
}
