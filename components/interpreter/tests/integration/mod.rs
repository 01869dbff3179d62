//! Integration tests for interpreter
//!
//! Tests interaction between the chunk loader, LuaState and the stack API

use bytecode_system::{dump, Chunk, Instruction, OpCode, Prototype};
use core_types::{LuaType, Value};
use interpreter::{LuaError, LuaState};

fn chunk_bytes(code: Vec<Instruction>, constants: Vec<Value>) -> Vec<u8> {
    let main = Prototype {
        source: "@test.lua".to_string(),
        max_stack_size: 4,
        code: code.into_iter().map(Instruction::word).collect(),
        constants,
        ..Prototype::default()
    };
    dump(&Chunk {
        header_upvalues: 1,
        main,
    })
}

/// Run LOADK, LOADNIL, MOVE and ADD over registers `1..=max_stack_size`
fn run(state: &mut LuaState) {
    let frame = state.prototype().map(|p| p.max_stack_size).unwrap_or(0);
    state.set_top(frame as isize).unwrap();

    while let Some(inst) = state.fetch() {
        match inst.op().unwrap() {
            OpCode::LoadK => {
                let (a, bx) = inst.abx();
                state.get_const(bx as usize).unwrap();
                state.replace(a as isize + 1).unwrap();
            }
            OpCode::LoadNil => {
                let (a, b, _) = inst.abc();
                for r in a..=a + b {
                    state.push_nil().unwrap();
                    state.replace(r as isize + 1).unwrap();
                }
            }
            OpCode::Move => {
                let (a, b, _) = inst.abc();
                state.copy(b as isize + 1, a as isize + 1).unwrap();
            }
            OpCode::Add => {
                let (a, b, c) = inst.abc();
                state.get_rk(b).unwrap();
                state.get_rk(c).unwrap();
                let sum = state.to_integer(-2) + state.to_integer(-1);
                state.pop(2).unwrap();
                state.push_integer(sum).unwrap();
                state.replace(a as isize + 1).unwrap();
            }
            OpCode::Jmp => {
                let (_, sbx) = inst.asbx();
                state.add_pc(sbx as isize);
            }
            OpCode::Return => break,
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_load_and_run_registers() {
    let bytes = chunk_bytes(
        vec![
            Instruction::encode_abx(OpCode::LoadK, 0, 0),
            Instruction::encode_abx(OpCode::LoadK, 1, 1),
            Instruction::encode_abc(OpCode::Add, 2, 0, 1),
            Instruction::encode_abc(OpCode::Move, 3, 2, 0),
            Instruction::encode_abc(OpCode::Return, 0, 1, 0),
        ],
        vec![Value::Integer(40), Value::Integer(2)],
    );

    let mut state = LuaState::new();
    state.load(&bytes).unwrap();
    run(&mut state);

    assert_eq!(state.get_top(), 4);
    assert_eq!(state.to_integer(3), 42);
    assert_eq!(state.to_integer(4), 42);
    assert_eq!(state.pc(), 5);
}

#[test]
fn test_add_with_constant_operands() {
    // ADD 0 K(0) K(1)
    let bytes = chunk_bytes(
        vec![
            Instruction::encode_abc(OpCode::Add, 0, 0x100, 0x101),
            Instruction::encode_abc(OpCode::Return, 0, 1, 0),
        ],
        vec![Value::Integer(1), Value::Integer(2)],
    );

    let mut state = LuaState::new();
    state.load(&bytes).unwrap();
    run(&mut state);
    assert_eq!(state.to_integer(1), 3);
}

#[test]
fn test_jump_skips_instruction() {
    let bytes = chunk_bytes(
        vec![
            Instruction::encode_abx(OpCode::LoadK, 0, 0),
            Instruction::encode_asbx(OpCode::Jmp, 0, 1),
            Instruction::encode_abx(OpCode::LoadK, 0, 1),
            Instruction::encode_abc(OpCode::LoadNil, 1, 0, 0),
            Instruction::encode_abc(OpCode::Return, 0, 1, 0),
        ],
        vec![Value::from("kept"), Value::from("skipped")],
    );

    let mut state = LuaState::new();
    state.load(&bytes).unwrap();
    run(&mut state);
    assert_eq!(state.to_string_x(1).as_deref(), Some("kept"));
    assert_eq!(state.type_of(2), LuaType::Nil);
}

#[test]
fn test_reload_resets_pc() {
    let bytes = chunk_bytes(
        vec![Instruction::encode_abc(OpCode::Return, 0, 1, 0)],
        vec![],
    );

    let mut state = LuaState::new();
    state.load(&bytes).unwrap();
    assert!(state.fetch().is_some());
    assert!(state.fetch().is_none());

    state.load(&bytes).unwrap();
    assert_eq!(state.pc(), 0);
    assert!(state.fetch().is_some());
}

#[test]
fn test_load_rejects_bad_chunk() {
    let mut bytes = chunk_bytes(Vec::new(), Vec::new());
    bytes[4] = 0x52;

    let mut state = LuaState::new();
    let err = state.load(&bytes).unwrap_err();
    assert!(matches!(err, LuaError::Chunk(_)));
    assert!(state.prototype().is_none());
}

#[test]
fn test_get_const_out_of_range() {
    let bytes = chunk_bytes(Vec::new(), vec![Value::Nil]);

    let mut state = LuaState::new();
    state.load(&bytes).unwrap();
    state.get_const(0).unwrap();
    assert!(state.is_nil(-1));
    assert_eq!(state.get_const(1), Err(LuaError::BadConstant(1)));
}
