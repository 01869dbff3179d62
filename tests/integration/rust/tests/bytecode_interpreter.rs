//! Bytecode to Interpreter Integration Tests
//!
//! Tests the integration between bytecode_system and interpreter components.
//! Verifies that loaded chunks are fetched and addressed correctly by LuaState.

use std::rc::Rc;

use bytecode_system::{dump, undump, Chunk, OpCode};
use core_types::LuaType;
use integration_tests::sample_main;
use interpreter::{LuaError, LuaState};

fn sample_bytes() -> Vec<u8> {
    dump(&Chunk {
        header_upvalues: 1,
        main: sample_main(),
    })
}

/// Test: Fetch walks the main function in order
#[test]
fn test_fetch_sequence() {
    let mut state = LuaState::new();
    state.load(&sample_bytes()).expect("load failed");

    let mut ops = Vec::new();
    while let Some(inst) = state.fetch() {
        ops.push(inst.op().expect("unknown opcode"));
    }

    assert_eq!(
        ops,
        vec![
            OpCode::LoadK,
            OpCode::Closure,
            OpCode::Move,
            OpCode::Move,
            OpCode::TailCall,
            OpCode::Return,
            OpCode::Return,
        ]
    );
    assert_eq!(state.pc(), 7);
}

/// Test: LOADK operand resolves to the constant pool
#[test]
fn test_loadk_pushes_constant() {
    let mut state = LuaState::new();
    state.load(&sample_bytes()).expect("load failed");

    let inst = state.fetch().expect("empty function");
    let (a, bx) = inst.abx();
    state.set_top(4).unwrap();
    state.get_const(bx as usize).unwrap();
    state.replace(a as isize + 1).unwrap();

    assert_eq!(state.get_top(), 4);
    assert!(state.is_integer(1));
    assert_eq!(state.to_integer(1), 10);
}

/// Test: RK operands pick constants or registers
#[test]
fn test_rk_operands() {
    let mut state = LuaState::new();
    state.load(&sample_bytes()).expect("load failed");
    state.push_string("reg0").unwrap();

    state.get_rk(0x100).unwrap();
    state.get_rk(0).unwrap();

    assert_eq!(state.to_integer(-2), 10);
    assert_eq!(state.to_string_x(-1).as_deref(), Some("reg0"));
}

/// Test: Nested prototypes can be made current
#[test]
fn test_load_nested_prototype() {
    let chunk = undump(&sample_bytes()).expect("undump failed");
    let child = Rc::new(chunk.main.protos[0].clone());

    let mut state = LuaState::new();
    state.load_prototype(child).unwrap();

    let proto = state.prototype().expect("no prototype");
    assert_eq!(proto.source, "@sample.lua");
    assert_eq!(proto.num_params, 1);
    assert_eq!(state.fetch().map(|i| i.to_string()).as_deref(), Some("RETURN 0 2"));
}

/// Test: Shared prototypes back independent states
#[test]
fn test_shared_prototype() {
    let proto = Rc::new(undump(&sample_bytes()).unwrap().main);
    let mut first = LuaState::new();
    let mut second = LuaState::new();
    first.load_prototype(Rc::clone(&proto)).unwrap();
    second.load_prototype(Rc::clone(&proto)).unwrap();

    first.fetch();
    first.fetch();
    assert_eq!(first.pc(), 2);
    assert_eq!(second.pc(), 0);
    assert_eq!(Rc::strong_count(&proto), 3);
}

/// Test: A failed load keeps the previous function
#[test]
fn test_failed_load_keeps_state() {
    let mut state = LuaState::new();
    state.load(&sample_bytes()).unwrap();
    state.push_boolean(true).unwrap();

    let err = state.load(b"\x1bLua\x52").unwrap_err();
    assert!(matches!(err, LuaError::Chunk(_)));
    assert!(state.prototype().is_some());
    assert_eq!(state.type_of(1), LuaType::Boolean);
}
