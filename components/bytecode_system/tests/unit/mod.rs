//! Unit tests for bytecode_system

mod test_instruction;
mod test_reader;
