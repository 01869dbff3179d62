//! Binary format contract tests for bytecode_system
