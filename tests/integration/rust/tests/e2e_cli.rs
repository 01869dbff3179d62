//! End-to-End CLI Integration Tests
//!
//! Writes chunk files to disk and lists them through the luac_list API.

use std::io::Write;

use bytecode_system::{dump, Chunk};
use integration_tests::sample_main;
use luac_list::{list_file, CliError, ListOptions};
use tempfile::NamedTempFile;

fn chunk_file() -> NamedTempFile {
    let bytes = dump(&Chunk {
        header_upvalues: 1,
        main: sample_main(),
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file
}

/// Test: Full listing of both functions
#[test]
fn test_e2e_listing() {
    let file = chunk_file();
    let text = list_file(file.path(), ListOptions::default()).expect("listing failed");

    let expected_main = "\nmain <sample.lua:0,0> (7 instructions)\n\
        0+ params, 4 slots, 1 upvalue, 2 locals, 1 constant, 1 function\n\
        \t1\t[1]\tLOADK    \t0 -1\n\
        \t2\t[2]\tCLOSURE  \t1 0\n\
        \t3\t[3]\tMOVE     \t2 1\n\
        \t4\t[3]\tMOVE     \t3 0\n\
        \t5\t[3]\tTAILCALL \t2 2 0\n\
        \t6\t[3]\tRETURN   \t2 0\n\
        \t7\t[3]\tRETURN   \t0 1\n";
    assert!(text.starts_with(expected_main), "got:\n{}", text);

    assert!(text.contains("\nfunction <sample.lua:2,2> (2 instructions)\n"));
    assert!(text.contains("1 param, 2 slots, 0 upvalues, 1 local, 0 constants, 0 functions\n"));
}

/// Test: Debug tables
#[test]
fn test_e2e_constants_tables() {
    let file = chunk_file();
    let options = ListOptions {
        constants: true,
        nested: false,
    };
    let text = list_file(file.path(), options).unwrap();

    assert!(text.contains("constants (1):\n\t1\t10\n"));
    assert!(text.contains("locals (2):\n\t0\tx\t2\t8\n\t1\tf\t3\t8\n"));
    assert!(text.contains("upvalues (1):\n\t0\t_ENV\t1\t0\n"));
    assert!(!text.contains("function <"));
}

/// Test: Corrupted header is reported, not listed
#[test]
fn test_e2e_bad_version() {
    let mut bytes = dump(&Chunk {
        header_upvalues: 1,
        main: sample_main(),
    });
    bytes[4] = 0x54;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let err = list_file(file.path(), ListOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::Chunk(_)));
    assert_eq!(err.to_string(), "bad chunk: version mismatch");
}
