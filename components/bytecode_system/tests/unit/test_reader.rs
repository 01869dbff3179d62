//! Tests for ChunkReader strings and constants

use bytecode_system::{ChunkError, ChunkReader, ChunkWriter};
use core_types::Value;

fn roundtrip_string(text: &str) -> String {
    let mut writer = ChunkWriter::new();
    writer.write_string(text);
    let bytes = writer.into_bytes();
    let mut reader = ChunkReader::new(&bytes);
    let decoded = reader.read_string().unwrap();
    assert!(reader.is_at_end());
    decoded
}

#[test]
fn test_string_length_zero() {
    assert_eq!(roundtrip_string(""), "");
}

#[test]
fn test_string_length_one() {
    assert_eq!(roundtrip_string("x"), "x");
}

#[test]
fn test_string_length_253_stays_short_form() {
    let text = "a".repeat(253);
    let mut writer = ChunkWriter::new();
    writer.write_string(&text);
    assert_eq!(writer.as_bytes()[0], 254);
    assert_eq!(roundtrip_string(&text), text);
}

#[test]
fn test_string_long_form_1000() {
    let text: String = (0..1000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
    assert_eq!(roundtrip_string(&text), text);
}

#[test]
fn test_hand_encoded_short_string() {
    // size byte 4 counts the implicit trailing NUL
    let bytes = [4, b'L', b'u', b'a'];
    let mut reader = ChunkReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "Lua");
}

#[test]
fn test_hand_encoded_long_string() {
    let mut bytes = vec![0xFF];
    bytes.extend_from_slice(&4u64.to_le_bytes());
    bytes.extend_from_slice(b"abc");
    let mut reader = ChunkReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "abc");
}

#[test]
fn test_truncated_string() {
    let bytes = [10, b'a', b'b'];
    let mut reader = ChunkReader::new(&bytes);
    assert_eq!(
        reader.read_string(),
        Err(ChunkError::UnexpectedEof {
            offset: 1,
            needed: 9,
            available: 2,
        })
    );
}

#[test]
fn test_constant_roundtrip_every_tag() {
    let values = [
        Value::Nil,
        Value::Boolean(true),
        Value::Boolean(false),
        Value::Integer(0x5678),
        Value::Float(370.5),
        Value::String("x".to_string()),
    ];
    for value in values {
        let mut writer = ChunkWriter::new();
        writer.write_constant(&value);
        let bytes = writer.into_bytes();
        let mut reader = ChunkReader::new(&bytes);
        assert_eq!(reader.read_constant().unwrap(), value);
        assert!(reader.is_at_end());
    }
}

#[test]
fn test_boolean_any_nonzero_is_true() {
    let mut reader = ChunkReader::new(&[0x01, 0x7F]);
    assert_eq!(reader.read_constant().unwrap(), Value::Boolean(true));
}

#[test]
fn test_cursor_only_advances() {
    let bytes = [1, 2, 3, 4, 5];
    let mut reader = ChunkReader::new(&bytes);
    assert_eq!(reader.read_byte().unwrap(), 1);
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.read_u32().unwrap(), u32::from_le_bytes([2, 3, 4, 5]));
    assert_eq!(reader.remaining(), 0);
    assert!(reader.read_byte().is_err());
}
