//! Binary chunk writer - the inverse of the loader
//!
//! Produces byte-exact `luac` 5.3 output for a [`Chunk`], which lets tools
//! and tests build chunks without a compiler.

use core_types::Value;

use crate::chunk::{Chunk, Prototype};
use crate::header::*;

/// Appends little-endian primitives, strings and constants to a buffer.
#[derive(Debug, Clone, Default)]
pub struct ChunkWriter {
    bytes: Vec<u8>,
}

impl ChunkWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the writer and return its buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// One byte
    pub fn write_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    /// 4-byte little-endian word
    pub fn write_u32(&mut self, n: u32) {
        self.bytes.extend_from_slice(&n.to_le_bytes());
    }

    /// 8-byte little-endian word
    pub fn write_u64(&mut self, n: u64) {
        self.bytes.extend_from_slice(&n.to_le_bytes());
    }

    /// `lua_Integer`
    pub fn write_lua_integer(&mut self, n: i64) {
        self.write_u64(n as u64);
    }

    /// `lua_Number`
    pub fn write_lua_number(&mut self, n: f64) {
        self.write_u64(n.to_bits());
    }

    /// Length-prefixed string; the empty string is written as size 0.
    pub fn write_string(&mut self, s: &str) {
        if s.is_empty() {
            self.write_byte(0);
            return;
        }
        let size = s.len() + 1;
        if size < 0xFF {
            self.write_byte(size as u8);
        } else {
            self.write_byte(0xFF);
            self.write_u64(size as u64);
        }
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// 4-byte count followed by each element
    pub fn write_vec<T>(&mut self, items: &[T], mut write: impl FnMut(&mut Self, &T)) {
        self.write_u32(items.len() as u32);
        for item in items {
            write(self, item);
        }
    }

    /// The fixed header
    pub fn write_header(&mut self) {
        self.bytes.extend_from_slice(LUA_SIGNATURE);
        self.write_byte(LUAC_VERSION);
        self.write_byte(LUAC_FORMAT);
        self.bytes.extend_from_slice(LUAC_DATA);
        self.write_byte(CINT_SIZE);
        self.write_byte(CSIZET_SIZE);
        self.write_byte(INSTRUCTION_SIZE);
        self.write_byte(LUA_INTEGER_SIZE);
        self.write_byte(LUA_NUMBER_SIZE);
        self.write_lua_integer(LUAC_INT);
        self.write_lua_number(LUAC_NUM);
    }

    /// Tagged constant
    pub fn write_constant(&mut self, value: &Value) {
        match value {
            Value::Nil => self.write_byte(TAG_NIL),
            Value::Boolean(b) => {
                self.write_byte(TAG_BOOLEAN);
                self.write_byte(*b as u8);
            }
            Value::Integer(i) => {
                self.write_byte(TAG_INTEGER);
                self.write_lua_integer(*i);
            }
            Value::Float(f) => {
                self.write_byte(TAG_NUMBER);
                self.write_lua_number(*f);
            }
            Value::String(s) => {
                let tag = if s.len() <= LUAI_MAXSHORTLEN {
                    TAG_SHORT_STR
                } else {
                    TAG_LONG_STR
                };
                self.write_byte(tag);
                self.write_string(s);
            }
        }
    }

    /// One prototype and its children.
    ///
    /// The source is omitted when it equals the parent's, as `luac` does.
    pub fn write_prototype(&mut self, proto: &Prototype, parent_source: &str) {
        if proto.source == parent_source {
            self.write_string("");
        } else {
            self.write_string(&proto.source);
        }
        self.write_u32(proto.line_defined);
        self.write_u32(proto.last_line_defined);
        self.write_byte(proto.num_params);
        self.write_byte(proto.is_vararg);
        self.write_byte(proto.max_stack_size);
        self.write_vec(&proto.code, |w, word| w.write_u32(*word));
        self.write_vec(&proto.constants, |w, k| w.write_constant(k));
        self.write_vec(&proto.upvalues, |w, up| {
            w.write_byte(up.instack);
            w.write_byte(up.idx);
        });
        self.write_vec(&proto.protos, |w, child| {
            w.write_prototype(child, &proto.source)
        });
        self.write_vec(&proto.line_info, |w, line| w.write_u32(*line));
        self.write_vec(&proto.loc_vars, |w, var| {
            w.write_string(&var.var_name);
            w.write_u32(var.start_pc);
            w.write_u32(var.end_pc);
        });
        self.write_vec(&proto.upvalue_names, |w, name| w.write_string(name));
    }
}

/// Serialize a chunk to the binary format read by [`crate::undump`].
pub fn dump(chunk: &Chunk) -> Vec<u8> {
    let mut writer = ChunkWriter::new();
    writer.write_header();
    writer.write_byte(chunk.header_upvalues);
    writer.write_prototype(&chunk.main, "");
    writer.into_bytes()
}
