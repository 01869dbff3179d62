//! Forward-only cursor over the bytes of a binary chunk.

use core_types::Value;

use crate::error::{ChunkError, Result};
use crate::header::{TAG_BOOLEAN, TAG_INTEGER, TAG_LONG_STR, TAG_NIL, TAG_NUMBER, TAG_SHORT_STR};

/// Reads little-endian primitives, strings and constants from a buffer.
///
/// The cursor never rewinds. Every read checks the remaining length first,
/// so a truncated chunk surfaces as `ChunkError::UnexpectedEof` rather than
/// a short value.
///
/// # Examples
///
/// ```
/// use bytecode_system::ChunkReader;
///
/// let mut reader = ChunkReader::new(&[0x78, 0x56, 0x00, 0x00, 0x03, b'h', b'i']);
/// assert_eq!(reader.read_u32().unwrap(), 0x5678);
/// assert_eq!(reader.read_string().unwrap(), "hi");
/// assert!(reader.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a reader positioned at the first byte
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes.
    pub fn read_bytes(&mut self, n: u64) -> Result<&'a [u8]> {
        let available = self.remaining();
        if n > available as u64 {
            return Err(ChunkError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let n = n as usize;
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N as u64)?);
        Ok(buf)
    }

    /// One byte
    pub fn read_byte(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// 4-byte little-endian word (C `int` and instructions)
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// 8-byte little-endian word (`size_t`)
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// `lua_Integer`
    pub fn read_lua_integer(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// `lua_Number`
    pub fn read_lua_number(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Length-prefixed string.
    ///
    /// The size byte counts a trailing NUL that is not stored: `0` is the
    /// empty (absent) string, `0xFF` announces an 8-byte size, otherwise
    /// `size - 1` bytes of text follow.
    pub fn read_string(&mut self) -> Result<String> {
        let mut size = self.read_byte()? as u64;
        if size == 0xFF {
            size = self.read_u64()?;
        }
        if size == 0 {
            return Ok(String::new());
        }
        let offset = self.pos;
        let bytes = self.read_bytes(size - 1)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ChunkError::InvalidString { offset })
    }

    /// Tagged constant.
    ///
    /// An unknown tag means the cursor has lost sync with the stream;
    /// the caller must abandon the chunk.
    pub fn read_constant(&mut self) -> Result<Value> {
        let offset = self.pos;
        let tag = self.read_byte()?;
        let value = match tag {
            TAG_NIL => Value::Nil,
            TAG_BOOLEAN => Value::Boolean(self.read_byte()? != 0),
            TAG_INTEGER => Value::Integer(self.read_lua_integer()?),
            TAG_NUMBER => Value::Float(self.read_lua_number()?),
            TAG_SHORT_STR | TAG_LONG_STR => Value::String(self.read_string()?),
            _ => return Err(ChunkError::CorruptedConstant { tag, offset }),
        };
        Ok(value)
    }

    /// 4-byte element count followed by that many elements.
    ///
    /// Capacity is bounded by the remaining input so a corrupted count
    /// cannot trigger a huge allocation.
    pub fn read_vec<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let count = self.read_u32()? as usize;
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(read(self)?);
        }
        Ok(items)
    }
}
