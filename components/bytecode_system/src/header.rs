//! Constants of the Lua 5.3 binary chunk header and constant tags.

/// `ESC` followed by "Lua"
pub const LUA_SIGNATURE: &[u8; 4] = b"\x1bLua";
/// Major * 16 + minor
pub const LUAC_VERSION: u8 = 0x53;
/// Official format
pub const LUAC_FORMAT: u8 = 0;
/// Catches text-mode conversions of the file
pub const LUAC_DATA: &[u8; 6] = b"\x19\x93\r\n\x1a\n";
/// `sizeof(int)`
pub const CINT_SIZE: u8 = 4;
/// `sizeof(size_t)`
pub const CSIZET_SIZE: u8 = 8;
/// `sizeof(Instruction)`
pub const INSTRUCTION_SIZE: u8 = 4;
/// `sizeof(lua_Integer)`
pub const LUA_INTEGER_SIZE: u8 = 8;
/// `sizeof(lua_Number)`
pub const LUA_NUMBER_SIZE: u8 = 8;
/// Integer sentinel
pub const LUAC_INT: i64 = 0x5678;
/// Float sentinel
pub const LUAC_NUM: f64 = 370.5;

/// Total header length in bytes
pub const HEADER_SIZE: usize = 4 + 1 + 1 + 6 + 5 + 8 + 8;

/// nil constant
pub const TAG_NIL: u8 = 0x00;
/// boolean constant
pub const TAG_BOOLEAN: u8 = 0x01;
/// float constant
pub const TAG_NUMBER: u8 = 0x03;
/// integer constant
pub const TAG_INTEGER: u8 = 0x13;
/// short string constant
pub const TAG_SHORT_STR: u8 = 0x04;
/// long string constant
pub const TAG_LONG_STR: u8 = 0x14;

/// Strings up to this length are dumped with the short-string tag
pub const LUAI_MAXSHORTLEN: usize = 40;

/// Deepest function nesting accepted by the loader
pub const LUAI_MAXCCALLS: usize = 200;
