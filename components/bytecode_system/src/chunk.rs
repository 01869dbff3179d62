//! Binary chunk loader - function prototypes and the `luac` file format
//!
//! A chunk is a fixed header, one byte giving the main function's upvalue
//! count, then the main prototype with its nested prototypes inline.

use core_types::Value;
use tracing::{debug, instrument, trace};

use crate::error::{ChunkError, Result};
use crate::header::*;
use crate::instruction::Instruction;
use crate::reader::ChunkReader;

/// Upvalue descriptor of a prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Upvalue {
    /// 1 if captured from the enclosing function's registers,
    /// 0 if from its upvalues
    pub instack: u8,
    /// Register or upvalue index in the enclosing function
    pub idx: u8,
}

impl Upvalue {
    /// Create a new upvalue descriptor
    pub fn new(instack: bool, idx: u8) -> Self {
        Self {
            instack: instack as u8,
            idx,
        }
    }

    /// True when the value lives in the enclosing function's stack frame
    pub fn is_in_stack(&self) -> bool {
        self.instack != 0
    }
}

/// Debug record of a local variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocVar {
    /// Variable name
    pub var_name: String,
    /// First instruction where the variable is live
    pub start_pc: u32,
    /// First instruction where the variable is dead
    pub end_pc: u32,
}

impl LocVar {
    /// True when the variable is live at `pc`
    pub fn is_active_at(&self, pc: u32) -> bool {
        self.start_pc <= pc && pc < self.end_pc
    }
}

/// The compiled form of one function.
///
/// `line_info`, `loc_vars` and `upvalue_names` are debug information and
/// are empty in stripped chunks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Prototype {
    /// Chunk name, inherited from the parent when not stored
    pub source: String,
    /// Line where the function starts
    pub line_defined: u32,
    /// Line where the function ends
    pub last_line_defined: u32,
    /// Number of fixed parameters
    pub num_params: u8,
    /// Nonzero when the function takes `...`
    pub is_vararg: u8,
    /// Registers needed by the function
    pub max_stack_size: u8,
    /// Instruction words
    pub code: Vec<u32>,
    /// Constant pool
    pub constants: Vec<Value>,
    /// Upvalue descriptors
    pub upvalues: Vec<Upvalue>,
    /// Nested functions
    pub protos: Vec<Prototype>,
    /// Source line of each instruction
    pub line_info: Vec<u32>,
    /// Local variables
    pub loc_vars: Vec<LocVar>,
    /// Upvalue names, parallel to `upvalues`
    pub upvalue_names: Vec<String>,
}

impl Prototype {
    /// True when the function takes `...`
    pub fn is_vararg(&self) -> bool {
        self.is_vararg != 0
    }

    /// Instruction at `pc`, if any
    pub fn instruction(&self, pc: usize) -> Option<Instruction> {
        self.code.get(pc).copied().map(Instruction)
    }

    /// Source line of the instruction at `pc`, when debug info is present
    pub fn line_of(&self, pc: usize) -> Option<u32> {
        self.line_info.get(pc).copied()
    }

    /// Name of the `n`-th (1-based) local variable active at `pc`.
    ///
    /// Locals are ordered by declaration, so the n-th active entry is the
    /// variable held in register `n - 1`.
    pub fn local_name(&self, n: usize, pc: u32) -> Option<&str> {
        if n == 0 {
            return None;
        }
        self.loc_vars
            .iter()
            .take_while(|var| var.start_pc <= pc)
            .filter(|var| pc < var.end_pc)
            .nth(n - 1)
            .map(|var| var.var_name.as_str())
    }

    /// Number of functions in this tree, including this one
    pub fn count_functions(&self) -> usize {
        1 + self.protos.iter().map(Prototype::count_functions).sum::<usize>()
    }
}

/// A loaded binary chunk
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Upvalue count of the main function, as stored after the header
    pub header_upvalues: u8,
    /// The main function
    pub main: Prototype,
}

/// Validate the header, field by field.
///
/// Returns the first field that does not match; later fields are not read.
pub fn check_header(reader: &mut ChunkReader<'_>) -> Result<()> {
    if reader.read_bytes(4)? != LUA_SIGNATURE {
        return Err(ChunkError::Signature);
    }
    if reader.read_byte()? != LUAC_VERSION {
        return Err(ChunkError::Version);
    }
    if reader.read_byte()? != LUAC_FORMAT {
        return Err(ChunkError::Format);
    }
    if reader.read_bytes(6)? != LUAC_DATA {
        return Err(ChunkError::CorruptedData);
    }
    if reader.read_byte()? != CINT_SIZE {
        return Err(ChunkError::IntSize);
    }
    if reader.read_byte()? != CSIZET_SIZE {
        return Err(ChunkError::SizetSize);
    }
    if reader.read_byte()? != INSTRUCTION_SIZE {
        return Err(ChunkError::InstructionSize);
    }
    if reader.read_byte()? != LUA_INTEGER_SIZE {
        return Err(ChunkError::IntegerSize);
    }
    if reader.read_byte()? != LUA_NUMBER_SIZE {
        return Err(ChunkError::NumberSize);
    }
    if reader.read_lua_integer()? != LUAC_INT {
        return Err(ChunkError::SentinelInt);
    }
    if reader.read_lua_number()? != LUAC_NUM {
        return Err(ChunkError::SentinelFloat);
    }
    Ok(())
}

/// Read one prototype and, recursively, its nested prototypes.
///
/// An empty stored source means "same as the enclosing function"; the
/// resolved name is passed down to the children. `depth` is the nesting
/// level of this prototype (0 for the main function); anything nested
/// deeper than [`LUAI_MAXCCALLS`] is rejected.
pub fn read_prototype(
    reader: &mut ChunkReader<'_>,
    parent_source: &str,
    depth: usize,
) -> Result<Prototype> {
    if depth > LUAI_MAXCCALLS {
        return Err(ChunkError::TooDeep {
            offset: reader.position(),
        });
    }
    let mut source = reader.read_string()?;
    if source.is_empty() {
        source = parent_source.to_string();
    }
    let line_defined = reader.read_u32()?;
    let last_line_defined = reader.read_u32()?;
    let num_params = reader.read_byte()?;
    let is_vararg = reader.read_byte()?;
    let max_stack_size = reader.read_byte()?;
    let code = reader.read_vec(ChunkReader::read_u32)?;
    let constants = reader.read_vec(ChunkReader::read_constant)?;
    let upvalues = reader.read_vec(|r| {
        Ok(Upvalue {
            instack: r.read_byte()?,
            idx: r.read_byte()?,
        })
    })?;
    let protos = reader.read_vec(|r| read_prototype(r, &source, depth + 1))?;
    let line_info = reader.read_vec(ChunkReader::read_u32)?;
    let loc_vars = reader.read_vec(|r| {
        Ok(LocVar {
            var_name: r.read_string()?,
            start_pc: r.read_u32()?,
            end_pc: r.read_u32()?,
        })
    })?;
    let upvalue_names = reader.read_vec(ChunkReader::read_string)?;

    trace!(
        source = %source,
        line = line_defined,
        instructions = code.len(),
        constants = constants.len(),
        children = protos.len(),
        "prototype decoded"
    );

    Ok(Prototype {
        source,
        line_defined,
        last_line_defined,
        num_params,
        is_vararg,
        max_stack_size,
        code,
        constants,
        upvalues,
        protos,
        line_info,
        loc_vars,
        upvalue_names,
    })
}

/// Load a complete binary chunk.
///
/// The buffer must hold exactly one header and one main function;
/// leftover bytes are an error.
///
/// # Examples
///
/// ```
/// use bytecode_system::{dump, undump, Chunk, Prototype};
///
/// let chunk = Chunk {
///     header_upvalues: 1,
///     main: Prototype { source: "@demo.lua".to_string(), ..Prototype::default() },
/// };
/// let loaded = undump(&dump(&chunk)).unwrap();
/// assert_eq!(loaded.main.source, "@demo.lua");
/// ```
#[instrument(skip_all, fields(len = data.len()))]
pub fn undump(data: &[u8]) -> Result<Chunk> {
    let mut reader = ChunkReader::new(data);
    check_header(&mut reader)?;
    debug!("header accepted");
    let header_upvalues = reader.read_byte()?;
    let main = read_prototype(&mut reader, "", 0)?;
    if !reader.is_at_end() {
        return Err(ChunkError::TrailingBytes {
            count: reader.remaining(),
        });
    }
    debug!(
        source = %main.source,
        functions = main.count_functions(),
        "chunk loaded"
    );
    Ok(Chunk {
        header_upvalues,
        main,
    })
}
