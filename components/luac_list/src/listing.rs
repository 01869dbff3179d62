//! `luac -l` style rendering of decoded chunks

use std::fmt::{self, Write};
use std::path::Path;

use bytecode_system::{undump, Chunk, Instruction, Prototype};
use core_types::Value;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// What to include in a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Print the constants, locals and upvalues tables
    pub constants: bool,
    /// Descend into nested functions
    pub nested: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            constants: false,
            nested: true,
        }
    }
}

/// Read, decode and list a chunk file.
pub fn list_file(path: &Path, options: ListOptions) -> CliResult<String> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "chunk read");

    let chunk = undump(&bytes)?;
    debug!(functions = chunk.main.count_functions(), "chunk decoded");
    list_chunk(&chunk, options)
}

/// Render a decoded chunk.
///
/// # Example
///
/// ```
/// use bytecode_system::{Chunk, Instruction, OpCode, Prototype};
/// use luac_list::{list_chunk, ListOptions};
///
/// let main = Prototype {
///     source: "@hello.lua".to_string(),
///     code: vec![Instruction::encode_abc(OpCode::Return, 0, 1, 0).word()],
///     ..Prototype::default()
/// };
/// let text = list_chunk(&Chunk { header_upvalues: 1, main }, ListOptions::default()).unwrap();
/// assert!(text.starts_with("\nmain <hello.lua:0,0> (1 instruction)\n"));
/// assert!(text.contains("\t1\t[-]\tRETURN   \t0 1\n"));
/// ```
pub fn list_chunk(chunk: &Chunk, options: ListOptions) -> CliResult<String> {
    let mut out = String::new();
    list_prototype(&mut out, &chunk.main, options)?;
    Ok(out)
}

fn list_prototype(out: &mut String, proto: &Prototype, options: ListOptions) -> CliResult<()> {
    print_header(out, proto)?;
    print_code(out, proto)?;
    if options.constants {
        print_debug(out, proto)?;
    }
    if options.nested {
        for child in &proto.protos {
            list_prototype(out, child, options)?;
        }
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn display_source(source: &str) -> &str {
    match source.as_bytes().first() {
        Some(b'@') | Some(b'=') => &source[1..],
        Some(0x1B) => "(bstring)",
        Some(_) => "(string)",
        None => "=?",
    }
}

fn print_header(out: &mut String, proto: &Prototype) -> fmt::Result {
    let kind = if proto.line_defined == 0 {
        "main"
    } else {
        "function"
    };
    let n = proto.code.len();
    writeln!(
        out,
        "\n{} <{}:{},{}> ({} instruction{})",
        kind,
        display_source(&proto.source),
        proto.line_defined,
        proto.last_line_defined,
        n,
        plural(n)
    )?;

    let params = proto.num_params as usize;
    let slots = proto.max_stack_size as usize;
    write!(
        out,
        "{}{} param{}, {} slot{}, {} upvalue{}, ",
        params,
        if proto.is_vararg() { "+" } else { "" },
        plural(params),
        slots,
        plural(slots),
        proto.upvalues.len(),
        plural(proto.upvalues.len())
    )?;
    writeln!(
        out,
        "{} local{}, {} constant{}, {} function{}",
        proto.loc_vars.len(),
        plural(proto.loc_vars.len()),
        proto.constants.len(),
        plural(proto.constants.len()),
        proto.protos.len(),
        plural(proto.protos.len())
    )
}

fn print_code(out: &mut String, proto: &Prototype) -> CliResult<()> {
    for (pc, inst) in proto.code.iter().copied().map(Instruction).enumerate() {
        let line = match proto.line_of(pc) {
            Some(line) => line.to_string(),
            None => "-".to_string(),
        };
        let (name, operands) = (inst.op_name()?, inst.operands()?);
        writeln!(out, "\t{}\t[{}]\t{:<9}\t{}", pc + 1, line, name, operands)?;
    }
    Ok(())
}

fn constant_text(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

fn print_debug(out: &mut String, proto: &Prototype) -> fmt::Result {
    writeln!(out, "constants ({}):", proto.constants.len())?;
    for (i, k) in proto.constants.iter().enumerate() {
        writeln!(out, "\t{}\t{}", i + 1, constant_text(k))?;
    }

    writeln!(out, "locals ({}):", proto.loc_vars.len())?;
    for (i, var) in proto.loc_vars.iter().enumerate() {
        let (start, end) = (var.start_pc + 1, var.end_pc + 1);
        writeln!(out, "\t{}\t{}\t{}\t{}", i, var.var_name, start, end)?;
    }

    writeln!(out, "upvalues ({}):", proto.upvalues.len())?;
    for (i, up) in proto.upvalues.iter().enumerate() {
        let name = proto.upvalue_names.get(i).map_or("-", String::as_str);
        writeln!(out, "\t{}\t{}\t{}\t{}", i, name, up.instack, up.idx)?;
    }
    Ok(())
}
