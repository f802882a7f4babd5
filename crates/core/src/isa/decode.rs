//! Line tokenizer and instruction decoder.
//!
//! This module turns raw text lines into [`Instruction`] records. It performs:
//! 1. **Filtering:** Blank lines and comment lines never reach decode.
//! 2. **Tokenizing:** Whitespace and comma separators collapse to one delimiter.
//! 3. **Decoding:** Opcode dispatch plus per-operand parsing (registers,
//!    integer literals, `offset(sp)` stack operands).
//!
//! Operand faults are fatal ([`Fault::MalformedOperand`],
//! [`Fault::UnknownRegister`]); an unrecognized opcode is not, and decodes to
//! [`Instruction::Unknown`] with its operands left untouched.

use std::str::FromStr;

use crate::common::error::Fault;
use crate::common::reg::Reg;
use crate::common::Word;
use crate::isa::instruction::Instruction;

/// Line prefixes that mark a comment.
pub const COMMENT_MARKERS: [&str; 2] = ["#", "//"];

/// Suffix of a stack-relative operand.
const SP_SUFFIX: &str = "(sp)";

/// Decodes one input line.
///
/// Returns `Ok(None)` for blank and comment lines, `Ok(Some(_))` for an
/// instruction. Extra trailing tokens beyond an opcode's operand count are
/// ignored, as the reference interpreter ignores them.
///
/// # Errors
///
/// Returns [`Fault::MalformedOperand`] for a missing or unparsable operand
/// and [`Fault::UnknownRegister`] for a register name outside the recognized
/// set. Unknown opcodes are not an error.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, Fault> {
    let line = line.trim();
    if line.is_empty() || COMMENT_MARKERS.iter().any(|m| line.starts_with(m)) {
        return Ok(None);
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let Some(opcode) = parts.next() else {
        return Ok(None);
    };

    let inst = match opcode {
        "li" => Instruction::Li {
            dst: reg(&mut parts, opcode)?,
            imm: imm(&mut parts, opcode)?,
        },
        "mv" => Instruction::Mv {
            dst: reg(&mut parts, opcode)?,
            src: reg(&mut parts, opcode)?,
        },
        "add" => Instruction::Add {
            dst: reg(&mut parts, opcode)?,
            src1: reg(&mut parts, opcode)?,
            src2: reg(&mut parts, opcode)?,
        },
        "sub" => Instruction::Sub {
            dst: reg(&mut parts, opcode)?,
            src1: reg(&mut parts, opcode)?,
            src2: reg(&mut parts, opcode)?,
        },
        "rem" => Instruction::Rem {
            dst: reg(&mut parts, opcode)?,
            src1: reg(&mut parts, opcode)?,
            src2: reg(&mut parts, opcode)?,
        },
        "sw" => Instruction::Sw {
            src: reg(&mut parts, opcode)?,
            offset: sp_offset(&mut parts, opcode)?,
        },
        "lw" => Instruction::Lw {
            dst: reg(&mut parts, opcode)?,
            offset: sp_offset(&mut parts, opcode)?,
        },
        "addi" => Instruction::Addi {
            dst: reg(&mut parts, opcode)?,
            src: reg(&mut parts, opcode)?,
            imm: imm(&mut parts, opcode)?,
        },
        other => Instruction::Unknown(other.to_string()),
    };
    Ok(Some(inst))
}

/// Pulls the next operand token, failing if the line ran out.
fn next_token<'a, I>(parts: &mut I, opcode: &str) -> Result<&'a str, Fault>
where
    I: Iterator<Item = &'a str>,
{
    parts
        .next()
        .ok_or_else(|| Fault::MalformedOperand(format!("`{opcode}`: missing operand")))
}

/// Decodes a register operand.
fn reg<'a, I>(parts: &mut I, opcode: &str) -> Result<Reg, Fault>
where
    I: Iterator<Item = &'a str>,
{
    Reg::from_str(next_token(parts, opcode)?)
}

/// Decodes an integer-literal operand.
fn imm<'a, I>(parts: &mut I, opcode: &str) -> Result<Word, Fault>
where
    I: Iterator<Item = &'a str>,
{
    let token = next_token(parts, opcode)?;
    token
        .parse()
        .map_err(|_| Fault::MalformedOperand(format!("`{token}` is not an integer literal")))
}

/// Decodes an `offset(sp)` stack operand to its signed offset.
fn sp_offset<'a, I>(parts: &mut I, opcode: &str) -> Result<i64, Fault>
where
    I: Iterator<Item = &'a str>,
{
    let token = next_token(parts, opcode)?;
    token
        .strip_suffix(SP_SUFFIX)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| {
            Fault::MalformedOperand(format!("`{token}` is not of the form `offset(sp)`"))
        })
}
