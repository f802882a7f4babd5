//! Instruction set of the interpreted subset.
//!
//! This module covers the textual instruction surface:
//! 1. **Records:** The decoded instruction form, one variant per opcode.
//! 2. **Decoding:** Tokenizing raw text lines into instruction records.

/// Line tokenizer and instruction decoder.
pub mod decode;
/// Decoded instruction records.
pub mod instruction;

pub use instruction::Instruction;
