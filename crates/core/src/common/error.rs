//! Fault definitions.
//!
//! This module defines the error handling for the interpreter. It provides:
//! 1. **Fault Representation:** One variant per fatal condition an instruction
//!    can raise, carrying the faulting value.
//! 2. **Propagation:** Faults abort the remaining instruction sequence as soon
//!    as they occur; no state is mutated past the faulting instruction.
//!
//! An unrecognized opcode is deliberately absent here: it is non-fatal,
//! modeled as [`Instruction::Unknown`](crate::isa::instruction::Instruction)
//! and reported through the logging layer while execution continues.

use thiserror::Error;

/// Fatal condition raised while decoding or executing an instruction.
///
/// Every variant aborts the run: the engine stops mutating state and surfaces
/// the fault to the caller with the remaining sequence unexecuted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// An operand named a register outside the recognized fixed set.
    ///
    /// The recognized set is `a0`-`a7` and `t0`-`t6`; it never grows at
    /// runtime. The associated value is the offending name.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// A `rem` instruction was executed with a zero divisor.
    ///
    /// The destination register is left unchanged.
    #[error("division by zero in `rem`")]
    DivisionByZero,

    /// A stack-relative access resolved outside the memory buffer.
    ///
    /// Raised at the offset-translation step, before any cell is touched.
    #[error("stack offset {offset} resolves to index {index}, outside memory of {capacity} cells")]
    OutOfBoundsMemoryAccess {
        /// The stack offset as written in the instruction.
        offset: i64,
        /// The translated absolute index (may be negative).
        index: i64,
        /// Capacity of the memory buffer in cells.
        capacity: usize,
    },

    /// An operand did not parse as the form its opcode requires.
    ///
    /// Covers unparsable integer literals, `offset(sp)` operands without the
    /// `(sp)` suffix or with a non-numeric offset, and missing operands. The
    /// associated value describes the offending token.
    #[error("malformed operand: {0}")]
    MalformedOperand(String),
}
