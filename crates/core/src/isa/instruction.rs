//! Decoded instruction records.
//!
//! One input line decodes to exactly one [`Instruction`]. Operands are fully
//! decoded at tokenize time: register operands to [`Reg`], immediates to
//! [`Word`], stack operands to their signed offset. Dispatch in the engine is
//! an exhaustive match over this enum; there is no string comparison after
//! decode.

use crate::common::reg::Reg;
use crate::common::Word;

/// A decoded instruction of the interpreted subset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `li dst, imm` — load an integer literal into a register.
    Li {
        /// Destination register.
        dst: Reg,
        /// Immediate value.
        imm: Word,
    },

    /// `mv dst, src` — copy one register into another.
    Mv {
        /// Destination register.
        dst: Reg,
        /// Source register.
        src: Reg,
    },

    /// `add dst, src1, src2` — sum two registers.
    Add {
        /// Destination register.
        dst: Reg,
        /// First source register.
        src1: Reg,
        /// Second source register.
        src2: Reg,
    },

    /// `sub dst, src1, src2` — subtract `src2` from `src1`.
    Sub {
        /// Destination register.
        dst: Reg,
        /// First source register.
        src1: Reg,
        /// Second source register.
        src2: Reg,
    },

    /// `rem dst, src1, src2` — remainder of `src1` divided by `src2`.
    ///
    /// Host remainder sign convention. A zero `src2` is a
    /// [`DivisionByZero`](crate::common::error::Fault::DivisionByZero) fault
    /// at execution time.
    Rem {
        /// Destination register.
        dst: Reg,
        /// Dividend register.
        src1: Reg,
        /// Divisor register.
        src2: Reg,
    },

    /// `sw src, offset(sp)` — store a register into stack memory.
    Sw {
        /// Source register.
        src: Reg,
        /// Signed stack offset, as written before `(sp)`.
        offset: i64,
    },

    /// `lw dst, offset(sp)` — load a stack memory cell into a register.
    Lw {
        /// Destination register.
        dst: Reg,
        /// Signed stack offset, as written before `(sp)`.
        offset: i64,
    },

    /// `addi dst, src, imm` — add an immediate to a register.
    ///
    /// Recognized and fully decoded, but inert by default: the reference
    /// interpreter bails out of this transition before it takes effect. See
    /// [`Config::full_addi`](crate::config::Config::full_addi).
    Addi {
        /// Destination register.
        dst: Reg,
        /// Source register.
        src: Reg,
        /// Immediate value.
        imm: Word,
    },

    /// An unrecognized opcode, with its mnemonic.
    ///
    /// Non-fatal: the engine reports it and moves on without touching state.
    /// Operands of an unknown opcode are never decoded.
    Unknown(String),
}
