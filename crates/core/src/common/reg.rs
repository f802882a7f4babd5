//! Register identifiers.
//!
//! This module defines the closed set of registers the interpreter recognizes.
//! It provides:
//! 1. **Identity:** One enum variant per register, `a0`-`a7` and `t0`-`t6`.
//! 2. **Naming:** Conversion between variants and their textual ABI names.
//! 3. **Enumeration:** A canonical ordering for register-file storage and dumps.

use std::fmt;
use std::str::FromStr;

use crate::common::error::Fault;

/// Symbolic register recognized by the interpreter.
///
/// The set is fixed: eight argument registers and seven temporaries. Any other
/// name in an operand is an [`UnknownRegister`](Fault::UnknownRegister) fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    /// Argument/return register `a0`; conventionally holds the final result.
    A0,
    /// Argument register `a1`.
    A1,
    /// Argument register `a2`.
    A2,
    /// Argument register `a3`.
    A3,
    /// Argument register `a4`.
    A4,
    /// Argument register `a5`.
    A5,
    /// Argument register `a6`.
    A6,
    /// Argument register `a7`.
    A7,
    /// Temporary register `t0`.
    T0,
    /// Temporary register `t1`.
    T1,
    /// Temporary register `t2`.
    T2,
    /// Temporary register `t3`.
    T3,
    /// Temporary register `t4`.
    T4,
    /// Temporary register `t5`.
    T5,
    /// Temporary register `t6`.
    T6,
}

impl Reg {
    /// Number of recognized registers.
    pub const COUNT: usize = 15;

    /// All registers in canonical (sorted-name) order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::A7,
        Self::T0,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
    ];

    /// Returns the textual ABI name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A0 => "a0",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::A4 => "a4",
            Self::A5 => "a5",
            Self::A6 => "a6",
            Self::A7 => "a7",
            Self::T0 => "t0",
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 => "t3",
            Self::T4 => "t4",
            Self::T5 => "t5",
            Self::T6 => "t6",
        }
    }

    /// Storage index within the register file.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reg {
    type Err = Fault;

    /// Decodes a textual register name.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnknownRegister`] if the name is outside the
    /// recognized set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a0" => Ok(Self::A0),
            "a1" => Ok(Self::A1),
            "a2" => Ok(Self::A2),
            "a3" => Ok(Self::A3),
            "a4" => Ok(Self::A4),
            "a5" => Ok(Self::A5),
            "a6" => Ok(Self::A6),
            "a7" => Ok(Self::A7),
            "t0" => Ok(Self::T0),
            "t1" => Ok(Self::T1),
            "t2" => Ok(Self::T2),
            "t3" => Ok(Self::T3),
            "t4" => Ok(Self::T4),
            "t5" => Ok(Self::T5),
            "t6" => Ok(Self::T6),
            other => Err(Fault::UnknownRegister(other.to_string())),
        }
    }
}
