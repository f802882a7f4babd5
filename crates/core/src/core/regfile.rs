//! Register file.
//!
//! This module implements storage for the recognized register set. It performs
//! the following:
//! 1. **Storage:** Maintains all fifteen registers, zero-initialized.
//! 2. **Access:** Typed reads and writes by [`Reg`], name-based reads for
//!    snapshots.
//! 3. **Debugging:** A sorted dump of the complete register state.

use crate::common::error::Fault;
use crate::common::reg::Reg;
use crate::common::Word;

/// The register file.
///
/// Holds one [`Word`] per recognized register. Mutated only by instruction
/// execution; read out at the end of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    vals: [Word; Reg::COUNT],
}

impl RegisterFile {
    /// Creates a register file with every register initialized to zero.
    pub const fn new() -> Self {
        Self {
            vals: [0; Reg::COUNT],
        }
    }

    /// Reads a register value.
    pub const fn read(&self, reg: Reg) -> Word {
        self.vals[reg.index()]
    }

    /// Writes a value to a register.
    pub const fn write(&mut self, reg: Reg, val: Word) {
        self.vals[reg.index()] = val;
    }

    /// Reads a register by its textual name.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnknownRegister`] if the name is outside the
    /// recognized set.
    pub fn get(&self, name: &str) -> Result<Word, Fault> {
        name.parse().map(|reg| self.read(reg))
    }

    /// Dumps all registers to stdout in canonical name order.
    pub fn dump(&self) {
        for reg in Reg::ALL {
            println!("{}: {}", reg, self.read(reg));
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
