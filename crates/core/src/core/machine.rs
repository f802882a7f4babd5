//! The fetch-decode-execute engine.
//!
//! This module implements the interpreter proper. It performs the following:
//! 1. **Ownership:** Bundles the register file and stack memory into one
//!    state object; no global state anywhere.
//! 2. **Dispatch:** One deterministic transition rule per opcode, applied by
//!    an exhaustive match over the decoded instruction.
//! 3. **Propagation:** Fatal faults abort the remaining sequence immediately;
//!    unknown opcodes are reported and skipped.

use tracing::warn;

use crate::common::error::Fault;
use crate::common::Word;
use crate::config::Config;
use crate::core::memory::StackMemory;
use crate::core::regfile::RegisterFile;
use crate::isa::decode;
use crate::isa::instruction::Instruction;

/// The interpreter: register file, stack memory, and behaviour switches.
///
/// Execution is a strict left-to-right fold over the instruction sequence.
/// Instruction N+1 never begins before instruction N's effects are committed,
/// and nothing else can mutate the state during a run.
#[derive(Clone, Debug)]
pub struct Machine {
    /// Register file; all registers start at zero.
    pub regs: RegisterFile,
    /// Stack memory; all cells start at zero.
    pub mem: StackMemory,
    full_addi: bool,
}

impl Machine {
    /// Creates a machine with zeroed state per the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: StackMemory::new(config.memory_cells, config.sp_base_reserved),
            full_addi: config.full_addi,
        }
    }

    /// Applies one instruction's transition rule.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by the instruction, with no state change
    /// beyond what the rule had already committed (faults are raised before
    /// any mutation).
    pub fn step(&mut self, inst: &Instruction) -> Result<(), Fault> {
        match inst {
            Instruction::Li { dst, imm } => self.regs.write(*dst, *imm),
            Instruction::Mv { dst, src } => self.regs.write(*dst, self.regs.read(*src)),
            Instruction::Add { dst, src1, src2 } => {
                self.regs.write(*dst, self.regs.read(*src1) + self.regs.read(*src2));
            }
            Instruction::Sub { dst, src1, src2 } => {
                self.regs.write(*dst, self.regs.read(*src1) - self.regs.read(*src2));
            }
            Instruction::Rem { dst, src1, src2 } => {
                let divisor = self.regs.read(*src2);
                if divisor == 0 {
                    return Err(Fault::DivisionByZero);
                }
                self.regs.write(*dst, self.regs.read(*src1) % divisor);
            }
            Instruction::Sw { src, offset } => {
                self.mem.store(*offset, self.regs.read(*src))?;
            }
            Instruction::Lw { dst, offset } => {
                let val = self.mem.load(*offset)?;
                self.regs.write(*dst, val);
            }
            // Inert in the reference interpreter: the transition exits before
            // taking effect. Kept as-is unless full_addi is configured.
            Instruction::Addi { dst, src, imm } => {
                if self.full_addi {
                    self.regs.write(*dst, self.regs.read(*src) + *imm);
                }
            }
            Instruction::Unknown(opcode) => {
                warn!(opcode = %opcode, "unknown opcode, instruction skipped");
            }
        }
        Ok(())
    }

    /// Executes a decoded instruction sequence to completion.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised; the remaining sequence is not
    /// executed.
    pub fn execute<I>(&mut self, program: I) -> Result<&RegisterFile, Fault>
    where
        I: IntoIterator<Item = Instruction>,
    {
        for inst in program {
            self.step(&inst)?;
        }
        Ok(&self.regs)
    }

    /// Executes raw text lines, decoding each immediately before it runs.
    ///
    /// Blank lines and comment lines are skipped. Decoding per line means a
    /// malformed line aborts the run with every earlier effect committed.
    ///
    /// # Errors
    ///
    /// Returns the first decode or execution [`Fault`] raised.
    pub fn run_lines<'a, I>(&mut self, lines: I) -> Result<&RegisterFile, Fault>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            if let Some(inst) = decode::parse_line(line)? {
                self.step(&inst)?;
            }
        }
        Ok(&self.regs)
    }

    /// Executes a complete assembly source text.
    ///
    /// # Errors
    ///
    /// Returns the first decode or execution [`Fault`] raised.
    pub fn run_source(&mut self, source: &str) -> Result<&RegisterFile, Fault> {
        self.run_lines(source.lines())
    }

    /// Reads the current value of a register by its textual name.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnknownRegister`] if the name is outside the
    /// recognized set.
    pub fn snapshot(&self, name: &str) -> Result<Word, Fault> {
        self.regs.get(name)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
