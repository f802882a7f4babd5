//! Register-based assembly subset interpreter library.
//!
//! This crate implements a sequential interpreter for a small RISC-V-flavoured
//! assembly subset with the following:
//! 1. **Common:** Register identifiers, machine word type, and the fault taxonomy.
//! 2. **Core:** Register file, stack memory, and the fetch-decode-execute engine.
//! 3. **ISA:** Instruction records and the line tokenizer/decoder.
//! 4. **Configuration:** Memory layout and behaviour switches, JSON-deserializable.
//!
//! The engine executes a finite instruction sequence left to right with no
//! control flow: every instruction commits its effect before the next one
//! starts, and the final register file is the result of the run.

/// Common types (registers, machine words, faults).
pub mod common;
/// Interpreter configuration (defaults and behaviour switches).
pub mod config;
/// Machine state and the execution engine.
pub mod core;
/// Instruction records and text decoding.
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Fatal execution fault; surfaced by decode and execution as soon as it occurs.
pub use crate::common::error::Fault;
/// Symbolic register in the recognized closed set.
pub use crate::common::reg::Reg;
/// Main interpreter type; owns the register file and stack memory.
pub use crate::core::machine::Machine;
/// Decoded instruction record; construct with [`isa::decode::parse_line`].
pub use crate::isa::instruction::Instruction;
