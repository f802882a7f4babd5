//! Common types shared across the interpreter.
//!
//! This module collects the pieces every other module depends on:
//! 1. **Registers:** The closed set of recognized register names.
//! 2. **Faults:** The fatal error taxonomy.
//! 3. **Words:** The value type registers and memory cells hold.

/// Fatal fault definitions.
pub mod error;
/// Register identifiers.
pub mod reg;

pub use error::Fault;
pub use reg::Reg;

/// Integer value held by a register or memory cell.
///
/// The interpreted subset has no hardware register width: values never wrap.
pub type Word = i128;
