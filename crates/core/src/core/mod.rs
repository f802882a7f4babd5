//! Machine state and the execution engine.
//!
//! This module holds the interpreter's mutable state and the logic that
//! drives it:
//! 1. **Register file:** The recognized registers and their values.
//! 2. **Memory:** The fixed-capacity stack region and offset translation.
//! 3. **Machine:** The fetch-decode-execute engine owning both.

/// The fetch-decode-execute engine.
pub mod machine;
/// Stack memory and offset translation.
pub mod memory;
/// The register file.
pub mod regfile;

pub use machine::Machine;
pub use memory::StackMemory;
pub use regfile::RegisterFile;
