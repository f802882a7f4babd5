//! Configuration for the interpreter.
//!
//! This module defines the configuration structure used to parameterize a
//! [`Machine`](crate::core::machine::Machine). It provides:
//! 1. **Defaults:** The reference memory layout (1024 cells, stack pointer
//!    352 cells below the top).
//! 2. **Behaviour switches:** Opt-in full `addi` semantics.
//!
//! Configuration is supplied as JSON or via `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the interpreter.
mod defaults {
    /// Capacity of the memory buffer in cells.
    pub const MEMORY_CELLS: usize = 1024;

    /// Initial distance of the stack pointer from the top of memory, in cells.
    ///
    /// Stack offset 0 therefore addresses cell `MEMORY_CELLS - SP_BASE_RESERVED`.
    pub const SP_BASE_RESERVED: usize = 352;
}

/// Interpreter configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity of the memory buffer in cells. Every cell starts at zero.
    pub memory_cells: usize,

    /// Cells reserved between the initial stack pointer and the top of memory.
    ///
    /// A stack offset `k` addresses cell `memory_cells - sp_base_reserved + k`;
    /// positive offsets reach toward the top of memory, negative offsets away
    /// from it.
    pub sp_base_reserved: usize,

    /// Execute `addi` with full add-immediate semantics.
    ///
    /// The reference interpreter recognizes `addi` but exits the transition
    /// before it takes effect, making it a guaranteed no-op. That behaviour is
    /// preserved by default; set this to get `dst <- src + imm` instead.
    pub full_addi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_cells: defaults::MEMORY_CELLS,
            sp_base_reserved: defaults::SP_BASE_RESERVED,
            full_addi: false,
        }
    }
}
