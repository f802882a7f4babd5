//! Stack memory and offset translation.
//!
//! This module models the fixed-size memory region the stack lives in. It
//! performs the following:
//! 1. **Storage:** A fixed-capacity, zero-initialized cell vector.
//! 2. **Translation:** Mapping signed stack offsets to absolute cell indices.
//! 3. **Bounds Enforcement:** Every access is range-checked at the
//!    translation step, so no offset arithmetic can escape the buffer.

use crate::common::error::Fault;
use crate::common::Word;

/// Fixed-capacity memory region addressed by stack-pointer-relative offsets.
///
/// The stack pointer starts `sp_base_reserved` cells below the top of the
/// buffer and grows toward lower addresses, so offset 0 addresses cell
/// `capacity - sp_base_reserved`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackMemory {
    cells: Vec<Word>,
    sp_base_reserved: usize,
}

impl StackMemory {
    /// Creates a memory buffer of `capacity` zeroed cells with the stack
    /// pointer `sp_base_reserved` cells below the top.
    pub fn new(capacity: usize, sp_base_reserved: usize) -> Self {
        Self {
            cells: vec![0; capacity],
            sp_base_reserved,
        }
    }

    /// Capacity of the buffer in cells.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Translates a signed stack offset to an absolute cell index.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OutOfBoundsMemoryAccess`] if the resolved index falls
    /// outside `[0, capacity)`.
    pub fn translate(&self, offset: i64) -> Result<usize, Fault> {
        let capacity = self.capacity();
        let index = capacity as i64 - self.sp_base_reserved as i64 + offset;
        if index < 0 || index >= capacity as i64 {
            return Err(Fault::OutOfBoundsMemoryAccess {
                offset,
                index,
                capacity,
            });
        }
        Ok(index as usize)
    }

    /// Reads the cell a stack offset resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OutOfBoundsMemoryAccess`] if the offset translates
    /// out of bounds.
    pub fn load(&self, offset: i64) -> Result<Word, Fault> {
        Ok(self.cells[self.translate(offset)?])
    }

    /// Writes the cell a stack offset resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OutOfBoundsMemoryAccess`] if the offset translates
    /// out of bounds.
    pub fn store(&mut self, offset: i64, val: Word) -> Result<(), Fault> {
        let index = self.translate(offset)?;
        self.cells[index] = val;
        Ok(())
    }
}
