use bitvec::prelude::*;

use crate::io::configuration::{ALPHABET_MIN, ALPHABET_SIZE};
use crate::io::error::{PuzzleError, Result};

type PresenceBits = BitArr!(for ALPHABET_SIZE, in u64, Lsb0);

/// Fixed-capacity presence set over the supported color alphabet
///
/// Backs the duplicate check of a single row or column. Storage lives inline,
/// so creating one per line in the validity predicate does not allocate.
#[derive(Clone, Debug)]
pub struct ColorBitset {
    bits: PresenceBits,
}

impl ColorBitset {
    /// Create a set with no colors present
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    fn offset(symbol: u8) -> Result<usize> {
        let offset = usize::from(symbol.wrapping_sub(ALPHABET_MIN));
        if symbol < ALPHABET_MIN || offset >= ALPHABET_SIZE {
            return Err(PuzzleError::AlphabetOverflow { symbol });
        }
        Ok(offset)
    }

    /// Check that a symbol lies inside the supported color alphabet
    ///
    /// # Errors
    ///
    /// Returns `AlphabetOverflow` if the symbol is outside the supported range
    pub fn check(symbol: u8) -> Result<()> {
        Self::offset(symbol).map(|_| ())
    }

    /// Insert a color
    ///
    /// Returns `true` if the color was not present before.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetOverflow` if the symbol is outside the supported range
    pub fn insert(&mut self, symbol: u8) -> Result<bool> {
        let offset = Self::offset(symbol)?;
        Ok(!self.bits.replace(offset, true))
    }
}

impl Default for ColorBitset {
    fn default() -> Self {
        Self::new()
    }
}
