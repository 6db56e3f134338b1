//! Colored stones and the length-keyed inventory the solver draws from

use std::fmt;

use crate::io::error::{PuzzleError, Result};

/// A fixed-length strip of color symbols
///
/// Each symbol is one byte of the stone's color string, e.g. `"GRB"` is
/// green-red-blue.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stone {
    symbols: Vec<u8>,
}

impl Stone {
    /// Create a stone from its symbols in natural reading order
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Create a stone of `length` identical symbols
    pub fn uniform(length: usize, symbol: u8) -> Self {
        Self {
            symbols: vec![symbol; length],
        }
    }

    /// Number of cells the stone covers
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Test if the stone has no symbols
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in natural reading order
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbols in the order they are written into a run
    pub fn reading(&self, reversed: bool) -> Vec<u8> {
        if reversed {
            self.symbols.iter().rev().copied().collect()
        } else {
            self.symbols.clone()
        }
    }

    /// Color string of the stone
    pub fn value(&self) -> String {
        self.symbols.iter().copied().map(char::from).collect()
    }
}

impl From<&str> for Stone {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Parse color strings into an inventory
///
/// # Errors
///
/// Returns `NoStones` for an empty list and `EmptyStone` for an empty
/// string
pub fn parse_stones<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Stone>> {
    if colors.is_empty() {
        return Err(PuzzleError::NoStones);
    }

    colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let stone = Stone::from(color.as_ref());
            if stone.is_empty() {
                Err(PuzzleError::EmptyStone { index })
            } else {
                Ok(stone)
            }
        })
        .collect()
}

/// Multiset of stones bucketed by length
///
/// Stones are drawn from and returned to their bucket by position, so the
/// relative order within a bucket survives any balanced sequence of
/// `take` and `put_back` calls.
#[derive(Clone, Debug, Default)]
pub struct StoneBag {
    buckets: Vec<Vec<Stone>>,
    len: usize,
}

impl StoneBag {
    /// Build a bag holding every given stone
    pub fn new(stones: &[Stone]) -> Self {
        let mut bag = Self::default();
        for stone in stones {
            let length = stone.len();
            if bag.buckets.len() <= length {
                bag.buckets.resize_with(length + 1, Vec::new);
            }
            if let Some(bucket) = bag.buckets.get_mut(length) {
                bucket.push(stone.clone());
                bag.len += 1;
            }
        }
        bag
    }

    /// Total number of stones in the bag
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Test if the bag holds no stones
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stones of the given length
    pub fn count_of_length(&self, length: usize) -> usize {
        self.buckets.get(length).map_or(0, Vec::len)
    }

    /// Sorted stone lengths, one entry per stone
    pub fn lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(length, bucket)| std::iter::repeat_n(length, bucket.len()))
            .collect()
    }

    /// Remove the `index`-th stone of the given length
    pub fn take(&mut self, length: usize, index: usize) -> Option<Stone> {
        let bucket = self.buckets.get_mut(length)?;
        if index >= bucket.len() {
            return None;
        }
        self.len -= 1;
        Some(bucket.remove(index))
    }

    /// Return a stone to the slot it was taken from
    pub fn put_back(&mut self, index: usize, stone: Stone) {
        let length = stone.len();
        if self.buckets.len() <= length {
            self.buckets.resize_with(length + 1, Vec::new);
        }
        if let Some(bucket) = self.buckets.get_mut(length) {
            bucket.insert(index.min(bucket.len()), stone);
            self.len += 1;
        }
    }
}
