//! Keyboard layout remapping.
//!
//! A [`LayoutTable`] pairs two equal-length glyph sequences and maps
//! characters from one to the other as if the same physical key had been
//! pressed on a different layout. Characters outside the table pass through
//! unchanged.

mod config;
mod table;

pub use config::{parse_layout_toml, LayoutConfigError};
pub use table::{
    allowed_chars, ALPHA_NUM, COMMON_SYMBOLS, DVORAK, PW_SYMBOLS, QWERTY_US, SHIFTED_RIGHT,
};

use std::collections::HashMap;
use std::sync::OnceLock;

/// Result of a single-key lookup, before the identity fallback is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookup {
    Mapped(char),
    Unmapped,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LayoutError {
    LengthMismatch { source: usize, dest: usize },
    Empty,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::LengthMismatch { source, dest } => write!(
                f,
                "source and destination must have the same length ({source} vs {dest})"
            ),
            LayoutError::Empty => write!(f, "layout table is empty"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A source → destination character mapping built from two paired glyph
/// sequences. Immutable once built.
#[derive(Debug)]
pub struct LayoutTable {
    map: HashMap<char, char>,
}

impl LayoutTable {
    /// Build a table from two glyph sequences of equal character count.
    pub fn new(source: &str, dest: &str) -> Result<Self, LayoutError> {
        let source_len = source.chars().count();
        let dest_len = dest.chars().count();
        if source_len != dest_len {
            return Err(LayoutError::LengthMismatch {
                source: source_len,
                dest: dest_len,
            });
        }
        if source_len == 0 {
            return Err(LayoutError::Empty);
        }
        Ok(Self::from_pairs(source.chars().zip(dest.chars())))
    }

    fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        LayoutTable {
            map: pairs.into_iter().collect(),
        }
    }

    /// Get or initialize the global QWERTY → Dvorak table.
    pub fn dvorak() -> &'static LayoutTable {
        static INSTANCE: OnceLock<LayoutTable> = OnceLock::new();
        INSTANCE
            .get_or_init(|| LayoutTable::from_pairs(QWERTY_US.chars().zip(DVORAK.chars())))
    }

    /// Get or initialize the global shifted-one-key-right table.
    ///
    /// The shifted sequence covers the 52 letter keys only, so the zip ends
    /// there and punctuation stays on the identity fallback.
    pub fn shifted_right() -> &'static LayoutTable {
        static INSTANCE: OnceLock<LayoutTable> = OnceLock::new();
        INSTANCE
            .get_or_init(|| LayoutTable::from_pairs(QWERTY_US.chars().zip(SHIFTED_RIGHT.chars())))
    }

    /// Look up one key without collapsing the miss case.
    pub fn lookup(&self, c: char) -> KeyLookup {
        match self.map.get(&c) {
            Some(&mapped) => KeyLookup::Mapped(mapped),
            None => KeyLookup::Unmapped,
        }
    }

    /// Map one key, falling back to the input character when unmapped.
    pub fn translate(&self, c: char) -> char {
        match self.lookup(c) {
            KeyLookup::Mapped(mapped) => mapped,
            KeyLookup::Unmapped => c,
        }
    }

    /// Remap every character of `input` in order. Output character count
    /// always equals the input's.
    pub fn remap(&self, input: &str) -> String {
        input.chars().map(|c| self.translate(c)).collect()
    }
}
