//! Positional radix conversion over arbitrary symbol alphabets.
//!
//! An alphabet's position is the digit value and its symbol the glyph, so a
//! numeral can be re-expressed between any two alphabets: parse to an
//! integer against the source, encode against the destination.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::layout::allowed_chars;

/// Largest value the converter handles exactly: 2^53 - 1.
///
/// Accumulation past this bound is an error, never a silent truncation, and
/// outputs stay within the range a double-precision float can represent.
pub const MAX_EXACT: u64 = (1 << 53) - 1;

/// The decimal digit alphabet.
pub const DECIMAL: &str = "0123456789";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RadixError {
    #[error("alphabet needs at least two symbols, got {0}")]
    DegenerateAlphabet(usize),
    #[error("duplicate symbol {0:?} in alphabet")]
    DuplicateSymbol(char),
    #[error("digit {0:?} is not in the source alphabet")]
    InvalidDigit(char),
    #[error("value exceeds the exact range (2^53 - 1)")]
    ValueOverflow,
}

/// An ordered digit alphabet: position is the digit value, symbol the glyph.
#[derive(Debug)]
pub struct RadixAlphabet {
    symbols: Vec<char>,
    values: HashMap<char, u64>,
}

impl RadixAlphabet {
    /// Validate and build an alphabet.
    ///
    /// At least two symbols are required (a 1-symbol base never terminates
    /// the encode loop, the 0-symbol base divides by zero), and duplicates
    /// are rejected because they make the symbol → value lookup ambiguous.
    pub fn new(symbols: &str) -> Result<Self, RadixError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(RadixError::DegenerateAlphabet(symbols.len()));
        }
        let mut values = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if values.insert(c, i as u64).is_some() {
                return Err(RadixError::DuplicateSymbol(c));
            }
        }
        Ok(RadixAlphabet { symbols, values })
    }

    /// Get or initialize the global decimal alphabet.
    pub fn decimal() -> &'static RadixAlphabet {
        static INSTANCE: OnceLock<RadixAlphabet> = OnceLock::new();
        INSTANCE.get_or_init(|| RadixAlphabet::new(DECIMAL).expect("decimal alphabet is well-formed"))
    }

    /// Get or initialize the global 71-symbol output alphabet (the
    /// allow-list, in allow-list order).
    pub fn allowed() -> &'static RadixAlphabet {
        static INSTANCE: OnceLock<RadixAlphabet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RadixAlphabet::new(allowed_chars()).expect("allow-list alphabet is well-formed")
        })
    }

    pub fn base(&self) -> u64 {
        self.symbols.len() as u64
    }

    fn value_of(&self, c: char) -> Option<u64> {
        self.values.get(&c).copied()
    }

    fn symbol(&self, value: u64) -> char {
        self.symbols[value as usize]
    }
}

/// Parse `digits` as a numeral over `src`, most-significant character first.
/// Empty input parses to 0.
pub fn parse_value(digits: &str, src: &RadixAlphabet) -> Result<u64, RadixError> {
    let mut value: u64 = 0;
    for c in digits.chars() {
        let d = src.value_of(c).ok_or(RadixError::InvalidDigit(c))?;
        value = value
            .checked_mul(src.base())
            .and_then(|v| v.checked_add(d))
            .filter(|&v| v <= MAX_EXACT)
            .ok_or(RadixError::ValueOverflow)?;
    }
    Ok(value)
}

/// Encode `value` as a numeral over `dest`, most-significant character
/// first. Zero encodes to the alphabet's first symbol; the empty-numeral
/// case follows from that same rule.
pub fn encode_value(mut value: u64, dest: &RadixAlphabet) -> String {
    let base = dest.base();
    let mut out = vec![dest.symbol(value % base)];
    value /= base;
    while value > 0 {
        out.push(dest.symbol(value % base));
        value /= base;
    }
    out.iter().rev().collect()
}

/// Re-express `digits` from the `src` alphabet in the `dest` alphabet.
pub fn convert_base(
    digits: &str,
    src: &RadixAlphabet,
    dest: &RadixAlphabet,
) -> Result<String, RadixError> {
    Ok(encode_value(parse_value(digits, src)?, dest))
}
