//! The conversion and token-derivation pipelines.
//!
//! [`convert`] renders an input as typed on the Dvorak layout, then
//! optionally filters it to the allow-list and upper-cases its first letter.
//! [`derive_token`] hashes the input and re-encodes the hash in the
//! allow-list alphabet. The two paths share no state beyond the frozen
//! tables.

use tracing::debug;

use crate::casing::capitalize_first_alpha;
use crate::filter::clean;
use crate::hash::hash53_seeded;
use crate::layout::LayoutTable;
use crate::radix::{encode_value, RadixAlphabet};

/// Post-processing switches for [`convert`]. Both default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop characters outside the allow-list after remapping.
    pub filter: bool,
    /// Upper-case the first ASCII letter of the result.
    pub capitalize: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            filter: true,
            capitalize: true,
        }
    }
}

/// Render `input` as typed on the Dvorak layout, then apply the optional
/// post-processing steps.
///
/// The remap step always uses the Dvorak table; the right-shifted table is
/// part of the data model but not of this pipeline.
pub fn convert(input: &str, opts: ConvertOptions) -> String {
    convert_with(LayoutTable::dvorak(), input, opts)
}

/// [`convert`] against a caller-supplied layout table.
pub fn convert_with(table: &LayoutTable, input: &str, opts: ConvertOptions) -> String {
    let mut out = table.remap(input);
    if opts.filter {
        out = clean(&out);
    }
    if opts.capitalize {
        out = capitalize_first_alpha(&out);
    }
    debug!(
        in_chars = input.chars().count(),
        out_chars = out.chars().count(),
        filter = opts.filter,
        capitalize = opts.capitalize
    );
    out
}

/// A derived token: the 53-bit hash of the input and its rendering in the
/// 71-symbol allow-list alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedToken {
    pub hash: u64,
    pub token: String,
}

/// Hash `input` with [`hash53_seeded`] and encode the value in the
/// allow-list alphabet.
///
/// Encoding the hash directly is exact: the value is below 2^53, and parsing
/// a value's own decimal rendering reproduces the value, so this matches the
/// decimal-string route through [`crate::radix::convert_base`] symbol for
/// symbol.
pub fn derive_token(input: &str, seed: u32) -> DerivedToken {
    let hash = hash53_seeded(input, seed);
    let token = encode_value(hash, RadixAlphabet::allowed());
    debug!(hash, token_len = token.len());
    DerivedToken { hash, token }
}
