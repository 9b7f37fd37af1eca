//! Deterministic keyboard-layout remapping and hash-token derivation.
//!
//! keyveil turns a secret or site label into two related outputs: the input
//! as it would read typed on a Dvorak keyboard, filtered to a
//! password-manager-safe alphabet, and a 53-bit non-cryptographic hash of
//! the input re-encoded in that same alphabet. Every operation is a pure
//! function of its arguments plus frozen constant tables, so the whole crate
//! is safe to call from any number of threads.
//!
//! Nothing here is a security primitive: the hashes are fast,
//! non-cryptographic digests by design.

pub mod casing;
pub mod digits;
pub mod filter;
pub mod hash;
pub mod layout;
pub mod pipeline;
pub mod radix;
pub mod trace_init;
