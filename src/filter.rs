//! Output allow-list filtering.
//!
//! Remapped strings can contain glyphs that password fields or managers
//! reject; [`clean`] drops everything outside the fixed allow-list.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::layout::allowed_chars;

/// The set of characters permitted in filtered output. Membership test only;
/// ordering lives in the alphabet string it is built from.
pub struct AllowSet {
    set: HashSet<char>,
}

impl AllowSet {
    /// Get or initialize the global allow-list (letters, digits, the
    /// password-manager symbols, and space).
    pub fn global() -> &'static AllowSet {
        static INSTANCE: OnceLock<AllowSet> = OnceLock::new();
        INSTANCE.get_or_init(|| AllowSet {
            set: allowed_chars().chars().collect(),
        })
    }

    pub fn contains(&self, c: char) -> bool {
        self.set.contains(&c)
    }

    /// Keep exactly the characters in the set, in their original order.
    /// Dropped characters leave no placeholder behind.
    pub fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| self.contains(*c)).collect()
    }
}

/// Filter `input` through the global allow-list.
pub fn clean(input: &str) -> String {
    AllowSet::global().filter(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_chars() {
        assert_eq!(clean("abcXYZ190"), "abcXYZ190");
        assert_eq!(clean("a!@*$&%^# z"), "a!@*$&%^# z");
    }

    #[test]
    fn drops_disallowed_chars() {
        assert_eq!(clean("a'b;c"), "abc");
        assert_eq!(clean("1.2-3"), "123");
        assert_eq!(clean("',;>\"<:"), "");
    }

    #[test]
    fn preserves_order() {
        assert_eq!(clean("z(y)x"), "zyx");
    }

    #[test]
    fn idempotent() {
        let once = clean("Nrp.m clogm, anc'gav!");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn global_set_matches_alphabet() {
        // 71 distinct chars; no overlap between the alphanumeric and symbol sets
        assert_eq!(AllowSet::global().set.len(), allowed_chars().chars().count());
    }
}
