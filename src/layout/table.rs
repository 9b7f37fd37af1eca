//! Frozen glyph tables.
//!
//! Layout strings pair positionally: the character at index `i` of a layout
//! is the glyph produced by the physical key that types index `i` of
//! [`QWERTY_US`]. All tables are process-lifetime constants.

use std::sync::OnceLock;

/// US QWERTY reference layout: letters, then the punctuation rows with their
/// shifted forms.
pub const QWERTY_US: &str =
    r#"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-=[];'\,./~_+{}:"||<>?"#;

/// US Dvorak, ordered to pair with [`QWERTY_US`] key for key.
pub const DVORAK: &str =
    r#"axje.uidchtnmbrl'poygk,qf;AXJE>UIDCHTNMBRL"POYGK<QF:[]/=s-\wvz~{}?+S_||WVZ"#;

/// US QWERTY with every letter key shifted one physical key to the right.
/// Covers the letter keys only; punctuation is left to the identity fallback.
pub const SHIFTED_RIGHT: &str = "snvfrghjokl;,mp[wtdyibecuxSNVFRGHJOKL:<MP{WTDYIBECUX";

/// ASCII letters plus digits. The digit ordering (`1` first, `0` last)
/// follows the number row and is load-bearing for radix output.
pub const ALPHA_NUM: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Symbols accepted by the common password managers, plus one space.
pub const PW_SYMBOLS: &str = "!@*$&%^# ";

/// The wider symbol set seen most often in site password rules. A candidate
/// alternative to [`PW_SYMBOLS`]; not combined into the allow-list.
pub const COMMON_SYMBOLS: &str = "_.-!@*$?&%=^+# ";

/// The combined output allow-list: [`ALPHA_NUM`] followed by [`PW_SYMBOLS`],
/// 71 characters. Doubles as the output radix alphabet, in this order.
pub fn allowed_chars() -> &'static str {
    static CHARS: OnceLock<String> = OnceLock::new();
    CHARS.get_or_init(|| format!("{ALPHA_NUM}{PW_SYMBOLS}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_strings_pair_up() {
        assert_eq!(QWERTY_US.chars().count(), DVORAK.chars().count());
        assert_eq!(QWERTY_US.chars().count(), 74);
        assert_eq!(SHIFTED_RIGHT.chars().count(), 52);
    }

    #[test]
    fn allowed_chars_combines_both_sets() {
        let combined = allowed_chars();
        assert_eq!(combined.chars().count(), 71);
        assert!(combined.starts_with(ALPHA_NUM));
        assert!(combined.ends_with(PW_SYMBOLS));
    }

    #[test]
    fn digit_row_order() {
        assert!(ALPHA_NUM.ends_with("1234567890"));
    }

    #[test]
    fn candidate_symbol_sets_agree_on_the_core() {
        // the wider candidate set contains every password-manager symbol
        assert!(PW_SYMBOLS.chars().all(|c| COMMON_SYMBOLS.contains(c)));
    }
}
