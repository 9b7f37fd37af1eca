//! First-letter case normalization.

/// Upper-case the first ASCII alphabetic character of `input`; every other
/// character is untouched. Inputs without an ASCII letter come back
/// unchanged.
pub fn capitalize_first_alpha(input: &str) -> String {
    let mut done = false;
    input
        .chars()
        .map(|c| {
            if !done && c.is_ascii_alphabetic() {
                done = true;
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
