//! Syntactic validation of the canonical textual representation.

/// Tests whether the argument matches the canonical 8-4-4-4-12 hexadecimal pattern.
///
/// The check is anchored at both ends: the input must be exactly 36 bytes long, carry single
/// hyphens at positions 8, 13, 18, and 23, and consist of hexadecimal digits of either case
/// everywhere else. Surrounding characters, missing or surplus digits, and misplaced hyphens all
/// fail; there is no partial-match tolerance.
pub fn is_canonical_form(text: &str) -> bool {
    let src = text.as_bytes();
    src.len() == 36
        && src.iter().enumerate().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => *c == b'-',
            _ => c.is_ascii_hexdigit(),
        })
}
