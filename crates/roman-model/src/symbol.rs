//! Symbol-to-value lookup tables.
//!
//! Two tables back the converter. The encoder walks the thirteen
//! subtractive-notation groups in descending value order; the decoder only
//! needs the seven atomic letters. Both are constant data, safe for
//! unsynchronized concurrent reads.

/// The thirteen subtractive-notation groups, strictly descending by value.
///
/// Includes the two-letter subtractive pairs (CM, CD, XC, XL, IX, IV) so the
/// greedy encoder never falls through to additive forms like `DCCCC`.
pub const SUBTRACTIVE_GROUPS: [(&str, i32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Atomic value of a single numeral letter, or `None` for anything else.
///
/// Expects uppercase input; callers uppercase before lookup.
pub const fn atomic_value(symbol: char) -> Option<i32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
