use std::fmt;
use std::str::FromStr;

use crate::error::{NumeralError, Result};
use crate::symbol::{SUBTRACTIVE_GROUPS, atomic_value};

/// A validated Roman numeral quantity.
///
/// Holds an integer in the closed range [`Numeral::MIN`, `Numeral::MAX`] and
/// is constructible only through the checked entry points, so the range
/// invariant holds for every live value. Rendering via [`fmt::Display`] (or
/// [`Numeral::to_roman`]) always produces the canonical subtractive-notation
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(i32);

impl Numeral {
    /// Smallest representable value.
    pub const MIN: i32 = 1;
    /// Largest representable value; `MMMCMXCIX` is the longest numeral.
    pub const MAX: i32 = 3999;

    /// Creates a numeral from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::OutOfRange`] for values outside
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn from_int(value: i32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(NumeralError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Creates a numeral from a textual representation.
    ///
    /// Input is uppercased first, and relaxed non-canonical forms are
    /// accepted (`IIII` parses to 4, `MIM` to 1999). The decoded value must
    /// still land in [`MIN`](Self::MIN)..=[`MAX`](Self::MAX); strings such
    /// as `MMMM` are rejected rather than smuggling an out-of-range value
    /// into the type.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::IllegalCharacter`] for characters outside
    /// `IVXLCDM`, [`NumeralError::Overflow`] if the running total exceeds
    /// `i32::MAX`, and [`NumeralError::OutOfRange`] if the decoded value has
    /// no canonical representation.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_int(decode_relaxed(text)?)
    }

    /// Returns the integer value.
    pub fn to_int(self) -> i32 {
        self.0
    }

    /// Returns the canonical subtractive-notation string.
    pub fn to_roman(self) -> String {
        encode(self.0)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl TryFrom<i32> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i32) -> Result<Self> {
        Self::from_int(value)
    }
}

impl From<Numeral> for i32 {
    fn from(numeral: Numeral) -> Self {
        numeral.to_int()
    }
}

/// Greedy descending encoder. Callers guarantee `value` is in range.
fn encode(value: i32) -> String {
    let mut out = String::new();
    let mut remaining = value;
    for (symbol, amount) in SUBTRACTIVE_GROUPS {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    out
}

/// Decodes a numeral string without enforcing the [1, 3999] range.
///
/// Every character of the uppercased input must be one of `IVXLCDM`; that is
/// checked before any arithmetic. The characters are then scanned right to
/// left: a value smaller than its right-hand neighbor is subtracted,
/// anything else is added. This implements subtractive pairing without
/// two-character lookahead, and as a side effect accepts non-canonical
/// strings (`IIII` → 4, `MIM` → 1999, `VX` → 5). Pathological inputs can
/// decode to zero or to values far outside [1, 3999]; callers that need the
/// range invariant construct a [`Numeral`] from the result.
///
/// # Errors
///
/// Returns [`NumeralError::IllegalCharacter`] for characters outside the
/// numeral alphabet and [`NumeralError::Overflow`] if an intermediate sum
/// exceeds `i32::MAX`.
pub fn decode_relaxed(text: &str) -> Result<i32> {
    decode_uppercased(&text.to_uppercase())
}

/// Reverse-scan decoder over input that is already uppercased.
fn decode_uppercased(upper: &str) -> Result<i32> {
    let mut values = Vec::with_capacity(upper.len());
    for character in upper.chars() {
        match atomic_value(character) {
            Some(value) => values.push(value),
            None => return Err(NumeralError::IllegalCharacter { character }),
        }
    }

    let mut total = 0i32;
    // Seeding "previous" with I's value is deliberate: a lone lowest-value
    // symbol compares equal and takes the additive branch.
    let mut previous = 1i32;
    for &current in values.iter().rev() {
        if current < previous {
            total -= current;
        } else {
            total = add_checked(total, current)?;
        }
        previous = current;
    }
    Ok(total)
}

/// Widens to i64 before summing so an overflowing total is detected rather
/// than wrapped.
fn add_checked(total: i32, contribution: i32) -> Result<i32> {
    let widened = i64::from(total) + i64::from(contribution);
    i32::try_from(widened).map_err(|_| NumeralError::Overflow)
}

/// Returns true iff `text` is the canonical encoding of its own decoded
/// value.
///
/// A pure round-trip check against the uppercased input: decode, re-encode,
/// compare. Illegal characters and decoded values with no canonical form
/// (outside [1, 3999]) yield `false`. No grammar validation happens beyond
/// the round trip.
pub fn is_canonical(text: &str) -> bool {
    let upper = text.to_uppercase();
    match decode_uppercased(&upper) {
        Ok(value) if (Numeral::MIN..=Numeral::MAX).contains(&value) => encode(value) == upper,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_canonical_forms() {
        for (value, expected) in [
            (1999, "MCMXCIX"),
            (2043, "MMXLIII"),
            (3147, "MMMCXLVII"),
            (1244, "MCCXLIV"),
        ] {
            let numeral = Numeral::from_int(value).expect("in range");
            assert_eq!(numeral.to_roman(), expected);
            assert_eq!(numeral.to_string(), expected);
        }
    }

    #[test]
    fn rejects_out_of_range_integers() {
        assert_eq!(
            Numeral::from_int(0),
            Err(NumeralError::OutOfRange { value: 0 })
        );
        assert_eq!(
            Numeral::from_int(4000),
            Err(NumeralError::OutOfRange { value: 4000 })
        );
        assert_eq!(
            Numeral::from_int(-7),
            Err(NumeralError::OutOfRange { value: -7 })
        );
    }

    #[test]
    fn accepts_range_boundaries() {
        assert_eq!(Numeral::from_int(1).expect("min").to_roman(), "I");
        assert_eq!(
            Numeral::from_int(3999).expect("max").to_roman(),
            "MMMCMXCIX"
        );
    }

    #[test]
    fn decodes_relaxed_forms() {
        assert_eq!(decode_relaxed("IIII"), Ok(4));
        assert_eq!(decode_relaxed("MIM"), Ok(1999));
        assert_eq!(decode_relaxed("MDCCCCLXXXXVIIII"), Ok(1999));
        assert_eq!(decode_relaxed("VX"), Ok(5));
    }

    #[test]
    fn decode_does_not_range_check() {
        assert_eq!(decode_relaxed(""), Ok(0));
        assert_eq!(decode_relaxed("MMMM"), Ok(4000));
        // Pairwise rule applied right to left: +5 -1 +5 -1 and +5 -1 +1.
        assert_eq!(decode_relaxed("IVIV"), Ok(8));
        assert_eq!(decode_relaxed("IIV"), Ok(5));
    }

    #[test]
    fn from_text_applies_the_range_check() {
        assert_eq!(Numeral::from_text("MIM").map(Numeral::to_int), Ok(1999));
        assert_eq!(
            Numeral::from_text("MMMM"),
            Err(NumeralError::OutOfRange { value: 4000 })
        );
        assert_eq!(
            Numeral::from_text(""),
            Err(NumeralError::OutOfRange { value: 0 })
        );
    }

    #[test]
    fn from_text_is_case_insensitive() {
        let lower = Numeral::from_text("mcmxcix").expect("lowercase");
        let upper = Numeral::from_text("MCMXCIX").expect("uppercase");
        assert_eq!(lower, upper);
        assert_eq!(lower.to_int(), 1999);
    }

    #[test]
    fn illegal_characters_are_reported_before_arithmetic() {
        assert_eq!(
            Numeral::from_text("MZV"),
            Err(NumeralError::IllegalCharacter { character: 'Z' })
        );
        assert_eq!(
            decode_relaxed("X1X"),
            Err(NumeralError::IllegalCharacter { character: '1' })
        );
    }

    #[test]
    fn canonical_check_round_trips() {
        assert!(is_canonical("IV"));
        assert!(is_canonical("iv"));
        assert!(is_canonical("McMxCiX"));
        assert!(!is_canonical("iIiI"));
        assert!(!is_canonical("IIII"));
        assert!(!is_canonical("MIM"));
        assert!(!is_canonical("MMMM"));
        assert!(!is_canonical(""));
        assert!(!is_canonical("MZV"));
    }

    #[test]
    fn single_lowest_symbol_decodes_additively() {
        // previous is seeded with I's value, so a lone I never subtracts.
        assert_eq!(decode_relaxed("I"), Ok(1));
        assert_eq!(Numeral::from_text("I").map(Numeral::to_int), Ok(1));
    }

    #[test]
    fn conversion_traits_delegate_to_checked_constructors() {
        let parsed: Numeral = "XLII".parse().expect("parse");
        assert_eq!(parsed.to_int(), 42);
        let converted = Numeral::try_from(42).expect("try_from");
        assert_eq!(converted, parsed);
        assert_eq!(i32::from(converted), 42);
        assert!("XQX".parse::<Numeral>().is_err());
        assert!(Numeral::try_from(0).is_err());
    }
}
