//! CPF identifier validation and formatting.
//!
//! A CPF is the 11-digit Brazilian taxpayer number. The last two digits are
//! check digits computed from weighted modulo-11 sums over the preceding
//! digits, which is what makes this the one field with real arithmetic in it.

use super::errors::ValidationError;
use crate::digits::extract_digits;
use crate::outcome::Validity;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Number of digits in a canonical CPF.
const CPF_LEN: usize = 11;

/// Canonical failure message; the checksum offers no finer-grained reason a
/// user could act on.
const MSG_INVALID: &str = "CPF is invalid";

/// Validate a CPF, accepting formatted (`111.444.777-35`) or bare digits.
///
/// The input is canonicalized to digits first, so punctuation and whitespace
/// never cause a rejection on their own. Fails on: wrong digit count, the
/// known-invalid all-identical sequences (`000...`, `111...`), or a check
/// digit mismatch.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_cpf;
///
/// assert!(validate_cpf("111.444.777-35").valid);
/// assert!(!validate_cpf("11111111111").valid);
/// ```
pub fn validate_cpf(raw: &str) -> Validity {
    if is_valid_cpf_digits(&extract_digits(raw)) {
        Validity::ok()
    } else {
        Validity::invalid(MSG_INVALID)
    }
}

/// Format a CPF as `###.###.###-##`.
///
/// Partial input (anything other than exactly 11 digits) is passed through as
/// bare digits so interactive callers can format as the user types. Does not
/// validate check digits.
pub fn format_cpf(raw: &str) -> String {
    let digits = extract_digits(raw);
    if digits.len() != CPF_LEN {
        return digits;
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Checksum over canonical digits. Expects the caller to have stripped
/// formatting already.
fn is_valid_cpf_digits(digits: &str) -> bool {
    if digits.len() != CPF_LEN {
        return false;
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();

    // Sequences like 00000000000 satisfy the checksum but are reserved as
    // invalid.
    if values.iter().all(|&d| d == values[0]) {
        return false;
    }

    let first = check_digit(&values[0..9]);
    let second = check_digit(&values[0..10]);
    let matches = values[9] == first && values[10] == second;
    if !matches {
        trace!(
            expected_first = first,
            expected_second = second,
            "CPF check digit mismatch"
        );
    }
    matches
}

/// Compute one check digit: weights count down from `len + 1` to 2, and a
/// remainder below 2 maps to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=start).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// A type-safe wrapper for a validated CPF.
///
/// Stores the canonical 11-digit form; formatting punctuation from the input
/// is discarded at construction time.
///
/// # Example
///
/// ```
/// use techmarket_validation::Cpf;
///
/// let cpf = Cpf::new("111.444.777-35").unwrap();
/// assert_eq!(cpf.as_str(), "11144477735");
/// assert_eq!(cpf.formatted(), "111.444.777-35");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Create a new Cpf, validating length, repeated digits, and checksum.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCpf` carrying the rejected input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let digits = extract_digits(&raw);

        if !is_valid_cpf_digits(&digits) {
            return Err(ValidationError::InvalidCpf(raw));
        }

        Ok(Self(digits))
    }

    /// Get the canonical digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying canonical-digit String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The display form, `###.###.###-##`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

// Serde support - serialize as the canonical digit string
impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpf() {
        assert!(validate_cpf("11144477735").valid);
        assert!(validate_cpf("111.444.777-35").valid);
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!validate_cpf(&cpf).valid, "{} should be invalid", cpf);
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!validate_cpf("123").valid);
        assert!(!validate_cpf("111444777355").valid);
        assert!(!validate_cpf("").valid);
    }

    #[test]
    fn test_check_digit_mismatch_rejected() {
        // Valid CPF with last digit bumped.
        assert!(!validate_cpf("11144477736").valid);
        // And with the first check digit bumped.
        assert!(!validate_cpf("11144477745").valid);
    }

    #[test]
    fn test_invalid_has_canonical_message() {
        assert_eq!(validate_cpf("123").message, "CPF is invalid");
        assert_eq!(validate_cpf("11144477735").message, "");
    }

    #[test]
    fn test_check_digit_low_remainder_maps_to_zero() {
        // 12345678909: first check-digit sum mod 11 == 1, so the digit is 0.
        assert!(validate_cpf("12345678909").valid);
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
        // Partial input passes through as digits.
        assert_eq!(format_cpf("111444"), "111444");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn test_format_then_extract_is_identity() {
        let digits = "11144477735";
        assert_eq!(extract_digits(&format_cpf(digits)), digits);
    }

    #[test]
    fn test_format_is_stable_under_reformat() {
        let formatted = format_cpf("11144477735");
        assert_eq!(format_cpf(&formatted), formatted);
    }

    #[test]
    fn test_cpf_value_object() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(format!("{}", cpf), "111.444.777-35");
    }

    #[test]
    fn test_cpf_rejects_invalid() {
        let err = Cpf::new("11111111111").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCpf("11111111111".to_string()));
    }

    #[test]
    fn test_cpf_serialization() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"11144477735\"");
    }

    #[test]
    fn test_cpf_deserialization() {
        let cpf: Cpf = serde_json::from_str("\"11144477735\"").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
    }

    #[test]
    fn test_cpf_deserialization_invalid_fails() {
        let result: Result<Cpf, _> = serde_json::from_str("\"11111111111\"");
        assert!(result.is_err());
    }
}
