//! Canonical-digit normalization.
//!
//! CPF and phone validators work over the digit-only form of their input;
//! this module is the single place that strips formatting punctuation.

/// Strip every non-digit character, keeping the decimal digits in order.
///
/// This is the canonicalization step shared by the CPF and phone validators
/// and formatters. It accepts anything a user might type into a masked input
/// (dots, dashes, parentheses, spaces) and is idempotent.
///
/// # Example
///
/// ```
/// use techmarket_validation::extract_digits;
///
/// assert_eq!(extract_digits("111.444.777-35"), "11144477735");
/// assert_eq!(extract_digits("(11) 99999-9999"), "11999999999");
/// assert_eq!(extract_digits(""), "");
/// ```
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(extract_digits("111.444.777-35"), "11144477735");
        assert_eq!(extract_digits("(11) 2345-6789"), "1123456789");
    }

    #[test]
    fn test_already_canonical_is_identity() {
        assert_eq!(extract_digits("11144477735"), "11144477735");
    }

    #[test]
    fn test_idempotent() {
        let once = extract_digits("111.444.777-35");
        assert_eq!(extract_digits(&once), once);
    }

    #[test]
    fn test_no_digits_yields_empty() {
        assert_eq!(extract_digits("abc - ()"), "");
        assert_eq!(extract_digits(""), "");
    }

    #[test]
    fn test_ignores_non_ascii_numerals() {
        // Only ASCII decimal digits survive canonicalization.
        assert_eq!(extract_digits("١٢٣45"), "45");
    }
}
