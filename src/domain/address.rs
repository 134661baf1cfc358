//! Address validation.

use crate::outcome::Validity;

const MIN_CHARS: usize = 10;
const MAX_CHARS: usize = 500;

const MSG_TOO_SHORT: &str = "address must have at least 10 characters";
const MSG_TOO_LONG: &str = "address must have at most 500 characters";

/// Validate an address.
///
/// The field is optional: empty (after trimming) is valid. A non-empty
/// address must be between 10 and 500 characters.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_address;
///
/// assert!(validate_address("").valid);
/// assert!(!validate_address("Rua A").valid);
/// assert!(validate_address("Rua das Flores, 123").valid);
/// ```
pub fn validate_address(raw: &str) -> Validity {
    let address = raw.trim();

    if address.is_empty() {
        return Validity::ok();
    }

    let chars = address.chars().count();
    if chars < MIN_CHARS {
        return Validity::invalid(MSG_TOO_SHORT);
    }
    if chars > MAX_CHARS {
        return Validity::invalid(MSG_TOO_LONG);
    }

    Validity::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_address("").valid);
        assert!(validate_address("   ").valid);
    }

    #[test]
    fn test_short_address_rejected() {
        assert_eq!(
            validate_address("Rua A").message,
            "address must have at least 10 characters"
        );
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(validate_address(&"a".repeat(10)).valid);
        assert!(validate_address(&"a".repeat(500)).valid);
        assert_eq!(
            validate_address(&"a".repeat(501)).message,
            "address must have at most 500 characters"
        );
    }

    #[test]
    fn test_ordinary_address_valid() {
        assert!(validate_address("Rua das Flores, 123 - Centro").valid);
    }
}
