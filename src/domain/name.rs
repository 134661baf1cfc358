//! Full-name validation.

use crate::outcome::Validity;
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters (including the Latin-1 accented range used in Portuguese names)
/// and whitespace only.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("name pattern is valid"));

const MIN_CHARS: usize = 2;
const MAX_CHARS: usize = 100;

const MSG_REQUIRED: &str = "name is required";
const MSG_TOO_SHORT: &str = "name must have at least 2 characters";
const MSG_TOO_LONG: &str = "name must have at most 100 characters";
const MSG_BAD_CHARS: &str = "name must contain only letters and spaces";
const MSG_SINGLE_TOKEN: &str = "enter first and last name";

/// Validate a full name.
///
/// The input is trimmed, then checked in order: required, length in
/// [2, 100] characters, letters-and-spaces only, and at least two
/// whitespace-separated tokens (given name plus surname).
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_name;
///
/// assert!(validate_name("Ana Silva").valid);
/// assert!(!validate_name("Ana").valid);
/// ```
pub fn validate_name(raw: &str) -> Validity {
    let name = raw.trim();

    if name.is_empty() {
        return Validity::invalid(MSG_REQUIRED);
    }

    let chars = name.chars().count();
    if chars < MIN_CHARS {
        return Validity::invalid(MSG_TOO_SHORT);
    }
    if chars > MAX_CHARS {
        return Validity::invalid(MSG_TOO_LONG);
    }

    if !NAME_PATTERN.is_match(name) {
        return Validity::invalid(MSG_BAD_CHARS);
    }

    if name.split_whitespace().count() < 2 {
        return Validity::invalid(MSG_SINGLE_TOKEN);
    }

    Validity::ok()
}
