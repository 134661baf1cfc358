//! Terms-of-service consent check.

use crate::outcome::Validity;

const MSG_NOT_ACCEPTED: &str = "you must accept the terms and conditions";

/// Validate the consent checkbox.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_consent;
///
/// assert!(validate_consent(true).valid);
/// assert!(!validate_consent(false).valid);
/// ```
pub fn validate_consent(accepted: bool) -> Validity {
    if accepted {
        Validity::ok()
    } else {
        Validity::invalid(MSG_NOT_ACCEPTED)
    }
}
