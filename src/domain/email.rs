//! Email address validation.

use super::errors::ValidationError;
use crate::outcome::Validity;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Permissive shape check: non-empty local part, one '@', domain containing
/// a dot. Deliverability is not this crate's problem.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Canonical failure message.
const MSG_INVALID: &str = "email address is invalid";

/// Validate email syntax.
///
/// Purely a shape check (`local@domain.tld`); no DNS or mailbox
/// verification.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_email;
///
/// assert!(validate_email("teste@email.com").valid);
/// assert!(!validate_email("teste@").valid);
/// ```
pub fn validate_email(raw: &str) -> Validity {
    if EMAIL_PATTERN.is_match(raw) {
        Validity::ok()
    } else {
        Validity::invalid(MSG_INVALID)
    }
}

/// A type-safe wrapper for a validated email address.
///
/// # Example
///
/// ```
/// use techmarket_validation::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.local_part(), "user");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` carrying the rejected input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !EMAIL_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidEmail(raw));
        }

        Ok(Self(raw))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // The pattern guarantees exactly one '@'.
        self.0
            .split('@')
            .next()
            .expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0
            .split('@')
            .nth(1)
            .expect("email validated to contain '@'")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
