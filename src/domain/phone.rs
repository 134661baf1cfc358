//! Phone number validation and formatting (Brazilian numbering convention).
//!
//! The first two digits are the area code. Mobile numbers have 11 digits and
//! a '9' immediately after the area code; landlines have 10 digits and must
//! not have a '9' there.

use super::errors::ValidationError;
use crate::digits::extract_digits;
use crate::outcome::Validity;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Digit count for a mobile number.
const MOBILE_LEN: usize = 11;

/// Digit count for a landline number.
const LANDLINE_LEN: usize = 10;

/// Position of the digit that distinguishes mobile from landline, right
/// after the two-digit area code.
const KIND_DIGIT_INDEX: usize = 2;

/// First subscriber digit of every mobile number.
const MOBILE_PREFIX: u8 = b'9';

/// Canonical failure message.
const MSG_INVALID: &str = "phone number is invalid";

/// Whether a number is a mobile or a landline, derived from its digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    /// 11 digits, subscriber number starts with 9.
    Mobile,
    /// 10 digits, subscriber number does not start with 9.
    Landline,
}

/// Validate a phone number, accepting formatted (`(11) 99999-9999`) or bare
/// digits.
///
/// Fails when the canonical form has fewer than 10 or more than 11 digits, or
/// when the digit after the area code contradicts the mobile/landline rule
/// for that length.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_phone;
///
/// assert!(validate_phone("11999999999").valid);     // mobile
/// assert!(validate_phone("(11) 2345-6789").valid);  // landline
/// assert!(!validate_phone("11899999999").valid);    // 11 digits, no '9'
/// ```
pub fn validate_phone(raw: &str) -> Validity {
    if phone_kind(&extract_digits(raw)).is_some() {
        Validity::ok()
    } else {
        Validity::invalid(MSG_INVALID)
    }
}

/// Format a phone number as `(##) #####-####` (mobile) or `(##) ####-####`
/// (landline).
///
/// Anything other than exactly 10 or 11 digits is passed through as bare
/// digits. Does not check the mobile-prefix rule.
pub fn format_phone(raw: &str) -> String {
    let digits = extract_digits(raw);
    match digits.len() {
        MOBILE_LEN => format!("({}) {}-{}", &digits[0..2], &digits[2..7], &digits[7..11]),
        LANDLINE_LEN => format!("({}) {}-{}", &digits[0..2], &digits[2..6], &digits[6..10]),
        _ => digits,
    }
}

/// Classify canonical digits, or None when they fit neither convention.
fn phone_kind(digits: &str) -> Option<PhoneKind> {
    let kind_digit = *digits.as_bytes().get(KIND_DIGIT_INDEX)?;
    match digits.len() {
        MOBILE_LEN if kind_digit == MOBILE_PREFIX => Some(PhoneKind::Mobile),
        LANDLINE_LEN if kind_digit != MOBILE_PREFIX => Some(PhoneKind::Landline),
        _ => {
            trace!(len = digits.len(), "phone length/prefix mismatch");
            None
        }
    }
}

/// A type-safe wrapper for a validated phone number.
///
/// Stores the canonical digit form and remembers whether it classified as
/// mobile or landline.
///
/// # Example
///
/// ```
/// use techmarket_validation::{PhoneKind, PhoneNumber};
///
/// let phone = PhoneNumber::new("(11) 99999-9999").unwrap();
/// assert_eq!(phone.as_str(), "11999999999");
/// assert_eq!(phone.kind(), PhoneKind::Mobile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating length and the mobile-prefix
    /// convention.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the rejected input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let digits = extract_digits(&raw);

        if phone_kind(&digits).is_none() {
            return Err(ValidationError::InvalidPhone(raw));
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

    /// Whether this is a mobile or landline number.
    pub fn kind(&self) -> PhoneKind {
        // Construction guarantees the digits classify.
        match self.0.len() {
            MOBILE_LEN => PhoneKind::Mobile,
            _ => PhoneKind::Landline,
        }
    }

    /// The two-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0[0..2]
    }

    /// The display form, `(##) #####-####` or `(##) ####-####`.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

// Serde support - serialize as the canonical digit string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
