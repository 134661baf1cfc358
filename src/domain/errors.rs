//! Domain validation errors.
//!
//! Returned by the value-object constructors (`Cpf::new`, `PhoneNumber::new`,
//! ...). The flat `validate_*` functions never produce these; they fold every
//! failure into a [`Validity`](crate::Validity) message instead.

use thiserror::Error;

/// Errors that can occur when constructing a domain value object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided CPF failed the length, repeated-digit, or checksum rules.
    #[error("invalid CPF: {0}")]
    InvalidCpf(String),

    /// The provided phone number failed the length or mobile-prefix rules.
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided email address is not of the form local@domain.tld.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The provided birth date was rejected; the message is the same text the
    /// flat validator reports.
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidCpf("123".to_string());
        assert_eq!(err.to_string(), "invalid CPF: 123");

        let err = ValidationError::InvalidEmail("user@".to_string());
        assert_eq!(err.to_string(), "invalid email address: user@");

        let err = ValidationError::InvalidBirthDate("minimum age is 16 years");
        assert_eq!(
            err.to_string(),
            "invalid birth date: minimum age is 16 years"
        );
    }
}
