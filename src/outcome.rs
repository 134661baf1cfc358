//! The uniform validation result returned by every field validator.

use serde::Serialize;

/// Outcome of validating a single registration field.
///
/// Every `validate_*` function in this crate returns a `Validity`: `valid`
/// with an empty message, or invalid with a human-readable reason. Validators
/// never panic or return errors; malformed input is an ordinary invalid
/// outcome.
///
/// Messages are drawn from a fixed per-field table of constants, so the type
/// is `Copy` and serializes as plain `{"valid": ..., "message": ...}` for a
/// presentation layer to render.
///
/// # Example
///
/// ```
/// use techmarket_validation::validate_name;
///
/// let result = validate_name("Ana Silva");
/// assert!(result.valid);
/// assert_eq!(result.message, "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validity {
    /// Whether the field passed validation.
    pub valid: bool,

    /// Reason for rejection; empty when `valid` is true.
    pub message: &'static str,
}

impl Validity {
    /// A passing outcome with no message.
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: "",
        }
    }

    /// A failing outcome carrying the reason shown to the user.
    pub const fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }

    /// Whether the field passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
