//! Whole-form validation.
//!
//! Mirrors what the registration page does on submit: run every field
//! validator and collect the per-field outcomes, so a caller can render all
//! error messages at once instead of stopping at the first.

use crate::domain::{
    validate_address, validate_birth_date, validate_consent, validate_cpf, validate_email,
    validate_name, validate_phone,
};
use crate::outcome::Validity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw registration form input, exactly as submitted.
///
/// All string fields may carry formatting punctuation or stray whitespace;
/// nothing here is normalized or trusted. Derives `Deserialize` so a JSON
/// request body maps straight onto it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    /// Full name, given name plus surname.
    pub name: String,

    /// CPF, formatted or bare digits.
    pub cpf: String,

    /// Birth date, ISO `YYYY-MM-DD`.
    pub birth_date: String,

    /// Phone number, formatted or bare digits.
    pub phone: String,

    /// Email address.
    pub email: String,

    /// Address, optional.
    pub address: String,

    /// Terms-of-service checkbox.
    pub accepted_terms: bool,
}

impl RegistrationForm {
    /// Validate every field against an explicit `today` (used only by the
    /// birth-date rules) and collect the outcomes.
    pub fn validate(&self, today: NaiveDate) -> FormValidation {
        FormValidation {
            name: validate_name(&self.name),
            cpf: validate_cpf(&self.cpf),
            birth_date: validate_birth_date(&self.birth_date, today),
            phone: validate_phone(&self.phone),
            email: validate_email(&self.email),
            address: validate_address(&self.address),
            accepted_terms: validate_consent(self.accepted_terms),
        }
    }
}

/// Per-field outcomes for one form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub name: Validity,
    pub cpf: Validity,
    pub birth_date: Validity,
    pub phone: Validity,
    pub email: Validity,
    pub address: Validity,
    pub accepted_terms: Validity,
}

impl FormValidation {
    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.valid)
    }

    /// Field name / outcome pairs, in form order. Handy for rendering all
    /// messages in one pass.
    pub fn fields(&self) -> [(&'static str, Validity); 7] {
        [
            ("name", self.name),
            ("cpf", self.cpf),
            ("birth_date", self.birth_date),
            ("phone", self.phone),
            ("email", self.email),
            ("address", self.address),
            ("accepted_terms", self.accepted_terms),
        ]
    }
}
