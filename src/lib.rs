//! TechMarket Validation - field validation and normalization for the TechMarket registration form.
//!
//! This library is the UI-independent core of the registration flow: pure
//! functions that take raw user input and return structured validity
//! results. There is no document model, no network layer, and no shared
//! state; every function is total over its input and can be called
//! concurrently without coordination.
//!
//! # Architecture
//!
//! - **outcome**: the uniform `{valid, message}` result every validator returns
//! - **digits**: canonical-digit normalization shared by CPF and phone
//! - **domain**: one module per field (CPF checksum, birth date, phone,
//!   email, name, address, consent) plus value objects for the fields with a
//!   canonical form
//! - **form**: whole-form validation collecting per-field outcomes
//!
//! # Example
//!
//! ```
//! use techmarket_validation::{format_cpf, validate_cpf, validate_phone};
//!
//! assert!(validate_cpf("111.444.777-35").valid);
//! assert!(!validate_phone("123").valid);
//! assert_eq!(format_cpf("11144477735"), "111.444.777-35");
//! ```

pub mod digits;
pub mod domain;
pub mod form;
pub mod outcome;

pub use digits::extract_digits;
pub use domain::{
    format_cpf, format_phone, validate_address, validate_birth_date, validate_birth_date_today,
    validate_consent, validate_cpf, validate_email, validate_name, validate_phone, BirthDate, Cpf,
    EmailAddress, PhoneKind, PhoneNumber, ValidationError,
};
pub use form::{FormValidation, RegistrationForm};
pub use outcome::Validity;
