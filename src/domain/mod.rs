//! Field validators and domain value objects.
//!
//! One module per registration field. Each exposes a flat `validate_*`
//! function returning [`Validity`](crate::Validity); the fields with a
//! canonical form (CPF, phone, email, birth date) additionally provide a
//! value object that is validated at construction time, so invalid data
//! cannot be represented once it crosses into typed code.

pub mod address;
pub mod birth_date;
pub mod consent;
pub mod cpf;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::validate_address;
pub use birth_date::{validate_birth_date, validate_birth_date_today, BirthDate};
pub use consent::validate_consent;
pub use cpf::{format_cpf, validate_cpf, Cpf};
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use name::validate_name;
pub use phone::{format_phone, validate_phone, PhoneKind, PhoneNumber};
