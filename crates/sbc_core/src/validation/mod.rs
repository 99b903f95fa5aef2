//! Requirement validation

pub mod validator;
pub mod violation;


pub use validator::{validate, RequirementValidator};
pub use violation::{GroupKind, ValidationResult, Violation};
