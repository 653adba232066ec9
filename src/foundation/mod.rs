//! Core validation types
//!
//! The fundamental building blocks:
//!
//! - [`Rule`] — an immutable predicate with a description
//! - [`ValidationError`] / [`RegistrationError`] — the two error channels
//! - [`Validatable`] — the registration surface a model implements
//!
//! # Architecture
//!
//! Rules are plain values: a description plus a pure check function. The
//! combinators in [`crate::combinators`] build compound rules out of simpler
//! ones, synthesizing the compound description eagerly so it always reflects
//! the composition. Field access is an explicit accessor closure passed at
//! registration time — fully type-checked, no reflection.

pub mod error;
pub mod rule;
pub mod validatable;

pub use error::{RegistrationError, ValidationError};
pub use rule::Rule;
pub use validatable::Validatable;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult = Result<(), ValidationError>;
