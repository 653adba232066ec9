//! Error types for validation failures
//!
//! Two distinct channels, kept separate on purpose:
//!
//! - [`ValidationError`] — a condition failed for a concrete model instance.
//! - [`RegistrationError`] — the condition set itself could not be built
//!   (e.g. an invalid pattern handed to a rule factory). Surfaced at
//!   registration time, not deferred to a per-field failure.
//!
//! String payloads use `Cow<'static, str>` for zero-allocation in the common
//! case of messages known at compile time.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// Serializes with a `kind` tag so hosts can map failures onto wire payloads
/// (for example an HTTP 422 body) without string-parsing the message.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::foundation::ValidationError;
///
/// // Static message — zero allocation:
/// let error = ValidationError::custom("is not nil");
///
/// // Dynamic message — allocates only when needed:
/// let error = ValidationError::custom(format!("is less than {}", 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationError {
    /// A rule's predicate failed; carries the human-readable message.
    Custom(Cow<'static, str>),

    /// A value did not have the shape a rule expected.
    ///
    /// Statically typed field access cannot produce this; it exists for
    /// hosts that extract field values dynamically.
    MismatchType,

    /// Several conditions failed, in registration order.
    ///
    /// Produced by the aggregating executor
    /// ([`Conditions::check_all`](crate::conditions::Conditions::check_all)),
    /// never by the fail-fast one.
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Creates a `Custom` error from a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        ValidationError::Custom(message.into())
    }

    /// Returns true if this error aggregates several failures.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        matches!(self, ValidationError::Multiple(_))
    }

    /// The aggregated failures, or an empty slice for a single failure.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationError::Multiple(errors) => errors,
            _ => &[],
        }
    }

    /// Total number of leaf failures carried by this error.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        match self {
            ValidationError::Multiple(errors) => {
                errors.iter().map(ValidationError::total_error_count).sum()
            }
            _ => 1,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Custom(message) => f.write_str(message),
            ValidationError::MismatchType => {
                f.write_str("value does not match the expected type")
            }
            ValidationError::Multiple(errors) => {
                write!(f, "validation failed with {} error(s):", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "\n  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// REGISTRATION ERROR
// ============================================================================

/// The conditions-builder itself failed.
///
/// Distinct from a per-instance [`ValidationError`]: this means the model's
/// `conditions()` function could not produce a usable condition set at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationError {
    /// A rule factory was handed a pattern that does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The compiler's diagnostic.
        reason: String,
    },

    /// A condition violated a construction-time invariant.
    #[error("invalid condition `{name}`: {reason}")]
    InvalidCondition {
        /// Name of the offending condition.
        name: Cow<'static, str>,
        /// What was wrong with it.
        reason: Cow<'static, str>,
    },
}

impl RegistrationError {
    /// Creates an `InvalidCondition` error.
    pub fn invalid_condition(
        name: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        RegistrationError::InvalidCondition {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

// `validate()` keeps a single error channel: a failed registration surfaces
// as a custom validation error carrying the registration diagnostic.
impl From<RegistrationError> for ValidationError {
    fn from(error: RegistrationError) -> Self {
        ValidationError::custom(format!("conditions could not be built: {error}"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
