//! The `Validatable` trait — the registration surface a model implements.

use crate::conditions::Conditions;
use crate::foundation::{RegistrationError, ValidationError};

/// A model type that can describe its own validation conditions.
///
/// Implementations provide [`conditions`](Validatable::conditions); the
/// executors ([`validate`](Validatable::validate) and
/// [`validate_all`](Validatable::validate_all)) are provided.
///
/// The condition set is rebuilt on every call. It depends only on the model
/// *type*, never the instance, so callers that care may build it once and use
/// [`Conditions::check`] directly.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// struct User {
///     name: String,
///     email: Option<String>,
/// }
///
/// impl Validatable for User {
///     fn conditions() -> Result<Conditions<Self>, RegistrationError> {
///         let mut conditions = Conditions::new();
///         conditions.add(|u: &User| &u.name, "name", count(3..=20));
///         conditions.add(|u: &User| &u.email, "email", email().lift().and(nil().negate()));
///         Ok(conditions)
///     }
/// }
/// ```
pub trait Validatable: Sized + 'static {
    /// Builds the model type's condition set.
    ///
    /// Must be deterministic and terminate; registration-time problems are
    /// reported here rather than deferred to a per-field failure.
    fn conditions() -> Result<Conditions<Self>, RegistrationError>;

    /// Validates this instance, stopping at the first failing condition.
    #[must_use = "validation result must be checked"]
    fn validate(&self) -> Result<(), ValidationError> {
        Self::conditions()?.check(self)
    }

    /// Validates this instance, running every condition and aggregating all
    /// failures into [`ValidationError::Multiple`].
    #[must_use = "validation result must be checked"]
    fn validate_all(&self) -> Result<(), ValidationError> {
        Self::conditions()?.check_all(self)
    }
}
