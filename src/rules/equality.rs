//! Equality rule

use std::fmt::Display;

use crate::foundation::{Rule, ValidationError};

/// Builds a rule requiring a value to equal `expected`.
///
/// Useful for fixed reference checks, typically via
/// [`Conditions::add_value`](crate::conditions::Conditions::add_value).
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::equals;
///
/// let version = equals(2u32);
/// assert!(version.check(&2).is_ok());
/// assert!(version.check(&3).is_err());
/// ```
pub fn equals<V>(expected: V) -> Rule<V>
where
    V: PartialEq + Display + Send + Sync + 'static,
{
    let info = format!("equal to {expected}");
    Rule::new(info, move |value: &V| {
        if *value == expected {
            Ok(())
        } else {
            Err(ValidationError::custom(format!(
                "is not equal to {expected}"
            )))
        }
    })
}
