//! Nullability rule for `Option` fields

use crate::foundation::{Rule, ValidationError};

/// Builds a rule that succeeds iff the value is absent.
///
/// Its negation (`nil().negate()`) requires presence. Combine with lifted
/// rules for the usual patterns:
///
/// - `nil().or(email().lift())` — absent, or a well-formed email
/// - `email().lift().and(nil().negate())` — a well-formed email, and present
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::nil;
///
/// let rule = nil::<String>();
/// assert!(rule.check(&None).is_ok());
/// assert!(rule.check(&Some("x".to_string())).is_err());
/// ```
pub fn nil<T>() -> Rule<Option<T>>
where
    T: 'static,
{
    Rule::new("nil", |value: &Option<T>| {
        if value.is_none() {
            Ok(())
        } else {
            Err(ValidationError::custom("is not nil"))
        }
    })
}
