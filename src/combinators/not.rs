//! NOT combinator - logical negation of a rule

use crate::foundation::{Rule, ValidationError};

/// Inverts a rule.
///
/// - Inner rule fails → the negation succeeds (the error is swallowed).
/// - Inner rule passes → the negation fails with `"is <inner description>"`.
///
/// Description: `"not <inner>"`.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::combinators::not;
/// use validkit::rules::empty;
///
/// let non_empty = not(empty::<Vec<String>>());
/// assert!(non_empty.check(&vec!["a".to_string()]).is_ok());
/// assert!(non_empty.check(&Vec::new()).is_err());
/// ```
pub fn not<V>(inner: Rule<V>) -> Rule<V>
where
    V: ?Sized + 'static,
{
    let info = format!("not {}", inner.info());
    let failure = format!("is {}", inner.info());
    Rule::new(info, move |value: &V| match inner.check(value) {
        Ok(()) => Err(ValidationError::custom(failure.clone())),
        Err(_) => Ok(()),
    })
}
