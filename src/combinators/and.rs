//! AND combinator - logical conjunction of rules
//!
//! Both rules must pass for the compound rule to succeed. The right rule is
//! only evaluated when the left one passes (short-circuit).

use crate::foundation::{Rule, ValidationError};

/// Combines two rules with logical AND.
///
/// Evaluates the left rule first; on failure its message is re-wrapped as
/// the compound failure and the right rule is never run. On success the
/// right rule decides the outcome, its failure re-wrapped the same way.
///
/// Description: `"<left> and is <right>"`.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::combinators::and;
/// use validkit::rules::{characters, count, CharacterSet};
///
/// let uuid = and(characters(CharacterSet::alphanumerics()), count(36..=36));
/// assert!(uuid.check("hi").is_err());
/// ```
pub fn and<V>(left: Rule<V>, right: Rule<V>) -> Rule<V>
where
    V: ?Sized + 'static,
{
    let info = format!("{} and is {}", left.info(), right.info());
    Rule::new(info, move |value: &V| {
        left.check(value)
            .and_then(|()| right.check(value))
            .map_err(|error| ValidationError::custom(error.to_string()))
    })
}
