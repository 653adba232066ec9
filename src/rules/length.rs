//! Historical length rule with an overridable message
//!
//! Behaves like [`count`](crate::rules::count) over an inclusive range, but
//! reports a single message whichever bound was violated. Override it with
//! [`Rule::with_message`](crate::foundation::Rule::with_message).

use std::ops::RangeInclusive;

use crate::foundation::{Rule, ValidationError};
use crate::rules::Countable;

/// Builds a rule requiring a container's length to lie in `range`.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::length;
///
/// let password = length::<String>(8..=64)
///     .with_message("Password must be 8-64 characters long");
/// ```
pub fn length<V>(range: RangeInclusive<usize>) -> Rule<V>
where
    V: Countable + ?Sized + 'static,
{
    let (min, max) = (*range.start(), *range.end());
    let info = format!("a length in {min}...{max}");
    let message = format!("This length of value must be in {min}...{max}");

    Rule::new(info, move |value: &V| {
        if (min..=max).contains(&value.count()) {
            Ok(())
        } else {
            Err(ValidationError::custom(message.clone()))
        }
    })
}
