//! Range rule for ordered values

use std::fmt::Display;
use std::ops::{Bound, RangeBounds};

use crate::foundation::{Rule, ValidationError};

/// Builds a rule requiring an ordered value to lie within `bounds`.
///
/// Accepts any range expression: `1..=100`, `200..`, `..=-5`. Bounds are
/// inclusive (`a..=b`); an exclusive bound is honored strictly. An unbounded
/// side is simply skipped.
///
/// Failures read `"is less than <min>"` / `"is greater than <max>"`.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::range;
///
/// let age = range(1..=100);
/// assert!(age.check(&1).is_ok());
/// assert!(age.check(&100).is_ok());
/// assert!(age.check(&0).is_err());
/// assert!(age.check(&101).is_err());
/// ```
pub fn range<V>(bounds: impl RangeBounds<V>) -> Rule<V>
where
    V: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let start = bounds.start_bound().cloned();
    let end = bounds.end_bound().cloned();
    let info = describe(&start, &end);

    Rule::new(info, move |value: &V| {
        match &start {
            Bound::Included(min) if value < min => {
                return Err(ValidationError::custom(format!("is less than {min}")));
            }
            Bound::Excluded(min) if value <= min => {
                return Err(ValidationError::custom(format!("is not greater than {min}")));
            }
            _ => {}
        }
        match &end {
            Bound::Included(max) if value > max => {
                return Err(ValidationError::custom(format!("is greater than {max}")));
            }
            Bound::Excluded(max) if value >= max => {
                return Err(ValidationError::custom(format!("is not less than {max}")));
            }
            _ => {}
        }
        Ok(())
    })
}

fn describe<V: Display>(start: &Bound<V>, end: &Bound<V>) -> String {
    match (start, end) {
        (Bound::Included(min) | Bound::Excluded(min), Bound::Included(max) | Bound::Excluded(max)) => {
            format!("between {min} and {max}")
        }
        (Bound::Included(min), Bound::Unbounded) => format!("at least {min}"),
        (Bound::Excluded(min), Bound::Unbounded) => format!("greater than {min}"),
        (Bound::Unbounded, Bound::Included(max)) => format!("at most {max}"),
        (Bound::Unbounded, Bound::Excluded(max)) => format!("less than {max}"),
        (Bound::Unbounded, Bound::Unbounded) => "valid".to_string(),
    }
}
