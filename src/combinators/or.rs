//! OR combinator - logical disjunction of rules
//!
//! At least one rule must pass. The right rule is only evaluated when the
//! left one fails (short-circuit on success).

use crate::foundation::{Rule, ValidationError};

/// Combines two rules with logical OR.
///
/// On a double failure the compound message concatenates both branch
/// messages with "and": both alternatives were violated, so the diagnostic
/// deliberately shows why each one did. Do not read the "and" as AND
/// semantics — the combinator short-circuits on the first success.
///
/// Description: `"<left> or is <right>"`.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::combinators::or;
/// use validkit::rules::range;
///
/// let id = or(range(0..=100), range(10_000..));
/// assert!(id.check(&42).is_ok());
/// assert!(id.check(&10_000).is_ok());
/// assert!(id.check(&500).is_err());
/// ```
pub fn or<V>(left: Rule<V>, right: Rule<V>) -> Rule<V>
where
    V: ?Sized + 'static,
{
    let info = format!("{} or is {}", left.info(), right.info());
    Rule::new(info, move |value: &V| match left.check(value) {
        Ok(()) => Ok(()),
        Err(left_error) => match right.check(value) {
            Ok(()) => Ok(()),
            Err(right_error) => Err(ValidationError::custom(format!(
                "{left_error} and {right_error}"
            ))),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn exactly(expected: i64) -> Rule<i64> {
        Rule::new(format!("exactly {expected}"), move |n: &i64| {
            if *n == expected {
                Ok(())
            } else {
                Err(ValidationError::custom(format!("is not {expected}")))
            }
        })
    }

    #[test]
    fn left_passes() {
        assert!(or(exactly(5), exactly(10)).check(&5).is_ok());
    }

    #[test]
    fn right_passes() {
        assert!(or(exactly(5), exactly(10)).check(&10).is_ok());
    }

    #[test]
    fn double_failure_concatenates_messages() {
        let err = or(exactly(5), exactly(10)).check(&7).unwrap_err();
        assert_eq!(err.to_string(), "is not 5 and is not 10");
    }

    #[test]
    fn description_joins_children() {
        assert_eq!(or(exactly(5), exactly(10)).info(), "exactly 5 or is exactly 10");
    }

    #[test]
    fn right_is_not_evaluated_when_left_passes() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let probe = {
            let evaluations = Arc::clone(&evaluations);
            Rule::new("probed", move |_: &i64| {
                evaluations.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        };

        assert!(or(exactly(5), probe).check(&5).is_ok());
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
    }
}
