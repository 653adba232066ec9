//! Message override - replaces a rule's failure with a fixed message

use std::borrow::Cow;

use crate::foundation::{Rule, ValidationError};

/// Wraps a rule so that any failure is reported with `message` instead of
/// the rule's own error.
///
/// The description is unchanged; only the failure text is replaced.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::combinators::with_message;
/// use validkit::rules::length;
///
/// let password = with_message(length(8..=64), "Password must be 8-64 characters");
/// ```
pub fn with_message<V>(inner: Rule<V>, message: impl Into<Cow<'static, str>>) -> Rule<V>
where
    V: ?Sized + 'static,
{
    let message = message.into();
    let info = inner.info().to_owned();
    Rule::new(info, move |value: &V| {
        inner
            .check(value)
            .map_err(|_| ValidationError::Custom(message.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never() -> Rule<i64> {
        Rule::new("impossible", |_: &i64| {
            Err(ValidationError::custom("original message"))
        })
    }

    #[test]
    fn replaces_failure_message() {
        let err = with_message(never(), "overridden").check(&0).unwrap_err();
        assert_eq!(err.to_string(), "overridden");
    }

    #[test]
    fn success_is_untouched() {
        let rule = with_message(Rule::new("fine", |_: &i64| Ok(())), "unused");
        assert!(rule.check(&0).is_ok());
    }

    #[test]
    fn keeps_inner_description() {
        assert_eq!(with_message(never(), "x").info(), "impossible");
    }
}
