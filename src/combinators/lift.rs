//! Nil-lifting - adapts a `Rule<T>` to `Rule<Option<T>>`
//!
//! A lifted rule treats absence as vacuously satisfied: `None` always
//! passes, `Some(value)` delegates to the inner rule. This is what lets a
//! rule over `T` participate in AND/OR with a rule over `Option<T>`:
//!
//! - `email().lift().and(nil().negate())` — a well-formed email AND present
//! - `nil().or(email().lift())` — absent, OR a well-formed email

use crate::foundation::Rule;

/// Lifts a rule over `Option<T>`.
///
/// The lift is transparent: the lifted rule keeps the inner rule's
/// description.
pub fn lift<T>(inner: Rule<T>) -> Rule<Option<T>>
where
    T: 'static,
{
    let info = inner.info().to_owned();
    Rule::new(info, move |value: &Option<T>| match value {
        None => Ok(()),
        Some(inner_value) => inner.check(inner_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    fn non_empty() -> Rule<String> {
        Rule::new("non-empty", |s: &String| {
            if s.is_empty() {
                Err(ValidationError::custom("is empty"))
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn none_vacuously_passes() {
        assert!(lift(non_empty()).check(&None).is_ok());
    }

    #[test]
    fn some_delegates() {
        let rule = lift(non_empty());
        assert!(rule.check(&Some("hello".to_string())).is_ok());
        assert!(rule.check(&Some(String::new())).is_err());
    }

    #[test]
    fn keeps_inner_description() {
        assert_eq!(lift(non_empty()).info(), "non-empty");
    }
}
