//! Email-shape rule

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, ValidationError};

// Anchored over the entire span: a substring match is not enough.
// Compiled at most once per process.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Builds a rule requiring a string value to be a well-formed email address.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::email;
///
/// let rule = email::<str>();
/// assert!(rule.check("john@apple.com").is_ok());
/// assert!(rule.check("@microsoft.com").is_err());
/// ```
pub fn email<V>() -> Rule<V>
where
    V: AsRef<str> + ?Sized + 'static,
{
    Rule::new("a valid email address", |value: &V| {
        if EMAIL.is_match(value.as_ref()) {
            Ok(())
        } else {
            Err(ValidationError::custom("Must be a valid email address"))
        }
    })
}
