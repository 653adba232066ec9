//! User-supplied pattern rule

use regex::Regex;

use crate::foundation::{RegistrationError, Rule, ValidationError};

/// Builds a rule requiring a string value to match `pattern`.
///
/// The pattern is matched as given — anchor it yourself if a full-span match
/// is intended. A pattern that fails to compile is a [`RegistrationError`],
/// surfaced while the condition set is being built rather than per instance.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::matches;
///
/// let hex = matches::<str>(r"^[0-9a-f]+$")?;
/// assert!(hex.check("deadbeef").is_ok());
/// assert!(hex.check("nope!").is_err());
/// ```
pub fn matches<V>(pattern: &str) -> Result<Rule<V>, RegistrationError>
where
    V: AsRef<str> + ?Sized + 'static,
{
    let regex = Regex::new(pattern).map_err(|source| RegistrationError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: source.to_string(),
    })?;

    let info = format!("matching the pattern `{pattern}`");
    Ok(Rule::new(info, move |value: &V| {
        if regex.is_match(value.as_ref()) {
            Ok(())
        } else {
            Err(ValidationError::custom(format!(
                "does not match the pattern `{}`",
                regex.as_str()
            )))
        }
    }))
}
