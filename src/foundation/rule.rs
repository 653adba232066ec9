//! The `Rule` value type
//!
//! A [`Rule<V>`] pairs a human-readable description with a pure pass/fail
//! check over `&V`. Rules are immutable once built; cloning one is an `Arc`
//! clone, so compound rules can share children freely.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinators;
use crate::foundation::ValidationError;

/// An immutable predicate over a value of type `V`.
///
/// The description doubles as documentation and as the fallback error
/// message for NOT-composition (`negate()` fails with `"is <description>"`).
///
/// Built by the factory functions in [`crate::rules`] or by the combinators
/// in [`crate::combinators`]; equality is not defined — only behavior and
/// description matter.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let uuid = characters(CharacterSet::alphanumerics().union(&"-".chars().collect()))
///     .and(count(36..=36));
/// assert!(uuid.check("f3b0c0de-0000-4000-8000-000000000000").is_ok());
/// ```
pub struct Rule<V: ?Sized + 'static> {
    info: Cow<'static, str>,
    check: Arc<dyn Fn(&V) -> Result<(), ValidationError> + Send + Sync>,
}

impl<V: ?Sized + 'static> Rule<V> {
    /// Creates a rule from a description and a check function.
    ///
    /// The check must be pure: same input, same result, no observable side
    /// effects.
    pub fn new(
        info: impl Into<Cow<'static, str>>,
        check: impl Fn(&V) -> Result<(), ValidationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            info: info.into(),
            check: Arc::new(check),
        }
    }

    /// The rule's description, e.g. `"between 1 and 100"`.
    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Applies the rule to a value.
    #[must_use = "validation result must be checked"]
    pub fn check(&self, value: &V) -> Result<(), ValidationError> {
        (self.check)(value)
    }

    /// Combines with another rule: both must pass.
    ///
    /// Short-circuits — `other` is only evaluated if `self` passes.
    pub fn and(self, other: Rule<V>) -> Rule<V> {
        combinators::and(self, other)
    }

    /// Combines with another rule: at least one must pass.
    ///
    /// If both fail, the failure message concatenates both branch messages
    /// with "and" — both alternatives were violated, so the diagnostic shows
    /// both.
    pub fn or(self, other: Rule<V>) -> Rule<V> {
        combinators::or(self, other)
    }

    /// Inverts the rule: succeeds iff the original fails.
    pub fn negate(self) -> Rule<V> {
        combinators::not(self)
    }

    /// Replaces any failure of this rule with a fixed message.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Rule<V> {
        combinators::with_message(self, message)
    }
}

impl<V: 'static> Rule<V> {
    /// Lifts the rule over `Option<V>`: absence vacuously passes, presence
    /// delegates to this rule.
    ///
    /// This is what lets a `Rule<V>` participate in AND/OR with a
    /// `Rule<Option<V>>`, e.g. `email().lift().and(nil().negate())`.
    pub fn lift(self) -> Rule<Option<V>> {
        combinators::lift(self)
    }
}

impl<V: ?Sized + 'static> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<V: ?Sized + 'static> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("info", &self.info)
            .field("check", &"<function>")
            .finish()
    }
}

impl<V: ?Sized + 'static> fmt::Display for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info)
    }
}
