//! Condition registry and validation executor
//!
//! A [`Conditions<M>`] is the ordered set of named conditions registered for
//! one model type. Every entry — field rule, literal-value rule or
//! whole-model closure — is stored uniformly as a `Rule<M>` over the model,
//! so execution is a single ordered walk.

use std::borrow::Cow;

use crate::foundation::{Rule, ValidationError};

/// Ordered, named conditions for a model type `M`.
///
/// Built by [`Validatable::conditions`](crate::foundation::Validatable::conditions)
/// via the `add*` builder methods; read-only during execution. Registration
/// order is preserved and determines the order failures are discovered in.
/// Duplicate names are permitted.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let mut conditions = Conditions::<Event>::new();
/// conditions.add(|e: &Event| &e.id, "uuid", alphanumerics().and(count(36..=36)));
/// conditions.add_check("dates", |e: &Event| {
///     if e.start_date > e.end_date {
///         Err(ValidationError::custom("Invalid start or end date."))
///     } else {
///         Ok(())
///     }
/// });
/// conditions.check(&event)?;
/// ```
pub struct Conditions<M: 'static> {
    conditions: Vec<Condition<M>>,
}

struct Condition<M: 'static> {
    name: Cow<'static, str>,
    rule: Rule<M>,
}

impl<M: 'static> Condition<M> {
    // A failure reports which named condition it came from.
    fn named(&self, error: ValidationError) -> ValidationError {
        ValidationError::custom(format!("{}: {error}", self.name))
    }
}

impl<M: 'static> Conditions<M> {
    /// Creates an empty condition set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Binds `rule` to the field selected by `accessor` under `name`.
    ///
    /// The accessor is an explicit closure (`|m: &Model| &m.field`), fully
    /// type-checked at compile time — there is no reflective access and no
    /// possibility of a type mismatch at run time.
    pub fn add<V, F>(&mut self, accessor: F, name: impl Into<Cow<'static, str>>, rule: Rule<V>)
    where
        V: ?Sized + 'static,
        F: Fn(&M) -> &V + Send + Sync + 'static,
    {
        let lifted = Rule::new(rule.info().to_owned(), move |model: &M| {
            rule.check(accessor(model))
        });
        self.push(name, lifted);
    }

    /// Binds `rule` to a captured constant, independent of the model
    /// instance. Used for fixed reference checks.
    pub fn add_value<V>(&mut self, value: V, name: impl Into<Cow<'static, str>>, rule: Rule<V>)
    where
        V: Send + Sync + 'static,
    {
        let lifted = Rule::new(rule.info().to_owned(), move |_: &M| rule.check(&value));
        self.push(name, lifted);
    }

    /// Registers an arbitrary whole-model predicate, e.g. a cross-field
    /// check like "end date must not precede start date".
    pub fn add_check<F>(&mut self, name: impl Into<Cow<'static, str>>, check: F)
    where
        F: Fn(&M) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        let name = name.into();
        let rule = Rule::new(name.clone(), check);
        self.push(name, rule);
    }

    fn push(&mut self, name: impl Into<Cow<'static, str>>, rule: Rule<M>) {
        self.conditions.push(Condition {
            name: name.into(),
            rule,
        });
    }

    /// Number of registered conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Condition names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|c| c.name.as_ref())
    }

    /// Evaluates the conditions in registration order, stopping at the
    /// first failure.
    ///
    /// The returned error is the failing rule's error, prefixed with the
    /// condition's name.
    #[must_use = "validation result must be checked"]
    pub fn check(&self, model: &M) -> Result<(), ValidationError> {
        for condition in &self.conditions {
            condition
                .rule
                .check(model)
                .map_err(|error| condition.named(error))?;
        }
        Ok(())
    }

    /// Evaluates every condition and aggregates all failures into
    /// [`ValidationError::Multiple`], in registration order.
    #[must_use = "validation result must be checked"]
    pub fn check_all(&self, model: &M) -> Result<(), ValidationError> {
        let failures: Vec<ValidationError> = self
            .conditions
            .iter()
            .filter_map(|condition| {
                condition
                    .rule
                    .check(model)
                    .err()
                    .map(|error| condition.named(error))
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Multiple(failures))
        }
    }
}

impl<M: 'static> Default for Conditions<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: 'static> std::fmt::Debug for Conditions<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.conditions.iter().map(|c| &c.name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{count, range};

    struct Account {
        name: String,
        balance: i64,
    }

    fn conditions() -> Conditions<Account> {
        let mut conditions = Conditions::new();
        conditions.add(|a: &Account| &a.name, "name", count(3..=20));
        conditions.add(|a: &Account| &a.balance, "balance", range(0..));
        conditions.add_check("consistency", |a: &Account| {
            if a.name.is_empty() && a.balance > 0 {
                Err(ValidationError::custom("anonymous accounts must be empty"))
            } else {
                Ok(())
            }
        });
        conditions
    }

    #[test]
    fn all_conditions_pass() {
        let account = Account {
            name: "alice".to_string(),
            balance: 10,
        };
        assert!(conditions().check(&account).is_ok());
    }

    #[test]
    fn first_failure_wins_and_is_named() {
        let account = Account {
            name: "x".to_string(),
            balance: -5,
        };
        let err = conditions().check(&account).unwrap_err();
        assert_eq!(err.to_string(), "name: is less than 3");
    }

    #[test]
    fn check_all_aggregates_in_registration_order() {
        let account = Account {
            name: "x".to_string(),
            balance: -5,
        };
        let err = conditions().check_all(&account).unwrap_err();
        let errors = err.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "name: is less than 3");
        assert_eq!(errors[1].to_string(), "balance: is less than 0");
    }

    #[test]
    fn add_value_validates_a_constant() {
        let mut conditions = Conditions::<Account>::new();
        conditions.add_value(3i64, "supported version", range(1..=2));
        let account = Account {
            name: "alice".to_string(),
            balance: 0,
        };
        let err = conditions.check(&account).unwrap_err();
        assert_eq!(err.to_string(), "supported version: is greater than 2");
    }

    #[test]
    fn registration_order_is_preserved() {
        let conditions = conditions();
        let names: Vec<&str> = conditions.names().collect();
        assert_eq!(names, ["name", "balance", "consistency"]);
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let mut conditions = Conditions::<Account>::new();
        conditions.add(|a: &Account| &a.name, "name", count(1..));
        conditions.add(|a: &Account| &a.name, "name", count(..=20));
        assert_eq!(conditions.len(), 2);
    }
}
