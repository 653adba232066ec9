//! # validkit
//!
//! A declarative field-validation engine: express "this field must satisfy
//! predicate P" as composable, named rules instead of imperative `if`
//! chains.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use validkit::prelude::*;
//!
//! struct User {
//!     id: i64,
//!     name: String,
//!     email: Option<String>,
//! }
//!
//! impl Validatable for User {
//!     fn conditions() -> Result<Conditions<Self>, RegistrationError> {
//!         let mut conditions = Conditions::new();
//!         conditions.add(|u: &User| &u.id, "id", range(0..=100).or(range(10_000..)));
//!         conditions.add(|u: &User| &u.name, "name", count(3..=20));
//!         conditions.add(|u: &User| &u.email, "email", email().lift().and(nil().negate()));
//!         Ok(conditions)
//!     }
//! }
//!
//! let user = User { id: 7, name: "alice".into(), email: Some("a@b.com".into()) };
//! user.validate()?;
//! ```
//!
//! ## Composing Rules
//!
//! Rules compose with [`and`](foundation::Rule::and),
//! [`or`](foundation::Rule::or) and [`negate`](foundation::Rule::negate);
//! [`lift`](foundation::Rule::lift) adapts a `Rule<T>` to `Rule<Option<T>>`
//! so presence and shape can be required together.
//!
//! ## Built-in Rules
//!
//! - **Ordered**: [`range`](rules::range)
//! - **Sized**: [`count`](rules::count), [`min_count`](rules::min_count),
//!   [`max_count`](rules::max_count), [`empty`](rules::empty),
//!   [`length`](rules::length)
//! - **Strings**: [`characters`](rules::characters),
//!   [`alphanumerics`](rules::alphanumerics), [`numerics`](rules::numerics),
//!   [`phone`](rules::phone), [`email`](rules::email),
//!   [`matches`](rules::matches)
//! - **Options**: [`nil`](rules::nil)
//! - **Equality**: [`equals`](rules::equals)

pub mod combinators;
pub mod conditions;
pub mod foundation;
pub mod prelude;
pub mod rules;
