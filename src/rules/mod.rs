//! Built-in rule factories
//!
//! Every factory returns a [`Rule`](crate::foundation::Rule) with a
//! descriptive label, ready to compose via `and`/`or`/`negate`:
//!
//! - **Ordered values**: [`range`]
//! - **Sized containers**: [`count`], [`min_count`], [`max_count`],
//!   [`empty`], [`length`] (plus the [`Countable`] trait)
//! - **Strings**: [`characters`], [`alphanumerics`], [`numerics`],
//!   [`phone`], [`email`], [`matches`]
//! - **Option fields**: [`nil`]
//! - **Anything comparable**: [`equals`]

pub mod charset;
pub mod count;
pub mod email;
pub mod equality;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod range;

pub use charset::{CharacterSet, alphanumerics, characters, numerics, phone};
pub use count::{Countable, count, empty, max_count, min_count};
pub use email::email;
pub use equality::equals;
pub use length::length;
pub use nullable::nil;
pub use pattern::matches;
pub use range::range;
