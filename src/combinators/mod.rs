//! Rule combinators
//!
//! Compound rules are built from simpler ones with ordinary functions (the
//! fluent methods on [`Rule`](crate::foundation::Rule) delegate here):
//!
//! | Combinator | Succeeds when | On failure |
//! |---|---|---|
//! | [`and`] | both pass | first failure's message, re-wrapped; right not run if left fails |
//! | [`or`] | at least one passes | both branch messages joined with "and" |
//! | [`not`] | inner fails | `"is <inner description>"` |
//! | [`lift`] | `None`, or inner passes on `Some` | inner's failure |
//! | [`with_message`] | inner passes | the fixed override message |

pub mod and;
pub mod lift;
pub mod message;
pub mod not;
pub mod or;

pub use and::and;
pub use lift::lift;
pub use message::with_message;
pub use not::not;
pub use or::or;
