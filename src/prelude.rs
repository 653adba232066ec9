//! Prelude module for convenient imports.
//!
//! A single `use validkit::prelude::*;` brings in the rule type, the
//! condition registry, every built-in factory and the combinator functions.
//!
//! # Examples
//!
//! ```rust,ignore
//! use validkit::prelude::*;
//!
//! let username = count(3..=20).and(alphanumerics());
//! let id = range(0..=100).or(range(10_000..));
//! let author = nil().or(min_count(3).lift());
//! ```

// ============================================================================
// FOUNDATION: Rule, errors, Validatable
// ============================================================================

pub use crate::foundation::{
    RegistrationError, Rule, Validatable, ValidationError, ValidationResult,
};

// ============================================================================
// CONDITIONS: registry + executor
// ============================================================================

pub use crate::conditions::Conditions;

// ============================================================================
// RULES: all built-in factories
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// COMBINATORS: free-function forms of the fluent methods
// ============================================================================

pub use crate::combinators::{and, lift, not, or, with_message};
