//! Character-set membership rules

use smallvec::SmallVec;

use crate::foundation::{Rule, ValidationError};

// ============================================================================
// CHARACTER SET
// ============================================================================

/// A set of allowed characters: optional Unicode classes plus explicit
/// members.
///
/// Explicit members live inline (no heap allocation for typical sets like
/// the phone alphabet).
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::CharacterSet;
///
/// let uuid_alphabet = CharacterSet::alphanumerics().union(&CharacterSet::from_chars("-"));
/// assert!(uuid_alphabet.contains('a'));
/// assert!(uuid_alphabet.contains('-'));
/// assert!(!uuid_alphabet.contains('@'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    alphanumeric: bool,
    alphabetic: bool,
    chars: SmallVec<[char; 16]>,
}

impl CharacterSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All Unicode alphanumeric characters.
    #[must_use]
    pub fn alphanumerics() -> Self {
        Self {
            alphanumeric: true,
            ..Self::default()
        }
    }

    /// All Unicode alphabetic characters.
    #[must_use]
    pub fn letters() -> Self {
        Self {
            alphabetic: true,
            ..Self::default()
        }
    }

    /// The ASCII digits `0-9`.
    #[must_use]
    pub fn numerics() -> Self {
        Self::from_chars("0123456789")
    }

    /// The telephone alphabet: digits, `+`, `-`, `(`, `)` and space.
    #[must_use]
    pub fn phone() -> Self {
        Self::from_chars("+-0123456789() ")
    }

    /// A set of exactly the characters in `chars`.
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Adds a single character to the set.
    pub fn insert(&mut self, c: char) {
        if !self.chars.contains(&c) {
            self.chars.push(c);
        }
    }

    /// Returns the union of this set and `other`.
    #[must_use]
    pub fn union(mut self, other: &CharacterSet) -> Self {
        self.alphanumeric |= other.alphanumeric;
        self.alphabetic |= other.alphabetic;
        for &c in &other.chars {
            self.insert(c);
        }
        self
    }

    /// Whether `c` belongs to the set.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        (self.alphanumeric && c.is_alphanumeric())
            || (self.alphabetic && c.is_alphabetic())
            || self.chars.contains(&c)
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Builds a rule requiring every character of a string value to belong to
/// `set`.
///
/// An empty string trivially passes. The failure names the first offending
/// character as rendered, e.g. ``string contains unavailable character `@` ``.
pub fn characters<V>(set: CharacterSet) -> Rule<V>
where
    V: AsRef<str> + ?Sized + 'static,
{
    Rule::new("in the allowed set of characters", move |value: &V| {
        match value.as_ref().chars().find(|c| !set.contains(*c)) {
            None => Ok(()),
            Some(c) => Err(ValidationError::custom(format!(
                "string contains unavailable character `{c}`"
            ))),
        }
    })
}

/// [`characters`] over [`CharacterSet::alphanumerics`].
pub fn alphanumerics<V>() -> Rule<V>
where
    V: AsRef<str> + ?Sized + 'static,
{
    characters(CharacterSet::alphanumerics())
}

/// [`characters`] over [`CharacterSet::numerics`].
pub fn numerics<V>() -> Rule<V>
where
    V: AsRef<str> + ?Sized + 'static,
{
    characters(CharacterSet::numerics())
}

/// [`characters`] over [`CharacterSet::phone`].
pub fn phone<V>() -> Rule<V>
where
    V: AsRef<str> + ?Sized + 'static,
{
    characters(CharacterSet::phone())
}
