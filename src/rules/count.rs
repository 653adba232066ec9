//! Count rules for sized containers
//!
//! Strings are counted in Unicode scalar values, not bytes.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::{Bound, RangeBounds};

use crate::foundation::{Rule, ValidationError};

// ============================================================================
// COUNTABLE
// ============================================================================

/// A container with a measurable element count.
///
/// Implemented for strings (char count), slices, `Vec`, the std map/set
/// types and `VecDeque`. Implement it for your own containers to use them
/// with [`count`] and friends.
pub trait Countable {
    /// Number of elements in the container.
    fn count(&self) -> usize;
}

impl Countable for str {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Countable for String {
    fn count(&self) -> usize {
        self.as_str().count()
    }
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Builds a rule requiring a container's element count to lie within
/// `bounds`, inclusive.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::rules::count;
///
/// let name = count::<String, _>(3..=20);
/// assert!(name.check(&"bob".to_string()).is_ok());
/// assert!(name.check(&"bo".to_string()).is_err());
/// ```
pub fn count<V, B>(bounds: B) -> Rule<V>
where
    V: Countable + ?Sized + 'static,
    B: RangeBounds<usize>,
{
    let min = match bounds.start_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => Some(n + 1),
        Bound::Unbounded => None,
    };
    let max = match bounds.end_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => Some(n.saturating_sub(1)),
        Bound::Unbounded => None,
    };

    Rule::new(describe(min, max), move |value: &V| {
        let count = value.count();
        if let Some(min) = min
            && count < min
        {
            return Err(ValidationError::custom(format!("is less than {min}")));
        }
        if let Some(max) = max
            && count > max
        {
            return Err(ValidationError::custom(format!("is greater than {max}")));
        }
        Ok(())
    })
}

/// `count(n..)` — at least `n` elements.
pub fn min_count<V>(n: usize) -> Rule<V>
where
    V: Countable + ?Sized + 'static,
{
    count(n..)
}

/// `count(..=n)` — at most `n` elements.
pub fn max_count<V>(n: usize) -> Rule<V>
where
    V: Countable + ?Sized + 'static,
{
    count(..=n)
}

/// `count(0..=0)` — the container must be empty.
pub fn empty<V>() -> Rule<V>
where
    V: Countable + ?Sized + 'static,
{
    count(0..=0)
}

fn describe(min: Option<usize>, max: Option<usize>) -> String {
    match (min, max) {
        (Some(0), Some(0)) => "empty".to_string(),
        (Some(min), Some(max)) if min == max => format!("a count of {min}"),
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => "valid".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_counts_are_char_counts() {
        let rule = count::<str, _>(4..=4);
        assert!(rule.check("héllo".trim_end_matches('o')).is_ok());
        assert!(rule.check("hello").is_err());
    }

    #[test]
    fn boundaries_are_inclusive() {
        let rule = count::<Vec<i32>, _>(1..=3);
        assert!(rule.check(&vec![1]).is_ok());
        assert!(rule.check(&vec![1, 2, 3]).is_ok());
        assert!(rule.check(&Vec::new()).is_err());
        assert!(rule.check(&vec![1, 2, 3, 4]).is_err());
    }

    #[test]
    fn empty_only_accepts_zero_elements() {
        let rule = empty::<Vec<i32>>();
        assert!(rule.check(&Vec::new()).is_ok());
        assert!(rule.check(&vec![1]).is_err());
        assert_eq!(rule.info(), "empty");
    }

    #[test]
    fn empty_equals_count_zero_to_zero() {
        let explicit = count::<Vec<i32>, _>(0..=0);
        for list in [vec![], vec![1], vec![1, 2]] {
            assert_eq!(
                explicit.check(&list).is_ok(),
                empty::<Vec<i32>>().check(&list).is_ok()
            );
        }
    }

    #[test]
    fn min_and_max_shorthands() {
        assert!(min_count::<str>(3).check("abc").is_ok());
        assert!(min_count::<str>(3).check("ab").is_err());
        assert!(max_count::<str>(3).check("abc").is_ok());
        assert!(max_count::<str>(3).check("abcd").is_err());
    }

    #[test]
    fn descriptions() {
        assert_eq!(count::<str, _>(3..=20).info(), "between 3 and 20");
        assert_eq!(count::<str, _>(36..=36).info(), "a count of 36");
        assert_eq!(min_count::<str>(30).info(), "at least 30");
    }

    #[test]
    fn maps_and_sets_count_entries() {
        let mut map = BTreeMap::new();
        map.insert("k", "v");
        assert!(count::<BTreeMap<_, _>, _>(1..=1).check(&map).is_ok());

        let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(count::<BTreeSet<i32>, _>(3..=3).check(&set).is_ok());
    }
}
