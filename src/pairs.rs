use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};

use crate::{error::PairError, util::sort_pair};

/// An unordered pair of values that compares and hashes equal regardless of
/// element order.
///
/// The elements are sorted on construction, so the derived `Eq`, `Ord` and
/// `Hash` impls all operate on the canonical form and `(a, b)` and `(b, a)`
/// are the same key in any map.
///
/// ```
/// use symmetric::UnorderedPair;
///
/// let pair = UnorderedPair::new(2, 1);
/// assert_eq!(pair, UnorderedPair::new(1, 2));
/// assert_eq!(pair.first(), &1);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct UnorderedPair<T>(T, T);

impl<T: Ord> UnorderedPair<T> {
    /// Creates a pair, putting the smaller value first.
    pub fn new(a: T, b: T) -> Self {
        let (first, second) = sort_pair(a, b);
        Self(first, second)
    }

    /// Create a new `UnorderedPair` from two pre-sorted values.
    pub fn from_sorted(a: T, b: T) -> Self {
        #[cfg(not(feature = "unchecked"))]
        debug_assert!(a <= b, "Values are not in sorted order");
        Self(a, b)
    }

    /// Like [`UnorderedPair::from_sorted`], but reports unsorted input as an
    /// error instead of asserting.
    pub fn try_from_sorted(a: T, b: T) -> Result<Self, PairError<T>>
    where
        T: Debug,
    {
        if a <= b {
            Ok(Self(a, b))
        } else {
            Err(PairError::Unsorted(a, b))
        }
    }
}

impl<T> UnorderedPair<T> {
    /// The smaller element.
    pub fn first(&self) -> &T {
        &self.0
    }

    /// The larger element.
    pub fn second(&self) -> &T {
        &self.1
    }

    pub fn values(&self) -> (&T, &T) {
        (&self.0, &self.1)
    }

    pub fn into_first(self) -> T {
        self.0
    }

    pub fn into_second(self) -> T {
        self.1
    }

    pub fn into_values(self) -> (T, T) {
        (self.0, self.1)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: Eq,
    {
        self.0 == *value || self.1 == *value
    }

    /// Tests whether the pair consists of `a` and `b`, in either order.
    pub fn has_both(&self, a: &T, b: &T) -> bool
    where
        T: Eq,
    {
        (self.0 == *a && self.1 == *b) || (self.0 == *b && self.1 == *a)
    }

    /// Returns the element opposite `value`, or `None` if `value` is not part
    /// of the pair. For a loop, both sides are the same element.
    pub fn other(&self, value: &T) -> Option<&T>
    where
        T: Eq,
    {
        if self.0 == *value {
            Some(&self.1)
        } else if self.1 == *value {
            Some(&self.0)
        } else {
            None
        }
    }

    /// True when both elements are equal.
    pub fn is_loop(&self) -> bool
    where
        T: Eq,
    {
        self.0 == self.1
    }
}

impl<T: Ord> From<(T, T)> for UnorderedPair<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

impl<T> From<UnorderedPair<T>> for (T, T) {
    fn from(pair: UnorderedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}

impl<'a, T> From<&'a UnorderedPair<T>> for (&'a T, &'a T) {
    fn from(pair: &'a UnorderedPair<T>) -> Self {
        (&pair.0, &pair.1)
    }
}

impl<T> Arbitrary for UnorderedPair<T>
where
    T: Arbitrary + Ord,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(T::arbitrary(g), T::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrinking either side can break the ordering, so re-sort.
        Box::new(
            (self.0.clone(), self.1.clone())
                .shrink()
                .map(|(a, b)| Self::new(a, b)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_new_sorts() {
        let pair = UnorderedPair::new(5, 3);
        assert_eq!(pair.values(), (&3, &5));
        assert_eq!(pair.into_values(), (3, 5));
    }

    #[test]
    fn test_equal_elements() {
        let pair = UnorderedPair::new("a", "a");
        assert_eq!(pair.first(), &"a");
        assert_eq!(pair.second(), &"a");
        assert!(pair.is_loop());
        assert_eq!(pair.other(&"a"), Some(&"a"));
    }

    #[test]
    fn test_other() {
        let pair = UnorderedPair::new('x', 'b');
        assert_eq!(pair.other(&'x'), Some(&'b'));
        assert_eq!(pair.other(&'b'), Some(&'x'));
        assert_eq!(pair.other(&'q'), None);
        assert!(!pair.is_loop());
    }

    #[test]
    fn test_try_from_sorted() {
        assert_eq!(
            UnorderedPair::try_from_sorted(1, 2),
            Ok(UnorderedPair::new(2, 1))
        );
        let err = UnorderedPair::try_from_sorted(2, 1).unwrap_err();
        assert_eq!(err, PairError::Unsorted(2, 1));
        assert_eq!(err.to_string(), "values are not in sorted order: 2 > 1");
        assert_eq!(err.into_values(), (2, 1));
    }

    #[test]
    #[cfg(all(debug_assertions, not(feature = "unchecked")))]
    #[should_panic(expected = "Values are not in sorted order")]
    fn test_from_sorted_rejects_unsorted() {
        UnorderedPair::from_sorted(2, 1);
    }

    #[test]
    fn test_usable_as_hash_key() {
        let mut set = HashSet::new();
        assert!(set.insert(UnorderedPair::new(1, 2)));
        assert!(!set.insert(UnorderedPair::new(2, 1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_tuple_conversions() {
        let pair: UnorderedPair<_> = (9, 4).into();
        let refs: (&i32, &i32) = (&pair).into();
        assert_eq!(refs, (&4, &9));
        let owned: (i32, i32) = pair.into();
        assert_eq!(owned, (4, 9));
    }

    #[quickcheck]
    fn prop_symmetric(a: i32, b: i32) -> bool {
        UnorderedPair::new(a, b) == UnorderedPair::new(b, a)
    }

    #[quickcheck]
    fn prop_canonical(a: i32, b: i32) -> TestResult {
        if a == b {
            return TestResult::discard();
        }
        let pair = UnorderedPair::new(a, b);
        let first_is_a = *pair.first() == a;
        let first_is_b = *pair.first() == b;
        TestResult::from_bool(first_is_a != first_is_b && pair.first() <= pair.second())
    }

    #[quickcheck]
    fn prop_has_both_either_order(a: u8, b: u8) -> bool {
        let pair = UnorderedPair::new(a, b);
        pair.has_both(&a, &b) && pair.has_both(&b, &a) && pair.contains(&a) && pair.contains(&b)
    }

    #[quickcheck]
    fn prop_arbitrary_is_canonical(pair: UnorderedPair<i16>) -> bool {
        pair.first() <= pair.second() && pair.shrink().all(|p| p.first() <= p.second())
    }
}
