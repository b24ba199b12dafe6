use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Debug;

use derivative::Derivative;

use crate::{UnorderedPair, tracing_support::trace_event};

/// A map keyed by unordered pairs of `T`.
///
/// Each key is stored once in canonical form, so `(a, b)` and `(b, a)` always
/// refer to the same value.
///
/// Lookups come in two flavors: [`try_get`](Self::try_get) never modifies
/// the map, while [`get_or_insert_default`](Self::get_or_insert_default)
/// creates a default entry for a missing pair.
///
/// ```
/// use symmetric::UnorderedPairMap;
///
/// let mut map = UnorderedPairMap::new();
/// map.insert("x", "y", 42);
/// assert_eq!(map.try_get("y", "x"), Some(&42));
/// map.erase("x", "y");
/// assert_eq!(map.try_get("x", "y"), None);
/// assert_eq!(*map.get_or_insert_default("x", "y"), 0);
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, U: Clone"),
    Debug(bound = "T: Debug, U: Debug"),
    Default(bound = ""),
    PartialEq(bound = "T: PartialEq, U: PartialEq"),
    Eq(bound = "T: Eq, U: Eq")
)]
pub struct UnorderedPairMap<T, U> {
    data: BTreeMap<UnorderedPair<T>, U>,
}

impl<T: Ord, U> UnorderedPairMap<T, U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `value` with the pair `(a, b)`, returning the value it
    /// replaced, if any.
    pub fn insert(&mut self, a: T, b: T, value: U) -> Option<U> {
        let old = self.data.insert(UnorderedPair::new(a, b), value);
        trace_event!(replaced = old.is_some(), len = self.data.len(), "pair map insert");
        old
    }

    /// Removes the value associated with `(a, b)` and returns it. Does
    /// nothing if there is none.
    pub fn erase(&mut self, a: T, b: T) -> Option<U> {
        let old = self.data.remove(&UnorderedPair::new(a, b));
        trace_event!(removed = old.is_some(), len = self.data.len(), "pair map erase");
        old
    }

    pub fn try_get(&self, a: T, b: T) -> Option<&U> {
        self.data.get(&UnorderedPair::new(a, b))
    }

    pub fn try_get_mut(&mut self, a: T, b: T) -> Option<&mut U> {
        self.data.get_mut(&UnorderedPair::new(a, b))
    }

    pub fn contains(&self, a: T, b: T) -> bool {
        self.data.contains_key(&UnorderedPair::new(a, b))
    }

    /// Returns the value for `(a, b)`, first inserting `U::default()` if the
    /// pair has no value yet.
    ///
    /// Calling this only to test for presence leaves a default entry behind;
    /// use [`try_get`](Self::try_get) or [`contains`](Self::contains) for
    /// that.
    pub fn get_or_insert_default(&mut self, a: T, b: T) -> &mut U
    where
        U: Default,
    {
        self.get_or_insert_with(a, b, U::default)
    }

    /// Returns the value for `(a, b)`, first inserting the result of `f` if
    /// the pair has no value yet.
    pub fn get_or_insert_with(&mut self, a: T, b: T, f: impl FnOnce() -> U) -> &mut U {
        match self.data.entry(UnorderedPair::new(a, b)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace_event!("pair map implicit insert");
                entry.insert(f())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        trace_event!("pair map clear");
    }
}

impl<T: Ord, U> Extend<((T, T), U)> for UnorderedPairMap<T, U> {
    fn extend<I: IntoIterator<Item = ((T, T), U)>>(&mut self, iter: I) {
        for ((a, b), value) in iter {
            self.insert(a, b, value);
        }
    }
}

impl<T: Ord, U> Extend<(UnorderedPair<T>, U)> for UnorderedPairMap<T, U> {
    fn extend<I: IntoIterator<Item = (UnorderedPair<T>, U)>>(&mut self, iter: I) {
        self.extend(
            iter.into_iter()
                .map(|(pair, value)| (pair.into_values(), value)),
        );
    }
}

impl<T: Ord, U> FromIterator<((T, T), U)> for UnorderedPairMap<T, U> {
    fn from_iter<I: IntoIterator<Item = ((T, T), U)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T: Ord, U> FromIterator<(UnorderedPair<T>, U)> for UnorderedPairMap<T, U> {
    fn from_iter<I: IntoIterator<Item = (UnorderedPair<T>, U)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
