use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use derivative::Derivative;

use crate::{UnorderedPair, tracing_support::trace_event, util::sort_pair};

/// A symmetric relation over `T`, i.e. the edge set of an undirected graph.
///
/// Only the canonical direction of each edge is stored: the larger element
/// lives in the bucket of the smaller one, so `insert(a, b)` and
/// `insert(b, a)` touch the same entry.
///
/// ```
/// use symmetric::UnorderedRelation;
///
/// let mut relation = UnorderedRelation::new();
/// relation.insert(1, 2);
/// assert!(relation.has(2, 1));
/// assert!(!relation.has(1, 3));
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    Default(bound = "")
)]
pub struct UnorderedRelation<T> {
    // Invariant: for any key `a` and any `b` in `data[a]`, a <= b.
    // Buckets may be empty after `erase`.
    data: BTreeMap<T, BTreeSet<T>>,
    // Invariant: equal to the sum of the bucket sizes.
    edge_count: usize,
}

impl<T: Ord> UnorderedRelation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edge between `a` and `b`. Returns `true` if the edge was
    /// not already present.
    pub fn insert(&mut self, a: T, b: T) -> bool {
        let (a, b) = sort_pair(a, b);
        let inserted = self.data.entry(a).or_default().insert(b);
        if inserted {
            self.edge_count += 1;
        }
        trace_event!(inserted, len = self.edge_count, "relation insert");
        inserted
    }

    /// Removes the edge between `a` and `b`, if any. Returns `true` if an
    /// edge was removed.
    pub fn erase(&mut self, a: T, b: T) -> bool {
        let (a, b) = sort_pair(a, b);
        let removed = self
            .data
            .get_mut(&a)
            .is_some_and(|bucket| bucket.remove(&b));
        if removed {
            self.edge_count -= 1;
        }
        trace_event!(removed, len = self.edge_count, "relation erase");
        removed
    }

    /// Tests whether there is an edge between `a` and `b`.
    pub fn has(&self, a: T, b: T) -> bool {
        let (a, b) = sort_pair(a, b);
        self.has_sorted(&a, &b)
    }

    fn has_sorted(&self, a: &T, b: &T) -> bool {
        self.data.get(a).is_some_and(|bucket| bucket.contains(b))
    }

    /// The number of distinct edges.
    pub fn len(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.edge_count = 0;
        trace_event!("relation clear");
    }
}

// Empty buckets are not significant, so this can't be derived.
impl<T: Ord> PartialEq for UnorderedRelation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count
            && self
                .data
                .iter()
                .all(|(a, bucket)| bucket.iter().all(|b| other.has_sorted(a, b)))
    }
}

impl<T: Ord> Eq for UnorderedRelation<T> {}

impl<T: Ord> Extend<(T, T)> for UnorderedRelation<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.insert(a, b);
        }
    }
}

impl<T: Ord> Extend<UnorderedPair<T>> for UnorderedRelation<T> {
    fn extend<I: IntoIterator<Item = UnorderedPair<T>>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(UnorderedPair::into_values));
    }
}

impl<T: Ord> FromIterator<(T, T)> for UnorderedRelation<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut relation = Self::new();
        relation.extend(iter);
        relation
    }
}

impl<T: Ord> FromIterator<UnorderedPair<T>> for UnorderedRelation<T> {
    fn from_iter<I: IntoIterator<Item = UnorderedPair<T>>>(iter: I) -> Self {
        let mut relation = Self::new();
        relation.extend(iter);
        relation
    }
}

#[cfg(test)]
impl<T: Ord> UnorderedRelation<T> {
    /// Checks the storage invariants, panicking on the first violation.
    pub(crate) fn check_consistency(&self)
    where
        T: Debug,
    {
        let mut total = 0;
        for (a, bucket) in &self.data {
            for b in bucket {
                assert!(a <= b, "edge ({a:?}, {b:?}) stored in non-canonical order");
            }
            total += bucket.len();
        }
        assert_eq!(total, self.edge_count, "edge count out of sync");
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.data.len()
    }
}
