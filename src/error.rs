use std::fmt::Debug;

/// Errors that can occur when building an [`UnorderedPair`](crate::UnorderedPair)
/// from values that are supposed to be canonical already.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PairError<T: Debug> {
    /// The first value sorts after the second. Both values are handed back
    /// unchanged.
    #[error("values are not in sorted order: {0:?} > {1:?}")]
    Unsorted(T, T),
}

impl<T: Debug> PairError<T> {
    /// Recovers the values that were rejected, in the order they were given.
    pub fn into_values(self) -> (T, T) {
        match self {
            PairError::Unsorted(a, b) => (a, b),
        }
    }
}
