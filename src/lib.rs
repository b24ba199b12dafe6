//! Unordered pairs and the symmetric containers built on them.
//!
//! - [`UnorderedPair`] sorts its two elements on construction, so `(a, b)` and
//!   `(b, a)` are the same value.
//! - [`UnorderedRelation`] is a set of undirected edges.
//! - [`UnorderedPairMap`] maps unordered pairs to values.
//!
//! None of the containers synchronize internally.

pub mod error;
pub mod pair_map;
pub mod pairs;
pub mod relation;
pub mod tracing_support;

mod test_support;
mod util;

pub use error::PairError;
pub use pair_map::UnorderedPairMap;
pub use pairs::UnorderedPair;
pub use relation::UnorderedRelation;
