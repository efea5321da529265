//! The hash-map used for transient lookups during hull construction.
//!
//! Iteration order is never relied upon to decide anything about the hull geometry.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;
