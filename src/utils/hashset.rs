//! The hash-set used for transient membership tests during hull construction.

/// Hashset using [`hashbrown::HashSet`]
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;
