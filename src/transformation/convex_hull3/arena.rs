use super::{CapacityPolicy, ConvexHullError};
use core::ops::{Index, IndexMut};
use slotmap::{Key, SlotMap};

/// The number of mesh elements needed to build the hull of a point cloud.
///
/// Derived from Euler's formula `V - E + F = 2` for a closed triangle mesh with `V`
/// vertices: `E = 3V - 6` and `F = 2V - 4`. The half-edge and face counts are doubled
/// to leave room for the faces and edges that coexist transiently while the hull is
/// being expanded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HullCapacity {
    /// The maximum number of vertices (hull vertices and outside points).
    pub vertices: usize,
    /// The maximum number of half-edges.
    pub half_edges: usize,
    /// The maximum number of faces.
    pub faces: usize,
}

impl HullCapacity {
    /// The capacity needed to compute the hull of `count` points.
    pub fn from_point_count(count: usize) -> Self {
        let edges = (3 * count).saturating_sub(6);
        let faces = (2 * count).saturating_sub(4);

        HullCapacity {
            vertices: count,
            half_edges: 2 * (2 * edges),
            faces: 2 * faces,
        }
    }
}

/// A pool of mesh elements addressed by generation-checked keys.
///
/// Released slots are reused by later insertions, and a key to a released slot never
/// aliases the element that replaced it.
pub(crate) struct Arena<K: Key, T> {
    name: &'static str,
    slots: SlotMap<K, T>,
    capacity: usize,
    policy: CapacityPolicy,
    peak: usize,
}

impl<K: Key, T> Arena<K, T> {
    pub fn new(name: &'static str, capacity: usize, policy: CapacityPolicy) -> Self {
        Arena {
            name,
            slots: SlotMap::with_capacity_and_key(capacity),
            capacity,
            policy,
            peak: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> Result<K, ConvexHullError> {
        if self.slots.len() >= self.capacity {
            match self.policy {
                CapacityPolicy::Fixed => {
                    return Err(ConvexHullError::CapacityExceeded {
                        arena: self.name,
                        capacity: self.capacity,
                    })
                }
                CapacityPolicy::Grow if self.slots.len() == self.capacity => {
                    log::debug!(
                        "The {} arena grows beyond its capacity of {} elements.",
                        self.name,
                        self.capacity
                    );
                }
                CapacityPolicy::Grow => {}
            }
        }

        let key = self.slots.insert(value);
        self.peak = self.peak.max(self.slots.len());
        Ok(key)
    }

    #[inline]
    pub fn remove(&mut self, key: K) -> Option<T> {
        self.slots.remove(key)
    }

    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// The largest number of elements simultaneously alive in this arena.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }

    #[inline]
    pub fn iter(&self) -> slotmap::basic::Iter<'_, K, T> {
        self.slots.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slotmap::basic::IterMut<'_, K, T> {
        self.slots.iter_mut()
    }

    #[inline]
    pub fn keys(&self) -> slotmap::basic::Keys<'_, K, T> {
        self.slots.keys()
    }

    #[inline]
    pub fn values(&self) -> slotmap::basic::Values<'_, K, T> {
        self.slots.values()
    }
}

impl<K: Key, T> Index<K> for Arena<K, T> {
    type Output = T;

    #[inline]
    fn index(&self, key: K) -> &T {
        &self.slots[key]
    }
}

impl<K: Key, T> IndexMut<K> for Arena<K, T> {
    #[inline]
    fn index_mut(&mut self, key: K) -> &mut T {
        &mut self.slots[key]
    }
}
