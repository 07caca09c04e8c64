//! Fixed-capacity, generation-checked resource storage.
//!
//! The pool owns the backend resource values; callers only ever hold
//! [`ResourceHandle`]s. Removing a value bumps its slot version so stale
//! handles stop resolving.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Opaque key of a pooled resource. `ResourceHandle::default()` is the
    /// null handle and never resolves.
    pub struct ResourceHandle;
}

pub struct ResourcePool<T> {
    map: SlotMap<ResourceHandle, T>,
    capacity: usize,
}

impl<T> ResourcePool<T> {
    /// Allocates every slot up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: SlotMap::with_capacity_and_key(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Store `value`, returning `None` once the pool is full.
    pub fn alloc(&mut self, value: T) -> Option<ResourceHandle> {
        if self.map.len() == self.capacity {
            return None;
        }
        let handle = self.map.insert(value);
        trace!(?handle, "resource allocated");
        Some(handle)
    }

    pub fn get(&self, handle: ResourceHandle) -> Option<&T> {
        self.map.get(handle)
    }

    pub fn get_mut(&mut self, handle: ResourceHandle) -> Option<&mut T> {
        self.map.get_mut(handle)
    }

    pub fn contains(&self, handle: ResourceHandle) -> bool {
        self.map.contains_key(handle)
    }

    /// Remove and return the value behind `handle`. Stale or already freed
    /// handles return `None`.
    pub fn free(&mut self, handle: ResourceHandle) -> Option<T> {
        let value = self.map.remove(handle)?;
        trace!(?handle, "resource freed");
        Some(value)
    }

    /// Handles of every live resource.
    pub fn handles(&self) -> impl Iterator<Item = ResourceHandle> + '_ {
        self.map.keys()
    }
}
