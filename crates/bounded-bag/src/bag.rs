//! Fixed-capacity unordered storage.
//!
//! [`BoundedBag`] is the storage primitive underneath higher-level registries.
//! It owns a fixed number of slots, keeps items in no particular order, and
//! matches items by value equality, so duplicates may coexist and removal
//! takes out a single matching item.

use std::slice;

use tracing::trace;

/// A fixed-capacity multiset.
///
/// Items are stored in arbitrary order and compared by value. The bag never
/// grows past the capacity given at construction; [`BoundedBag::add`] reports
/// failure instead.
#[derive(Debug, Clone)]
pub struct BoundedBag<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedBag<T> {
    /// Creates an empty bag with room for `capacity` items.
    ///
    /// A capacity of zero is allowed and yields a bag that rejects every add.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an item, returning `false` when the bag is already full.
    ///
    /// Duplicates are allowed; each call occupies one slot.
    pub fn add(&mut self, item: T) -> bool {
        if self.is_full() {
            trace!(
                item_type = item_type::<T>(),
                capacity = self.capacity,
                "Full, add rejected"
            );
            return false;
        }
        self.items.push(item);
        trace!(item_type = item_type::<T>(), len = self.items.len(), "Added");
        true
    }

    /// Removes every item. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
        trace!(item_type = item_type::<T>(), "Cleared");
    }

    /// Keeps only the items for which `keep` returns `true`.
    ///
    /// Every stored item is visited exactly once, so `keep` may carry side
    /// effects such as tallying what gets dropped.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        trace!(
            item_type = item_type::<T>(),
            removed = before - self.items.len(),
            len = self.items.len(),
            "Retained"
        );
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the bag holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items the bag can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` when every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterates over the stored items in unspecified order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> BoundedBag<T> {
    /// `true` when at least one stored item equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of stored items equal to `item`.
    pub fn count_of(&self, item: &T) -> usize {
        self.items.iter().filter(|stored| *stored == item).count()
    }

    /// Removes one item equal to `item`, returning `false` when none matches.
    ///
    /// When duplicates are present exactly one of them is taken out. The
    /// vacated slot is backfilled with the last item, so ordering is not
    /// preserved.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|stored| stored == item) {
            Some(index) => {
                self.items.swap_remove(index);
                trace!(item_type = item_type::<T>(), len = self.items.len(), "Removed");
                true
            }
            None => {
                trace!(item_type = item_type::<T>(), "Not found");
                false
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedBag<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn item_type<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("Unknown")
}
