mod prime;
mod probe;
mod table;

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::{mem, slice};

use self::probe::Probe;
use self::table::{Slot, Table};
use crate::cfg::trace;
use crate::CapacityError;

/// The capacity hint used by [`HashSet::new`](crate::HashSet::new).
pub const DEFAULT_CAPACITY: usize = 200_100;

/// The smallest table capacity.
///
/// Smaller hints are rounded up to this value. Five is the smallest prime `p`
/// for which a prime below `p - 1` exists to derive probe strides from.
pub const MIN_CAPACITY: usize = 5;

/// The largest accepted capacity hint.
pub const MAX_CAPACITY: usize = isize::MAX as usize / 2;

// An open-addressing hash set using double hashing.
#[derive(Clone)]
pub struct HashSet<T, S> {
    table: Table<T>,
    // The number of occupied slots.
    live: usize,
    // The number of tombstones.
    deleted: usize,
    pub hasher: S,
}

// The number of occupied slots plus tombstones above which tombstones are purged.
//
// This leaves at least a quarter of the table as headroom for tombstones after
// a purge of a half full table, and always leaves an empty slot.
#[inline]
fn tombstone_limit(capacity: usize) -> usize {
    capacity - capacity / 4
}

// The result of searching the table for an element.
#[derive(Debug, PartialEq, Eq)]
enum Location {
    // The element was found at this index.
    Found(usize),
    // The element is absent. It would be inserted at this index, the first
    // tombstone in the probe sequence, or otherwise the empty slot that ended it.
    Vacant(usize),
}

impl<T, S> HashSet<T, S> {
    pub fn new(capacity: usize, hasher: S) -> Result<HashSet<T, S>, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }

        if capacity > MAX_CAPACITY {
            return Err(CapacityError::Overflow(capacity));
        }

        Ok(HashSet {
            table: Table::alloc(capacity.max(MIN_CAPACITY)),
            live: 0,
            deleted: 0,
            hasher,
        })
    }

    // Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    // Returns the length of the backing table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    // Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.table.clear();
        self.live = 0;
        self.deleted = 0;
    }

    // Returns an iterator over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.table.slots.iter(),
            remaining: self.live,
        }
    }

    // Removes every element for which `f` returns `false`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for slot in self.table.slots.iter_mut() {
            if let Slot::Occupied(value) = slot {
                if !f(value) {
                    *slot = Slot::Deleted;
                    self.live -= 1;
                    self.deleted += 1;
                }
            }
        }
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    // Returns the element equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key) {
            Location::Found(i) => self.table.slots[i].get(),
            Location::Vacant(_) => None,
        }
    }

    // Inserts `value`, returning `false` if an equal element was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let i = match self.locate(&value) {
            Location::Found(_) => return false,
            Location::Vacant(i) => i,
        };

        self.place(i, value);

        // Rehash if the table is more than half full.
        if self.live > self.table.len() / 2 {
            self.rehash();
        } else if self.live + self.deleted > tombstone_limit(self.table.len()) {
            self.purge();
        }

        true
    }

    // Removes and returns the element equal to `key`, leaving a tombstone in its slot.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key) {
            Location::Found(i) => {
                let value = self.table.slots[i].take();
                self.live -= 1;
                self.deleted += 1;
                value
            }
            Location::Vacant(_) => None,
        }
    }

    // Grows the table to the next prime at least twice its length, reinserting
    // every element.
    fn rehash(&mut self) {
        let capacity = self
            .table
            .len()
            .checked_mul(2)
            .filter(|&capacity| capacity <= MAX_CAPACITY)
            .unwrap_or_else(|| panic!("Hash table exceeded maximum capacity"));

        trace!(
            "growing table from {} slots with {} elements",
            self.table.len(),
            self.live
        );

        self.migrate(capacity);
    }

    // Rebuilds the table at its current length, dropping all tombstones.
    fn purge(&mut self) {
        trace!(
            "purging {} tombstones from table with {} slots",
            self.deleted,
            self.table.len()
        );

        let capacity = self.table.len();
        self.migrate(capacity);
    }

    // Moves every element into a freshly allocated table of at least `capacity` slots.
    fn migrate(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.table, Table::alloc(capacity));
        let moving = self.live;

        self.live = 0;
        self.deleted = 0;

        for slot in old.slots.into_vec() {
            if let Slot::Occupied(value) = slot {
                // The new table is at most half full once every element has moved,
                // so reinsertion never triggers another migration.
                match self.locate(&value) {
                    Location::Vacant(i) => self.place(i, value),
                    Location::Found(_) => unreachable!("duplicate element in table"),
                }
            }
        }

        debug_assert_eq!(self.live, moving);
        debug_assert!(self.live <= self.table.len() / 2);
    }

    // Writes `value` into the vacant slot at index `i`.
    #[inline]
    fn place(&mut self, i: usize, value: T) {
        let slot = &mut self.table.slots[i];

        if matches!(slot, Slot::Deleted) {
            self.deleted -= 1;
        }

        debug_assert!(slot.get().is_none());
        *slot = Slot::Occupied(value);
        self.live += 1;
    }

    // Follows the probe sequence for `key` until an equal element or an empty slot.
    fn locate<Q>(&self, key: &Q) -> Location
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        let mut probe = Probe::start(hash, self.table.len(), self.table.modulus);

        // The first tombstone in the probe sequence.
        let mut vacant = None;

        loop {
            // There is always at least one empty slot, and the sequence visits every slot.
            debug_assert!(probe.len < self.table.len(), "probe sequence did not terminate");

            match &self.table.slots[probe.i] {
                Slot::Empty => return Location::Vacant(vacant.unwrap_or(probe.i)),
                Slot::Deleted => {
                    if vacant.is_none() {
                        vacant = Some(probe.i);
                    }
                }
                Slot::Occupied(value) => {
                    if value.borrow() == key {
                        return Location::Found(probe.i);
                    }
                }
            }

            probe.next();
        }
    }
}

// An iterator over the elements of a set.
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.slots.by_ref().find_map(|slot| slot.get())?;
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
