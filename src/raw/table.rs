use std::mem;

use super::prime;

// A slot in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    // The slot has never held an element since the table was allocated or cleared.
    Empty,
    // The slot held an element that was removed. Probes continue past it.
    Deleted,
    Occupied(T),
}

impl<T> Slot<T> {
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    // Takes the element out of an occupied slot, leaving a tombstone. Other
    // slots are left unchanged.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        match self {
            Slot::Occupied(_) => match mem::replace(self, Slot::Deleted) {
                Slot::Occupied(value) => Some(value),
                _ => None,
            },
            _ => None,
        }
    }
}

// The backing array of a hash set.
#[derive(Clone)]
pub struct Table<T> {
    // The slots, with a prime length.
    pub slots: Box<[Slot<T>]>,
    // The modulus used to derive probe strides, the largest prime below the
    // table length.
    pub modulus: usize,
}

impl<T> Table<T> {
    // Allocate an empty table with the smallest prime length that is at least `capacity`.
    pub fn alloc(capacity: usize) -> Table<T> {
        let len = prime::next_prime(capacity);
        debug_assert!(len >= super::MIN_CAPACITY);

        let slots = (0..len).map(|_| Slot::Empty).collect();
        let modulus = prime::previous_prime(len - 1);

        crate::cfg::trace!("allocated table with {len} slots (stride modulus {modulus})");

        Table { slots, modulus }
    }

    // Returns the length of the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // Resets every slot to empty in place.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
    }
}

#[test]
fn layout() {
    let table: Table<u8> = Table::alloc(10);
    assert_eq!(table.len(), 11);
    assert_eq!(table.modulus, 7);
    assert!(table.slots.iter().all(|slot| *slot == Slot::Empty));

    let table: Table<u8> = Table::alloc(5);
    assert_eq!(table.len(), 5);
    assert_eq!(table.modulus, 3);
}

#[test]
fn take() {
    let mut slot = Slot::Occupied(1);
    assert_eq!(slot.take(), Some(1));
    assert_eq!(slot, Slot::Deleted);
    assert_eq!(slot.take(), None);
    assert_eq!(slot, Slot::Deleted);

    let mut slot = Slot::<u8>::Empty;
    assert_eq!(slot.take(), None);
    assert_eq!(slot, Slot::Empty);
}
