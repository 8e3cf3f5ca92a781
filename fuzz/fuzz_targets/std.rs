#![no_main]

use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use probeset::HashSet as ProbeHashSet;
use std::collections::HashSet as StdHashSet;

#[derive(Debug, Arbitrary)]
enum Operation<T> {
    Insert(T),
    Remove(T),
    Take(T),
    Get(T),
    Contains(T),
    Clear,
    Len,
    IsEmpty,
    RetainEven,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    // The capacity hint, kept small so tables grow and collide.
    capacity: u8,
    operations: Vec<Operation<u16>>,
}

fn fuzz_hashset(input: FuzzInput) {
    let mut std_set = StdHashSet::new();
    let mut probe_set = match ProbeHashSet::try_with_capacity(input.capacity.into()) {
        Ok(set) => set,
        Err(_) => return,
    };

    for op in input.operations {
        match op {
            Operation::Insert(v) => {
                assert_eq!(std_set.insert(v), probe_set.insert(v));
            }
            Operation::Remove(v) => {
                assert_eq!(std_set.remove(&v), probe_set.remove(&v));
            }
            Operation::Take(v) => {
                assert_eq!(std_set.take(&v), probe_set.take(&v));
            }
            Operation::Get(v) => {
                assert_eq!(std_set.get(&v), probe_set.get(&v));
            }
            Operation::Contains(v) => {
                assert_eq!(std_set.contains(&v), probe_set.contains(&v));
            }
            Operation::Clear => {
                std_set.clear();
                probe_set.clear();
            }
            Operation::Len => {
                assert_eq!(std_set.len(), probe_set.len());
            }
            Operation::IsEmpty => {
                assert_eq!(std_set.is_empty(), probe_set.is_empty());
            }
            Operation::RetainEven => {
                std_set.retain(|v| v % 2 == 0);
                probe_set.retain(|v| v % 2 == 0);
            }
        }

        assert!(probe_set.len() <= probe_set.capacity() / 2);
    }

    // Final consistency checks
    for v in std_set.iter() {
        assert!(probe_set.contains(v));
    }
    assert_eq!(std_set.len(), probe_set.len());
    assert_eq!(std_set.len(), probe_set.iter().count());
}

fuzz_target!(|data: FuzzInput| {
    fuzz_hashset(data);
});
