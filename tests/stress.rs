// adapted from: https://github.com/jonhoo/flurry/tree/main/tests/jdk

use probeset::HashSet;
use rand::prelude::*;

use std::collections::HashSet as StdHashSet;
use std::hash::Hash;

mod common;
use common::{is_prime, with_set};

#[test]
fn insert_stress() {
    const ITERATIONS: usize = if cfg!(miri) { 1 } else { 16 };
    const ENTRIES: usize = if cfg!(miri) { 64 } else { 1 << 12 };

    #[derive(Hash, PartialEq, Eq, Clone, Copy)]
    struct KeyVal {
        _data: usize,
    }

    impl KeyVal {
        pub fn new(rng: &mut impl Rng) -> Self {
            Self { _data: rng.gen() }
        }
    }

    let mut rng = rand::thread_rng();

    with_set(|set| {
        for _ in 0..ITERATIONS {
            let mut set = set();
            for _ in 0..ENTRIES {
                let key = KeyVal::new(&mut rng);
                set.insert(key);
                assert!(set.contains(&key));
            }
        }
    });
}

// Random operations checked against the standard library set.
#[test]
fn model_stress() {
    const OPERATIONS: usize = if cfg!(miri) {
        256
    } else if cfg!(probeset_stress) {
        1 << 22
    } else {
        1 << 17
    };

    // A small key space, so inserts and removes collide often.
    const KEYS: u32 = 512;

    let mut rng = rand::thread_rng();

    with_set::<u32>(|set| {
        let mut set = set();
        let mut model = StdHashSet::new();

        for _ in 0..OPERATIONS {
            let key = rng.gen_range(0..KEYS);

            match rng.gen_range(0..100) {
                0..=39 => assert_eq!(set.insert(key), model.insert(key)),
                40..=69 => assert_eq!(set.remove(&key), model.remove(&key)),
                70..=98 => assert_eq!(set.contains(&key), model.contains(&key)),
                _ => {
                    set.clear();
                    model.clear();
                }
            }

            assert_eq!(set.len(), model.len());
        }

        assert!(is_prime(set.capacity()));
        assert!(set.len() <= set.capacity() / 2);

        let mut got: Vec<_> = set.iter().copied().collect();
        let mut expected: Vec<_> = model.into_iter().collect();
        got.sort();
        expected.sort();
        assert_eq!(got, expected);
    });
}

const SIZE: usize = if cfg!(miri) { 12 } else { 50_000 };

// there must be more things absent than present!
const ABSENT_SIZE: usize = if cfg!(miri) { 1 << 5 } else { 1 << 17 };
const ABSENT_MASK: usize = ABSENT_SIZE - 1;

fn t1<K>(set: &HashSet<K>, keys: &[K], expect: usize)
where
    K: Hash + Eq,
{
    let mut sum = 0;
    let iters = 4;
    for _ in 0..iters {
        for key in keys {
            if set.get(key).is_some() {
                sum += 1;
            }
        }
    }
    assert_eq!(sum, expect * iters);
}

fn t2<K>(set: &mut HashSet<K>, keys: &[K], expect: usize)
where
    K: Hash + Eq,
{
    let mut sum = 0;
    for key in keys {
        if set.remove(key) {
            sum += 1;
        }
    }
    assert_eq!(sum, expect);
}

fn t3<K>(set: &mut HashSet<K>, keys: &[K], expect: usize)
where
    K: Copy + Hash + Eq,
{
    let mut sum = 0;
    for i in 0..keys.len() {
        if set.insert(keys[i]) {
            sum += 1;
        }
    }
    assert_eq!(sum, expect);
}

fn t4<K>(set: &HashSet<K>, keys: &[K], expect: usize)
where
    K: Hash + Eq,
{
    let mut sum = 0;
    for i in 0..keys.len() {
        if set.contains(&keys[i]) {
            sum += 1;
        }
    }
    assert_eq!(sum, expect);
}

fn t5<K>(set: &mut HashSet<K>, keys: &[K], expect: usize)
where
    K: Hash + Eq,
{
    let mut sum = 0;
    let mut i = keys.len() as isize - 2;
    while i >= 0 {
        if set.remove(&keys[i as usize]) {
            sum += 1;
        }
        i -= 2;
    }
    assert_eq!(sum, expect);
}

fn t6<K>(set: &HashSet<K>, keys1: &[K], keys2: &[K], expect: usize)
where
    K: Hash + Eq,
{
    let mut sum = 0;
    for i in 0..expect {
        if set.get(&keys1[i]).is_some() {
            sum += 1;
        }
        if set.get(&keys2[i & ABSENT_MASK]).is_some() {
            sum += 1;
        }
    }
    assert_eq!(sum, expect);
}

fn t7<K>(set: &HashSet<K>, k1: &[K], k2: &[K])
where
    K: Hash + Eq,
{
    let mut sum = 0;
    for i in 0..k1.len() {
        if set.contains(&k1[i]) {
            sum += 1;
        }
        if set.contains(&k2[i]) {
            sum += 1;
        }
    }
    assert_eq!(sum, k1.len());
}

fn ittest<K>(set: &HashSet<K>, expect: usize) {
    let mut sum = 0;
    for _ in set.iter() {
        sum += 1;
    }
    assert_eq!(sum, expect);
}

#[test]
fn everything() {
    let mut rng = rand::thread_rng();

    with_set(|set| {
        let mut set = set();
        let mut keys: Vec<_> = (0..ABSENT_SIZE + SIZE).collect();
        keys.shuffle(&mut rng);
        let absent_keys = &keys[0..ABSENT_SIZE];
        let keys = &keys[ABSENT_SIZE..];

        // insert (absent)
        t3(&mut set, keys, SIZE);
        // insert (present)
        t3(&mut set, keys, 0);
        // contains (present & absent)
        t7(&set, keys, absent_keys);
        // contains (present)
        t4(&set, keys, SIZE);
        // contains (absent)
        t4(&set, absent_keys, 0);
        // get
        t6(&set, keys, absent_keys, SIZE);
        // get (present)
        t1(&set, keys, SIZE);
        // get (absent)
        t1(&set, absent_keys, 0);
        // remove (absent)
        t2(&mut set, absent_keys, 0);
        // remove (present)
        t5(&mut set, keys, SIZE / 2);
        // insert (half present)
        t3(&mut set, keys, SIZE / 2);
        // iter (present)
        ittest(&set, SIZE);
    });
}
