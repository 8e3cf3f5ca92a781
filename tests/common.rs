#![allow(dead_code)]

use probeset::{HashSet, MIN_CAPACITY};

// Run the test on different configurations of a `HashSet`.
pub fn with_set<T>(mut test: impl FnMut(&dyn Fn() -> HashSet<T>)) {
    // The smallest table, to exercise growth from the first few inserts.
    test(&(|| HashSet::with_capacity(MIN_CAPACITY)));

    // A small table that grows a handful of times.
    test(&(|| HashSet::builder().capacity(64).build()));

    // The default table, which most tests never grow.
    if !cfg!(miri) {
        test(&(|| HashSet::new()));
    }
}

// Prints a log message if `RUST_LOG=debug` is set.
#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        if std::env::var("RUST_LOG").as_deref() == Ok("debug") {
            println!($($x)*);
        }
    };
}

// Returns true if `n` is prime.
pub fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
}
