// Prime sizing for the slot array.
//
// Table capacities are always prime so that any stride in `[1, capacity)` is
// coprime with the capacity, and the probe sequence visits every slot.

// Returns the smallest prime that is at least `n`, searching odd numbers only.
//
// Note that an even `n` is first bumped to `n + 1`, so `next_prime(2)` is 3.
pub fn next_prime(mut n: usize) -> usize {
    if n % 2 == 0 {
        n += 1;
    }

    while !is_prime(n) {
        n += 2;
    }

    n
}

// Returns the largest prime that is at most `n`, searching odd numbers only.
//
// `n` must be at least 3.
pub fn previous_prime(mut n: usize) -> usize {
    debug_assert!(n >= 3, "no odd prime below {n}");

    if n % 2 == 0 {
        n -= 1;
    }

    while !is_prime(n) {
        n -= 2;
    }

    n
}

// Trial division by odd numbers up to the square root of `n`.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }

        i += 2;
    }

    true
}

#[test]
fn primes() {
    let primes = (0..50).filter(|&n| is_prime(n)).collect::<Vec<_>>();
    assert_eq!(
        primes,
        [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );

    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(!is_prime(9));
    assert!(!is_prime(25));
    assert!(is_prime(200_117));
    assert!(!is_prime(200_101));
}

#[test]
fn next() {
    assert_eq!(next_prime(0), 3);
    assert_eq!(next_prime(1), 3);
    assert_eq!(next_prime(2), 3);
    assert_eq!(next_prime(5), 5);
    assert_eq!(next_prime(10), 11);
    assert_eq!(next_prime(11), 11);
    assert_eq!(next_prime(22), 23);
    assert_eq!(next_prime(46), 47);
    assert_eq!(next_prime(200_100), 200_117);
}

#[test]
fn previous() {
    assert_eq!(previous_prime(3), 3);
    assert_eq!(previous_prime(4), 3);
    assert_eq!(previous_prime(10), 7);
    assert_eq!(previous_prime(22), 19);
    assert_eq!(previous_prime(46), 43);
}
