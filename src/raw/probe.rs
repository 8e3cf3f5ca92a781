// A double-hashing probe sequence.
//
// The sequence starts at `hash % len` and repeatedly adds a fixed,
// hash-dependent stride. The table length is prime and the stride lies in
// `[1, len)`, so the sequence visits every slot exactly once per `len` probes.
#[derive(Debug)]
pub struct Probe {
    // The current index in the probe sequence.
    pub i: usize,
    // The number of probes taken so far.
    pub len: usize,
    // The per-element stride.
    stride: usize,
    // The length of the table.
    capacity: usize,
}

impl Probe {
    // Initialize the probe sequence for a table of length `capacity`, deriving
    // the stride from `modulus`, a prime below `capacity`.
    #[inline]
    pub fn start(hash: u64, capacity: usize, modulus: usize) -> Probe {
        Probe {
            i: h1(hash, capacity),
            len: 0,
            stride: h2(hash, modulus),
            capacity,
        }
    }

    // Increment the probe sequence.
    #[inline]
    pub fn next(&mut self) {
        self.len += 1;

        // The stride is less than the capacity, so a single subtraction wraps.
        self.i += self.stride;
        if self.i >= self.capacity {
            self.i -= self.capacity;
        }
    }
}

// The primary slot for a hash.
#[inline]
fn h1(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

// The probe stride for a hash, in `[1, modulus]`.
#[inline]
fn h2(hash: u64, modulus: usize) -> usize {
    modulus - (hash % modulus as u64) as usize
}

#[test]
fn stride() {
    assert_eq!(h2(0, 7), 7);
    assert_eq!(h2(1, 7), 6);
    assert_eq!(h2(6, 7), 1);
    assert_eq!(h2(7, 7), 7);
    assert_eq!(h2(u64::MAX, 7), 7 - (u64::MAX % 7) as usize);
}

#[test]
fn visits_every_slot() {
    for hash in [0, 1, 5, 10, 99, u64::MAX] {
        let mut probe = Probe::start(hash, 11, 7);
        let mut seen = [false; 11];

        for _ in 0..11 {
            assert!(!seen[probe.i]);
            seen[probe.i] = true;
            probe.next();
        }

        assert!(seen.iter().all(|&seen| seen));
        assert_eq!(probe.len, 11);
        assert_eq!(probe.i, h1(hash, 11));
    }
}
