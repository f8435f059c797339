use super::*;
use crate::{Error, Result};

fn test_discriminators() -> Discriminators {
    Discriminators::new(0xc0ffee, 0xbeef).unwrap()
}

struct FixedRandSource(u32);

impl RandSource for FixedRandSource {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

/// Advances counter by one per identifier
#[test]
fn advances_counter_by_one_per_identifier() {
    let g = Generator::with_counter(test_discriminators(), 41);
    let ids: Vec<ObjectId> = (0..4).map(|_| g.generate_at(1_000)).collect();
    assert_eq!(
        ids.iter().map(ObjectId::increment).collect::<Vec<_>>(),
        [42, 43, 44, 45]
    );
    for e in &ids {
        assert_eq!(e.timestamp(), 1_000);
        assert_eq!(e.machine(), 0xc0ffee);
        assert_eq!(e.pid(), 0xbeef);
    }
    for w in ids.windows(2) {
        assert!(w[0] < w[1]);
    }
}

/// Wraps counter silently from max to zero
#[test]
fn wraps_counter_silently_from_max_to_zero() {
    let g = Generator::with_counter(test_discriminators(), 0xff_fffe);
    let incs: Vec<u32> = (0..4).map(|_| g.generate_at(0).increment()).collect();
    assert_eq!(incs, [0xff_ffff, 0, 1, 2]);

    // seeds wider than 24 bits are truncated
    let g = Generator::with_counter(test_discriminators(), u32::MAX);
    assert_eq!(g.generate_at(0).increment(), 0);
}

/// Seeds counter from random source
#[test]
fn seeds_counter_from_random_source() {
    let g = Generator::with_rand_source(test_discriminators(), FixedRandSource(0x1234_5678));
    assert_eq!(g.generate_at(7).increment(), 0x34_5679);
    assert_eq!(g.discriminators(), test_discriminators());
    assert_eq!(g.machine(), 0xc0ffee);
    assert_eq!(g.pid(), 0xbeef);
}

/// Produces the documented bytes for a pinned state
#[test]
fn produces_the_documented_bytes_for_a_pinned_state() {
    let g = Generator::with_counter(Discriminators::default(), 0);
    let e = g.generate_at(1);
    assert_eq!(e.to_bytes(), [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(e.to_string(), "000000010000000000000001");
}

/// Generates no duplicate increments under multithreading
#[test]
fn generates_no_duplicate_increments_under_multithreading() {
    use std::{collections::HashSet, thread};

    const N_THREADS: usize = 8;
    const N_PER_THREAD: usize = 10_000;

    let g = Generator::with_counter(test_discriminators(), 0xff_f000);
    let g = &g;
    let ids: Vec<ObjectId> = thread::scope(|s| {
        let handles: Vec<_> = (0..N_THREADS)
            .map(|_| {
                s.spawn(move || {
                    (0..N_PER_THREAD)
                        .map(|_| g.generate_at(1_700_000_000))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let incs: HashSet<u32> = ids.iter().map(ObjectId::increment).collect();
    assert_eq!(incs.len(), N_THREADS * N_PER_THREAD);
    let uniq: HashSet<ObjectId> = ids.into_iter().collect();
    assert_eq!(uniq.len(), N_THREADS * N_PER_THREAD);
}

/// Sorts identifiers from later seconds after earlier ones
#[test]
fn sorts_identifiers_from_later_seconds_after_earlier_ones() {
    let g = Generator::with_counter(test_discriminators(), 0xff_fffe);
    let earlier = g.generate_at(100);
    // a smaller increment in a later second still sorts later
    let g = Generator::with_counter(test_discriminators(), 0);
    let later = g.generate_at(101);
    assert!(earlier.increment() > later.increment());
    assert!(earlier < later);
}

#[cfg(feature = "std")]
mod std_ext {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn now_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_secs() as i64
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        let g = Generator::new(test_discriminators());
        for _ in 0..10_000 {
            let before = now_secs();
            let ts = g.generate().timestamp() as i64;
            let after = now_secs();
            assert!(before <= ts && ts <= after);
        }
    }

    /// Generates at explicit system time
    #[test]
    fn generates_at_explicit_system_time() -> Result<()> {
        let g = Generator::with_counter(test_discriminators(), 9);

        let e = g.generate_at_time(UNIX_EPOCH + Duration::from_millis(1_595_768_702_999))?;
        assert_eq!(e.timestamp(), 1_595_768_702);
        assert_eq!(e.increment(), 10);

        let e = g.generate_at_time(UNIX_EPOCH)?;
        assert_eq!(e.creation_time(), UNIX_EPOCH);
        assert_eq!(e.increment(), 11);
        Ok(())
    }

    /// Rejects system time outside 32-bit second range without advancing
    #[test]
    fn rejects_system_time_outside_32_bit_second_range_without_advancing() {
        let g = Generator::with_counter(test_discriminators(), 9);
        let t = UNIX_EPOCH + Duration::from_secs(1 << 32);
        assert!(matches!(
            g.generate_at_time(t),
            Err(Error::OutOfRange {
                field: "timestamp",
                ..
            })
        ));
        assert_eq!(g.generate_at(0).increment(), 10);
    }

    /// Accepts the last representable second and rejects the next one
    #[test]
    fn accepts_the_last_representable_second_and_rejects_the_next_one() {
        let g = Generator::with_counter(test_discriminators(), 0);
        let last = UNIX_EPOCH + Duration::from_secs(i32::MAX as u64);

        let e = g.generate_at_time(last).unwrap();
        assert_eq!(e.timestamp(), i32::MAX);
        assert_eq!(e.creation_time(), last);

        assert_eq!(
            g.generate_at_time(last + Duration::from_secs(1)),
            Err(Error::OutOfRange {
                field: "timestamp",
                value: 1 << 31
            })
        );
        assert_eq!(g.generate_at(0).increment(), 2);
    }

    /// Iterates over fresh identifiers
    #[test]
    fn iterates_over_fresh_identifiers() {
        use std::collections::HashSet;

        let g = Generator::new(Discriminators::detect());
        let ids: Vec<ObjectId> = g.iter().take(1_000).collect();
        let uniq: HashSet<&ObjectId> = ids.iter().collect();
        assert_eq!(uniq.len(), ids.len());
        assert_eq!(g.iter().size_hint(), (usize::MAX, None));

        let first = ids[0];
        for e in &ids {
            assert_eq!(e.machine(), first.machine());
            assert_eq!(e.pid(), first.pid());
        }
    }
}
