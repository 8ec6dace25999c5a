#![allow(unused)]
//! Query integration harness.
//!
//! # What this covers
//!
//! - **Membership**: every stored value is found, every in-range absent value
//!   is not found, and anything outside `[low, high]` is out of range. Verified
//!   exhaustively over the primes below 10 000 and with proptest.
//! - **Rank**: `rank(base)` is the first value, `rank(base + count - 1)` the
//!   last; the ranks just outside report out of range. Text and integer paths
//!   agree for every rank.
//! - **Pandigital search**: the largest zero-free, repeat-free, gap-free value
//!   is returned; no candidate means `None`.
//! - **Idempotence**: repeating a query returns the same answer.
//!
//! # Running
//!
//! ```sh
//! cargo test --test query_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pstore::QueryError;

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

#[test]
fn membership_matches_a_sieve() {
    let primes = primes_up_to(10_000);
    let store = store_of(&primes);

    for n in store.low()..=store.high() {
        let expected = primes.binary_search(&n).is_ok();
        assert_eq!(store.contains(n), Ok(expected), "contains({n})");
    }
    assert_out_of_range!(store, 0);
    assert_out_of_range!(store, store.high() + 1);
    assert_out_of_range!(store, u64::MAX);
}

#[test]
fn out_of_range_is_distinct_from_absent() {
    let store = small_store();
    assert_eq!(store.contains(12), Ok(false));
    assert_eq!(
        store.contains(14),
        Err(QueryError::OutOfRange {
            value: 14,
            low: 1,
            high: 13
        })
    );
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

#[test]
fn rank_edges() {
    let store = small_store();
    let base = store.base();
    let end = base + store.count();

    assert_eq!(store.get_by_rank(base), Ok(2));
    assert_eq!(store.get_by_rank(end - 1), Ok(13));
    assert_eq!(store.get_by_rank(3), Ok(5));
    assert_eq!(
        store.get_by_rank(base - 1),
        Err(QueryError::RankOutOfRange { rank: 0, base, end })
    );
    assert_eq!(
        store.get_by_rank(end),
        Err(QueryError::RankOutOfRange { rank: end, base, end })
    );
    assert!(store.get_by_rank(u64::MAX).is_err());
}

#[test]
fn text_and_integer_paths_agree() {
    let store = store_of(&primes_up_to(2_000));
    for r in store.base()..store.base() + store.count() {
        let n = store.get_by_rank(r).unwrap();
        let t = store.text_by_rank(r).unwrap();
        assert_eq!(t.parse::<u64>().unwrap(), n);
    }
    assert!(store.text_by_rank(0).is_err());
}

#[test]
fn thousandth_prime() {
    let store = store_of(&primes_up_to(10_000));
    assert_eq!(store.get_by_rank(1_000), Ok(7_919));
    assert_eq!(store.count(), 1_229);
}

// ---------------------------------------------------------------------------
// Pandigital search
// ---------------------------------------------------------------------------

#[test]
fn largest_pandigital_prefers_nine_digits() {
    let store = SourceFile::new(CORPUS_PANDIGITAL).open(pstore::Strategy::FieldSplit);
    assert_eq!(store.largest_pandigital(), Some(987_654_321));
}

/// 7652413 is the largest pandigital prime; every larger n-digit pandigital
/// number is divisible by 3.
#[test]
fn largest_pandigital_prime_below_ten_million() {
    let store = store_of(&primes_up_to(10_000_000));
    assert_eq!(store.largest_pandigital(), Some(7_652_413));
}

#[test]
fn largest_pandigital_among_small_primes() {
    assert_eq!(store_of(&primes_up_to(10_000)).largest_pandigital(), Some(4_231));
    assert_eq!(store_of(&[3, 5, 7, 11]).largest_pandigital(), None);
}

#[test]
fn predicate_modes() {
    assert!(pstore::is_pandigital("7652413", false));
    assert!(!pstore::is_pandigital("76524130", false));
    assert!(pstore::is_pandigital("76524130", true));
    assert!(!pstore::is_pandigital("7652418", false));
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_queries_are_stable() {
    let store = small_store();
    for _ in 0..3 {
        assert_eq!(store.contains(11), Ok(true));
        assert_eq!(store.get_by_rank(6), Ok(13));
        assert_eq!(store.largest_pandigital(), None);
    }
    assert_eq!(store.index(), SMALL_PRIMES);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn ascending_set() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..1_000_000, 1..300)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Found for every member, not-found or out-of-range for everything else,
    /// exactly as a linear scan would say.
    #[test]
    fn prop_membership_agrees_with_linear_scan(values in ascending_set(), probe in 0u64..1_100_000) {
        let store = store_of(&values);
        let result = store.contains(probe);
        if probe < store.low() || probe > store.high() {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result, Ok(values.contains(&probe)));
        }
        for &v in &values {
            prop_assert_eq!(store.contains(v), Ok(true));
        }
    }

    /// Rank r maps to index[r - base] inside the window and errors outside it.
    #[test]
    fn prop_rank_window(values in ascending_set(), rank in 0u64..400) {
        let store = store_of(&values);
        let offset = rank.checked_sub(store.base()).map(|o| o as usize);
        match offset.and_then(|o| values.get(o)) {
            Some(&v) => prop_assert_eq!(store.get_by_rank(rank), Ok(v)),
            None => prop_assert!(store.get_by_rank(rank).is_err()),
        }
    }

    /// The search result, when present, is pandigital and no larger stored
    /// value is.
    #[test]
    fn prop_pandigital_is_maximal(values in ascending_set()) {
        let store = store_of(&values);
        match store.largest_pandigital() {
            Some(best) => {
                prop_assert!(pstore::is_pandigital(&best.to_string(), false));
                prop_assert!(values.iter().filter(|&&v| v > best)
                    .all(|v| !pstore::is_pandigital(&v.to_string(), false)));
            }
            None => prop_assert!(values.iter().all(|v| !pstore::is_pandigital(&v.to_string(), false))),
        }
    }
}
