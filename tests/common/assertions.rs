//! Domain-specific assertion macros for pstore harnesses.
//!
//! These wrap `pretty_assertions` and add context to the failure message so it
//! is clear which store invariant was violated.

/// Assert that `store.contains(n)` reports found.
#[macro_export]
macro_rules! assert_found {
    ($store:expr, $n:expr) => {{
        let n: u64 = $n;
        match $store.contains(n) {
            Ok(true) => {}
            other => panic!("assert_found! failed: contains({n}) returned {other:?}"),
        }
    }};
}

/// Assert that `store.contains(n)` reports in range but absent.
#[macro_export]
macro_rules! assert_not_found {
    ($store:expr, $n:expr) => {{
        let n: u64 = $n;
        match $store.contains(n) {
            Ok(false) => {}
            other => panic!("assert_not_found! failed: contains({n}) returned {other:?}"),
        }
    }};
}

/// Assert that `store.contains(n)` reports out of range.
#[macro_export]
macro_rules! assert_out_of_range {
    ($store:expr, $n:expr) => {{
        let n: u64 = $n;
        match $store.contains(n) {
            Err(pstore::QueryError::OutOfRange { value, .. }) if value == n => {}
            other => panic!("assert_out_of_range! failed: contains({n}) returned {other:?}"),
        }
    }};
}

/// Check every structural invariant of a built store: counts agree, bounds
/// match the index ends, and the text is the canonical rendering of the index.
pub fn assert_store_invariants(store: &pstore::Store) {
    let index = store.index();
    let text = store.text();
    pretty_assertions::assert_eq!(store.count() as usize, index.len(), "count != index len");
    pretty_assertions::assert_eq!(index.len(), text.len(), "index len != text len");
    pretty_assertions::assert_eq!(store.first(), index[0], "first != index[0]");
    pretty_assertions::assert_eq!(store.last(), index[index.len() - 1], "last != index[count-1]");
    assert!(store.low() <= store.high(), "low > high");
    for (i, (n, t)) in index.iter().zip(text).enumerate() {
        pretty_assertions::assert_eq!(&n.to_string(), t, "text[{i}] is not the rendering of index[{i}]");
        pretty_assertions::assert_eq!(t.parse::<u64>().ok(), Some(*n), "text[{i}] does not parse back");
    }
}

/// Assert that `index` is strictly ascending.
pub fn assert_strictly_ascending(index: &[u64]) {
    if let Some(i) = index.windows(2).position(|w| w[0] >= w[1]) {
        panic!(
            "index not strictly ascending at {}: {} then {}",
            i + 1,
            index[i],
            index[i + 1]
        );
    }
}
