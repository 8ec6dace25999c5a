//! Static corpora and generated prime lists used across harnesses.
//!
//! Every corpus holds the same six primes laid out differently, so each
//! strategy that accepts a layout must produce the same index.

/// The primes every small corpus encodes.
pub const SMALL_PRIMES: &[u64] = &[2, 3, 5, 7, 11, 13];

/// Space separated, single line.
pub const CORPUS_SPACED: &str = "2 3 5 7 11 13";

/// One value per line with a trailing newline.
pub const CORPUS_LINES: &str = "2\n3\n5\n7\n11\n13\n";

/// Tab/newline table, the way published prime lists are laid out.
pub const CORPUS_TABLE: &str = "\t2\t3\t5\n\t7\t11\t13\n";

/// Punctuated; only the scanning strategies accept this.
pub const CORPUS_PUNCTUATED: &str = "[2, 3, 5, 7, 11, 13]";

/// Descending; field-split must reject it.
pub const CORPUS_UNSORTED: &str = "13 11 7 5 3 2";

/// Pandigital candidates mixed with non-candidates. The largest candidate
/// (no zero, no repeat, no gap) is 987654321.
pub const CORPUS_PANDIGITAL: &str = "2 1423 2143 4231 98765 987654321 987654329 1987654320";

/// All primes `<= limit`, by the sieve of Eratosthenes.
pub fn primes_up_to(limit: usize) -> Vec<u64> {
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut m = n * n;
        while m <= limit {
            composite[m] = true;
            m += n;
        }
    }
    primes
}

/// Render `values` as a newline-separated source.
pub fn render_lines(values: &[u64]) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(&v.to_string());
        out.push('\n');
    }
    out
}
