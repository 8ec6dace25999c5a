//! Digit-run extraction — the scanning primitive shared by every scanning loader.
//!
//! A *digit run* is a maximal sequence of ASCII digits. Everything else in the
//! input is a separator, so `"2, 3\n5;7"` yields `2, 3, 5, 7` and the text
//! between runs is never inspected further.

use crate::error::LoadError;

/// Iterator over the digit runs of a byte slice, in input order.
///
/// Each run is accumulated positionally (`acc * 10 + digit`). A run that does
/// not fit in a `u64` yields [`LoadError::Overflow`] and the iterator moves on
/// to the next run.
///
/// A run of zeros is the value `0` and is yielded like any other run. Digit
/// grouping is not understood: `"1,000,000"` yields `1, 0, 0`. Such input
/// breaks ascending order, so loading with `verify_order` rejects it.
#[derive(Debug, Clone)]
pub struct DigitRuns<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DigitRuns<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Iterator for DigitRuns<'_> {
    type Item = Result<u64, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let buf = self.buf;
        while self.pos < buf.len() && !buf[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == buf.len() {
            return None;
        }

        let start = self.pos;
        let mut acc: Option<u64> = Some(0);
        while self.pos < buf.len() && buf[self.pos].is_ascii_digit() {
            let d = u64::from(buf[self.pos] - b'0');
            acc = acc
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(d));
            self.pos += 1;
        }

        Some(acc.ok_or(LoadError::Overflow { offset: start }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one run per two bytes (digit + separator), rounded up.
        (0, Some((self.buf.len() - self.pos).div_ceil(2)))
    }
}

/// Canonical decimal rendering of `n`.
pub fn render(n: u64) -> String {
    n.to_string()
}

/// `true` when `token` is exactly the canonical rendering of some `u64`:
/// non-empty, ASCII digits only, and no superfluous leading zero.
pub fn is_canonical(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}
