//! Query surface — membership, rank lookup and the pandigital search.
//!
//! Every query borrows the store immutably and is side-effect free. None of
//! them log; callers that want timing wrap the call with [`crate::trace`].

use crate::error::QueryError;
use crate::store::Store;

impl Store {
    /// Binary search for `n` in the index.
    ///
    /// Returns `Ok(false)` when `n` lies inside `[low, high]` but is absent, and
    /// [`QueryError::OutOfRange`] when it lies outside.
    pub fn contains(&self, n: u64) -> Result<bool, QueryError> {
        if n < self.low || n > self.high {
            return Err(QueryError::OutOfRange {
                value: n,
                low: self.low,
                high: self.high,
            });
        }

        let (mut i, mut j) = (0usize, self.index.len());
        while i < j {
            let h = i + (j - i) / 2;
            match self.index[h].cmp(&n) {
                std::cmp::Ordering::Equal => return Ok(true),
                std::cmp::Ordering::Less => i = h + 1,
                std::cmp::Ordering::Greater => j = h,
            }
        }
        Ok(false)
    }

    /// The `nth` smallest value, counting from [`Store::base`].
    ///
    /// With base 1 over `2, 3, 5, 7`, `get_by_rank(3) == Ok(5)`.
    pub fn get_by_rank(&self, nth: u64) -> Result<u64, QueryError> {
        self.offset_of(nth).map(|i| self.index[i])
    }

    /// The decimal text of the `nth` smallest value. Agrees with
    /// [`Store::get_by_rank`] for every rank.
    pub fn text_by_rank(&self, nth: u64) -> Result<&str, QueryError> {
        self.offset_of(nth).map(|i| self.text[i].as_str())
    }

    /// Largest stored value whose digits are pandigital without zero, or
    /// `None` when no stored value qualifies.
    ///
    /// Scans from the highest rank down, so on ascending data the first hit
    /// is the answer.
    pub fn largest_pandigital(&self) -> Option<u64> {
        self.text
            .iter()
            .zip(&self.index)
            .rev()
            .find(|(text, _)| is_pandigital(text, false))
            .map(|(_, &n)| n)
    }

    fn offset_of(&self, nth: u64) -> Result<usize, QueryError> {
        let end = self.base + self.count;
        if nth < self.base || nth >= end {
            return Err(QueryError::RankOutOfRange {
                rank: nth,
                base: self.base,
                end,
            });
        }
        Ok((nth - self.base) as usize)
    }
}

/// Digit-distribution predicate.
///
/// Accepts when every digit occurs at most once, `0` occurs only if
/// `allow_zero`, and the used digits from 1 upward have no gaps: if `d` is
/// unused then `d + 1` is unused too. `"4231"` passes, `"1243"` passes,
/// `"1235"` fails (gap at 4), `"1123"` fails (repeat).
pub fn is_pandigital(text: &str, allow_zero: bool) -> bool {
    let mut seen = [0u8; 10];
    for b in text.bytes() {
        if !b.is_ascii_digit() {
            return false;
        }
        let d = usize::from(b - b'0');
        seen[d] += 1;
        if seen[d] > 1 {
            return false;
        }
        if !allow_zero && seen[0] > 0 {
            return false;
        }
    }
    (1..=8).all(|d| !(seen[d] == 0 && seen[d + 1] == 1))
}
