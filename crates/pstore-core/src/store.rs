//! Store — read-only sorted-integer index with its parallel decimal text.
//!
//! A [`Store`] is built once from a completed [`Loaded`] and never mutated
//! afterwards, so any number of threads may query one instance concurrently.
//! The query surface lives in [`crate::query`].

use crate::digits::render;
use crate::error::LoadError;
use crate::types::{Loaded, Summary};

/// Rank assigned to the smallest stored value.
pub const BASE_RANK: u64 = 1;

/// Lowest value a membership query will search for.
pub const LOW_FLOOR: u64 = 1;

/// The in-memory index over one loaded source.
#[derive(Debug, Clone)]
pub struct Store {
    origin: String,
    pub(crate) index: Vec<u64>,
    pub(crate) text: Vec<String>,
    pub(crate) count: u64,
    pub(crate) base: u64,
    pub(crate) first: u64,
    pub(crate) last: u64,
    pub(crate) low: u64,
    pub(crate) high: u64,
}

impl Store {
    /// Derive the bounds from a completed load.
    ///
    /// Fails with [`LoadError::Empty`] when there is nothing to index and with
    /// [`LoadError::Inconsistent`] when `index` and `text` disagree in length.
    /// Every `text[i]` must be the canonical rendering of `index[i]`, else
    /// [`LoadError::TextMismatch`] names the first offending position.
    /// Order is not checked here; that is the loader's decision.
    pub fn new(loaded: Loaded, origin: impl Into<String>) -> Result<Self, LoadError> {
        let Loaded { index, text } = loaded;
        if index.len() != text.len() {
            return Err(LoadError::Inconsistent {
                index: index.len(),
                text: text.len(),
            });
        }
        if let Some(position) = index
            .iter()
            .zip(&text)
            .position(|(&value, t)| *t != render(value))
        {
            return Err(LoadError::TextMismatch {
                position,
                value: index[position],
                text: text[position].clone(),
            });
        }
        let (first, last) = match (index.first(), index.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(LoadError::Empty),
        };

        Ok(Self {
            origin: origin.into(),
            count: index.len() as u64,
            index,
            text,
            base: BASE_RANK,
            first,
            last,
            low: LOW_FLOOR,
            high: last,
        })
    }

    /// Where the values came from (a path, or `<stdin>`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn index(&self) -> &[u64] {
        &self.index
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn last(&self) -> u64 {
        self.last
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn summary(&self) -> Summary {
        Summary {
            base: self.base,
            count: self.count,
            first: self.first,
            last: self.last,
            low: self.low,
            high: self.high,
        }
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
