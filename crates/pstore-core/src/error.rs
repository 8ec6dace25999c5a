//! Error taxonomy for pstore.
//!
//! Construction failures ([`LoadError`]) are fatal: no [`Store`](crate::Store)
//! is produced. Query failures ([`QueryError`]) are reported to the caller and
//! leave the store usable. A negative lookup result is never an error.

use thiserror::Error;

/// Why a store could not be built.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("data not sorted: index[{position}] = {next} does not follow {previous}")]
    Unsorted {
        position: usize,
        previous: u64,
        next: u64,
    },

    #[error("malformed token {token:?} at field {position}")]
    MalformedToken { position: usize, token: String },

    #[error("digit run starting at byte {offset} overflows u64")]
    Overflow { offset: usize },

    #[error("source contains no values")]
    Empty,

    #[error("index has {index} values but text has {text}")]
    Inconsistent { index: usize, text: usize },

    #[error("text[{position}] = {text:?} does not render index[{position}] = {value}")]
    TextMismatch {
        position: usize,
        value: u64,
        text: String,
    },
}

/// Why a query could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("out of range: {value} not in [{low}, {high}]")]
    OutOfRange { value: u64, low: u64, high: u64 },

    #[error("rank out of range: {rank} not in [{base}, {end})")]
    RankOutOfRange { rank: u64, base: u64, end: u64 },
}
