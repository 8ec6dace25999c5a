//! pstore-core — sorted-integer lookup store.
//!
//! This crate holds the [`Store`] entity and everything that operates on it
//! without touching a byte source: the digit-run scanning primitive, the query
//! surface, the error taxonomy, configuration, and the timing hook.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Loader ──► Loaded ──► Store ──► Query
//!  (pstore-load)          (pstore-core)
//! ```
//!
//! Data flows one way. A store is immutable once built and may be shared
//! across threads without coordination.

pub mod config;
pub mod digits;
pub mod error;
pub mod query;
pub mod store;
pub mod trace;
pub mod types;

pub use error::{LoadError, QueryError};
pub use query::is_pandigital;
pub use store::Store;
pub use types::{Loaded, Strategy, Summary};
