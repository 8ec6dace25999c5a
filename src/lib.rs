//! pstore — sorted-integer lookup store.
//!
//! Loads an ordered list of integers (typically primes) from a text source,
//! indexes it in memory, and answers membership, rank and pandigital queries.
//! This crate re-exports the two library layers so that integration tests and
//! benches can import them from one place, and hosts the CLI.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Loader ──► Store ──► Query
//!    (pstore-load)     (pstore-core)
//!                          │
//!                          └──► CLI (summary, contains, rank, pandigital, dump, compare)
//! ```
//!
//! Everything is synchronous. A store is immutable once built.

pub mod cli;

pub use pstore_core::{config, digits, is_pandigital, trace};
pub use pstore_core::{LoadError, Loaded, QueryError, Store, Strategy, Summary};
pub use pstore_load::{
    loader_for, open, open_dynamic, open_field_split, open_fixed_capacity, open_with, Dynamic,
    FieldSplit, FixedCapacity, Loader, Scan, Source,
};
