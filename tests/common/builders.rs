//! Test builders — on-disk sources and ready-made stores.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use pstore::config::LoaderConfig;
use pstore::{Loaded, Source, Store, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// A source file living in its own temporary directory. The directory is
/// removed when the fixture drops.
pub struct SourceFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("values.prime");
        std::fs::write(&path, contents).expect("write source file");
        Self { _dir: dir, path }
    }

    pub fn source(&self) -> Source {
        Source::from_arg(&self.path)
    }

    /// Build a store with `strategy` and default loader settings.
    pub fn open(&self, strategy: Strategy) -> Store {
        pstore::open_with(&self.source(), strategy, &LoaderConfig::default())
            .unwrap_or_else(|err| panic!("{strategy} load failed: {err}"))
    }
}

/// Build a store directly from values, bypassing any loader.
pub fn store_of(values: &[u64]) -> Store {
    Store::new(Loaded::from_index(values.to_vec()), "test").expect("non-empty values")
}

/// The six-prime store from the reference scenario.
pub fn small_store() -> Store {
    store_of(super::SMALL_PRIMES)
}
