//! pstore-load — byte sources and load strategies for pstore.
//!
//! Each strategy turns raw bytes into a [`Loaded`] index/text pair; the
//! construction entry points below read a [`Source`], run a strategy, and hand
//! the result to [`Store::new`].
//!
//! | Strategy | Splitting | Destination | Order check |
//! |----------|-----------|-------------|-------------|
//! | [`FieldSplit`] | whitespace fields | grown per token | always |
//! | [`Scan<FixedCapacity>`](Scan) | digit runs | preallocated | opt-in |
//! | [`Scan<Dynamic>`](Scan) | digit runs | grown on demand | opt-in |

pub mod field_split;
pub mod scan;
pub mod source;

use pstore_core::config::LoaderConfig;
use pstore_core::trace::traced;
use pstore_core::{LoadError, Loaded, Store, Strategy};

pub use field_split::FieldSplit;
pub use scan::{Dynamic, FixedCapacity, Growth, Scan};
pub use source::Source;

/// Trait implemented by each load strategy.
pub trait Loader: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Extract the values from a fully read source.
    fn load(&self, bytes: &[u8]) -> Result<Loaded, LoadError>;
}

/// Build the loader configured for `strategy`.
pub fn loader_for(strategy: Strategy, cfg: &LoaderConfig) -> Box<dyn Loader> {
    match strategy {
        Strategy::FieldSplit => Box::new(FieldSplit),
        Strategy::FixedCapacity => Box::new(
            Scan::new(FixedCapacity {
                capacity: cfg.capacity_hint,
            })
            .verify_order(cfg.verify_order),
        ),
        Strategy::Dynamic => Box::new(Scan::new(Dynamic).verify_order(cfg.verify_order)),
    }
}

/// Read `source` and build a store with the strategy named in `cfg`.
pub fn open(source: &Source, cfg: &LoaderConfig) -> Result<Store, LoadError> {
    open_with(source, cfg.strategy, cfg)
}

/// Read `source` and build a store with an explicit strategy.
pub fn open_with(
    source: &Source,
    strategy: Strategy,
    cfg: &LoaderConfig,
) -> Result<Store, LoadError> {
    let loader = loader_for(strategy, cfg);
    let name = source.name();

    let bytes = traced(cfg.trace, "read", || source.read())?;
    let loaded = traced(cfg.trace, "parse", || loader.load(&bytes))?;
    let store = traced(cfg.trace, "build", || Store::new(loaded, name))?;

    tracing::debug!(
        origin = store.origin(),
        %strategy,
        count = store.count(),
        "store loaded"
    );
    Ok(store)
}

/// Build a store with the field-split strategy.
pub fn open_field_split(source: &Source, cfg: &LoaderConfig) -> Result<Store, LoadError> {
    open_with(source, Strategy::FieldSplit, cfg)
}

/// Build a store with the fixed-capacity scanning strategy.
pub fn open_fixed_capacity(source: &Source, cfg: &LoaderConfig) -> Result<Store, LoadError> {
    open_with(source, Strategy::FixedCapacity, cfg)
}

/// Build a store with the dynamic-growth scanning strategy.
pub fn open_dynamic(source: &Source, cfg: &LoaderConfig) -> Result<Store, LoadError> {
    open_with(source, Strategy::Dynamic, cfg)
}
