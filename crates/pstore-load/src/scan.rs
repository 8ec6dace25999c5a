//! Scanning loaders — one pass over raw bytes, digit runs become values.
//!
//! Both scanning strategies share [`DigitRuns`]; they differ only in how the
//! destination grows, which is captured by the [`Growth`] policy.

use pstore_core::digits::DigitRuns;
use pstore_core::{LoadError, Loaded, Strategy};

use crate::Loader;

/// Destination-growth policy for a scan.
pub trait Growth: Send + Sync {
    const STRATEGY: Strategy;

    /// The empty destination the scan appends into.
    fn destination(&self) -> Vec<u64>;

    /// Called once after the scan with the filled destination.
    fn finish(&self, _index: &mut Vec<u64>) {}
}

/// Preallocate a fixed number of slots, then release the unused tail.
#[derive(Debug, Clone, Copy)]
pub struct FixedCapacity {
    pub capacity: usize,
}

impl Growth for FixedCapacity {
    const STRATEGY: Strategy = Strategy::FixedCapacity;

    fn destination(&self) -> Vec<u64> {
        Vec::with_capacity(self.capacity)
    }

    fn finish(&self, index: &mut Vec<u64>) {
        if index.len() > self.capacity {
            tracing::warn!(
                capacity = self.capacity,
                count = index.len(),
                "capacity hint exceeded; destination was regrown"
            );
        }
        index.shrink_to_fit();
    }
}

/// Start empty and let the vector grow as values arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dynamic;

impl Growth for Dynamic {
    const STRATEGY: Strategy = Strategy::Dynamic;

    fn destination(&self) -> Vec<u64> {
        Vec::new()
    }
}

/// A scanning loader parameterised by its growth policy.
#[derive(Debug, Clone, Copy)]
pub struct Scan<G> {
    growth: G,
    verify_order: bool,
}

impl<G: Growth> Scan<G> {
    pub fn new(growth: G) -> Self {
        Self {
            growth,
            verify_order: false,
        }
    }

    /// Also reject input that is not strictly ascending.
    pub fn verify_order(mut self, verify: bool) -> Self {
        self.verify_order = verify;
        self
    }
}

impl<G: Growth> Loader for Scan<G> {
    fn strategy(&self) -> Strategy {
        G::STRATEGY
    }

    fn load(&self, bytes: &[u8]) -> Result<Loaded, LoadError> {
        let mut index = self.growth.destination();
        for run in DigitRuns::new(bytes) {
            index.push(run?);
        }
        self.growth.finish(&mut index);

        let loaded = Loaded::from_index(index);
        if self.verify_order {
            loaded.verify_order()?;
        }
        Ok(loaded)
    }
}
