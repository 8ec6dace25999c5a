//! Core value types shared by the loaders, the store and the CLI.
//!
//! This module defines the loader output ([`Loaded`]), the load [`Strategy`]
//! discriminant, and the diagnostic [`Summary`] of a built store.

use serde::{Deserialize, Serialize};

use crate::digits;
use crate::error::LoadError;

/// The output of a completed load: the integer index and the parallel
/// decimal text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    pub index: Vec<u64>,
    pub text: Vec<String>,
}

impl Loaded {
    /// Build from integers alone, rendering each one back to decimal text.
    pub fn from_index(index: Vec<u64>) -> Self {
        let text = index.iter().copied().map(digits::render).collect();
        Self { index, text }
    }

    /// Fail with [`LoadError::Unsorted`] at the first position that does not
    /// strictly exceed its predecessor. Duplicates count as unsorted.
    pub fn verify_order(&self) -> Result<(), LoadError> {
        match self.index.windows(2).position(|w| w[0] >= w[1]) {
            Some(i) => Err(LoadError::Unsorted {
                position: i + 1,
                previous: self.index[i],
                next: self.index[i + 1],
            }),
            None => Ok(()),
        }
    }
}

/// Which load strategy produced (or should produce) a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Split on whitespace, parse each token, require ascending order.
    FieldSplit,
    /// Single-pass digit scan into a preallocated destination.
    FixedCapacity,
    /// Single-pass digit scan into a destination grown on demand.
    Dynamic,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::FieldSplit,
        Strategy::FixedCapacity,
        Strategy::Dynamic,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::FieldSplit => write!(f, "field-split"),
            Strategy::FixedCapacity => write!(f, "fixed-capacity"),
            Strategy::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "field-split" | "fields" | "split" => Ok(Strategy::FieldSplit),
            "fixed-capacity" | "fixed" => Ok(Strategy::FixedCapacity),
            "dynamic" | "grow" => Ok(Strategy::Dynamic),
            other => Err(format!(
                "unknown strategy: {other} (expected field-split, fixed-capacity or dynamic)"
            )),
        }
    }
}

/// Diagnostic snapshot of a store's derived scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub base: u64,
    pub count: u64,
    pub first: u64,
    pub last: u64,
    pub low: u64,
    pub high: u64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "base,count,first,last,low,high={} {} {} {} {} {}",
            self.base, self.count, self.first, self.last, self.low, self.high
        )
    }
}
