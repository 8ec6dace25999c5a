//! Timing hook for call sites.
//!
//! [`Trace::enter`] logs `-->: label` and, when the guard drops, `<--: label`
//! with the elapsed time. The store never traces itself; loaders and the CLI
//! wrap the calls they want timed with [`traced`].

use std::time::{Duration, Instant};

/// Guard that reports its lifetime at `debug` level.
#[derive(Debug)]
pub struct Trace {
    label: &'static str,
    started: Instant,
}

impl Trace {
    pub fn enter(label: &'static str) -> Self {
        tracing::debug!("-->: {label}");
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Trace {
    fn drop(&mut self) {
        tracing::debug!(elapsed = ?self.elapsed(), "<--: {}", self.label);
    }
}

/// Run `f`, timing it under `label` when `enabled`.
pub fn traced<T>(enabled: bool, label: &'static str, f: impl FnOnce() -> T) -> T {
    let _guard = enabled.then(|| Trace::enter(label));
    f()
}
