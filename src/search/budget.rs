//! Per-turn time budget checked at every node.

use crate::core::TimeProbe;

use super::error::SearchTimeout;

/// A time probe paired with the threshold below which search must stop.
///
/// The probe is read on every `check`; nothing is cached.
#[derive(Clone, Copy)]
pub struct Budget<'a> {
    probe: &'a dyn TimeProbe,
    threshold_ms: f64,
}

impl<'a> Budget<'a> {
    /// Create a budget over `probe` that expires at `threshold_ms`.
    pub fn new(probe: &'a dyn TimeProbe, threshold_ms: f64) -> Self {
        Self { probe, threshold_ms }
    }

    /// Fail with `SearchTimeout` once remaining time is at or below the
    /// threshold. A `NaN` reading counts as expired.
    pub fn check(&self) -> Result<(), SearchTimeout> {
        let remaining_ms = self.probe.remaining_ms();
        if remaining_ms > self.threshold_ms {
            Ok(())
        } else {
            Err(SearchTimeout {
                remaining_ms,
                threshold_ms: self.threshold_ms,
            })
        }
    }
}

impl std::fmt::Debug for Budget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Budget")
            .field("threshold_ms", &self.threshold_ms)
            .finish_non_exhaustive()
    }
}
