//! Clock probes reporting the time left in the current turn.
//!
//! The search never measures time itself. It asks a `TimeProbe` how many
//! milliseconds remain, at every node, and aborts when the answer drops to
//! the configured threshold. The probe is external state: its answer may
//! change between any two reads and is never cached.
//!
//! Implementations:
//! - `Deadline`: wall-clock budget starting at construction
//! - `Unlimited`: never runs out
//! - `CountdownProbe`: runs out after a fixed number of reads (fake clock)
//! - any `Fn() -> f64` closure

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of "milliseconds remaining" for the current turn.
pub trait TimeProbe {
    /// Milliseconds left before the turn is forfeited.
    fn remaining_ms(&self) -> f64;
}

impl<F: Fn() -> f64> TimeProbe for F {
    fn remaining_ms(&self) -> f64 {
        self()
    }
}

/// Wall-clock budget measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Start a budget of `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Start a budget of `ms` milliseconds from now.
    #[must_use]
    pub fn after_ms(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }
}

impl TimeProbe for Deadline {
    fn remaining_ms(&self) -> f64 {
        let elapsed = self.start.elapsed().as_secs_f64() * 1000.0;
        self.budget.as_secs_f64() * 1000.0 - elapsed
    }
}

/// A probe that always reports unlimited time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl TimeProbe for Unlimited {
    fn remaining_ms(&self) -> f64 {
        f64::INFINITY
    }
}

/// Fake clock that reports plenty of time for a fixed number of reads and
/// zero afterwards.
///
/// Makes timeouts deterministic: a search with `CountdownProbe::new(n)`
/// aborts at exactly the `n + 1`-th budget check.
///
/// ```
/// use isolation_search::core::{CountdownProbe, TimeProbe};
///
/// let probe = CountdownProbe::new(1);
/// assert!(probe.remaining_ms() > 0.0);
/// assert_eq!(probe.remaining_ms(), 0.0);
/// assert_eq!(probe.reads(), 2);
/// ```
#[derive(Debug)]
pub struct CountdownProbe {
    budget: u64,
    reads: Cell<u64>,
}

impl CountdownProbe {
    /// Time reported while reads remain.
    pub const PLENTY_MS: f64 = 1_000_000.0;

    /// Allow `reads` probe reads before reporting zero.
    #[must_use]
    pub fn new(reads: u64) -> Self {
        Self {
            budget: reads,
            reads: Cell::new(0),
        }
    }

    /// Number of times the probe has been read.
    #[must_use]
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl TimeProbe for CountdownProbe {
    fn remaining_ms(&self) -> f64 {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        if reads < self.budget {
            Self::PLENTY_MS
        } else {
            0.0
        }
    }
}
