//! Per-trial access statistics.

use std::fmt;

use crate::memory::policy::FaultOutcome;

/// Counters tallied while one reference string is driven through a policy.
///
/// A trial is single-threaded and owns its stats, so these are plain
/// integers rather than atomics.
///
/// # Example
/// ```
/// use pagesim::{AccessStats, FaultOutcome, PageId};
///
/// let mut stats = AccessStats::default();
/// stats.record(&FaultOutcome::Hit);
/// stats.record(&FaultOutcome::Fault { evicted: Some(PageId::new(3)) });
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Accesses that found the page resident.
    pub hits: u64,

    /// Accesses that had to load the page.
    pub faults: u64,

    /// Faults that also displaced a resident page.
    pub evictions: u64,
}

impl AccessStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one access outcome.
    #[inline]
    pub fn record(&mut self, outcome: &FaultOutcome) {
        match outcome {
            FaultOutcome::Hit => self.hits += 1,
            FaultOutcome::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Total accesses recorded.
    pub fn accesses(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.faults as f64 / total as f64,
        }
    }
}

impl fmt::Display for AccessStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}
