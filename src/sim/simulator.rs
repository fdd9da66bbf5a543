//! Simulator - runs one trial.

use std::time::Duration;

use log::trace;

use crate::common::{Error, PageId, Result};
use crate::memory::policy::{EvictionPolicy, PolicyKind};
use crate::memory::{AccessStats, FrameTable};
use crate::sim::Stopwatch;
use crate::workload::ReferenceString;

/// Outcome of driving one reference string through one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub stats: AccessStats,

    /// Evicted pages in the order they were evicted.
    pub evicted: Vec<PageId>,

    /// Wall-clock time of the access loop only.
    pub elapsed: Duration,
}

impl SimulationResult {
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Drives a shared, read-only reference string through fresh
/// `FrameTable` + policy pairs.
///
/// # Architecture
/// ```text
///  ReferenceString ──▶ for (pos, page) ──▶ policy.on_access(table, page, pos)
///                              │                        │
///                              │               Hit / Fault{evicted}
///                              ▼                        ▼
///                         Stopwatch               AccessStats
/// ```
///
/// Table and policy construction happen before the stopwatch starts, so the
/// measured time covers the access loop alone. Fault counts are
/// deterministic; elapsed time is an observation.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, ReferenceString, Simulator};
///
/// let refs: ReferenceString = "7012030423032".parse().unwrap();
/// let result = Simulator::new(&refs).run_policy(3, PolicyKind::Optimal).unwrap();
/// assert_eq!(result.faults(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    reference: &'a ReferenceString,
}

impl<'a> Simulator<'a> {
    pub fn new(reference: &'a ReferenceString) -> Self {
        Self { reference }
    }

    /// Run one trial with `frame_count` frames and a policy produced by
    /// `make_policy`.
    ///
    /// # Errors
    /// - `Error::InvalidParameter` if `frame_count` is 0
    /// - `Error::TrialAborted` if the access loop fails; it carries the
    ///   position reached and the loop time up to that point
    pub fn run<P, F>(&self, frame_count: usize, make_policy: F) -> Result<SimulationResult>
    where
        P: EvictionPolicy,
        F: FnOnce(&ReferenceString) -> P,
    {
        let mut table = FrameTable::new(frame_count)?;
        let mut policy = make_policy(self.reference);
        let mut stats = AccessStats::new();
        let mut evicted = Vec::with_capacity(self.reference.len());

        let mut elapsed = Duration::ZERO;
        let outcome = {
            let _watch = Stopwatch::start(&mut elapsed);
            drive(self.reference, &mut policy, &mut table, &mut stats, &mut evicted)
        };

        match outcome {
            Ok(()) => Ok(SimulationResult {
                stats,
                evicted,
                elapsed,
            }),
            Err((position, source)) => Err(Error::TrialAborted {
                policy: policy.name(),
                position,
                elapsed,
                source: Box::new(source),
            }),
        }
    }

    /// Run one trial with a fresh instance of `kind`.
    pub fn run_policy(&self, frame_count: usize, kind: PolicyKind) -> Result<SimulationResult> {
        self.run(frame_count, |reference| kind.build(reference))
    }
}

fn drive<P: EvictionPolicy>(
    reference: &ReferenceString,
    policy: &mut P,
    table: &mut FrameTable,
    stats: &mut AccessStats,
    evicted: &mut Vec<PageId>,
) -> std::result::Result<(), (usize, Error)> {
    for (position, page) in reference.iter().enumerate() {
        let outcome = policy
            .on_access(table, page, position)
            .map_err(|e| (position, e))?;
        if let Some(victim) = outcome.evicted() {
            trace!("{} @{}: {} replaces {}", policy.name(), position, page, victim);
            evicted.push(victim);
        }
        stats.record(&outcome);
    }
    Ok(())
}
