//! Sweeps of independent trials over one reference string.

use log::{debug, error, info};
use thiserror::Error;

use crate::common::Error;
use crate::harness::config::validate_sweep;
use crate::harness::{ExperimentConfig, ResultTable, TrialResult};
use crate::memory::policy::{EvictionPolicy, PolicyKind};
use crate::sim::Simulator;
use crate::workload::{ReferenceString, ReferenceStringGenerator};

/// A sweep stopped at its first failing trial.
///
/// `completed` holds every trial that finished before the failure; those
/// rows are valid and kept.
#[derive(Debug, Error)]
#[error("experiment aborted after {} completed trials: {source}", .completed.len())]
pub struct SweepError {
    pub completed: ResultTable,
    #[source]
    pub source: Error,
}

impl SweepError {
    fn before_any_trial(source: Error) -> Self {
        Self {
            completed: ResultTable::new(),
            source,
        }
    }
}

/// A finished experiment: the string it ran on and its results.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub name: String,
    pub seed: u64,
    pub reference: ReferenceString,
    pub results: ResultTable,
}

/// Runs the simulator once per (policy, frame count) pair.
///
/// Trials are independent and run one after another on the calling thread.
/// Iteration order is fixed (policies outer, frame counts inner, both in
/// the order given), so result tables are reproducible row for row.
///
/// # Usage
/// ```
/// use pagesim::{ExperimentHarness, PolicyKind, ReferenceString};
///
/// let refs: ReferenceString = "123412512345".parse().unwrap();
/// let table = ExperimentHarness::sweep(&[3, 4], &refs, &[PolicyKind::LruStack]).unwrap();
/// assert_eq!(table.get(PolicyKind::LruStack, 3).unwrap().faults, 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperimentHarness;

impl ExperimentHarness {
    /// Run every combination of `policies` × `frame_counts` over `reference`.
    ///
    /// # Errors
    /// `SweepError` wrapping `Error::InvalidParameter` for an empty or zero
    /// frame sweep or no policies, or the first trial failure together with
    /// the rows completed before it.
    pub fn sweep(
        frame_counts: &[usize],
        reference: &ReferenceString,
        policies: &[PolicyKind],
    ) -> Result<ResultTable, SweepError> {
        Self::sweep_with(frame_counts, reference, policies, |kind, reference| {
            kind.build(reference)
        })
    }

    /// Like [`sweep`](Self::sweep), but each trial's policy instance comes
    /// from `factory`. Rows are still labelled with the `PolicyKind`.
    pub fn sweep_with<F>(
        frame_counts: &[usize],
        reference: &ReferenceString,
        policies: &[PolicyKind],
        mut factory: F,
    ) -> Result<ResultTable, SweepError>
    where
        F: FnMut(PolicyKind, &ReferenceString) -> Box<dyn EvictionPolicy>,
    {
        validate_sweep(frame_counts, policies).map_err(SweepError::before_any_trial)?;

        let simulator = Simulator::new(reference);
        let mut table = ResultTable::new();

        info!(
            "sweep: {} policies x {} frame counts over {} accesses (crc {:08x})",
            policies.len(),
            frame_counts.len(),
            reference.len(),
            reference.fingerprint()
        );

        for &policy in policies {
            for &frames in frame_counts {
                let result = match simulator.run(frames, |reference| factory(policy, reference)) {
                    Ok(result) => result,
                    Err(source) => {
                        error!("{policy} with {frames} frames failed: {source}");
                        return Err(SweepError {
                            completed: table,
                            source,
                        });
                    }
                };

                debug!(
                    "{policy} frames={frames}: {} ({}us)",
                    result.stats,
                    result.elapsed_micros()
                );
                table.push(TrialResult {
                    policy,
                    frames,
                    faults: result.faults(),
                    elapsed: result.elapsed,
                });
            }
        }

        Ok(table)
    }

    /// Generate the configured reference string, then sweep it.
    ///
    /// # Errors
    /// As [`sweep`](Self::sweep), plus `Error::InvalidParameter` for a bad
    /// configuration.
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport, SweepError> {
        config.validate().map_err(SweepError::before_any_trial)?;

        let reference = ReferenceStringGenerator::new(config.seed)
            .generate(config.length, config.page_range)
            .map_err(SweepError::before_any_trial)?;

        info!(
            "experiment {:?}: seed={} reference={}",
            config.name, config.seed, reference
        );
        let results = Self::sweep(&config.frames, &reference, &config.policies)?;

        Ok(ExperimentReport {
            name: config.name.clone(),
            seed: config.seed,
            reference,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_row_order() {
        let refs: ReferenceString = "0120".parse().unwrap();
        let table = ExperimentHarness::sweep(
            &[2, 1],
            &refs,
            &[PolicyKind::LruTimer, PolicyKind::Optimal],
        )
        .unwrap();

        let order: Vec<(PolicyKind, usize)> =
            table.rows().iter().map(|r| (r.policy, r.frames)).collect();
        assert_eq!(
            order,
            vec![
                (PolicyKind::LruTimer, 2),
                (PolicyKind::LruTimer, 1),
                (PolicyKind::Optimal, 2),
                (PolicyKind::Optimal, 1),
            ]
        );
    }

    #[test]
    fn test_sweep_rejects_zero_frames() {
        let refs: ReferenceString = "01".parse().unwrap();
        let err = ExperimentHarness::sweep(&[1, 0], &refs, &PolicyKind::ALL).unwrap_err();

        assert!(err.completed.is_empty());
        assert!(matches!(err.source, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_run_is_reproducible() {
        let config = ExperimentConfig::fault_study().with_seed(11);
        let a = ExperimentHarness::run(&config).unwrap();
        let b = ExperimentHarness::run(&config).unwrap();

        assert_eq!(a.reference, b.reference);
        assert_eq!(a.results.len(), 7 * 4);
        for (x, y) in a.results.rows().iter().zip(b.results.rows()) {
            assert_eq!((x.policy, x.frames, x.faults), (y.policy, y.frames, y.faults));
        }
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut config = ExperimentConfig::timing_study();
        config.length = 0;

        let err = ExperimentHarness::run(&config).unwrap_err();
        assert!(matches!(err.source, Error::InvalidParameter(_)));
    }
}
