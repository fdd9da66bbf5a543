//! Result tables handed to reporting and plotting.

use std::fmt;
use std::time::Duration;

use crate::memory::policy::PolicyKind;

/// One trial: a policy run over the shared string with a given frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub policy: PolicyKind,
    pub frames: usize,
    pub faults: u64,
    pub elapsed: Duration,
}

impl TrialResult {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// The y-axis of a plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Faults,
    ElapsedMicros,
}

/// Trial results in the order they were produced.
///
/// Rows are append-only: a failed sweep still hands back every row it
/// completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<TrialResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: TrialResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for `policy`, in sweep order.
    pub fn for_policy(&self, policy: PolicyKind) -> impl Iterator<Item = &TrialResult> + '_ {
        self.rows.iter().filter(move |row| row.policy == policy)
    }

    /// The row for `(policy, frames)`, if that trial ran.
    pub fn get(&self, policy: PolicyKind, frames: usize) -> Option<&TrialResult> {
        self.for_policy(policy).find(|row| row.frames == frames)
    }

    /// `(frames, metric)` points for one policy, ordered by frame count.
    pub fn series(&self, policy: PolicyKind, metric: Metric) -> Vec<(usize, f64)> {
        let mut points: Vec<(usize, f64)> = self
            .for_policy(policy)
            .map(|row| {
                let y = match metric {
                    Metric::Faults => row.faults as f64,
                    Metric::ElapsedMicros => row.elapsed_micros() as f64,
                };
                (row.frames, y)
            })
            .collect();
        points.sort_by_key(|&(frames, _)| frames);
        points
    }

    /// Bélády anomalies for `policy`: consecutive swept frame counts
    /// `(f, g)`, `f < g`, where `g` frames faulted more than `f` did.
    pub fn anomalies(&self, policy: PolicyKind) -> Vec<(usize, usize)> {
        let mut rows: Vec<&TrialResult> = self.for_policy(policy).collect();
        rows.sort_by_key(|row| row.frames);
        rows.windows(2)
            .filter(|pair| pair[1].faults > pair[0].faults)
            .map(|pair| (pair[0].frames, pair[1].frames))
            .collect()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>6} {:>6} {:>12}",
            "policy", "frames", "faults", "elapsed_us"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:>6} {:>6} {:>12}",
                row.policy.name(),
                row.frames,
                row.faults,
                row.elapsed_micros()
            )?;
        }
        Ok(())
    }
}
