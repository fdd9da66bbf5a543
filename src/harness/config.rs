//! Experiment configuration.

use crate::common::config::{
    DEFAULT_SEED, FAULT_STUDY_FRAMES, FAULT_STUDY_LENGTH, FAULT_STUDY_PAGE_RANGE,
    TIMING_STUDY_FRAMES, TIMING_STUDY_LENGTH, TIMING_STUDY_PAGE_RANGE,
};
use crate::common::{Error, Result};
use crate::memory::policy::PolicyKind;

/// Everything needed to reproduce one experiment.
///
/// # Example
/// ```
/// use pagesim::{ExperimentConfig, PolicyKind};
///
/// let config = ExperimentConfig::fault_study()
///     .with_seed(7)
///     .with_policies(vec![PolicyKind::Optimal, PolicyKind::LruStack]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.frames, (1..=7).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Label used in logs and reports.
    pub name: String,

    /// Pages are drawn from `[0, page_range)`.
    pub page_range: u32,

    /// Reference-string length.
    pub length: usize,

    /// Frame counts to sweep, in reporting order.
    pub frames: Vec<usize>,

    pub seed: u64,

    /// Policies to compare, in reporting order.
    pub policies: Vec<PolicyKind>,
}

impl ExperimentConfig {
    /// Short string over pages `0..10`, frames 1 to 7, every policy.
    pub fn fault_study() -> Self {
        Self {
            name: "fault-count".into(),
            page_range: FAULT_STUDY_PAGE_RANGE,
            length: FAULT_STUDY_LENGTH,
            frames: FAULT_STUDY_FRAMES.collect(),
            seed: DEFAULT_SEED,
            policies: PolicyKind::ALL.to_vec(),
        }
    }

    /// 500 accesses over pages `0..21`, frames 1 to 10, every policy.
    pub fn timing_study() -> Self {
        Self {
            name: "timing".into(),
            page_range: TIMING_STUDY_PAGE_RANGE,
            length: TIMING_STUDY_LENGTH,
            frames: TIMING_STUDY_FRAMES.collect(),
            seed: DEFAULT_SEED,
            policies: PolicyKind::ALL.to_vec(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_policies(mut self, policies: Vec<PolicyKind>) -> Self {
        self.policies = policies;
        self
    }

    pub fn with_frames(mut self, frames: impl IntoIterator<Item = usize>) -> Self {
        self.frames = frames.into_iter().collect();
        self
    }

    /// Check every parameter before any work is done.
    ///
    /// # Errors
    /// `Error::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidParameter(format!(
                "{}: length must be > 0",
                self.name
            )));
        }
        if self.page_range == 0 {
            return Err(Error::InvalidParameter(format!(
                "{}: page range must be > 0",
                self.name
            )));
        }
        validate_sweep(&self.frames, &self.policies)
    }
}

/// Shared by config validation and ad-hoc sweeps.
pub(crate) fn validate_sweep(frames: &[usize], policies: &[PolicyKind]) -> Result<()> {
    if frames.is_empty() {
        return Err(Error::InvalidParameter("frame sweep is empty".into()));
    }
    if frames.contains(&0) {
        return Err(Error::InvalidParameter(
            "frame sweep contains a zero frame count".into(),
        ));
    }
    if policies.is_empty() {
        return Err(Error::InvalidParameter("no policies selected".into()));
    }
    Ok(())
}
