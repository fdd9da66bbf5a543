//! Experiment harness.
//!
//! # Components
//! - [`ExperimentConfig`] - Page range, string length, sweep, seed, policies
//! - [`ExperimentHarness`] - Runs every (policy, frame count) trial
//! - [`ResultTable`] / [`TrialResult`] - Output for reporting and plotting

mod config;
mod experiment;
mod results;

pub use config::ExperimentConfig;
pub use experiment::{ExperimentHarness, ExperimentReport, SweepError};
pub use results::{Metric, ResultTable, TrialResult};
