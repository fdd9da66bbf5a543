//! pagesim - A page replacement simulator comparing eviction policies by
//! fault count and running time.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Experiment Harness (harness/)                 │   │
//! │  │   ExperimentConfig → sweep(frames × policies) → table    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulator (sim/)                         │   │
//! │  │        access loop + Stopwatch + AccessStats             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Memory (memory/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Eviction Policies: OPT | LRU counter |         │   │   │
//! │  │   │                     LRU stack | LRU timer       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │                     FrameTable                           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Workload (workload/)                      │   │
//! │  │     ReferenceStringGenerator → ReferenceString           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`workload`] - Reference strings and their seeded generator
//! - [`memory`] - Frame table and eviction policies
//! - [`sim`] - Single-trial simulator
//! - [`harness`] - Frame-count sweeps and result tables
//!
//! # Quick Start
//! ```
//! use pagesim::{ExperimentConfig, ExperimentHarness, Metric, PolicyKind};
//!
//! let report = ExperimentHarness::run(&ExperimentConfig::fault_study()).unwrap();
//! let points = report.results.series(PolicyKind::Optimal, Metric::Faults);
//! assert_eq!(points.len(), 7);
//! ```

pub mod common;
pub mod harness;
pub mod memory;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use harness::{
    ExperimentConfig, ExperimentHarness, ExperimentReport, Metric, ResultTable, SweepError,
    TrialResult,
};
pub use memory::policy::{EvictionPolicy, FaultOutcome, PolicyKind};
pub use memory::{AccessStats, FrameTable};
pub use sim::{SimulationResult, Simulator};
pub use workload::{ReferenceString, ReferenceStringGenerator};
