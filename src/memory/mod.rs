//! Simulated physical memory.
//!
//! # Components
//! - [`FrameTable`] - Fixed set of frames and the pages resident in them
//! - [`AccessStats`] - Hit/fault/eviction counters for one trial
//! - [`policy`] - Eviction policy implementations

mod frame_table;
pub mod policy;
mod stats;

pub use frame_table::FrameTable;
pub use stats::AccessStats;
