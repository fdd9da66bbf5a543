//! Configuration constants for the preset experiments.
//!
//! Two studies are run by default:
//! - the fault-count study: a short string over a small page range, where
//!   every fault can be checked by hand
//! - the timing study: a longer string over a wider range, long enough for
//!   bookkeeping cost to show up in the measured run time

use std::ops::RangeInclusive;

/// Page range `P` of the fault-count study (pages `0..10`).
pub const FAULT_STUDY_PAGE_RANGE: u32 = 10;

/// Reference-string length of the fault-count study.
pub const FAULT_STUDY_LENGTH: usize = 10;

/// Frame counts swept by the fault-count study.
pub const FAULT_STUDY_FRAMES: RangeInclusive<usize> = 1..=7;

/// Page range `P` of the timing study (pages `0..21`).
pub const TIMING_STUDY_PAGE_RANGE: u32 = 21;

/// Reference-string length of the timing study.
pub const TIMING_STUDY_LENGTH: usize = 500;

/// Frame counts swept by the timing study.
pub const TIMING_STUDY_FRAMES: RangeInclusive<usize> = 1..=10;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x5EED_2024;
