//! Error types for the simulator.

use std::time::Duration;

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the simulator can report.
///
/// None of these are recoverable: generation and table operations are pure
/// computation, so every variant points at a bad argument or a logic bug.
/// The harness aborts the current experiment on the first one.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is out of range (zero length, zero page
    /// range, zero frames, empty sweep).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// `load` was called while every frame was occupied.
    #[error("cannot load {page}: all {capacity} frames are occupied")]
    CapacityExceeded { capacity: usize, page: PageId },

    /// `evict` named a page that is not in any frame.
    #[error("{0} is not resident")]
    NotResident(PageId),

    /// `load` named a page that already occupies a frame.
    #[error("{0} is already resident")]
    AlreadyResident(PageId),

    /// A policy invariant was violated, e.g. selecting a victim from an
    /// empty resident set.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// A reference string could not be parsed from text.
    #[error("cannot parse reference string: {0}")]
    ParseReference(String),

    /// The simulator loop stopped early.
    ///
    /// `elapsed` is the loop time captured up to the failing access.
    #[error("{policy} aborted at position {position} after {elapsed:?}: {source}")]
    TrialAborted {
        policy: &'static str,
        position: usize,
        elapsed: Duration,
        #[source]
        source: Box<Error>,
    },
}
