//! Trial execution.
//!
//! - [`Simulator`] - Drives a reference string through a frame table and a
//!   policy, counting faults
//! - [`Stopwatch`] - Scoped timer around the access loop

mod simulator;
mod stopwatch;

pub use simulator::{SimulationResult, Simulator};
pub use stopwatch::Stopwatch;
