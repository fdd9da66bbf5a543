//! Workload generation.
//!
//! - [`ReferenceString`] - An immutable sequence of page accesses
//! - [`ReferenceStringGenerator`] - Seeded uniform generator

mod generator;
mod reference;

pub use generator::{generate, ReferenceStringGenerator};
pub use reference::ReferenceString;
