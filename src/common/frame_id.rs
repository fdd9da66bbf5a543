//! Frame slot identifier.

use std::fmt;

/// Identifies a slot in a [`FrameTable`](crate::memory::FrameTable).
///
/// Slots are stored in a `Vec`, so the id is a plain `usize` index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_equality() {
        assert_eq!(FrameId::new(5), FrameId::new(5));
        assert_ne!(FrameId::new(5), FrameId::new(6));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(2)), "Frame(2)");
    }
}
