//! Page number type.

use std::fmt;

/// A logical page number requested by the reference string.
///
/// Page numbers live in a fixed range `[0, P)` chosen per experiment and
/// carry no identity beyond their value. Ordering matters: it is the
/// deterministic tie-break every policy falls back on (lowest page first).
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.0, 7);
/// assert!(PageId::new(1) < page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_from_u32() {
        assert_eq!(PageId::from(3), PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
