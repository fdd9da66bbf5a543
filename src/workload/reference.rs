//! Reference strings.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::common::{Error, PageId};

/// An ordered, immutable sequence of page accesses.
///
/// Once built, a reference string is only ever read: every trial of one
/// experiment walks the same string, so no policy can observe a different
/// workload than another.
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs: ReferenceString = "7012030".parse().unwrap();
/// assert_eq!(refs.len(), 7);
/// assert_eq!(refs[0].0, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Wrap an existing page sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of accesses.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over the accesses in stream order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// The set of distinct pages referenced, in ascending order.
    pub fn distinct_pages(&self) -> BTreeSet<PageId> {
        self.pages.iter().copied().collect()
    }

    /// CRC32 of the page sequence.
    ///
    /// Ties a result table back to the exact string that produced it.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for page in &self.pages {
            hasher.update(&page.0.to_le_bytes());
        }
        hasher.finalize()
    }
}

impl Index<usize> for ReferenceString {
    type Output = PageId;

    fn index(&self, position: usize) -> &PageId {
        &self.pages[position]
    }
}

impl From<Vec<u32>> for ReferenceString {
    fn from(pages: Vec<u32>) -> Self {
        Self::new(pages.into_iter().map(PageId::new).collect())
    }
}

impl From<&[u32]> for ReferenceString {
    fn from(pages: &[u32]) -> Self {
        Self::new(pages.iter().copied().map(PageId::new).collect())
    }
}

/// Parses either a bare digit string (`"70120304"`, one page per digit) or
/// numbers separated by commas and/or whitespace (`"7, 0, 12"`).
impl FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ParseReference("empty input".into()));
        }

        let separated = s.contains(|c: char| c == ',' || c.is_whitespace());
        let pages = if separated {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .map(|tok| {
                    tok.parse::<u32>()
                        .map(PageId::new)
                        .map_err(|e| Error::ParseReference(format!("{tok:?}: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(PageId::new)
                        .ok_or_else(|| Error::ParseReference(format!("{c:?} is not a digit")))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self::new(pages))
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        write!(f, "]")
    }
}
