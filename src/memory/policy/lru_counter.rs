//! Counter-based LRU replacement policy.

use std::collections::HashMap;

use crate::common::{Error, PageId, Result};
use crate::memory::policy::{empty_resident_set, EvictionPolicy};
use crate::memory::FrameTable;

/// LRU where each resident page remembers the stream position of its last
/// access.
///
/// The victim is the resident page with the smallest position. Positions
/// are unique per access, so ties can only arise from misuse; they resolve
/// to the lowest page number.
#[derive(Debug, Clone, Default)]
pub struct LruCounter {
    last_used: HashMap<PageId, usize>,
}

impl LruCounter {
    pub const NAME: &'static str = "lru-counter";

    pub fn new() -> Self {
        Self::default()
    }

    /// Stream position of the last access to `page`, if tracked.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl EvictionPolicy for LruCounter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn record_access(&mut self, _table: &FrameTable, page: PageId, position: usize) {
        self.last_used.insert(page, position);
    }

    fn select_victim(&mut self, table: &FrameTable, _position: usize) -> Result<PageId> {
        let mut victim: Option<(usize, PageId)> = None;
        for page in table.resident_pages() {
            let stamp = self.last_used(page).ok_or_else(|| {
                Error::InternalInconsistency(format!("{}: {page} has no timestamp", Self::NAME))
            })?;
            match victim {
                Some(oldest) if oldest <= (stamp, page) => {}
                _ => victim = Some((stamp, page)),
            }
        }
        victim
            .map(|(_, page)| page)
            .ok_or_else(|| empty_resident_set(Self::NAME))
    }

    fn forget(&mut self, _table: &FrameTable, page: PageId) {
        self.last_used.remove(&page);
    }
}
