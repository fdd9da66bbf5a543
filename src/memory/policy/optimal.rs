//! Optimal (Bélády's MIN) replacement policy.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::{PageId, Result};
use crate::memory::policy::{empty_resident_set, EvictionPolicy};
use crate::memory::FrameTable;
use crate::workload::ReferenceString;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Pages that never recur rank ahead of every page that does; among those
/// the lowest page number is evicted.
///
/// Lookahead is precomputed once per trial: for every page, the sorted
/// positions at which it occurs. The next use after position `i` is then a
/// binary search rather than a rescan of the remaining string.
#[derive(Debug, Clone)]
pub struct Optimal {
    occurrences: HashMap<PageId, Vec<usize>>,
}

impl Optimal {
    pub const NAME: &'static str = "optimal";

    pub fn new(reference: &ReferenceString) -> Self {
        let mut occurrences: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (position, page) in reference.iter().enumerate() {
            occurrences.entry(page).or_default().push(position);
        }
        Self { occurrences }
    }

    /// Position of the first access to `page` strictly after `position`.
    pub fn next_use(&self, page: PageId, position: usize) -> Option<usize> {
        let positions = self.occurrences.get(&page)?;
        let idx = positions.partition_point(|&p| p <= position);
        positions.get(idx).copied()
    }
}

impl EvictionPolicy for Optimal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn record_access(&mut self, _table: &FrameTable, _page: PageId, _position: usize) {
        // All lookahead is precomputed.
    }

    fn select_victim(&mut self, table: &FrameTable, position: usize) -> Result<PageId> {
        table
            .resident_pages()
            .max_by_key(|&page| {
                let next = self.next_use(page, position).unwrap_or(usize::MAX);
                (next, Reverse(page))
            })
            .ok_or_else(|| empty_resident_set(Self::NAME))
    }
}
