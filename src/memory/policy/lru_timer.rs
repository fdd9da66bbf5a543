//! Timer-based LRU replacement policy.

use crate::common::{FrameId, PageId, Result};
use crate::memory::policy::{empty_resident_set, EvictionPolicy};
use crate::memory::FrameTable;

/// Logical clock advanced once per memory reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruClock {
    tick: u64,
}

impl LruClock {
    /// Current time.
    #[inline]
    pub fn now(&self) -> u64 {
        self.tick
    }

    /// Read the clock, then advance it.
    #[inline]
    pub fn advance(&mut self) -> u64 {
        let now = self.tick;
        self.tick += 1;
        now
    }
}

/// LRU where every frame carries a time-of-use field.
///
/// On each reference the clock register is copied into the time-of-use of
/// the frame holding the page. Victim selection scans the frames for the
/// smallest time-of-use. Fault behaviour matches [`LruCounter`] and
/// [`LruStack`]; this variant exists to measure the cost of per-frame clock
/// bookkeeping.
///
/// [`LruCounter`]: crate::memory::policy::LruCounter
/// [`LruStack`]: crate::memory::policy::LruStack
#[derive(Debug, Clone, Default)]
pub struct LruTimer {
    clock: LruClock,

    /// Time of use, indexed by `FrameId`.
    time_of_use: Vec<Option<u64>>,
}

impl LruTimer {
    pub const NAME: &'static str = "lru-timer";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> LruClock {
        self.clock
    }

    /// Time of use recorded for `frame`.
    pub fn time_of_use(&self, frame: FrameId) -> Option<u64> {
        self.time_of_use.get(frame.0).copied().flatten()
    }
}

impl EvictionPolicy for LruTimer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn record_access(&mut self, table: &FrameTable, page: PageId, _position: usize) {
        let now = self.clock.advance();
        // The skeleton only records accesses to resident pages.
        if let Some(frame) = table.slot_of(page) {
            if self.time_of_use.len() < table.capacity() {
                self.time_of_use.resize(table.capacity(), None);
            }
            self.time_of_use[frame.0] = Some(now);
        }
    }

    fn select_victim(&mut self, table: &FrameTable, _position: usize) -> Result<PageId> {
        table
            .iter()
            .min_by_key(|&(frame, page)| (self.time_of_use(frame), page))
            .map(|(_, page)| page)
            .ok_or_else(|| empty_resident_set(Self::NAME))
    }

    fn forget(&mut self, table: &FrameTable, page: PageId) {
        if let Some(slot) = table
            .slot_of(page)
            .and_then(|frame| self.time_of_use.get_mut(frame.0))
        {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u32) -> PageId {
        PageId::new(n)
    }

    #[test]
    fn test_clock_advances_per_reference() {
        let mut clock = LruClock::default();
        assert_eq!(clock.advance(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn test_time_of_use_follows_frame() {
        let mut lru = LruTimer::new();
        let mut table = FrameTable::new(2).unwrap();

        lru.on_access(&mut table, p(8), 0).unwrap();
        lru.on_access(&mut table, p(9), 1).unwrap();
        lru.on_access(&mut table, p(8), 2).unwrap();

        let frame = table.slot_of(p(8)).unwrap();
        assert_eq!(lru.time_of_use(frame), Some(2));
        assert_eq!(lru.clock().now(), 3);
    }

    #[test]
    fn test_evicts_smallest_time_of_use() {
        let mut lru = LruTimer::new();
        let mut table = FrameTable::new(2).unwrap();

        lru.on_access(&mut table, p(1), 0).unwrap();
        lru.on_access(&mut table, p(2), 1).unwrap();
        lru.on_access(&mut table, p(1), 2).unwrap();
        let outcome = lru.on_access(&mut table, p(3), 3).unwrap();

        assert_eq!(outcome.evicted(), Some(p(2)));
        let frame = table.slot_of(p(3)).unwrap();
        assert_eq!(lru.time_of_use(frame), Some(3));
    }

    #[test]
    fn test_clock_ignores_stream_position() {
        // Positions passed in need not be contiguous; the clock still is.
        let mut lru = LruTimer::new();
        let mut table = FrameTable::new(2).unwrap();

        lru.on_access(&mut table, p(1), 100).unwrap();
        lru.on_access(&mut table, p(2), 7).unwrap();
        assert_eq!(lru.select_victim(&table, 0).unwrap(), p(1));
    }
}
