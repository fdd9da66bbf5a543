//! Stack-based LRU replacement policy.

use std::collections::HashMap;

use crate::common::{PageId, Result};
use crate::memory::policy::{empty_resident_set, EvictionPolicy};
use crate::memory::FrameTable;

/// A link in the recency list.
#[derive(Debug, Clone, Copy)]
struct Node {
    page: PageId,
    prev: Option<usize>,
    next: Option<usize>,
    linked: bool,
}

/// LRU kept as an explicit stack of page numbers.
///
/// The most recently used page sits on top (`head`), the least recently
/// used at the bottom (`tail`). Every access moves the page to the top; the
/// victim is always the bottom. The stack is a doubly-linked list over an
/// arena, so both moves are O(1) and no victim search is needed.
///
/// Each page is given a dense arena slot the first time it is seen, so the
/// arena grows with the number of distinct pages, not with their values.
///
/// ```text
///  head (MRU)                         tail (LRU)
///  ┌───┐ ◀──▶ ┌───┐ ◀──▶ ┌───┐ ◀──▶ ┌───┐
///  │ 4 │      │ 0 │      │ 3 │      │ 2 │  ──▶ victim
///  └───┘      └───┘      └───┘      └───┘
/// ```
#[derive(Debug, Clone, Default)]
pub struct LruStack {
    nodes: Vec<Node>,
    slots: HashMap<PageId, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LruStack {
    pub const NAME: &'static str = "lru-stack";

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the arena for `pages` distinct pages. It still grows on
    /// demand past that.
    pub fn with_capacity(pages: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(pages),
            slots: HashMap::with_capacity(pages),
            ..Self::default()
        }
    }

    /// Number of pages on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pages from most to least recently used.
    pub fn recency_order(&self) -> Vec<PageId> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            order.push(self.nodes[idx].page);
            cursor = self.nodes[idx].next;
        }
        order
    }

    fn slot_for(&mut self, page: PageId) -> usize {
        if let Some(&idx) = self.slots.get(&page) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            page,
            prev: None,
            next: None,
            linked: false,
        });
        self.slots.insert(page, idx);
        idx
    }

    fn unlink(&mut self, idx: usize) {
        let Node {
            prev, next, linked, ..
        } = self.nodes[idx];
        if !linked {
            return;
        }
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
        node.linked = false;
        self.len -= 1;
    }

    fn push_top(&mut self, idx: usize) {
        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = self.head;
        node.linked = true;
        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }
}

impl EvictionPolicy for LruStack {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn record_access(&mut self, _table: &FrameTable, page: PageId, _position: usize) {
        let idx = self.slot_for(page);
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_top(idx);
    }

    fn select_victim(&mut self, _table: &FrameTable, _position: usize) -> Result<PageId> {
        self.tail
            .map(|idx| self.nodes[idx].page)
            .ok_or_else(|| empty_resident_set(Self::NAME))
    }

    fn forget(&mut self, _table: &FrameTable, page: PageId) {
        if let Some(&idx) = self.slots.get(&page) {
            self.unlink(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u32) -> PageId {
        PageId::new(n)
    }

    fn pages(ns: &[u32]) -> Vec<PageId> {
        ns.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_move_to_top() {
        let mut lru = LruStack::new();
        let mut table = FrameTable::new(4).unwrap();

        for (pos, page) in [1, 2, 3, 2].into_iter().enumerate() {
            lru.on_access(&mut table, p(page), pos).unwrap();
        }

        assert_eq!(lru.recency_order(), pages(&[2, 3, 1]));
        assert_eq!(lru.len(), 3);
    }

    #[test]
    fn test_victim_is_bottom() {
        let mut lru = LruStack::with_capacity(4);
        let mut table = FrameTable::new(3).unwrap();

        for (pos, page) in [7, 0, 1, 7, 2].into_iter().enumerate() {
            lru.on_access(&mut table, p(page), pos).unwrap();
        }

        // 0 was the bottom when 2 arrived.
        assert!(!table.is_resident(p(0)));
        assert_eq!(lru.recency_order(), pages(&[2, 7, 1]));
        assert_eq!(lru.select_victim(&table, 5).unwrap(), p(1));
    }

    #[test]
    fn test_arena_sized_by_distinct_pages() {
        let mut lru = LruStack::with_capacity(2);
        let mut table = FrameTable::new(2).unwrap();

        for (pos, page) in [u32::MAX, 1, u32::MAX, 1].into_iter().enumerate() {
            lru.on_access(&mut table, p(page), pos).unwrap();
        }

        assert_eq!(lru.nodes.len(), 2);
        assert_eq!(lru.recency_order(), pages(&[1, u32::MAX]));
        assert_eq!(lru.select_victim(&table, 4).unwrap(), p(u32::MAX));
    }

    #[test]
    fn test_evicted_page_reuses_its_slot() {
        let mut lru = LruStack::new();
        let mut table = FrameTable::new(1).unwrap();

        for (pos, page) in [40, 9, 40, 9].into_iter().enumerate() {
            lru.on_access(&mut table, p(page), pos).unwrap();
        }

        assert_eq!(lru.nodes.len(), 2);
        assert_eq!(lru.recency_order(), pages(&[9]));
    }

    #[test]
    fn test_repeated_top_access_is_stable() {
        let mut lru = LruStack::new();
        let mut table = FrameTable::new(2).unwrap();

        lru.on_access(&mut table, p(5), 0).unwrap();
        lru.on_access(&mut table, p(5), 1).unwrap();
        lru.on_access(&mut table, p(5), 2).unwrap();

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.select_victim(&table, 3).unwrap(), p(5));
    }

    #[test]
    fn test_forget_empties_stack() {
        let mut lru = LruStack::new();
        let mut table = FrameTable::new(1).unwrap();

        lru.on_access(&mut table, p(3), 0).unwrap();
        lru.forget(&table, p(3));

        assert!(lru.is_empty());
        assert!(lru.select_victim(&table, 1).is_err());
    }
}
