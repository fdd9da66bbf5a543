//! FrameTable - the fixed set of physical frames.
//!
//! A [`FrameTable`] maps frame slots to the pages resident in them:
//! - which slot (if any) holds a given page
//! - which slots are still free
//!
//! It never decides *what* to evict; that belongs to the policy.

use std::collections::HashMap;

use crate::common::{Error, FrameId, PageId, Result};

/// A fixed-capacity table of frames.
///
/// # Invariants
/// - At most `capacity` pages are resident at any time.
/// - A page occupies at most one slot.
///
/// # Example
/// ```
/// use pagesim::{FrameTable, PageId};
///
/// let mut table = FrameTable::new(2).unwrap();
/// table.load(PageId::new(1)).unwrap();
/// table.load(PageId::new(2)).unwrap();
/// assert!(table.is_full());
///
/// table.evict(PageId::new(1)).unwrap();
/// assert!(!table.is_resident(PageId::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Slot contents, indexed by `FrameId`.
    slots: Vec<Option<PageId>>,

    /// Maps resident pages to their slot for O(1) lookup.
    page_table: HashMap<PageId, FrameId>,

    /// Stack of empty slots. Lowest slot is popped first.
    free_list: Vec<FrameId>,
}

impl FrameTable {
    /// Create a table with `capacity` empty frames.
    ///
    /// # Errors
    /// `Error::InvalidParameter` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidParameter("frame count must be > 0".into()));
        }

        Ok(Self {
            slots: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
            free_list: (0..capacity).rev().map(FrameId::new).collect(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_list.is_empty()
    }

    #[inline]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// The slot holding `page`, if resident.
    #[inline]
    pub fn slot_of(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// The page held by `frame`, if any.
    pub fn page_in(&self, frame: FrameId) -> Option<PageId> {
        self.slots.get(frame.0).copied().flatten()
    }

    /// Place `page` into an empty slot and return that slot.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if every slot is occupied
    /// - `Error::AlreadyResident` if `page` is already loaded
    pub fn load(&mut self, page: PageId) -> Result<FrameId> {
        if self.is_resident(page) {
            return Err(Error::AlreadyResident(page));
        }
        let frame_id = self.free_list.pop().ok_or(Error::CapacityExceeded {
            capacity: self.capacity(),
            page,
        })?;

        self.slots[frame_id.0] = Some(page);
        self.page_table.insert(page, frame_id);
        Ok(frame_id)
    }

    /// Remove `page` from its slot and return the freed slot.
    ///
    /// # Errors
    /// `Error::NotResident` if `page` is not loaded.
    pub fn evict(&mut self, page: PageId) -> Result<FrameId> {
        let frame_id = self
            .page_table
            .remove(&page)
            .ok_or(Error::NotResident(page))?;

        self.slots[frame_id.0] = None;
        self.free_list.push(frame_id);
        Ok(frame_id)
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId::new(i), page)))
    }

    /// Resident pages in slot order.
    pub fn resident_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.iter().map(|(_, page)| page)
    }
}
