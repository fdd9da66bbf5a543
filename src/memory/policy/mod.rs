//! Eviction policy implementations.
//!
//! Currently implements:
//! - [`Optimal`] - Bélády's MIN, evicts the page used farthest in the future
//! - [`LruCounter`] - LRU keyed by the stream position of the last access
//! - [`LruStack`] - LRU kept as an explicit recency list
//! - [`LruTimer`] - LRU keyed by a per-access logical clock
//!
//! All four share the hit/load/evict skeleton in
//! [`EvictionPolicy::on_access`] and differ only in their bookkeeping and in
//! how they pick a victim.

mod lru_counter;
mod lru_stack;
mod lru_timer;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};
use crate::memory::FrameTable;
use crate::workload::ReferenceString;

pub use lru_counter::LruCounter;
pub use lru_stack::LruStack;
pub use lru_timer::LruTimer;
pub use optimal::Optimal;

/// Result of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOutcome {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded; `evicted` is the page it displaced, if
    /// the table was full.
    Fault { evicted: Option<PageId> },
}

impl FaultOutcome {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, FaultOutcome::Fault { .. })
    }

    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            FaultOutcome::Fault { evicted } => *evicted,
            FaultOutcome::Hit => None,
        }
    }
}

/// A page replacement policy.
///
/// Implementors supply the bookkeeping hooks; the decision skeleton lives
/// in [`on_access`](EvictionPolicy::on_access):
///
/// ```text
/// resident?  ──yes──▶ Hit, record_access
///     │no
/// table full? ──no──▶ load, record_access, Fault { evicted: None }
///     │yes
/// select_victim ─▶ forget ─▶ evict ─▶ load ─▶ record_access
///                                      Fault { evicted: Some(victim) }
/// ```
pub trait EvictionPolicy {
    /// Short stable name, e.g. `"lru-stack"`.
    fn name(&self) -> &'static str;

    /// Update bookkeeping for an access to `page`, which is resident in
    /// `table` by the time this is called.
    fn record_access(&mut self, table: &FrameTable, page: PageId, position: usize);

    /// Choose the resident page to evict. Only called when `table` is full.
    ///
    /// # Errors
    /// `Error::InternalInconsistency` if there is nothing to choose from.
    fn select_victim(&mut self, table: &FrameTable, position: usize) -> Result<PageId>;

    /// Drop bookkeeping for `page`, called just before it leaves `table`.
    fn forget(&mut self, _table: &FrameTable, _page: PageId) {}

    /// Process the access to `page` at `position` in the reference string.
    fn on_access(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        position: usize,
    ) -> Result<FaultOutcome> {
        if table.is_resident(page) {
            self.record_access(table, page, position);
            return Ok(FaultOutcome::Hit);
        }

        let evicted = if table.is_full() {
            let victim = self.select_victim(table, position)?;
            self.forget(table, victim);
            table.evict(victim)?;
            Some(victim)
        } else {
            None
        };

        table.load(page)?;
        self.record_access(table, page, position);
        Ok(FaultOutcome::Fault { evicted })
    }
}

impl<P: EvictionPolicy + ?Sized> EvictionPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn record_access(&mut self, table: &FrameTable, page: PageId, position: usize) {
        (**self).record_access(table, page, position)
    }

    fn select_victim(&mut self, table: &FrameTable, position: usize) -> Result<PageId> {
        (**self).select_victim(table, position)
    }

    fn forget(&mut self, table: &FrameTable, page: PageId) {
        (**self).forget(table, page)
    }
}

/// The error every variant reports when asked for a victim from an empty
/// resident set.
pub(crate) fn empty_resident_set(policy: &str) -> Error {
    Error::InternalInconsistency(format!("{policy}: victim requested from empty frame set"))
}

/// Identifies one of the four policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Optimal,
    LruCounter,
    LruStack,
    LruTimer,
}

impl PolicyKind {
    /// Every policy, in reporting order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Optimal,
        PolicyKind::LruCounter,
        PolicyKind::LruStack,
        PolicyKind::LruTimer,
    ];

    /// The three LRU strategies.
    pub const LRU: [PolicyKind; 3] = [
        PolicyKind::LruCounter,
        PolicyKind::LruStack,
        PolicyKind::LruTimer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Optimal => Optimal::NAME,
            PolicyKind::LruCounter => LruCounter::NAME,
            PolicyKind::LruStack => LruStack::NAME,
            PolicyKind::LruTimer => LruTimer::NAME,
        }
    }

    /// Build a fresh policy instance for one trial over `reference`.
    pub fn build(self, reference: &ReferenceString) -> Box<dyn EvictionPolicy> {
        match self {
            PolicyKind::Optimal => Box::new(Optimal::new(reference)),
            PolicyKind::LruCounter => Box::new(LruCounter::new()),
            PolicyKind::LruStack => {
                Box::new(LruStack::with_capacity(reference.distinct_pages().len()))
            }
            PolicyKind::LruTimer => Box::new(LruTimer::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown policy {s:?}")))
    }
}
