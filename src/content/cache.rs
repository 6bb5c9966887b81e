//! Per-surah content cache
//!
//! Populate-once, never evicted. The key universe is bounded by the 114
//! surahs, so this is a fixed-size resource pool rather than an unbounded
//! cache; it is cleared only by dropping the owning loader. A failed fetch
//! is recorded and terminal: the surah is not requested again.

use rustc_hash::FxHashMap;

use super::document::SurahContent;

/// State of one surah in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A fetch has been handed to the host and has not resolved yet.
    Pending,
    /// Parsed content, immutable once stored.
    Ready(SurahContent),
    /// The fetch failed or the document was malformed. No retry.
    Failed,
}

/// Mapping from surah number to its fetch state.
#[derive(Debug, Default)]
pub struct SurahCache {
    slots: FxHashMap<u16, Slot>,
}

impl SurahCache {
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }

    /// True when nothing is known about the surah yet, i.e. a fetch is
    /// neither stored, failed, nor already in flight.
    pub fn needs_fetch(&self, surah: u16) -> bool {
        !self.slots.contains_key(&surah)
    }

    /// True once the surah has reached a terminal state (Ready or Failed).
    pub fn is_resolved(&self, surah: u16) -> bool {
        matches!(self.slots.get(&surah), Some(Slot::Ready(_) | Slot::Failed))
    }

    /// Record that a fetch is in flight.
    pub fn mark_pending(&mut self, surah: u16) {
        self.slots.entry(surah).or_insert(Slot::Pending);
    }

    /// Store parsed content. Writes are idempotent; re-storing a surah is
    /// harmless, and a late delivery may upgrade a `Failed` slot.
    pub fn insert(&mut self, surah: u16, content: SurahContent) {
        self.slots.insert(surah, Slot::Ready(content));
    }

    /// Record a failed fetch. Never downgrades stored content.
    pub fn mark_failed(&mut self, surah: u16) {
        match self.slots.get(&surah) {
            Some(Slot::Ready(_)) => {}
            _ => {
                self.slots.insert(surah, Slot::Failed);
            }
        }
    }

    /// Stored content for a surah, if any.
    pub fn get(&self, surah: u16) -> Option<&SurahContent> {
        match self.slots.get(&surah) {
            Some(Slot::Ready(content)) => Some(content),
            _ => None,
        }
    }

    /// Number of surahs with any recorded state.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
