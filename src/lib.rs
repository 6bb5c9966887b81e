//! Mushaf-Core: pagination and reading-history engine for a Quran reader
//!
//! This crate provides the core engine with:
//! - A stable bijection between (surah, ayah) coordinates and a global
//!   linear index over the whole text
//! - The fixed 30-juz / 600-page map (20 pages per juz) and its lookups
//! - Cancellable, cached page-content loading over a host-supplied store
//! - Consolidated, capped reading-session history
//!
//! The surrounding UI, auth, and asset delivery live in the host app; the
//! production surface is the WASM bridge in [`wasm`].

pub mod content;
pub mod log;
pub mod meta;
pub mod pages;
pub mod search;
pub mod verse;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use content::{PageContent, PageLoader, PageRequest, Segment, SurahContent};
pub use log::{SessionEntry, SessionLog};
pub use meta::{SurahMeta, JUZ_COUNT, PAGES_PER_JUZ, PAGE_COUNT, SURAH_COUNT, TOTAL_AYAHS};
pub use pages::{PageInfo, PageMap};
pub use search::{match_surahs, SurahMatch};
pub use verse::{AyahRef, GlobalIndex, VerseIndex};

/// The main reader state combining all components.
///
/// Owns the verse index, the page map, the content loader, and the
/// session log; being the single `&mut` owner is what serializes all
/// history mutation.
pub struct Reader {
    index: VerseIndex,
    map: PageMap,
    loader: PageLoader,
    log: SessionLog,
    current_page: u16,
    /// Where the current reading session began. Page turns keep it;
    /// explicit jumps reset it.
    session_start: AyahRef,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader {
    /// Create a reader positioned at page 1.
    pub fn new() -> Self {
        let index = VerseIndex::new();
        let map = PageMap::new(&index);
        let session_start = map.page(1).start;
        Self {
            index,
            map,
            loader: PageLoader::new(),
            log: SessionLog::new(),
            current_page: 1,
            session_start,
        }
    }

    /// Currently displayed page number.
    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    /// Descriptor lookup; out-of-range numbers clamp.
    pub fn page_info(&self, number: u16) -> &PageInfo {
        self.map.page(number)
    }

    /// Page containing an ayah (stable numbering contract).
    pub fn page_for_ayah(&self, at: AyahRef) -> u16 {
        self.map.page_for_ayah(&self.index, at)
    }

    /// Jump to a page. Starts a new reading session and begins loading.
    pub fn goto_page(&mut self, number: u16) -> PageRequest {
        let request = self.move_to(number);
        self.session_start = self.map.page(self.current_page).start;
        request
    }

    /// Jump to an ayah (deep link). The session starts at that exact
    /// ayah, not at the top of its page.
    pub fn goto_ayah(&mut self, at: AyahRef) -> PageRequest {
        let number = self.page_for_ayah(at);
        let request = self.move_to(number);
        self.session_start = at;
        request
    }

    /// Turn to the next page, keeping the current session.
    pub fn next_page(&mut self) -> PageRequest {
        self.move_to(self.current_page.saturating_add(1))
    }

    /// Turn to the previous page, keeping the current session.
    pub fn prev_page(&mut self) -> PageRequest {
        self.move_to(self.current_page.saturating_sub(1))
    }

    fn move_to(&mut self, number: u16) -> PageRequest {
        self.current_page = number.clamp(1, PAGE_COUNT);
        let page = *self.map.page(self.current_page);
        self.loader.request(&page)
    }

    /// Deliver a fetched surah document for a request generation.
    pub fn supply_part(&mut self, generation: u32, surah: u16, json: &str) {
        self.loader.supply(generation, surah, json);
    }

    /// Report a failed fetch for a request generation.
    pub fn fail_part(&mut self, generation: u32, surah: u16) {
        self.loader.fail(generation, surah);
    }

    /// Take the current page's content once loading has settled.
    pub fn take_page(&mut self) -> Option<PageContent> {
        self.loader.take_ready()
    }

    /// Record reading progress for `date` (`YYYY-MM-DD`): the session so
    /// far, from its start to the end of the current page. Consecutive
    /// calls within one session collapse into a single history entry.
    pub fn record_progress(&mut self, date: &str) {
        let end = self.map.page(self.current_page).end;
        self.log.append(SessionEntry {
            date: date.to_string(),
            start: self.session_start,
            end,
        });
    }

    /// Session history (read access).
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Session history (mutable access for delete/clear/import).
    pub fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let mut reader = Reader::new();
        reader.prev_page();
        assert_eq!(reader.current_page(), 1);
        reader.goto_page(600);
        reader.next_page();
        assert_eq!(reader.current_page(), 600);
        reader.goto_page(9999);
        assert_eq!(reader.current_page(), 600);
    }

    #[test]
    fn test_goto_ayah_lands_on_containing_page() {
        let mut reader = Reader::new();
        let at = AyahRef::new(2, 142);
        reader.goto_ayah(at);
        let page = *reader.page_info(reader.current_page());
        assert!(page.start <= at && at <= page.end);
        // Juz 2 starts at 2:142, so this is the first page of juz 2.
        assert_eq!(reader.current_page(), 21);
    }

    #[test]
    fn test_page_turns_extend_one_session() {
        let mut reader = Reader::new();
        reader.goto_page(1);
        reader.record_progress("2024-03-01");
        reader.next_page();
        reader.record_progress("2024-03-01");
        reader.next_page();
        reader.record_progress("2024-03-01");

        assert_eq!(reader.log().len(), 1);
        let entry = &reader.log().entries()[0];
        assert_eq!(entry.start, reader.page_info(1).start);
        assert_eq!(entry.end, reader.page_info(3).end);
    }

    #[test]
    fn test_jump_breaks_session() {
        let mut reader = Reader::new();
        reader.goto_page(1);
        reader.record_progress("2024-03-01");
        reader.goto_page(100);
        reader.record_progress("2024-03-01");

        assert_eq!(reader.log().len(), 2);
        assert_eq!(reader.log().entries()[0].start, reader.page_info(100).start);
    }

    #[test]
    fn test_full_load_flow_through_reader() {
        let mut reader = Reader::new();
        let request = reader.goto_page(1);
        assert_eq!(request.fetch.as_slice(), &[1]);
        assert!(reader.take_page().is_none());

        let json = r#"{"1": {"name": "Al-Fatihah", "text": {
            "1": "a", "2": "b", "3": "c", "4": "d", "5": "e", "6": "f", "7": "g"}}}"#;
        reader.supply_part(request.generation, 1, json);

        let content = reader.take_page().unwrap();
        assert_eq!(content.page_number, 1);
        assert!(!content.segments.is_empty());
    }

    #[test]
    fn test_superseding_navigation_discards_stale_page() {
        let mut reader = Reader::new();
        let first = reader.goto_page(1);
        reader.goto_page(599);
        let json = r#"{"1": {"name": "Al-Fatihah", "text": {"1": "a"}}}"#;
        reader.supply_part(first.generation, 1, json);
        // Page 1's delivery must not surface as page 599's content.
        assert!(reader.take_page().is_none());
    }
}
