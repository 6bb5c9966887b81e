//! Page map: the fixed 600-page division of the text
//!
//! Each juz is split into exactly [`PAGES_PER_JUZ`] pages by distributing
//! its ayat evenly; rounding remainders are absorbed by the last page of
//! the juz so every juz boundary is also a page boundary. The table is
//! built once and immutable afterwards. Page numbers 1..=600 are a stable
//! external contract; consumers resolve through [`PageMap`] rather than
//! computing pages themselves.

use crate::meta::{JUZ_STARTS, LAST_AYAH, PAGES_PER_JUZ, PAGE_COUNT};
use crate::verse::{AyahRef, GlobalIndex, VerseIndex};

/// Descriptor of the ayah range assigned to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Page number, 1..=600
    pub number: u16,
    /// Juz this page belongs to, 1..=30
    pub juz: u8,
    /// First ayah on the page
    pub start: AyahRef,
    /// Last ayah on the page (inclusive)
    pub end: AyahRef,
    /// Global index of `start`
    pub(crate) start_global: GlobalIndex,
    /// Global index of `end`
    pub(crate) end_global: GlobalIndex,
}

impl PageInfo {
    /// Check whether a global index falls on this page.
    pub(crate) fn contains(&self, g: GlobalIndex) -> bool {
        self.start_global <= g && g <= self.end_global
    }
}

/// The full ordered table of 600 page descriptors.
#[derive(Debug, Clone)]
pub struct PageMap {
    pages: Vec<PageInfo>,
}

impl PageMap {
    /// Build the table from the juz boundaries and the verse index.
    pub fn new(index: &VerseIndex) -> Self {
        let mut pages = Vec::with_capacity(usize::from(PAGE_COUNT));

        for (j, start) in JUZ_STARTS.iter().enumerate() {
            let juz = (j + 1) as u8;

            // A juz ends right before the next juz starts; the last juz
            // ends at the final ayah of the text.
            let start_global = index
                .to_global(*start)
                .expect("juz start table addresses a valid ayah");
            let end_global = match JUZ_STARTS.get(j + 1) {
                Some(next) => GlobalIndex(
                    index
                        .to_global(*next)
                        .expect("juz start table addresses a valid ayah")
                        .0
                        - 1,
                ),
                None => index
                    .to_global(LAST_AYAH)
                    .expect("last ayah is a valid ayah"),
            };

            let total = end_global.0 - start_global.0 + 1;
            let per_page = f64::from(total) / f64::from(PAGES_PER_JUZ);

            for p in 0..PAGES_PER_JUZ {
                let page_start = GlobalIndex(
                    start_global.0 + (f64::from(p) * per_page).floor() as u32,
                );
                let mut page_end = GlobalIndex(
                    start_global.0 + (f64::from(p + 1) * per_page).floor() as u32 - 1,
                );
                // The last page of a juz always runs to the juz end,
                // regardless of what the even split says.
                if p == PAGES_PER_JUZ - 1 {
                    page_end = end_global;
                }

                pages.push(PageInfo {
                    number: j as u16 * PAGES_PER_JUZ + p + 1,
                    juz,
                    start: index.from_global(page_start),
                    end: index.from_global(page_end),
                    start_global: page_start,
                    end_global: page_end,
                });
            }
        }

        Self { pages }
    }

    /// Look up a page descriptor. Out-of-range numbers clamp to the
    /// nearest boundary page rather than failing.
    pub fn page(&self, number: u16) -> &PageInfo {
        let clamped = number.clamp(1, PAGE_COUNT);
        &self.pages[usize::from(clamped) - 1]
    }

    /// Find the page containing an ayah.
    ///
    /// Page ranges are sorted and non-overlapping, so this is a binary
    /// search on the end index. Invalid coordinates (and the unreachable
    /// no-match case) fall back to page 1.
    pub fn page_for_ayah(&self, index: &VerseIndex, at: AyahRef) -> u16 {
        let Some(g) = index.to_global(at) else {
            return 1;
        };
        let pos = self.pages.partition_point(|p| p.end_global < g);
        match self.pages.get(pos) {
            Some(p) if p.contains(g) => p.number,
            _ => 1,
        }
    }

    /// All pages in order.
    pub fn iter(&self) -> impl Iterator<Item = &PageInfo> {
        self.pages.iter()
    }

    /// Total page count (always 600).
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Never true; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{JUZ_COUNT, TOTAL_AYAHS};

    fn build() -> (VerseIndex, PageMap) {
        let index = VerseIndex::new();
        let map = PageMap::new(&index);
        (index, map)
    }

    #[test]
    fn test_exact_tiling() {
        let (_, map) = build();
        assert_eq!(map.len(), 600);

        let first = map.page(1);
        assert_eq!(first.start, AyahRef::new(1, 1));
        assert_eq!(first.start_global, GlobalIndex(1));

        let last = map.page(600);
        assert_eq!(last.end, LAST_AYAH);
        assert_eq!(last.end_global, GlobalIndex(TOTAL_AYAHS));

        // No gap, no overlap between consecutive pages.
        let pages: Vec<_> = map.iter().collect();
        for pair in pages.windows(2) {
            assert_eq!(pair[0].end_global.0 + 1, pair[1].start_global.0);
            assert!(pair[0].start_global <= pair[0].end_global);
        }
    }

    #[test]
    fn test_juz_alignment() {
        let (index, map) = build();
        for k in 1..=u16::from(JUZ_COUNT) {
            let last_of_juz = map.page(k * PAGES_PER_JUZ);
            assert_eq!(last_of_juz.juz, k as u8);
            let juz_end = match JUZ_STARTS.get(usize::from(k)) {
                Some(next) => GlobalIndex(index.to_global(*next).unwrap().0 - 1),
                None => GlobalIndex(TOTAL_AYAHS),
            };
            assert_eq!(last_of_juz.end_global, juz_end);

            let first_of_juz = map.page(k * PAGES_PER_JUZ - PAGES_PER_JUZ + 1);
            assert_eq!(first_of_juz.start, JUZ_STARTS[usize::from(k) - 1]);
        }
    }

    #[test]
    fn test_first_juz_concrete_mapping() {
        // Juz 1 covers global 1..=148 (Al-Fatihah plus Al-Baqarah 1..141).
        let (_, map) = build();
        assert_eq!(map.page(1).start, AyahRef::new(1, 1));
        assert_eq!(map.page(20).end, AyahRef::new(2, 141));
        assert_eq!(map.page(21).start, AyahRef::new(2, 142));
    }

    #[test]
    fn test_twenty_pages_per_juz() {
        let (_, map) = build();
        for p in map.iter() {
            let expected_juz = (p.number - 1) / PAGES_PER_JUZ + 1;
            assert_eq!(u16::from(p.juz), expected_juz);
        }
    }

    #[test]
    fn test_page_lookup_clamps() {
        let (_, map) = build();
        assert_eq!(map.page(0).number, 1);
        assert_eq!(map.page(601).number, 600);
        assert_eq!(map.page(u16::MAX).number, 600);
        assert_eq!(map.page(42).number, 42);
    }

    #[test]
    fn test_page_for_ayah_is_idempotent() {
        let (index, map) = build();
        for s in crate::meta::SURAHS {
            for a in 1..=s.ayah_count {
                let at = AyahRef::new(s.number, a);
                let n = map.page_for_ayah(&index, at);
                let page = map.page(n);
                let g = index.to_global(at).unwrap();
                assert!(page.contains(g), "ayah {at:?} not on page {n}");
            }
        }
    }

    #[test]
    fn test_page_for_ayah_invalid_falls_back() {
        let (index, map) = build();
        assert_eq!(map.page_for_ayah(&index, AyahRef::new(0, 1)), 1);
        assert_eq!(map.page_for_ayah(&index, AyahRef::new(1, 99)), 1);
        assert_eq!(map.page_for_ayah(&index, AyahRef::new(115, 1)), 1);
    }
}
