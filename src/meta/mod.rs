//! Static reference data for the canonical text
//!
//! Loaded once per process, never mutated. Everything downstream (verse
//! index, page map, content assembly) derives from these tables.

mod juz;
mod surahs;

pub use juz::JUZ_STARTS;
pub use surahs::SURAHS;

use crate::verse::AyahRef;

/// Number of surahs in the text.
pub const SURAH_COUNT: u16 = 114;

/// Number of ajza' (macro-parts) in the 30-part division.
pub const JUZ_COUNT: u8 = 30;

/// Fixed number of pages assigned to each juz.
pub const PAGES_PER_JUZ: u16 = 20;

/// Total page count (`JUZ_COUNT * PAGES_PER_JUZ`).
pub const PAGE_COUNT: u16 = 600;

/// Total ayah count across all surahs (Kufan count).
pub const TOTAL_AYAHS: u32 = 6236;

/// The final ayah of the text.
pub const LAST_AYAH: AyahRef = AyahRef { surah: 114, ayah: 6 };

/// Static metadata for one surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahMeta {
    /// Surah number, 1..=114
    pub number: u16,
    /// Transliterated display name
    pub name: &'static str,
    /// Ayah count for this surah
    pub ayah_count: u16,
}

/// Look up a surah by number. `None` outside 1..=114.
pub fn surah(number: u16) -> Option<&'static SurahMeta> {
    if number < 1 || number > SURAH_COUNT {
        return None;
    }
    Some(&SURAHS[usize::from(number) - 1])
}

/// Ayah count of a surah. `None` outside 1..=114.
pub fn ayah_count(number: u16) -> Option<u16> {
    surah(number).map(|s| s.ayah_count)
}
