//! Verse addressing: (surah, ayah) coordinates and the global linear index

use serde::{Deserialize, Serialize};

use crate::meta::{self, LAST_AYAH, SURAH_COUNT, TOTAL_AYAHS};

/// Address of one ayah as (surah, ayah), both 1-based.
///
/// Ordering is lexicographic on (surah, ayah), matching reading order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct AyahRef {
    pub surah: u16,
    pub ayah: u16,
}

impl AyahRef {
    /// Create a new reference without validation.
    pub fn new(surah: u16, ayah: u16) -> Self {
        Self { surah, ayah }
    }
}

/// 1-based position in the fully concatenated text.
///
/// Derived from an [`AyahRef`] via [`VerseIndex`]; never stored
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalIndex(pub u32);

/// Bidirectional converter between [`AyahRef`] and [`GlobalIndex`].
///
/// Holds the cumulative ayah-count table, computed once from the static
/// surah metadata and immutable afterwards.
#[derive(Debug, Clone)]
pub struct VerseIndex {
    /// `cumulative[s]` = total ayat in surahs 1..=s; `cumulative[0]` = 0.
    cumulative: [u32; 115],
}

impl Default for VerseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl VerseIndex {
    /// Build the cumulative table from the static surah metadata.
    pub fn new() -> Self {
        let mut cumulative = [0u32; 115];
        let mut sum = 0u32;
        for (i, s) in meta::SURAHS.iter().enumerate() {
            sum += u32::from(s.ayah_count);
            cumulative[i + 1] = sum;
        }
        Self { cumulative }
    }

    /// Total ayah count of the whole text.
    pub fn total(&self) -> GlobalIndex {
        GlobalIndex(self.cumulative[usize::from(SURAH_COUNT)])
    }

    /// Convert a coordinate to its global index.
    ///
    /// `None` when the surah is outside 1..=114 or the ayah is outside
    /// that surah's range (invalid-coordinate signal; never fabricates an
    /// index).
    pub fn to_global(&self, at: AyahRef) -> Option<GlobalIndex> {
        if at.surah < 1 || at.surah > SURAH_COUNT {
            return None;
        }
        let count = meta::ayah_count(at.surah)?;
        if at.ayah < 1 || at.ayah > count {
            return None;
        }
        Some(GlobalIndex(
            self.cumulative[usize::from(at.surah) - 1] + u32::from(at.ayah),
        ))
    }

    /// Convert a global index back to a coordinate.
    ///
    /// Saturates rather than failing: indices past the end of the text map
    /// to the last ayah, and 0 maps to the first.
    pub fn from_global(&self, index: GlobalIndex) -> AyahRef {
        if index.0 == 0 {
            return AyahRef::new(1, 1);
        }
        if index.0 > TOTAL_AYAHS {
            return LAST_AYAH;
        }
        // First surah whose cumulative total reaches the index.
        let pos = self.cumulative[1..].partition_point(|&c| c < index.0);
        let surah = (pos + 1) as u16;
        let ayah = (index.0 - self.cumulative[pos]) as u16;
        AyahRef::new(surah, ayah)
    }
}
