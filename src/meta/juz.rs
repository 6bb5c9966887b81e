//! Juz boundaries (standard 30-part division)

use crate::verse::AyahRef;

/// Start coordinate of each juz, in order. Juz `k` (1-based) starts at
/// `JUZ_STARTS[k - 1]` and runs up to the ayah before the next entry;
/// juz 30 runs to the last ayah of the text.
pub const JUZ_STARTS: [AyahRef; 30] = [
    AyahRef { surah: 1, ayah: 1 },
    AyahRef { surah: 2, ayah: 142 },
    AyahRef { surah: 2, ayah: 253 },
    AyahRef { surah: 3, ayah: 93 },
    AyahRef { surah: 4, ayah: 24 },
    AyahRef { surah: 4, ayah: 148 },
    AyahRef { surah: 5, ayah: 82 },
    AyahRef { surah: 6, ayah: 111 },
    AyahRef { surah: 7, ayah: 88 },
    AyahRef { surah: 8, ayah: 41 },
    AyahRef { surah: 9, ayah: 93 },
    AyahRef { surah: 11, ayah: 6 },
    AyahRef { surah: 12, ayah: 53 },
    AyahRef { surah: 15, ayah: 1 },
    AyahRef { surah: 17, ayah: 1 },
    AyahRef { surah: 18, ayah: 75 },
    AyahRef { surah: 21, ayah: 1 },
    AyahRef { surah: 23, ayah: 1 },
    AyahRef { surah: 25, ayah: 21 },
    AyahRef { surah: 27, ayah: 56 },
    AyahRef { surah: 29, ayah: 46 },
    AyahRef { surah: 33, ayah: 31 },
    AyahRef { surah: 36, ayah: 28 },
    AyahRef { surah: 39, ayah: 32 },
    AyahRef { surah: 41, ayah: 47 },
    AyahRef { surah: 46, ayah: 1 },
    AyahRef { surah: 51, ayah: 31 },
    AyahRef { surah: 58, ayah: 1 },
    AyahRef { surah: 67, ayah: 1 },
    AyahRef { surah: 78, ayah: 1 },
];
