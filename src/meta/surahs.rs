//! Canonical surah table (Kufan count, 6236 ayat total)

use super::SurahMeta;

/// All 114 surahs in canonical order.
pub const SURAHS: [SurahMeta; 114] = [
    SurahMeta { number: 1, name: "Al-Fatihah", ayah_count: 7 },
    SurahMeta { number: 2, name: "Al-Baqarah", ayah_count: 286 },
    SurahMeta { number: 3, name: "Ali 'Imran", ayah_count: 200 },
    SurahMeta { number: 4, name: "An-Nisa", ayah_count: 176 },
    SurahMeta { number: 5, name: "Al-Ma'idah", ayah_count: 120 },
    SurahMeta { number: 6, name: "Al-An'am", ayah_count: 165 },
    SurahMeta { number: 7, name: "Al-A'raf", ayah_count: 206 },
    SurahMeta { number: 8, name: "Al-Anfal", ayah_count: 75 },
    SurahMeta { number: 9, name: "At-Tawbah", ayah_count: 129 },
    SurahMeta { number: 10, name: "Yunus", ayah_count: 109 },
    SurahMeta { number: 11, name: "Hud", ayah_count: 123 },
    SurahMeta { number: 12, name: "Yusuf", ayah_count: 111 },
    SurahMeta { number: 13, name: "Ar-Ra'd", ayah_count: 43 },
    SurahMeta { number: 14, name: "Ibrahim", ayah_count: 52 },
    SurahMeta { number: 15, name: "Al-Hijr", ayah_count: 99 },
    SurahMeta { number: 16, name: "An-Nahl", ayah_count: 128 },
    SurahMeta { number: 17, name: "Al-Isra", ayah_count: 111 },
    SurahMeta { number: 18, name: "Al-Kahf", ayah_count: 110 },
    SurahMeta { number: 19, name: "Maryam", ayah_count: 98 },
    SurahMeta { number: 20, name: "Taha", ayah_count: 135 },
    SurahMeta { number: 21, name: "Al-Anbya", ayah_count: 112 },
    SurahMeta { number: 22, name: "Al-Hajj", ayah_count: 78 },
    SurahMeta { number: 23, name: "Al-Mu'minun", ayah_count: 118 },
    SurahMeta { number: 24, name: "An-Nur", ayah_count: 64 },
    SurahMeta { number: 25, name: "Al-Furqan", ayah_count: 77 },
    SurahMeta { number: 26, name: "Ash-Shu'ara", ayah_count: 227 },
    SurahMeta { number: 27, name: "An-Naml", ayah_count: 93 },
    SurahMeta { number: 28, name: "Al-Qasas", ayah_count: 88 },
    SurahMeta { number: 29, name: "Al-'Ankabut", ayah_count: 69 },
    SurahMeta { number: 30, name: "Ar-Rum", ayah_count: 60 },
    SurahMeta { number: 31, name: "Luqman", ayah_count: 34 },
    SurahMeta { number: 32, name: "As-Sajdah", ayah_count: 30 },
    SurahMeta { number: 33, name: "Al-Ahzab", ayah_count: 73 },
    SurahMeta { number: 34, name: "Saba", ayah_count: 54 },
    SurahMeta { number: 35, name: "Fatir", ayah_count: 45 },
    SurahMeta { number: 36, name: "Ya-Sin", ayah_count: 83 },
    SurahMeta { number: 37, name: "As-Saffat", ayah_count: 182 },
    SurahMeta { number: 38, name: "Sad", ayah_count: 88 },
    SurahMeta { number: 39, name: "Az-Zumar", ayah_count: 75 },
    SurahMeta { number: 40, name: "Ghafir", ayah_count: 85 },
    SurahMeta { number: 41, name: "Fussilat", ayah_count: 54 },
    SurahMeta { number: 42, name: "Ash-Shuraa", ayah_count: 53 },
    SurahMeta { number: 43, name: "Az-Zukhruf", ayah_count: 89 },
    SurahMeta { number: 44, name: "Ad-Dukhan", ayah_count: 59 },
    SurahMeta { number: 45, name: "Al-Jathiyah", ayah_count: 37 },
    SurahMeta { number: 46, name: "Al-Ahqaf", ayah_count: 35 },
    SurahMeta { number: 47, name: "Muhammad", ayah_count: 38 },
    SurahMeta { number: 48, name: "Al-Fath", ayah_count: 29 },
    SurahMeta { number: 49, name: "Al-Hujurat", ayah_count: 18 },
    SurahMeta { number: 50, name: "Qaf", ayah_count: 45 },
    SurahMeta { number: 51, name: "Adh-Dhariyat", ayah_count: 60 },
    SurahMeta { number: 52, name: "At-Tur", ayah_count: 49 },
    SurahMeta { number: 53, name: "An-Najm", ayah_count: 62 },
    SurahMeta { number: 54, name: "Al-Qamar", ayah_count: 55 },
    SurahMeta { number: 55, name: "Ar-Rahman", ayah_count: 78 },
    SurahMeta { number: 56, name: "Al-Waqi'ah", ayah_count: 96 },
    SurahMeta { number: 57, name: "Al-Hadid", ayah_count: 29 },
    SurahMeta { number: 58, name: "Al-Mujadila", ayah_count: 22 },
    SurahMeta { number: 59, name: "Al-Hashr", ayah_count: 24 },
    SurahMeta { number: 60, name: "Al-Mumtahanah", ayah_count: 13 },
    SurahMeta { number: 61, name: "As-Saf", ayah_count: 14 },
    SurahMeta { number: 62, name: "Al-Jumu'ah", ayah_count: 11 },
    SurahMeta { number: 63, name: "Al-Munafiqun", ayah_count: 11 },
    SurahMeta { number: 64, name: "At-Taghabun", ayah_count: 18 },
    SurahMeta { number: 65, name: "At-Talaq", ayah_count: 12 },
    SurahMeta { number: 66, name: "At-Tahrim", ayah_count: 12 },
    SurahMeta { number: 67, name: "Al-Mulk", ayah_count: 30 },
    SurahMeta { number: 68, name: "Al-Qalam", ayah_count: 52 },
    SurahMeta { number: 69, name: "Al-Haqqah", ayah_count: 52 },
    SurahMeta { number: 70, name: "Al-Ma'arij", ayah_count: 44 },
    SurahMeta { number: 71, name: "Nuh", ayah_count: 28 },
    SurahMeta { number: 72, name: "Al-Jinn", ayah_count: 28 },
    SurahMeta { number: 73, name: "Al-Muzzammil", ayah_count: 20 },
    SurahMeta { number: 74, name: "Al-Muddaththir", ayah_count: 56 },
    SurahMeta { number: 75, name: "Al-Qiyamah", ayah_count: 40 },
    SurahMeta { number: 76, name: "Al-Insan", ayah_count: 31 },
    SurahMeta { number: 77, name: "Al-Mursalat", ayah_count: 50 },
    SurahMeta { number: 78, name: "An-Naba", ayah_count: 40 },
    SurahMeta { number: 79, name: "An-Nazi'at", ayah_count: 46 },
    SurahMeta { number: 80, name: "'Abasa", ayah_count: 42 },
    SurahMeta { number: 81, name: "At-Takwir", ayah_count: 29 },
    SurahMeta { number: 82, name: "Al-Infitar", ayah_count: 19 },
    SurahMeta { number: 83, name: "Al-Mutaffifin", ayah_count: 36 },
    SurahMeta { number: 84, name: "Al-Inshiqaq", ayah_count: 25 },
    SurahMeta { number: 85, name: "Al-Buruj", ayah_count: 22 },
    SurahMeta { number: 86, name: "At-Tariq", ayah_count: 17 },
    SurahMeta { number: 87, name: "Al-A'la", ayah_count: 19 },
    SurahMeta { number: 88, name: "Al-Ghashiyah", ayah_count: 26 },
    SurahMeta { number: 89, name: "Al-Fajr", ayah_count: 30 },
    SurahMeta { number: 90, name: "Al-Balad", ayah_count: 20 },
    SurahMeta { number: 91, name: "Ash-Shams", ayah_count: 15 },
    SurahMeta { number: 92, name: "Al-Layl", ayah_count: 21 },
    SurahMeta { number: 93, name: "Ad-Duhaa", ayah_count: 11 },
    SurahMeta { number: 94, name: "Ash-Sharh", ayah_count: 8 },
    SurahMeta { number: 95, name: "At-Tin", ayah_count: 8 },
    SurahMeta { number: 96, name: "Al-'Alaq", ayah_count: 19 },
    SurahMeta { number: 97, name: "Al-Qadr", ayah_count: 5 },
    SurahMeta { number: 98, name: "Al-Bayyinah", ayah_count: 8 },
    SurahMeta { number: 99, name: "Az-Zalzalah", ayah_count: 8 },
    SurahMeta { number: 100, name: "Al-'Adiyat", ayah_count: 11 },
    SurahMeta { number: 101, name: "Al-Qari'ah", ayah_count: 11 },
    SurahMeta { number: 102, name: "At-Takathur", ayah_count: 8 },
    SurahMeta { number: 103, name: "Al-'Asr", ayah_count: 3 },
    SurahMeta { number: 104, name: "Al-Humazah", ayah_count: 9 },
    SurahMeta { number: 105, name: "Al-Fil", ayah_count: 5 },
    SurahMeta { number: 106, name: "Quraysh", ayah_count: 4 },
    SurahMeta { number: 107, name: "Al-Ma'un", ayah_count: 7 },
    SurahMeta { number: 108, name: "Al-Kawthar", ayah_count: 3 },
    SurahMeta { number: 109, name: "Al-Kafirun", ayah_count: 6 },
    SurahMeta { number: 110, name: "An-Nasr", ayah_count: 3 },
    SurahMeta { number: 111, name: "Al-Masad", ayah_count: 5 },
    SurahMeta { number: 112, name: "Al-Ikhlas", ayah_count: 4 },
    SurahMeta { number: 113, name: "Al-Falaq", ayah_count: 5 },
    SurahMeta { number: 114, name: "An-Nas", ayah_count: 6 },
];
