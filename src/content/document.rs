//! Parsing of external surah documents
//!
//! The content store is addressed by surah number and returns a JSON
//! document keyed by the surah-number-as-string:
//!
//! ```json
//! { "2": { "number": "2", "name": "Al-Baqarah", "text": { "1": "...", "2": "..." } } }
//! ```
//!
//! The `text` mapping is keyed by ayah-number-as-string and carries no
//! ordering guarantee, so it is converted to a numerically sorted list
//! before use.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// One ayah of fetched content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ayah {
    pub number: u16,
    pub text: String,
}

/// Fully parsed content of one surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahContent {
    pub number: u16,
    pub name: String,
    pub ayahs: Vec<Ayah>,
}

/// Why a surah document could not be parsed.
#[derive(Debug)]
pub enum DocumentError {
    /// The document was not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// The document did not contain the requested surah key.
    MissingSurah(u16),
    /// An ayah key in the `text` mapping was not a number.
    BadAyahKey(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Json(e) => write!(f, "malformed surah document: {e}"),
            DocumentError::MissingSurah(n) => write!(f, "document has no entry for surah {n}"),
            DocumentError::BadAyahKey(k) => write!(f, "non-numeric ayah key {k:?}"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Wire shape of one surah entry. The embedded `number` field is ignored;
/// the requested surah number is authoritative.
#[derive(Deserialize)]
struct RawSurah {
    name: String,
    text: HashMap<String, String>,
}

/// Parse the document returned by the content store for `surah`.
pub fn parse(surah: u16, json: &str) -> Result<SurahContent, DocumentError> {
    let mut doc: HashMap<String, RawSurah> =
        serde_json::from_str(json).map_err(DocumentError::Json)?;
    let raw = doc
        .remove(&surah.to_string())
        .ok_or(DocumentError::MissingSurah(surah))?;

    let mut ayahs = Vec::with_capacity(raw.text.len());
    for (key, text) in raw.text {
        let number: u16 = key
            .parse()
            .map_err(|_| DocumentError::BadAyahKey(key))?;
        ayahs.push(Ayah { number, text });
    }
    ayahs.sort_by_key(|a| a.number);

    Ok(SurahContent {
        number: surah,
        name: raw.name,
        ayahs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_numerically() {
        let json = r#"{"1": {"number": "1", "name": "Al-Fatihah",
            "text": {"10": "ten", "2": "two", "1": "one"}}}"#;
        let content = parse(1, json).unwrap();
        assert_eq!(content.number, 1);
        assert_eq!(content.name, "Al-Fatihah");
        let numbers: Vec<u16> = content.ayahs.iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(content.ayahs[2].text, "ten");
    }

    #[test]
    fn test_parse_missing_surah_key() {
        let json = r#"{"2": {"name": "Al-Baqarah", "text": {"1": "x"}}}"#;
        assert!(matches!(parse(1, json), Err(DocumentError::MissingSurah(1))));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse(1, "not json"), Err(DocumentError::Json(_))));
        assert!(matches!(parse(1, r#"{"1": []}"#), Err(DocumentError::Json(_))));
    }

    #[test]
    fn test_parse_bad_ayah_key() {
        let json = r#"{"1": {"name": "Al-Fatihah", "text": {"one": "x"}}}"#;
        assert!(matches!(parse(1, json), Err(DocumentError::BadAyahKey(_))));
    }
}
