//! Reading-session history with write-time consolidation
//!
//! Progress events arrive whenever the reading position advances. Instead
//! of one row per page turn, an event that shares its date and start
//! coordinate with the most recent entry extends that entry's end in
//! place; a changed start (or a new day) begins a new session. History is
//! most-recent-first, persisted by the host as JSON, and capped: exceeding
//! 50 entries prunes it down to the 10 most recent.

use serde::{Deserialize, Serialize};

use crate::verse::AyahRef;

/// Entry count that triggers pruning.
const PRUNE_THRESHOLD: usize = 50;

/// Entries retained after pruning.
const PRUNE_KEEP: usize = 10;

/// One consolidated reading session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Where the session started
    pub start: AyahRef,
    /// Where the session has reached (extended in place while the
    /// session continues)
    pub end: AyahRef,
}

/// Capped, most-recent-first session history.
///
/// All mutation goes through `&mut self`, which is what serializes
/// concurrent event dispatch: there is exactly one owner of the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog {
    history: Vec<SessionEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a progress event.
    ///
    /// Same date and same start as the most recent entry: continuation —
    /// only that entry's end is overwritten, its position unchanged.
    /// Anything else: a new session is inserted at the front, and the cap
    /// is enforced.
    pub fn append(&mut self, event: SessionEntry) {
        if let Some(last) = self.history.first_mut() {
            if last.date == event.date && last.start == event.start {
                last.end = event.end;
                return;
            }
        }

        self.history.insert(0, event);
        if self.history.len() > PRUNE_THRESHOLD {
            self.history.truncate(PRUNE_KEEP);
        }
    }

    /// Remove one entry by position. Out-of-range positions are a no-op.
    pub fn delete(&mut self, index: usize) {
        if index < self.history.len() {
            self.history.remove(index);
        }
    }

    /// Apply the cap rule without inserting anything.
    pub fn prune(&mut self) {
        if self.history.len() > PRUNE_THRESHOLD {
            self.history.truncate(PRUNE_KEEP);
        }
    }

    /// Drop the entire history.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[SessionEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Serialize the history for host persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.history).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the history from persisted JSON. Malformed input leaves the
    /// existing history untouched and returns `false`.
    pub fn load_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Vec<SessionEntry>>(json) {
            Ok(history) => {
                self.history = history;
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, start: (u16, u16), end: (u16, u16)) -> SessionEntry {
        SessionEntry {
            date: date.to_string(),
            start: AyahRef::new(start.0, start.1),
            end: AyahRef::new(end.0, end.1),
        }
    }

    #[test]
    fn test_continuation_extends_in_place() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (2, 1), (2, 10)));
        log.append(event("2024-03-01", (2, 1), (2, 25)));

        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.start, AyahRef::new(2, 1));
        assert_eq!(entry.end, AyahRef::new(2, 25));
    }

    #[test]
    fn test_changed_start_breaks_session() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (2, 1), (2, 10)));
        log.append(event("2024-03-01", (3, 1), (3, 5)));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].start, AyahRef::new(3, 1));
        assert_eq!(log.entries()[0].end, AyahRef::new(3, 5));
        assert_eq!(log.entries()[1].start, AyahRef::new(2, 1));
        assert_eq!(log.entries()[1].end, AyahRef::new(2, 10));
    }

    #[test]
    fn test_changed_date_breaks_session() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (2, 1), (2, 10)));
        log.append(event("2024-03-02", (2, 1), (2, 25)));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_prune_after_overflow() {
        let mut log = SessionLog::new();
        for i in 0..51u16 {
            // Distinct starts so every event opens a new session.
            log.append(event("2024-03-01", (2, i + 1), (2, i + 1)));
        }
        assert_eq!(log.len(), 10);
        // The 10 most recent survive, most recent first.
        for (pos, entry) in log.entries().iter().enumerate() {
            assert_eq!(entry.start.ayah, 51 - pos as u16);
        }
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (1, 1), (1, 7)));
        log.delete(5);
        assert_eq!(log.len(), 1);
        log.delete(0);
        assert!(log.is_empty());
        log.delete(0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (1, 1), (1, 7)));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (2, 1), (2, 10)));
        log.append(event("2024-03-02", (2, 11), (2, 30)));
        let json = log.to_json();

        let mut restored = SessionLog::new();
        assert!(restored.load_json(&json));
        assert_eq!(restored.entries(), log.entries());
    }

    #[test]
    fn test_malformed_import_keeps_history() {
        let mut log = SessionLog::new();
        log.append(event("2024-03-01", (2, 1), (2, 10)));
        assert!(!log.load_json("{ not json"));
        assert!(!log.load_json(r#"{"date": "x"}"#));
        assert_eq!(log.len(), 1);
    }
}
