use crate::service::Verdict;

/// One verdict returned during this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Headline as submitted (after trimming).
    pub headline: String,
    /// Classification label.
    pub label: Verdict,
    /// Confidence display string.
    pub confidence: String,
}

/// In-memory record of this session's verdicts, newest first.
///
/// Nothing here is persisted; the list starts empty on every launch.
#[derive(Debug, Default)]
pub struct SessionHistoryState {
    entries: Vec<HistoryEntry>,
}

impl SessionHistoryState {
    /// Prepend a verdict to the history.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// True when no predictions have been made yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
