/// One battle log line with its per-floor sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub seq: u32,
    pub message: String,
}

/// Append-only combat history for the current floor.
///
/// Cleared on every floor transition; sequence numbers restart from zero.
/// Presentation order (most-recent-first or chronological) is left to the
/// embedder.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, assigning the next sequence number.
    pub fn push(&mut self, message: impl Into<String>) {
        let seq = self.entries.len() as u32;
        self.entries.push(LogEntry {
            seq,
            message: message.into(),
        });
    }

    /// Drops all entries. Called on floor transitions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_numbers() {
        let mut log = BattleLog::new();
        log.push("first");
        log.push(String::from("second"));
        let seqs: Vec<u32> = log.iter().map(|entry| entry.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(log.last().map(|entry| entry.message.as_str()), Some("second"));
    }

    #[test]
    fn clear_restarts_sequencing() {
        let mut log = BattleLog::new();
        log.push("old floor");
        log.clear();
        assert!(log.is_empty());
        log.push("new floor");
        assert_eq!(log.entries()[0].seq, 0);
    }
}
