//! Chronological match history.

use crate::engine::RoundLines;

/// Log lines of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEntry {
    /// 1-based round number.
    pub round: u32,
    pub lines: RoundLines,
}

/// Every round's narrative, oldest first.
///
/// Nothing is ever discarded here; display layers truncate when reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchLog {
    entries: Vec<RoundEntry>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: u32, lines: RoundLines) {
        self.entries.push(RoundEntry { round, lines });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines with the newest round first; lines inside a round keep their
    /// recorded order.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .rev()
            .flat_map(|entry| entry.lines.iter().map(String::as_str))
    }

    /// Lines in chronological order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.lines.iter().map(String::as_str))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
