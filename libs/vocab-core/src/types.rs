//! Core types for the paste-to-deck pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vocabulary row: an English term, its Portuguese counterpart and an
/// optional breakdown note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub id: Uuid,
    pub source: String,
    pub target: String,
    pub note: String,
    /// 1-based line of the paste this record was read from.
    pub line_number: usize,
}

impl FlashcardRecord {
    /// Build a record with a fresh id.
    ///
    /// Returns `None` when either side is empty after trimming.
    pub fn new(source: &str, target: &str, note: &str, line_number: usize) -> Option<Self> {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() || target.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            source: source.to_string(),
            target: target.to_string(),
            note: note.trim().to_string(),
            line_number,
        })
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

/// Header labels recognised on the first row of a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabels {
    pub source: String,
    pub target: String,
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self {
            source: "english".to_string(),
            target: "portuguese".to_string(),
        }
    }
}

impl HeaderLabels {
    /// Whether the given leading fields look like a header row.
    pub fn matches(&self, first: &str, second: &str) -> bool {
        first.to_lowercase() == self.source.to_lowercase()
            || second.to_lowercase() == self.target.to_lowercase()
    }
}

/// Which language is shown as the question side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyDirection {
    SourceToTarget,
    TargetToSource,
}

impl Default for StudyDirection {
    fn default() -> Self {
        Self::SourceToTarget
    }
}

impl StudyDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::SourceToTarget => Self::TargetToSource,
            Self::TargetToSource => Self::SourceToTarget,
        }
    }
}

/// 1-based position readout for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(cursor: usize, total: usize) -> Self {
        if total == 0 {
            return Self { current: 0, total };
        }
        Self {
            current: cursor + 1,
            total,
        }
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_both_sides() {
        assert!(FlashcardRecord::new("cat", "", "", 1).is_none());
        assert!(FlashcardRecord::new("  ", "gato", "", 1).is_none());
        assert!(FlashcardRecord::new("cat", "gato", "", 1).is_some());
    }

    #[test]
    fn record_ids_are_unique() {
        let a = FlashcardRecord::new("cat", "gato", "", 1).unwrap();
        let b = FlashcardRecord::new("cat", "gato", "", 1).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn header_labels_ignore_case() {
        let labels = HeaderLabels::default();
        assert!(labels.matches("English", "x"));
        assert!(labels.matches("x", "PORTUGUESE"));
        assert!(!labels.matches("hello", "olá"));
    }

    #[test]
    fn direction_toggles_back_and_forth() {
        let d = StudyDirection::default();
        assert_eq!(d, StudyDirection::SourceToTarget);
        assert_eq!(d.toggled(), StudyDirection::TargetToSource);
        assert_eq!(d.toggled().toggled(), d);
    }

    #[test]
    fn direction_serializes_snake_case() {
        let json = serde_json::to_string(&StudyDirection::TargetToSource).unwrap();
        assert_eq!(json, "\"target_to_source\"");
    }

    #[test]
    fn progress_is_one_based() {
        assert_eq!(Progress::new(0, 3), Progress { current: 1, total: 3 });
        assert!(Progress::new(2, 3).is_last());
        assert_eq!(Progress::new(0, 0), Progress { current: 0, total: 0 });
    }
}
