//! Question domain records and the source-shorthand enumeration.
//!
//! # Responsibility
//! - Define the live `Question` record and its immutable `HistoryEntry`
//!   snapshot shape.
//! - Provide the partial-change set used by the versioned-update engine.
//!
//! # Invariants
//! - `version` starts at 1 and only ever grows by exactly 1 per tracked
//!   mutation.
//! - `created_at`/`created_by` are set once and copied verbatim into every
//!   snapshot; they never change on the live row.
//! - `source_shorthand` is always one of the three catalog codes.

use serde::{Deserialize, Serialize};

/// Stable integer identifier of a live question row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type QuestionId = i64;

/// Stable integer identifier of a history snapshot row.
pub type HistoryId = i64;

/// Catalog source codes carried on every question.
///
/// The set is closed: persistence rejects anything outside these three
/// single-letter codes, and parsing from external input goes through
/// [`SourceShorthand::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceShorthand {
    /// Source code `A`.
    A,
    /// Source code `K`.
    K,
    /// Source code `E`.
    E,
}

impl SourceShorthand {
    /// Returns the single-letter code persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::K => "K",
            Self::E => "E",
        }
    }

    /// Parses a stored or user-supplied code. Returns `None` for anything
    /// outside the closed three-value set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A" => Some(Self::A),
            "K" => Some(Self::K),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    /// All valid codes, in catalog order. Used by stats and messages.
    pub fn all() -> [Self; 3] {
        [Self::A, Self::K, Self::E]
    }
}

/// Live catalog record with versioning and audit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable row id.
    pub id: QuestionId,
    /// The question text shown to users.
    pub question_text: String,
    /// Group/bucket the question belongs to.
    pub group_name: String,
    /// Catalog source code.
    pub source_shorthand: SourceShorthand,
    /// Monotonic version counter; starts at 1.
    pub version: i64,
    /// Inactive questions are hidden from default listings.
    pub is_active: bool,
    /// Creation timestamp in epoch milliseconds. Immutable.
    pub created_at: i64,
    /// Creator identity. Immutable.
    pub created_by: Option<String>,
    /// Last-mutation timestamp in epoch milliseconds.
    pub updated_at: i64,
    /// Identity of the last actor to mutate this row.
    pub updated_by: Option<String>,
}

/// Immutable snapshot of a question's state before one tracked mutation.
///
/// Snapshot fields mirror the live record at the moment it was replaced;
/// `replaced_*` and `reason` describe the mutation event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable snapshot row id.
    pub id: HistoryId,
    /// Owning question. Snapshots are deleted with their question.
    pub question_id: QuestionId,
    /// Question text as it was before the mutation.
    pub question_text: String,
    /// Group name as it was before the mutation.
    pub group_name: String,
    /// Source code as it was before the mutation.
    pub source_shorthand: SourceShorthand,
    /// The version number this snapshot preserves (the one replaced).
    pub version: i64,
    /// Original creation timestamp, copied verbatim from the question.
    pub created_at: i64,
    /// Original creator, copied verbatim from the question.
    pub created_by: Option<String>,
    /// When the mutation replaced this state, in epoch milliseconds.
    pub replaced_at: i64,
    /// Who performed the mutation.
    pub replaced_by: Option<String>,
    /// Free-text reason supplied or synthesized for the mutation.
    pub reason: Option<String>,
}

/// Partial set of content-field changes for the versioned-update engine.
///
/// Absent fields keep their current value. An all-absent change set still
/// counts as a tracked mutation: the engine snapshots and bumps the version
/// on the same code path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionChanges {
    /// Replacement question text, when present.
    pub question_text: Option<String>,
    /// Replacement group name, when present.
    pub group_name: Option<String>,
    /// Replacement source code, when present.
    pub source_shorthand: Option<SourceShorthand>,
}

impl QuestionChanges {
    /// Returns the post-change content fields given the current record.
    pub fn resolve_against(&self, current: &Question) -> (String, String, SourceShorthand) {
        (
            self.question_text
                .clone()
                .unwrap_or_else(|| current.question_text.clone()),
            self.group_name
                .clone()
                .unwrap_or_else(|| current.group_name.clone()),
            self.source_shorthand.unwrap_or(current.source_shorthand),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Question, QuestionChanges, SourceShorthand};

    fn sample_question() -> Question {
        Question {
            id: 1,
            question_text: "What changed this week?".to_string(),
            group_name: "Weekly review".to_string(),
            source_shorthand: SourceShorthand::A,
            version: 3,
            is_active: true,
            created_at: 1_000,
            created_by: Some("alice@example.com".to_string()),
            updated_at: 2_000,
            updated_by: Some("bob@example.com".to_string()),
        }
    }

    #[test]
    fn parse_accepts_only_the_three_codes() {
        assert_eq!(SourceShorthand::parse("A"), Some(SourceShorthand::A));
        assert_eq!(SourceShorthand::parse("K"), Some(SourceShorthand::K));
        assert_eq!(SourceShorthand::parse("E"), Some(SourceShorthand::E));
        assert_eq!(SourceShorthand::parse("a"), None);
        assert_eq!(SourceShorthand::parse(""), None);
        assert_eq!(SourceShorthand::parse("X"), None);
    }

    #[test]
    fn parse_roundtrips_as_str() {
        for code in SourceShorthand::all() {
            assert_eq!(SourceShorthand::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn empty_changes_resolve_to_current_values() {
        let question = sample_question();
        let (text, group, source) = QuestionChanges::default().resolve_against(&question);
        assert_eq!(text, question.question_text);
        assert_eq!(group, question.group_name);
        assert_eq!(source, question.source_shorthand);
    }

    #[test]
    fn present_changes_override_current_values() {
        let question = sample_question();
        let changes = QuestionChanges {
            question_text: Some("What blocked you?".to_string()),
            group_name: None,
            source_shorthand: Some(SourceShorthand::E),
        };
        let (text, group, source) = changes.resolve_against(&question);
        assert_eq!(text, "What blocked you?");
        assert_eq!(group, question.group_name);
        assert_eq!(source, SourceShorthand::E);
    }
}
