//! Question use-case service.
//!
//! # Responsibility
//! - Enforce boundary validation: trimmed non-empty text/group, the closed
//!   source enumeration, positive history ids.
//! - Delegate persistence to repository implementations and read back
//!   written state.
//! - Compose group summaries with their nested questions.
//!
//! # Invariants
//! - Values are persisted trimmed; validation rejects inputs that are empty
//!   after trimming.
//! - Not-found is an absent result, never an error.

use crate::model::question::{
    HistoryEntry, HistoryId, Question, QuestionChanges, QuestionId, SourceShorthand,
};
use crate::repo::question_repo::{
    GroupListQuery, GroupSummary, QuestionListQuery, QuestionRepository, QuestionStats, RepoError,
    RepoResult, ToggleResult,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for question use-cases.
#[derive(Debug)]
pub enum QuestionServiceError {
    /// Question text empty after trimming.
    EmptyQuestionText,
    /// Group name empty after trimming.
    EmptyGroupName,
    /// History ids must be positive.
    InvalidHistoryId(HistoryId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for QuestionServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuestionText => write!(f, "question text cannot be empty"),
            Self::EmptyGroupName => write!(f, "group name cannot be empty"),
            Self::InvalidHistoryId(id) => write!(f, "history id must be positive, got {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent question state: {details}"),
        }
    }
}

impl Error for QuestionServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for QuestionServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Request model for creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestionRequest {
    /// Question text; trimmed before persistence.
    pub question_text: String,
    /// Group/bucket name; trimmed before persistence.
    pub group_name: String,
    /// Catalog source code.
    pub source_shorthand: SourceShorthand,
    /// Creator identity stamped into both audit pairs.
    pub created_by: Option<String>,
}

/// Request model for a partial content update.
///
/// Absent fields keep their current value. A request with every field
/// absent still counts as a tracked mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
    pub group_name: Option<String>,
    pub source_shorthand: Option<SourceShorthand>,
    /// Free-text reason recorded on the history snapshot.
    pub reason: Option<String>,
}

/// One group summary with its matching questions nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWithQuestions {
    pub name: String,
    pub question_count: i64,
    pub questions: Vec<Question>,
}

/// Use-case service wrapper enforcing boundary validation.
pub struct QuestionService<R: QuestionRepository> {
    repo: R,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and creates a new question, reading back the stored row.
    pub fn create_question(
        &self,
        request: &CreateQuestionRequest,
    ) -> Result<Question, QuestionServiceError> {
        let text = non_empty_trimmed(&request.question_text)
            .ok_or(QuestionServiceError::EmptyQuestionText)?;
        let group =
            non_empty_trimmed(&request.group_name).ok_or(QuestionServiceError::EmptyGroupName)?;

        let id = self.repo.create_question(
            text,
            group,
            request.source_shorthand,
            request.created_by.as_deref(),
        )?;
        self.repo
            .get_question(id)?
            .ok_or(QuestionServiceError::InconsistentState(
                "created question not found in read-back",
            ))
    }

    /// Gets one question by id.
    pub fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        self.repo.get_question(id)
    }

    /// Lists questions using source/group/activity filters.
    pub fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        self.repo.list_questions(query)
    }

    /// Validates and applies a partial content update through the
    /// versioned-update engine. Returns `None` when the question is absent.
    pub fn update_question(
        &mut self,
        id: QuestionId,
        request: &UpdateQuestionRequest,
        actor: Option<&str>,
    ) -> Result<Option<Question>, QuestionServiceError> {
        let changes = QuestionChanges {
            question_text: trim_present(request.question_text.as_deref())
                .map_err(|()| QuestionServiceError::EmptyQuestionText)?,
            group_name: trim_present(request.group_name.as_deref())
                .map_err(|()| QuestionServiceError::EmptyGroupName)?,
            source_shorthand: request.source_shorthand,
        };

        Ok(self
            .repo
            .update_question(id, &changes, actor, request.reason.as_deref())?)
    }

    /// Sets the active flag; same-status calls are true no-ops.
    pub fn set_active(
        &mut self,
        id: QuestionId,
        is_active: bool,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> Result<Option<ToggleResult>, QuestionServiceError> {
        Ok(self.repo.set_active(id, is_active, actor, reason)?)
    }

    /// Lists all history snapshots for one question, newest first.
    pub fn list_history(&self, question_id: QuestionId) -> RepoResult<Vec<HistoryEntry>> {
        self.repo.list_history(question_id)
    }

    /// Gets one history snapshot by id.
    pub fn get_history_entry(&self, history_id: HistoryId) -> RepoResult<Option<HistoryEntry>> {
        self.repo.get_history_entry(history_id)
    }

    /// Restores a question to a snapshot's content as a fresh versioned
    /// change. Rejects non-positive history ids at the boundary.
    pub fn restore_version(
        &mut self,
        question_id: QuestionId,
        history_id: HistoryId,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> Result<Option<Question>, QuestionServiceError> {
        if history_id <= 0 {
            return Err(QuestionServiceError::InvalidHistoryId(history_id));
        }

        Ok(self
            .repo
            .restore_version(question_id, history_id, actor, reason)?)
    }

    /// Moves one question to another group through the versioned-update
    /// engine, unlike the bulk group operations.
    pub fn move_question(
        &mut self,
        id: QuestionId,
        new_group_name: &str,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> Result<Option<Question>, QuestionServiceError> {
        let group =
            non_empty_trimmed(new_group_name).ok_or(QuestionServiceError::EmptyGroupName)?;

        let fallback = format!("Moved to group {group}");
        let changes = QuestionChanges {
            group_name: Some(group.to_string()),
            ..QuestionChanges::default()
        };

        Ok(self.repo.update_question(
            id,
            &changes,
            actor,
            Some(reason.unwrap_or(fallback.as_str())),
        )?)
    }

    /// Hard-deletes one question with its history. Returns false when
    /// absent.
    pub fn delete_question(&mut self, id: QuestionId) -> Result<bool, QuestionServiceError> {
        Ok(self.repo.delete_question(id)?)
    }

    /// Lists distinct groups with matching question counts.
    pub fn list_groups(&self, query: &GroupListQuery) -> RepoResult<Vec<GroupSummary>> {
        self.repo.list_groups(query)
    }

    /// Lists groups with their matching questions nested under each.
    pub fn groups_with_questions(
        &self,
        query: &GroupListQuery,
    ) -> Result<Vec<GroupWithQuestions>, QuestionServiceError> {
        let groups = self.repo.list_groups(query)?;
        let mut result = Vec::with_capacity(groups.len());

        for group in groups {
            let questions = self.repo.list_questions(&QuestionListQuery {
                source: query.source,
                group: Some(group.name.clone()),
                include_inactive: query.include_inactive,
            })?;
            result.push(GroupWithQuestions {
                name: group.name,
                question_count: group.question_count,
                questions,
            });
        }

        Ok(result)
    }

    /// Renames a group across all of its members, active and inactive.
    pub fn rename_group(
        &mut self,
        old_name: &str,
        new_name: &str,
        actor: Option<&str>,
    ) -> Result<usize, QuestionServiceError> {
        let old = non_empty_trimmed(old_name).ok_or(QuestionServiceError::EmptyGroupName)?;
        let new = non_empty_trimmed(new_name).ok_or(QuestionServiceError::EmptyGroupName)?;

        Ok(self.repo.rename_group(old, new, actor)?)
    }

    /// Dissolves a group, deleting or ungrouping its members.
    pub fn delete_group(
        &mut self,
        group_name: &str,
        delete_questions: bool,
    ) -> Result<usize, QuestionServiceError> {
        let name = non_empty_trimmed(group_name).ok_or(QuestionServiceError::EmptyGroupName)?;

        Ok(self.repo.delete_group(name, delete_questions)?)
    }

    /// Computes catalog-wide counters.
    pub fn stats(&self) -> RepoResult<QuestionStats> {
        self.repo.stats()
    }
}

/// Returns the trimmed value, or `None` when nothing remains.
fn non_empty_trimmed(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Trims an optional update field: absent stays absent, present-but-blank
/// is a validation failure.
fn trim_present(value: Option<&str>) -> Result<Option<String>, ()> {
    match value {
        None => Ok(None),
        Some(raw) => match non_empty_trimmed(raw) {
            Some(trimmed) => Ok(Some(trimmed.to_string())),
            None => Err(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{non_empty_trimmed, trim_present};

    #[test]
    fn non_empty_trimmed_strips_surrounding_whitespace() {
        assert_eq!(non_empty_trimmed("  text  "), Some("text"));
        assert_eq!(non_empty_trimmed("text"), Some("text"));
    }

    #[test]
    fn non_empty_trimmed_rejects_blank_input() {
        assert_eq!(non_empty_trimmed(""), None);
        assert_eq!(non_empty_trimmed("   \t\n"), None);
    }

    #[test]
    fn trim_present_keeps_absent_fields_absent() {
        assert_eq!(trim_present(None), Ok(None));
    }

    #[test]
    fn trim_present_rejects_present_blank_fields() {
        assert_eq!(trim_present(Some("  ")), Err(()));
        assert_eq!(trim_present(Some(" ok ")), Ok(Some("ok".to_string())));
    }
}
