//! Core domain logic for the trigger-questions catalog.
//! This crate is the single source of truth for versioning invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::question::{
    HistoryEntry, HistoryId, Question, QuestionChanges, QuestionId, SourceShorthand,
};
pub use repo::question_repo::{
    GroupListQuery, GroupSummary, QuestionListQuery, QuestionRepository, QuestionStats, RepoError,
    RepoResult, SqliteQuestionRepository, ToggleResult, UNGROUPED_GROUP_NAME,
};
pub use service::question_service::{
    CreateQuestionRequest, GroupWithQuestions, QuestionService, QuestionServiceError,
    UpdateQuestionRequest,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
