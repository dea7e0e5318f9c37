//! Question repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide versioned CRUD APIs over `questions` + `question_history`.
//! - Own the versioned-update engine: snapshot pre-change state, apply the
//!   mutation, bump the version, all in one transaction.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - History snapshots are written before the live row is touched, in the
//!   same transaction; either both persist or neither does.
//! - `version` grows by exactly 1 per tracked mutation and is never rewound,
//!   not even by restore.
//! - Group-level bulk operations (`rename_group`, `delete_group`) bypass
//!   history and leave `version` untouched.
//! - Deleting a question removes its history rows in the same transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::question::{
    HistoryEntry, HistoryId, Question, QuestionChanges, QuestionId, SourceShorthand,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sentinel group that receives questions when their group is dissolved
/// without deleting them.
pub const UNGROUPED_GROUP_NAME: &str = "Ungrouped";

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question_text,
    group_name,
    source_shorthand,
    version,
    is_active,
    created_at,
    created_by,
    updated_at,
    updated_by
FROM questions";

const HISTORY_SELECT_SQL: &str = "SELECT
    id,
    question_id,
    question_text,
    group_name,
    source_shorthand,
    version,
    created_at,
    created_by,
    replaced_at,
    replaced_by,
    reason
FROM question_history";

const QUESTIONS_REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "question_text",
    "group_name",
    "source_shorthand",
    "version",
    "is_active",
    "created_at",
    "created_by",
    "updated_at",
    "updated_by",
];

const HISTORY_REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "question_id",
    "question_text",
    "group_name",
    "source_shorthand",
    "version",
    "created_at",
    "created_by",
    "replaced_at",
    "replaced_by",
    "reason",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for question persistence and query operations.
///
/// Absent rows are not errors here: lookup and mutation paths signal
/// not-found by returning `None` instead.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted question data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match required {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionListQuery {
    /// Optional exact source filter.
    pub source: Option<SourceShorthand>,
    /// Optional exact group filter.
    pub group: Option<String>,
    /// Inactive rows are excluded unless set.
    pub include_inactive: bool,
}

/// Query options for listing group summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupListQuery {
    /// Optional exact source filter.
    pub source: Option<SourceShorthand>,
    /// Inactive rows are excluded from counts unless set.
    pub include_inactive: bool,
}

/// One group with its matching question count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub question_count: i64,
}

/// Catalog-wide counters over live questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub total_questions: i64,
    pub active_questions: i64,
    /// Always `total_questions - active_questions`.
    pub inactive_questions: i64,
    /// Distinct groups among active questions.
    pub total_groups: i64,
    /// Active question count per source code.
    pub questions_by_source: BTreeMap<String, i64>,
    /// Active question count per group name.
    pub questions_by_group: BTreeMap<String, i64>,
}

/// Outcome of an active-status toggle.
///
/// Toggling to the current status is a true no-op: no history row, no
/// version bump. Only `Updated` went through the versioned-update engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleResult {
    Updated(Question),
    Unchanged(Question),
}

impl ToggleResult {
    /// The live question after the toggle, changed or not.
    pub fn question(&self) -> &Question {
        match self {
            Self::Updated(question) | Self::Unchanged(question) => question,
        }
    }

    /// Consumes the outcome, returning the live question.
    pub fn into_question(self) -> Question {
        match self {
            Self::Updated(question) | Self::Unchanged(question) => question,
        }
    }
}

/// Repository interface for versioned question operations.
pub trait QuestionRepository {
    /// Inserts a new question at version 1, active, with both audit pairs
    /// stamped from the creator. Returns the new row id.
    fn create_question(
        &self,
        question_text: &str,
        group_name: &str,
        source_shorthand: SourceShorthand,
        created_by: Option<&str>,
    ) -> RepoResult<QuestionId>;

    /// Gets one question by id.
    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>>;

    /// Lists questions matching all given filters, ordered by
    /// `(group_name, id)` ascending.
    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>>;

    /// Applies a partial content change through the versioned-update
    /// engine. An empty change set still snapshots and bumps the version.
    /// Returns `None` when the question does not exist.
    fn update_question(
        &mut self,
        id: QuestionId,
        changes: &QuestionChanges,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<Question>>;

    /// Sets the active flag. Same-status calls are no-ops that skip history
    /// and version bookkeeping entirely. Returns `None` when absent.
    fn set_active(
        &mut self,
        id: QuestionId,
        is_active: bool,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<ToggleResult>>;

    /// Gets one history snapshot by id.
    fn get_history_entry(&self, history_id: HistoryId) -> RepoResult<Option<HistoryEntry>>;

    /// Lists all snapshots for one question, newest replaced version first.
    fn list_history(&self, question_id: QuestionId) -> RepoResult<Vec<HistoryEntry>>;

    /// Restores the content fields captured by a snapshot, as a fresh
    /// versioned change. Returns `None` when the snapshot is absent or
    /// belongs to a different question.
    fn restore_version(
        &mut self,
        question_id: QuestionId,
        history_id: HistoryId,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<Question>>;

    /// Lists distinct groups with matching question counts, ordered by name.
    fn list_groups(&self, query: &GroupListQuery) -> RepoResult<Vec<GroupSummary>>;

    /// Moves every question (active and inactive) from one group to
    /// another, stamping audit fields but writing no history rows. Returns
    /// the affected count.
    fn rename_group(
        &mut self,
        old_name: &str,
        new_name: &str,
        actor: Option<&str>,
    ) -> RepoResult<usize>;

    /// Dissolves a group: deletes every member (cascading history) when
    /// `delete_questions`, otherwise reassigns members to
    /// [`UNGROUPED_GROUP_NAME`] without history rows. Returns the affected
    /// count.
    fn delete_group(&mut self, group_name: &str, delete_questions: bool) -> RepoResult<usize>;

    /// Hard-deletes one question and all of its history rows in one
    /// transaction. Returns false when absent.
    fn delete_question(&mut self, id: QuestionId) -> RepoResult<bool>;

    /// Computes catalog-wide counters.
    fn stats(&self) -> RepoResult<QuestionStats>;
}

/// SQLite-backed question repository.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections whose schema version does not match this binary
    /// or whose required tables/columns are missing.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn create_question(
        &self,
        question_text: &str,
        group_name: &str,
        source_shorthand: SourceShorthand,
        created_by: Option<&str>,
    ) -> RepoResult<QuestionId> {
        self.conn.execute(
            "INSERT INTO questions (
                question_text,
                group_name,
                source_shorthand,
                version,
                is_active,
                created_at,
                created_by,
                updated_at,
                updated_by
            ) VALUES (
                ?1, ?2, ?3, 1, 1,
                (strftime('%s', 'now') * 1000), ?4,
                (strftime('%s', 'now') * 1000), ?4
            );",
            params![question_text, group_name, source_shorthand.as_str(), created_by],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        fetch_question(self.conn, id)
    }

    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if !query.include_inactive {
            sql.push_str(" AND is_active = 1");
        }

        if let Some(source) = query.source {
            sql.push_str(" AND source_shorthand = ?");
            bind_values.push(Value::Text(source.as_str().to_string()));
        }

        if let Some(group) = query.group.as_ref() {
            sql.push_str(" AND group_name = ?");
            bind_values.push(Value::Text(group.clone()));
        }

        sql.push_str(" ORDER BY group_name ASC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }

    fn update_question(
        &mut self,
        id: QuestionId,
        changes: &QuestionChanges,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<Question>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(before) = fetch_question(&tx, id)? else {
            return Ok(None);
        };

        let (text, group, source) = changes.resolve_against(&before);
        insert_history_snapshot(&tx, &before, actor, reason)?;
        apply_versioned_fields(&tx, id, &text, &group, source, before.is_active, actor)?;

        let updated = fetch_question(&tx, id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("question {id} missing after versioned update"))
        })?;
        tx.commit()?;

        Ok(Some(updated))
    }

    fn set_active(
        &mut self,
        id: QuestionId,
        is_active: bool,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<ToggleResult>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(before) = fetch_question(&tx, id)? else {
            return Ok(None);
        };

        // Same-status toggles never reach the versioned-update path.
        if before.is_active == is_active {
            return Ok(Some(ToggleResult::Unchanged(before)));
        }

        let fallback = if is_active {
            "Activated question"
        } else {
            "Deactivated question"
        };
        insert_history_snapshot(&tx, &before, actor, Some(reason.unwrap_or(fallback)))?;
        apply_versioned_fields(
            &tx,
            id,
            &before.question_text,
            &before.group_name,
            before.source_shorthand,
            is_active,
            actor,
        )?;

        let updated = fetch_question(&tx, id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("question {id} missing after status toggle"))
        })?;
        tx.commit()?;

        Ok(Some(ToggleResult::Updated(updated)))
    }

    fn get_history_entry(&self, history_id: HistoryId) -> RepoResult<Option<HistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{HISTORY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([history_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_history_row(row)?));
        }

        Ok(None)
    }

    fn list_history(&self, question_id: QuestionId) -> RepoResult<Vec<HistoryEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{HISTORY_SELECT_SQL}
             WHERE question_id = ?1
             ORDER BY version DESC;"
        ))?;

        let mut rows = stmt.query([question_id])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_history_row(row)?);
        }

        Ok(entries)
    }

    fn restore_version(
        &mut self,
        question_id: QuestionId,
        history_id: HistoryId,
        actor: Option<&str>,
        reason: Option<&str>,
    ) -> RepoResult<Option<Question>> {
        let Some(entry) = self.get_history_entry(history_id)? else {
            return Ok(None);
        };

        // Cross-question restoration is treated the same as a missing
        // snapshot.
        if entry.question_id != question_id {
            return Ok(None);
        }

        let fallback = format!("Restored to version {}", entry.version);
        let changes = QuestionChanges {
            question_text: Some(entry.question_text),
            group_name: Some(entry.group_name),
            source_shorthand: Some(entry.source_shorthand),
        };

        self.update_question(
            question_id,
            &changes,
            actor,
            Some(reason.unwrap_or(fallback.as_str())),
        )
    }

    fn list_groups(&self, query: &GroupListQuery) -> RepoResult<Vec<GroupSummary>> {
        let mut sql = String::from(
            "SELECT group_name, COUNT(id) AS question_count
             FROM questions
             WHERE 1 = 1",
        );
        let mut bind_values: Vec<Value> = Vec::new();

        if !query.include_inactive {
            sql.push_str(" AND is_active = 1");
        }

        if let Some(source) = query.source {
            sql.push_str(" AND source_shorthand = ?");
            bind_values.push(Value::Text(source.as_str().to_string()));
        }

        sql.push_str(" GROUP BY group_name ORDER BY group_name ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut groups = Vec::new();

        while let Some(row) = rows.next()? {
            groups.push(GroupSummary {
                name: row.get("group_name")?,
                question_count: row.get("question_count")?,
            });
        }

        Ok(groups)
    }

    fn rename_group(
        &mut self,
        old_name: &str,
        new_name: &str,
        actor: Option<&str>,
    ) -> RepoResult<usize> {
        // Bulk reassignment: audit fields are stamped, but no history rows
        // are written and versions stay untouched.
        let changed = self.conn.execute(
            "UPDATE questions
             SET
                group_name = ?2,
                updated_at = (strftime('%s', 'now') * 1000),
                updated_by = ?3
             WHERE group_name = ?1;",
            params![old_name, new_name, actor],
        )?;

        Ok(changed)
    }

    fn delete_group(&mut self, group_name: &str, delete_questions: bool) -> RepoResult<usize> {
        if delete_questions {
            let tx = self
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;

            tx.execute(
                "DELETE FROM question_history
                 WHERE question_id IN (
                    SELECT id FROM questions WHERE group_name = ?1
                 );",
                [group_name],
            )?;
            let removed = tx.execute("DELETE FROM questions WHERE group_name = ?1;", [group_name])?;
            tx.commit()?;

            return Ok(removed);
        }

        let changed = self.conn.execute(
            "UPDATE questions SET group_name = ?2 WHERE group_name = ?1;",
            params![group_name, UNGROUPED_GROUP_NAME],
        )?;

        Ok(changed)
    }

    fn delete_question(&mut self, id: QuestionId) -> RepoResult<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Children first; the FK cascade stays as a schema-level backstop.
        tx.execute(
            "DELETE FROM question_history WHERE question_id = ?1;",
            [id],
        )?;
        let removed = tx.execute("DELETE FROM questions WHERE id = ?1;", [id])?;
        tx.commit()?;

        Ok(removed > 0)
    }

    fn stats(&self) -> RepoResult<QuestionStats> {
        let total_questions: i64 =
            self.conn
                .query_row("SELECT COUNT(id) FROM questions;", [], |row| row.get(0))?;
        let active_questions: i64 = self.conn.query_row(
            "SELECT COUNT(id) FROM questions WHERE is_active = 1;",
            [],
            |row| row.get(0),
        )?;

        let questions_by_source = count_grouped_by(self.conn, "source_shorthand")?;
        let questions_by_group = count_grouped_by(self.conn, "group_name")?;
        let total_groups = questions_by_group.len() as i64;

        Ok(QuestionStats {
            total_questions,
            active_questions,
            inactive_questions: total_questions - active_questions,
            total_groups,
            questions_by_source,
            questions_by_group,
        })
    }
}

fn fetch_question(conn: &Connection, id: QuestionId) -> RepoResult<Option<Question>> {
    let mut stmt = conn.prepare(&format!("{QUESTION_SELECT_SQL} WHERE id = ?1;"))?;

    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_question_row(row)?));
    }

    Ok(None)
}

/// Writes the pre-mutation snapshot. Original creation audit fields are
/// copied verbatim; `replaced_at` is stamped by the database.
fn insert_history_snapshot(
    tx: &Transaction<'_>,
    before: &Question,
    actor: Option<&str>,
    reason: Option<&str>,
) -> RepoResult<()> {
    tx.execute(
        "INSERT INTO question_history (
            question_id,
            question_text,
            group_name,
            source_shorthand,
            version,
            created_at,
            created_by,
            replaced_at,
            replaced_by,
            reason
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7,
            (strftime('%s', 'now') * 1000), ?8, ?9
        );",
        params![
            before.id,
            before.question_text.as_str(),
            before.group_name.as_str(),
            before.source_shorthand.as_str(),
            before.version,
            before.created_at,
            before.created_by.as_deref(),
            actor,
            reason,
        ],
    )?;

    Ok(())
}

/// Applies post-change field values and bumps the version by exactly 1.
fn apply_versioned_fields(
    tx: &Transaction<'_>,
    id: QuestionId,
    question_text: &str,
    group_name: &str,
    source_shorthand: SourceShorthand,
    is_active: bool,
    actor: Option<&str>,
) -> RepoResult<()> {
    let changed = tx.execute(
        "UPDATE questions
         SET
            question_text = ?2,
            group_name = ?3,
            source_shorthand = ?4,
            is_active = ?5,
            version = version + 1,
            updated_at = (strftime('%s', 'now') * 1000),
            updated_by = ?6
         WHERE id = ?1;",
        params![
            id,
            question_text,
            group_name,
            source_shorthand.as_str(),
            bool_to_int(is_active),
            actor,
        ],
    )?;

    if changed == 0 {
        return Err(RepoError::InvalidData(format!(
            "question {id} vanished mid-transaction during versioned update"
        )));
    }

    Ok(())
}

fn count_grouped_by(conn: &Connection, column: &str) -> RepoResult<BTreeMap<String, i64>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {column}, COUNT(id)
         FROM questions
         WHERE is_active = 1
         GROUP BY {column};"
    ))?;

    let mut rows = stmt.query([])?;
    let mut counts = BTreeMap::new();
    while let Some(row) = rows.next()? {
        let key: String = row.get(0)?;
        let count: i64 = row.get(1)?;
        counts.insert(key, count);
    }

    Ok(counts)
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    Ok(Question {
        id: row.get("id")?,
        question_text: row.get("question_text")?,
        group_name: row.get("group_name")?,
        source_shorthand: parse_source_column(row, "questions")?,
        version: row.get("version")?,
        is_active: parse_bool_column(row, "is_active", "questions")?,
        created_at: row.get("created_at")?,
        created_by: row.get("created_by")?,
        updated_at: row.get("updated_at")?,
        updated_by: row.get("updated_by")?,
    })
}

fn parse_history_row(row: &Row<'_>) -> RepoResult<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get("id")?,
        question_id: row.get("question_id")?,
        question_text: row.get("question_text")?,
        group_name: row.get("group_name")?,
        source_shorthand: parse_source_column(row, "question_history")?,
        version: row.get("version")?,
        created_at: row.get("created_at")?,
        created_by: row.get("created_by")?,
        replaced_at: row.get("replaced_at")?,
        replaced_by: row.get("replaced_by")?,
        reason: row.get("reason")?,
    })
}

fn parse_source_column(row: &Row<'_>, table: &str) -> RepoResult<SourceShorthand> {
    let value: String = row.get("source_shorthand")?;
    SourceShorthand::parse(&value).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid source code `{value}` in {table}.source_shorthand"
        ))
    })
}

fn parse_bool_column(row: &Row<'_>, column: &str, table: &str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {table}.{column}"
        ))),
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for (table, columns) in [
        ("questions", QUESTIONS_REQUIRED_COLUMNS),
        ("question_history", HISTORY_REQUIRED_COLUMNS),
    ] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
