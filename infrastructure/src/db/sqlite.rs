//! SQLite implementation of the poll repository
//!
//! The vote counter is only ever touched through a single `UPDATE ... SET
//! votes = votes + 1` statement, so the increment is evaluated by SQLite
//! under its own write serialization and concurrent voters cannot lose
//! updates.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use pollbooth_domain::{
    Choice, ChoiceId, PollRepository, Question, QuestionId, RepositoryError,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

const SCHEMA: &str = include_str!("schema.sql");

/// Errors raised while bringing the database up
#[derive(Error, Debug)]
pub enum DbError {
    #[error("failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to write records: {0}")]
    Write(#[source] sqlx::Error),
}

/// Poll repository backed by a SQLite connection pool
pub struct SqlitePollRepository {
    pool: SqlitePool,
}

impl SqlitePollRepository {
    /// Open (creating if missing) the database at `url`
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbError::Connect)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests with in-memory databases)
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the tables if they do not exist yet
    pub async fn apply_schema(&self) -> Result<(), DbError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(DbError::Schema)?;
        Ok(())
    }

    /// Insert a question, returning its assigned id
    pub async fn insert_question(
        &self,
        text: &str,
        published_at: DateTime<Utc>,
    ) -> Result<QuestionId, DbError> {
        let result = sqlx::query("INSERT INTO questions (text, published_at) VALUES (?, ?)")
            .bind(text)
            .bind(published_at)
            .execute(&self.pool)
            .await
            .map_err(DbError::Write)?;
        Ok(QuestionId::new(result.last_insert_rowid()))
    }

    /// Insert a choice for a question, returning its assigned id
    pub async fn insert_choice(
        &self,
        question: QuestionId,
        text: &str,
    ) -> Result<ChoiceId, DbError> {
        let result = sqlx::query("INSERT INTO choices (question_id, text) VALUES (?, ?)")
            .bind(question.value())
            .bind(text)
            .execute(&self.pool)
            .await
            .map_err(DbError::Write)?;
        Ok(ChoiceId::new(result.last_insert_rowid()))
    }

    /// Seed a handful of demo questions if the store is empty
    ///
    /// Returns whether anything was written. A store that already holds any
    /// question is left untouched, so seeding is idempotent.
    pub async fn seed_demo_data(&self) -> Result<bool, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::Write)?;
        if count > 0 {
            return Ok(false);
        }

        let now = Utc::now();
        let demos: &[(&str, Duration, &[&str])] = &[
            (
                "What's your favorite programming language?",
                Duration::hours(3),
                &["Rust", "Python", "Go"],
            ),
            (
                "Tabs or spaces?",
                Duration::hours(2),
                &["Tabs", "Spaces"],
            ),
            (
                "Best time for standup?",
                Duration::hours(1),
                &["9:00", "10:00", "No standup"],
            ),
        ];

        for (text, age, choices) in demos {
            let question = self.insert_question(text, now - *age).await?;
            for choice in *choices {
                self.insert_choice(question, choice).await?;
            }
        }
        info!("Seeded {} demo questions", demos.len());
        Ok(true)
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    published_at: DateTime<Utc>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question::new(row.id, row.text, row.published_at)
    }
}

#[derive(sqlx::FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    text: String,
    votes: i64,
}

impl From<ChoiceRow> for Choice {
    fn from(row: ChoiceRow) -> Self {
        Choice::new(row.id, row.question_id, row.text, row.votes)
    }
}

#[async_trait]
impl PollRepository for SqlitePollRepository {
    async fn list_recent(&self, limit: u32) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, text, published_at FROM questions \
             ORDER BY published_at DESC, id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, RepositoryError> {
        let row: Option<QuestionRow> =
            sqlx::query_as("SELECT id, text, published_at FROM questions WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(RepositoryError::backend)?;
        row.map(Question::from)
            .ok_or(RepositoryError::QuestionNotFound(id))
    }

    async fn choices_for(&self, question: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        self.get_question(question).await?;
        let rows: Vec<ChoiceRow> = sqlx::query_as(
            "SELECT id, question_id, text, votes FROM choices \
             WHERE question_id = ? ORDER BY id",
        )
        .bind(question.value())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        Ok(rows.into_iter().map(Choice::from).collect())
    }

    async fn get_choice(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError> {
        let row: Option<ChoiceRow> = sqlx::query_as(
            "SELECT id, question_id, text, votes FROM choices \
             WHERE id = ? AND question_id = ?",
        )
        .bind(choice.value())
        .bind(question.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        row.map(Choice::from)
            .ok_or(RepositoryError::ChoiceNotFound { question, choice })
    }

    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<(), RepositoryError> {
        // Single delta statement; never read-modify-write in process.
        let result = sqlx::query(
            "UPDATE choices SET votes = votes + 1 WHERE id = ? AND question_id = ?",
        )
        .bind(choice.value())
        .bind(question.value())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::ChoiceNotFound { question, choice });
        }
        Ok(())
    }
}
