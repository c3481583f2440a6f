//! Key-value store over the two collection keys the consumer app writes.
//!
//! Loads are deliberately forgiving: a missing or unparsable value degrades
//! to an empty collection and is never surfaced as an error. Writes bump the
//! revision so clients can detect changes.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Feedback, RevisionInfo, StoredUser, User};

/// Key holding the JSON-serialized array of user records.
pub const USERS_KEY: &str = "dukaan-users";

/// Key holding the JSON-serialized array of feedback records.
pub const FEEDBACK_KEY: &str = "dukaan-feedback";

/// Store for all persisted panel data.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    /// Increment the revision ID and return the new value.
    pub async fn increment_revision(&self) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&self.pool)
            .await?;
        self.get_revision_id().await
    }

    /// Read the raw value stored under `key`, if any.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    /// Upsert the raw value under `key` without touching the revision.
    /// The consumer app writes through this path; so do test fixtures.
    pub async fn put_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Load and normalize the user collection from the users key.
    ///
    /// Per-field defaults are filled against `now` (RFC 3339); they stay
    /// in memory only until a mutation persists the collection.
    pub async fn load_users(&self, now: &str) -> Result<Vec<User>, AppError> {
        let stored: Vec<StoredUser> = self.load_array(USERS_KEY).await?;
        Ok(stored.into_iter().map(|u| u.into_user(now)).collect())
    }

    /// Load the feedback collection from the feedback key.
    pub async fn load_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        self.load_array(FEEDBACK_KEY).await
    }

    /// Write the user collection back to the users key and bump the
    /// revision. Normalized fields are materialized into the stored shape
    /// at this point.
    pub async fn save_users(&self, users: &[User]) -> Result<i64, AppError> {
        let json = serde_json::to_string(users)?;
        self.put_raw(USERS_KEY, &json).await?;
        self.increment_revision().await
    }

    async fn load_array<T>(&self, key: &str) -> Result<Vec<T>, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let Some(raw) = self.get_raw(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::warn!("Unparsable value under key {key}, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }
}
