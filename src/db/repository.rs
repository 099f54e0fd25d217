//! Database repository for the week ledger.
//!
//! Every mutation runs in a transaction together with its revision bump.

use chrono::Utc;
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::errors::AppError;
use crate::models::{RevisionInfo, WeekRecord};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
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

    // ==================== WEEK OPERATIONS ====================

    /// List all weeks, ordered by week number.
    pub async fn list_weeks(&self) -> Result<Vec<WeekRecord>, AppError> {
        let rows = sqlx::query("SELECT id, week_number, points FROM weeks ORDER BY week_number")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(week_from_row).collect())
    }

    /// Get the record for a week number, if one has been written.
    pub async fn find_week(&self, week_number: i64) -> Result<Option<WeekRecord>, AppError> {
        let row = sqlx::query("SELECT id, week_number, points FROM weeks WHERE week_number = ?")
            .bind(week_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(week_from_row))
    }

    /// Set the points of a week, creating the record on first write.
    ///
    /// Returns the stored record and the revision it was written under.
    pub async fn upsert_week(
        &self,
        week_number: i64,
        points: i64,
    ) -> Result<(WeekRecord, i64), AppError> {
        if week_number < 1 {
            return Err(AppError::Validation(format!(
                "Week number must be positive, got {}",
                week_number
            )));
        }
        if points < 0 {
            return Err(AppError::Validation(format!(
                "Points must not be negative, got {}",
                points
            )));
        }

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO weeks (week_number, points) VALUES (?, ?)
            ON CONFLICT(week_number) DO UPDATE SET points = excluded.points
            RETURNING id, week_number, points
            "#,
        )
        .bind(week_number)
        .bind(points)
        .fetch_one(&mut *tx)
        .await?;

        let revision_id = bump_revision(&mut *tx).await?;
        tx.commit().await?;

        let week = week_from_row(&row);
        tracing::debug!(week_number, points, id = week.id, revision_id, "Week points stored");
        Ok((week, revision_id))
    }

    /// Remove every week. Returns the number of records removed and the resulting revision.
    pub async fn clear_weeks(&self) -> Result<(u64, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let cleared = sqlx::query("DELETE FROM weeks")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        // Restart surrogate ids at 1.
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'weeks'")
            .execute(&mut *tx)
            .await?;

        let revision_id = if cleared > 0 {
            bump_revision(&mut *tx).await?
        } else {
            sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
                .fetch_one(&mut *tx)
                .await?
                .get("revision_id")
        };
        tx.commit().await?;

        tracing::info!(cleared, revision_id, "Week ledger cleared");
        Ok((cleared, revision_id))
    }
}

/// Increment the revision ID inside an open transaction and return the new value.
async fn bump_revision(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    let row = sqlx::query(
        "UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1 RETURNING revision_id",
    )
    .bind(&now)
    .fetch_one(conn)
    .await?;
    Ok(row.get("revision_id"))
}

fn week_from_row(row: &sqlx::sqlite::SqliteRow) -> WeekRecord {
    WeekRecord {
        id: row.get("id"),
        week_number: row.get("week_number"),
        points: row.get("points"),
    }
}
