//! Repository for the `risks` table.

use promag_core::types::DbId;
use sqlx::PgPool;

use crate::models::risk::{CreateRisk, Risk, UpdateRisk};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, severity, status, mitigation, created_at, updated_at";

/// Provides CRUD operations for risks.
pub struct RiskRepo;

impl RiskRepo {
    /// Insert a new risk, returning the created row.
    ///
    /// Omitted `severity` / `status` fall back to `medium` / `open`.
    pub async fn create(pool: &PgPool, input: &CreateRisk) -> Result<Risk, sqlx::Error> {
        let query = format!(
            "INSERT INTO risks (project_id, title, severity, status, mitigation)
             VALUES ($1, $2, COALESCE($3, 'medium'), COALESCE($4, 'open'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.severity)
            .bind(input.status)
            .bind(&input.mitigation)
            .fetch_one(pool)
            .await
    }

    /// Find a risk by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM risks WHERE id = $1");
        sqlx::query_as::<_, Risk>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a risk with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM risks WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all risks ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Risk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM risks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Risk>(&query).fetch_all(pool).await
    }

    /// Replace every writable field of a risk (PUT semantics).
    ///
    /// Omitted `severity` / `status` keep their current values.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateRisk,
    ) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!(
            "UPDATE risks SET
                project_id = $2,
                title = $3,
                severity = COALESCE($4, severity),
                status = COALESCE($5, status),
                mitigation = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.severity)
            .bind(input.status)
            .bind(&input.mitigation)
            .fetch_optional(pool)
            .await
    }

    /// Update a risk. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRisk,
    ) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!(
            "UPDATE risks SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                severity = COALESCE($4, severity),
                status = COALESCE($5, status),
                mitigation = COALESCE($6, mitigation)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.severity)
            .bind(input.status)
            .bind(&input.mitigation)
            .fetch_optional(pool)
            .await
    }

    /// Delete a risk. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM risks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
