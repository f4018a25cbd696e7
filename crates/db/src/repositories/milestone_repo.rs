//! Repository for the `milestones` table.

use promag_core::types::DbId;
use sqlx::PgPool;

use crate::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, target_date, is_complete, created_at, updated_at";

/// Provides CRUD operations for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new milestone, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (project_id, title, target_date, is_complete)
             VALUES ($1, $2, $3, COALESCE($4, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.target_date)
            .bind(input.is_complete)
            .fetch_one(pool)
            .await
    }

    /// Find a milestone by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a milestone with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM milestones WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all milestones ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Milestone>(&query).fetch_all(pool).await
    }

    /// Replace every writable field of a milestone (PUT semantics).
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateMilestone,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET
                project_id = $2,
                title = $3,
                target_date = $4,
                is_complete = COALESCE($5, is_complete)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.target_date)
            .bind(input.is_complete)
            .fetch_optional(pool)
            .await
    }

    /// Update a milestone. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMilestone,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                target_date = COALESCE($4, target_date),
                is_complete = COALESCE($5, is_complete)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.target_date)
            .bind(input.is_complete)
            .fetch_optional(pool)
            .await
    }

    /// Delete a milestone. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM milestones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
