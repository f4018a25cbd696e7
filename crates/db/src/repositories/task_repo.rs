//! Repository for the `tasks` table.

use promag_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, assignee, due_date, priority, is_done, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Omitted `priority` / `is_done` fall back to `medium` / `false`.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, assignee, due_date, priority, is_done)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'medium'), COALESCE($6, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.assignee)
            .bind(input.due_date)
            .bind(input.priority)
            .bind(input.is_done)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a task with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tasks WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all tasks ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Replace every writable field of a task (PUT semantics).
    ///
    /// Omitted `priority` / `is_done` keep their current values.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = $2,
                title = $3,
                assignee = $4,
                due_date = $5,
                priority = COALESCE($6, priority),
                is_done = COALESCE($7, is_done)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.assignee)
            .bind(input.due_date)
            .bind(input.priority)
            .bind(input.is_done)
            .fetch_optional(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                assignee = COALESCE($4, assignee),
                due_date = COALESCE($5, due_date),
                priority = COALESCE($6, priority),
                is_done = COALESCE($7, is_done)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.assignee)
            .bind(input.due_date)
            .bind(input.priority)
            .bind(input.is_done)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
