//! Task entity model and DTOs.

use promag_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::choices::Priority;
use crate::models::non_null;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub title: String,
    pub assignee: String,
    pub due_date: Date,
    pub priority: Priority,
    pub is_done: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task, and for full replacement via PUT.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[validate(length(min = 1, max = 180))]
    pub title: String,
    /// Blank means unassigned.
    #[serde(default)]
    #[validate(length(max = 120))]
    pub assignee: String,
    pub due_date: Date,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub is_done: Option<bool>,
}

/// DTO for partially updating a task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[serde(rename = "project", default, deserialize_with = "non_null::deserialize")]
    pub project_id: Option<DbId>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(max = 120))]
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub due_date: Option<Date>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub is_done: Option<bool>,
}
