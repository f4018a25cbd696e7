//! Milestone entity model and DTOs.

use promag_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::non_null;

/// A milestone row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub title: String,
    pub target_date: Date,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a milestone, and for full replacement via PUT.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMilestone {
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[validate(length(min = 1, max = 180))]
    pub title: String,
    pub target_date: Date,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub is_complete: Option<bool>,
}

/// DTO for partially updating a milestone. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMilestone {
    #[serde(rename = "project", default, deserialize_with = "non_null::deserialize")]
    pub project_id: Option<DbId>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub target_date: Option<Date>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub is_complete: Option<bool>,
}
