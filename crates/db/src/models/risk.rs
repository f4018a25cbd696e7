//! Risk entity model and DTOs.

use promag_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::choices::{RiskStatus, Severity};
use crate::models::non_null;

/// A risk row from the `risks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Risk {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub title: String,
    pub severity: Severity,
    pub status: RiskStatus,
    pub mitigation: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a risk, and for full replacement via PUT.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRisk {
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[validate(length(min = 1, max = 180))]
    pub title: String,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub status: Option<RiskStatus>,
    #[serde(default)]
    pub mitigation: String,
}

/// DTO for partially updating a risk. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRisk {
    #[serde(rename = "project", default, deserialize_with = "non_null::deserialize")]
    pub project_id: Option<DbId>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub status: Option<RiskStatus>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub mitigation: Option<String>,
}
