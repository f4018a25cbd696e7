//! Project entity model and DTOs.

use promag_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::choices::ProjectStatus;
use crate::models::non_null;

/// Largest absolute budget representable in `NUMERIC(14, 2)`.
const BUDGET_LIMIT: i64 = 1_000_000_000_000;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub client: String,
    pub budget: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    pub progress: i16,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project, and for full replacement via PUT.
///
/// `progress` and `status` fall back to their column defaults on create and
/// keep their current value on replace when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 180))]
    pub name: String,
    #[validate(length(min = 1, max = 180))]
    pub location: String,
    #[validate(length(min = 1, max = 180))]
    pub client: String,
    #[validate(custom(function = "validate_budget"))]
    pub budget: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i16>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub status: Option<ProjectStatus>,
}

/// DTO for partially updating a project. All fields may be omitted but
/// none may be `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(length(min = 1, max = 180))]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(custom(function = "validate_budget"))]
    pub budget: Option<Decimal>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub end_date: Option<Date>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i16>,
    #[serde(default, deserialize_with = "non_null::deserialize")]
    pub status: Option<ProjectStatus>,
}

/// Budgets are stored as `NUMERIC(14, 2)`: at most 12 integer digits and
/// 2 decimal places.
pub fn validate_budget(budget: &Decimal) -> Result<(), ValidationError> {
    if budget.normalize().scale() > 2 {
        return Err(ValidationError::new("decimal_places")
            .with_message("ensure there are no more than 2 decimal places".into()));
    }
    if budget.abs() >= Decimal::from(BUDGET_LIMIT) {
        return Err(ValidationError::new("max_digits")
            .with_message("ensure there are no more than 14 digits in total".into()));
    }
    Ok(())
}
