//! Aggregate counts shown on the dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Portfolio-wide counts computed in a single query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DashboardSummary {
    /// Projects whose status is not `done`.
    pub active_projects: i64,
    pub open_tasks: i64,
    /// Open tasks whose due date is before today.
    pub overdue_tasks: i64,
    pub open_risks: i64,
}
