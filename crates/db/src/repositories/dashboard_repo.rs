//! Read-only aggregates across projects, tasks and risks.

use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Provides the dashboard summary query.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count active projects, open and overdue tasks, and open risks.
    ///
    /// "Today" is the database's `CURRENT_DATE`.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM projects WHERE status <> 'done') AS active_projects,
                (SELECT COUNT(*) FROM tasks WHERE NOT is_done) AS open_tasks,
                (SELECT COUNT(*) FROM tasks
                  WHERE NOT is_done AND due_date < CURRENT_DATE) AS overdue_tasks,
                (SELECT COUNT(*) FROM risks WHERE status = 'open') AS open_risks",
        )
        .fetch_one(pool)
        .await
    }
}
