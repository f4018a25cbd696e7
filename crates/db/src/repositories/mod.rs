//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod milestone_repo;
pub mod project_repo;
pub mod risk_repo;
pub mod task_repo;
pub mod token_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use milestone_repo::MilestoneRepo;
pub use project_repo::ProjectRepo;
pub use risk_repo::RiskRepo;
pub use task_repo::TaskRepo;
pub use token_repo::TokenRepo;
pub use user_repo::UserRepo;
