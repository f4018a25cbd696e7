//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO, also used for full (PUT) updates
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod auth_token;
pub mod choices;
pub mod dashboard;
pub mod milestone;
pub mod non_null;
pub mod project;
pub mod risk;
pub mod task;
pub mod user;
