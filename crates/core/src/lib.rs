//! Domain primitives shared by the ProMag crates.

pub mod error;
pub mod types;
pub mod validation;
