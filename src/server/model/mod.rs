//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Snowflakes are parsed into `u64`
//! when leaving the database layer.

pub mod discord;
pub mod guild;
pub mod membership;
pub mod user;
