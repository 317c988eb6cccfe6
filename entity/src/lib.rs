//! SeaORM entity models for the guild dashboard schema.

pub mod prelude;

pub mod file;
pub mod guild;
pub mod message;
pub mod quota;
pub mod user;
pub mod user_guild;
pub mod webhook;
