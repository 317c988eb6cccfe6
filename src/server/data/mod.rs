//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod guild;
pub mod message;
pub mod quota;
pub mod user;
pub mod user_guild;
pub mod webhook;

#[cfg(test)]
mod test;
