//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer:
//!
//! - **Business Logic**: Validation and the rules of each guild operation
//! - **Orchestration**: Combining stored data with live Discord lookups
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Caching**: Short-lived per-user and per-query results shared across requests

pub mod auth;
pub mod cache;
pub mod guild;
pub mod install;
pub mod member;
pub mod user;
