//! Data transfer objects exchanged over the HTTP API.
//!
//! Snowflake identifiers are serialized as strings so browser clients do not lose
//! precision on 64-bit values.

pub mod api;
pub mod discord;
pub mod guild;
pub mod user;
