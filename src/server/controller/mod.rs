//! HTTP request handlers.
//!
//! Handlers run the guard first, call a service and convert the domain result to a
//! DTO. They never touch repositories directly.

pub mod auth;
pub mod guild;
pub mod user;

#[cfg(test)]
mod test;
