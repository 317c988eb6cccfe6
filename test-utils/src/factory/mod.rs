//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let guild = factory::guild::create_guild(&db).await?;
//!
//!     let (user, guild, message) =
//!         factory::helpers::create_message_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::guild::GuildFactory::new(&db)
//!     .guild_id("987654321")
//!     .timezone("Europe/Paris")
//!     .scope(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `user_guild` - Create guild membership entities
//! - `guild` - Create guild entities
//! - `message` - Create message entities and their attached files
//! - `webhook` - Create stored webhook entities
//! - `quota` - Create quota entities
//! - `helpers` - ID generation and creation of entities with dependencies

pub mod guild;
pub mod helpers;
pub mod message;
pub mod quota;
pub mod user;
pub mod user_guild;
pub mod webhook;

pub use guild::create_guild;
pub use message::{create_file, create_message};
pub use quota::create_quota;
pub use user::create_user;
pub use user_guild::create_user_guild;
pub use webhook::create_webhook;
