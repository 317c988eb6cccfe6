pub use super::file::Entity as File;
pub use super::guild::Entity as Guild;
pub use super::message::Entity as Message;
pub use super::quota::Entity as Quota;
pub use super::user::Entity as User;
pub use super::user_guild::Entity as UserGuild;
pub use super::webhook::Entity as Webhook;
