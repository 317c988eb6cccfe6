use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::discord::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A guild the user belongs to, with their role and whether the bot is installed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserGuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
    /// `"member"` or `"admin"`.
    pub role: String,
    pub bot_present: bool,
}
