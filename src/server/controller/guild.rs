use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};
use futures::StreamExt;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, GuildMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::discord::LiveMember,
        service::{guild::GuildService, install::InstallService, member::MemberService},
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberSearchParams {
    /// Member query, only looked up when it starts with `@`
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScopeParams {
    pub scope: bool,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OneTimeParams {
    /// Whether one-time messages are removed after use
    pub delete: bool,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimezoneParams {
    /// IANA timezone name from the supported list
    pub timezone: String,
}

/// Get the dashboard view of a guild.
///
/// Returns the stored settings, messages with their creators and files, the webhooks
/// still present on Discord, and this month's quotas. Creator names and avatars and
/// the guild name and icon come from Discord.
///
/// # Access Control
/// - `GuildMember` - Any member of the guild
///
/// # Returns
/// - `200 OK` - Guild view
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a member of the guild
/// - `404 Not Found` - The bot is not in this guild
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    get,
    path = "/guild/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild", body = GuildDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildMember(guild_id)])
        .await?;

    let detail = GuildService::new(&state.db, state.discord.as_ref())
        .get_detail(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Wait for the bot to join a guild.
///
/// Server-sent event stream that emits a single event, with the guild ID as both
/// event ID and data, once the bot has been added to the guild, then closes. The
/// caller's cached guild list is refreshed at that moment.
///
/// # Access Control
/// - `GuildAdmin` - Only guild administrators can add the bot
///
/// # Returns
/// - `200 OK` - Event stream
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
#[utoipa::path(
    get,
    path = "/guild/{guild_id}/add",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Event stream emitting the guild ID once the bot joined", content_type = "text/event-stream", body = String),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator of the guild", body = ErrorDto)
    ),
)]
pub async fn watch_install(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let authorized = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let events = InstallService::new(&state.guild_join, &state.cache)
        .watch(guild_id, authorized.user.discord_id)
        .map(|event| Ok::<_, Infallible>(Event::default().id(event.id).data(event.data)));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Search guild members for mention suggestions.
///
/// Queries starting with `@` are looked up on Discord with the marker removed and
/// return at most 20 members. Other queries return an empty list. Results are
/// cached for 5 minutes per guild and query.
///
/// # Access Control
/// - `GuildAdmin` - Only guild administrators
///
/// # Returns
/// - `200 OK` - Matching members
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `500 Internal Server Error` - Discord error
#[utoipa::path(
    get,
    path = "/guild/{guild_id}/members",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        MemberSearchParams
    ),
    responses(
        (status = 200, description = "Matching guild members", body = Vec<GuildMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_members(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<MemberSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let members = MemberService::new(state.discord.as_ref(), &state.cache)
        .search(guild_id, &params.q)
        .await?;

    let members_dto: Vec<GuildMemberDto> =
        members.into_iter().map(LiveMember::into_dto).collect();

    Ok((StatusCode::OK, Json(members_dto)))
}

/// Set the scope flag of a guild.
///
/// # Access Control
/// - `GuildAdmin` - Only guild administrators
///
/// # Returns
/// - `204 No Content` - Flag updated
/// - `400 Bad Request` - `scope` is not `true` or `false`
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `404 Not Found` - The bot is not in this guild
#[utoipa::path(
    patch,
    path = "/guild/{guild_id}/scope",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ScopeParams
    ),
    responses(
        (status = 204, description = "Scope updated"),
        (status = 400, description = "Invalid scope value"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn patch_scope(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<ScopeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    GuildService::new(&state.db, state.discord.as_ref())
        .set_scope(guild_id, params.scope)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set whether one-time messages are removed after use.
///
/// # Access Control
/// - `GuildAdmin` - Only guild administrators
///
/// # Returns
/// - `204 No Content` - Policy updated
/// - `400 Bad Request` - `delete` is not `true` or `false`
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `404 Not Found` - The bot is not in this guild
#[utoipa::path(
    patch,
    path = "/guild/{guild_id}/onetime",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        OneTimeParams
    ),
    responses(
        (status = 204, description = "One-time message policy updated"),
        (status = 400, description = "Invalid delete value"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn patch_one_time(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<OneTimeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    GuildService::new(&state.db, state.discord.as_ref())
        .set_remove_one_time_message(guild_id, params.delete)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set the timezone of a guild.
///
/// # Access Control
/// - `GuildAdmin` - Only guild administrators
///
/// # Returns
/// - `204 No Content` - Timezone updated
/// - `400 Bad Request` - Unsupported timezone, nothing changed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `404 Not Found` - The bot is not in this guild
#[utoipa::path(
    patch,
    path = "/guild/{guild_id}/timezone",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        TimezoneParams
    ),
    responses(
        (status = 204, description = "Timezone updated"),
        (status = 400, description = "Unsupported timezone", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn patch_timezone(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<TimezoneParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    GuildService::new(&state.db, state.discord.as_ref())
        .set_timezone(guild_id, &params.timezone)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
