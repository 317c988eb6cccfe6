use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserGuildDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::membership::UserGuild,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authorized = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(authorized.user.into_dto())))
}

/// Get the guilds of the logged-in user.
///
/// Lists every guild from the user's Discord guild listing with their role in it and
/// whether the bot has joined. Served from a 5 minute cache that is refreshed at login
/// and when an install completes.
///
/// # Returns
/// - `200 OK` - Guild memberships
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/guilds",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Guild memberships of the current user", body = Vec<UserGuildDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authorized = AuthGuard::new(&state.db, &state.cache, &session)
        .require(&[])
        .await?;

    let guilds = UserService::new(&state.db, &state.cache)
        .get_user_guilds(authorized.user.discord_id)
        .await?;

    let guilds_dto: Vec<UserGuildDto> = guilds.iter().cloned().map(UserGuild::into_dto).collect();

    Ok((StatusCode::OK, Json(guilds_dto)))
}
