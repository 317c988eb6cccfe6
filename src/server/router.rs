use axum::{
    routing::{get, patch},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        guild::{
            CreatorDto, FileDto, GuildDto, GuildMemberDto, MessageDto, QuotaDto, WebhookDto,
        },
        user::{UserDto, UserGuildDto},
    },
    server::{
        controller::{auth, guild, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guildboard API", description = "Discord guild dashboard backend"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        user::get_me,
        user::get_user_guilds,
        guild::get_guild,
        guild::watch_install,
        guild::search_members,
        guild::patch_scope,
        guild::patch_one_time,
        guild::patch_timezone,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        UserGuildDto,
        GuildDto,
        MessageDto,
        CreatorDto,
        FileDto,
        WebhookDto,
        QuotaDto,
        GuildMemberDto,
    )),
    tags(
        (name = "auth", description = "Discord OAuth2 login"),
        (name = "user", description = "Current user and their guilds"),
        (name = "guild", description = "Guild dashboard and settings")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .route("/user/me", get(user::get_me))
        .route("/user/guilds", get(user::get_user_guilds))
        .route("/guild/{guild_id}", get(guild::get_guild))
        .route("/guild/{guild_id}/add", get(guild::watch_install))
        .route("/guild/{guild_id}/members", get(guild::search_members))
        .route("/guild/{guild_id}/scope", patch(guild::patch_scope))
        .route("/guild/{guild_id}/onetime", patch(guild::patch_one_time))
        .route("/guild/{guild_id}/timezone", patch(guild::patch_timezone))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
