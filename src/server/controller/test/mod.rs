use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    bot::{mock::MockDiscord, notifier::GuildJoinNotifier},
    config::Config,
    error::AppError,
    middleware::session::AuthSession,
    router::router,
    startup,
    state::AppState,
};


const GUILD_ID: u64 = 123;
const APP_URL: &str = "http://localhost:3000";

/// Full router over a test database, with a session cookie for an administrator of
/// `GUILD_ID`.
struct TestApp {
    test: TestContext,
    router: Router,
    cookie: String,
    guild_join: GuildJoinNotifier,
}

impl TestApp {
    async fn new() -> Result<Self, AppError> {
        let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user(db).await?;
        factory::guild::GuildFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .build()
            .await?;
        factory::user_guild::create_user_guild(
            db,
            &user.discord_id,
            &GUILD_ID.to_string(),
            "admin",
        )
        .await?;

        AuthSession::new(session)
            .set_user_id(user.discord_id.parse().unwrap())
            .await?;
        session.save().await?;
        let cookie = format!("id={}", session.id().unwrap());

        let guild_join = GuildJoinNotifier::new();
        let state = AppState::new(
            db.clone(),
            reqwest::Client::new(),
            startup::setup_oauth_client(&config())?,
            Arc::new(MockDiscord::new()),
            guild_join.clone(),
            APP_URL.to_string(),
        );
        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        let router = router()
            .with_state(state)
            .layer(SessionManagerLayer::new(store));

        Ok(Self {
            test,
            router,
            cookie,
            guild_join,
        })
    }

    fn request(&self, method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, &self.cookie)
            .body(Body::empty())
            .unwrap()
    }
}

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        discord_client_id: "1".to_string(),
        discord_client_secret: "secret".to_string(),
        discord_redirect_url: format!("{}/auth/callback", APP_URL),
        discord_bot_token: "token".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        app_url: APP_URL.to_string(),
        bind_address: "127.0.0.1:0".to_string(),
    }
}
