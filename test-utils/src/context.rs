use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// An in-memory guild database, plus a login session stored in it once asked for.
pub struct TestContext {
    pub db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Opens a fresh `sqlite::memory:` database and creates `tables` in order.
    pub(crate) async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db, session: None })
    }

    /// Session shared by every call on this context.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        let (_, session) = self.db_and_session().await?;
        Ok(session)
    }

    /// Database and session together, for guard tests that log a user in and then
    /// query memberships.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => login_session(&self.db).await?,
        };

        Ok((&self.db, self.session.insert(session)))
    }
}

/// Same store and expiry the server uses, backed by the test pool.
async fn login_session(db: &DatabaseConnection) -> Result<Session, TestError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(Session::new(
        None,
        Arc::new(store),
        Some(Expiry::OnInactivity(time::Duration::days(7))),
    ))
}
