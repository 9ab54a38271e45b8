//! Shared application state handed to every handler.

use sea_orm::DatabaseConnection;

/// State shared by every HTTP handler
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
