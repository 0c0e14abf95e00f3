use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
