use std::sync::Arc;

use executor::CodeExecutor;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub executor: Arc<dyn CodeExecutor>,
}
