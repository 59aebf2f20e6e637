use reqwest::Client;
use sqlx::SqlitePool;

use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Config,
    pub http_client: Client,
}
