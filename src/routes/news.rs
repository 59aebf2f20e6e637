use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::{news::get_news, summary::get_summary},
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/news", get(get_news))
        .route("/summary", get(get_summary))
}
