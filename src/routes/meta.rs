use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::meta::{get_countries, get_languages, get_sections, get_sources},
    utils::state::AppState,
};

pub fn meta_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sources", get(get_sources))
        .route("/sections", get(get_sections))
        .route("/countries", get(get_countries))
        .route("/languages", get(get_languages))
}
