use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use sqlx::QueryBuilder;
use tracing::warn;

use crate::{
    models::{
        error::Error,
        news::{NewsFilter, NewsItem},
    },
    utils::state::AppState,
};

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<NewsFilter>,
) -> Result<impl IntoResponse, Error> {
    let mut query = QueryBuilder::new("SELECT * FROM news");
    filter.push_predicates(&mut query);
    query.push(" ORDER BY publication_date DESC");

    let items: Vec<NewsItem> = query
        .build_query_as()
        .fetch_all(&state.db_pool)
        .await
        .map_err(|err| {
            warn!("{:?}", err);
            Error::internal("Error fetching news", err, &state.config)
        })?;

    Ok((StatusCode::OK, Json(items)))
}
