use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite};
use tracing::warn;

use crate::{
    models::{error::Error, news::non_blank},
    utils::state::AppState,
};

#[derive(Deserialize)]
pub struct SourcesQuery {
    language: Option<String>,
}

#[derive(Deserialize)]
pub struct SectionsQuery {
    source: Option<String>,
}

pub async fn get_sources(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SourcesQuery>,
) -> Result<impl IntoResponse, Error> {
    let mut query = QueryBuilder::new("SELECT DISTINCT source FROM news WHERE source IS NOT NULL");
    if let Some(language) = non_blank(&params.language) {
        query.push(" AND language = ").push_bind(language);
    }
    query.push(" ORDER BY source");

    let sources = fetch_values(&state, query, "Error fetching sources").await?;
    Ok((StatusCode::OK, Json(sources)))
}

pub async fn get_sections(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SectionsQuery>,
) -> Result<impl IntoResponse, Error> {
    let mut query =
        QueryBuilder::new("SELECT DISTINCT section FROM news WHERE section IS NOT NULL");
    if let Some(source) = non_blank(&params.source) {
        query.push(" AND source = ").push_bind(source);
    }
    query.push(" ORDER BY section");

    let sections = fetch_values(&state, query, "Error fetching sections").await?;
    Ok((StatusCode::OK, Json(sections)))
}

pub async fn get_countries(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let query = QueryBuilder::new(
        "SELECT DISTINCT country FROM news WHERE country IS NOT NULL ORDER BY country",
    );
    let countries = fetch_values(&state, query, "Error fetching countries").await?;
    Ok((StatusCode::OK, Json(countries)))
}

pub async fn get_languages(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let query = QueryBuilder::new(
        "SELECT DISTINCT language FROM news WHERE language IS NOT NULL ORDER BY language",
    );
    let languages = fetch_values(&state, query, "Error fetching languages").await?;
    Ok((StatusCode::OK, Json(languages)))
}

async fn fetch_values(
    state: &AppState,
    mut query: QueryBuilder<'_, Sqlite>,
    message: &str,
) -> Result<Vec<String>, Error> {
    query
        .build_query_scalar()
        .fetch_all(&state.db_pool)
        .await
        .map_err(|err| {
            warn!("{:?}", err);
            Error::internal(message, err, &state.config)
        })
}
