use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use sqlx::QueryBuilder;
use tracing::warn;

use crate::{
    models::{error::Error, news::NewsFilter},
    utils::{state::AppState, summarizer::generate_news_summary},
};

const EMPTY_RANGE_FALLBACK: &str =
    "No hay noticias para resumir en el rango de fechas seleccionado.";

#[derive(Deserialize)]
pub struct SummaryQuery {
    #[serde(rename = "startDate")]
    start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    end_date: Option<NaiveDate>,
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<impl IntoResponse, Error> {
    let filter = NewsFilter {
        start_date: params.start_date,
        end_date: params.end_date,
        ..Default::default()
    };

    let mut query = QueryBuilder::new("SELECT title FROM news");
    filter.push_predicates(&mut query);
    query.push(" ORDER BY publication_date DESC");

    let headlines: Vec<String> = query
        .build_query_scalar()
        .fetch_all(&state.db_pool)
        .await
        .map_err(|err| {
            warn!("{:?}", err);
            Error::internal("Error generating summary", err, &state.config)
        })?;

    if headlines.is_empty() {
        return Ok((StatusCode::OK, Json(json!({"summary": EMPTY_RANGE_FALLBACK}))));
    }

    let summary = generate_news_summary(&state.http_client, &state.config, &headlines)
        .await
        .map_err(|err| {
            warn!("{:?}", err);
            Error::internal("Error generating summary", err, &state.config)
        })?;

    Ok((StatusCode::OK, Json(json!({"summary": summary}))))
}
