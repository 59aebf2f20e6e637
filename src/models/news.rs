use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::{QueryBuilder, Sqlite};

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "publicationDate")]
    pub publication_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub source: String,
    pub country: Option<String>,
    pub language: Option<String>,
    pub section: Option<String>,
    #[serde(rename = "extractionDate")]
    pub extraction_date: chrono::DateTime<chrono::Utc>,
}

/// Optional listing filters taken from the query string. Blank strings are
/// treated the same as absent parameters.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewsFilter {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub source: Option<String>,
    pub section: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
}

impl NewsFilter {
    /// Append the WHERE clause for this filter to `query`, binding every
    /// value as a parameter.
    ///
    /// Date semantics: with both bounds present the range is inclusive on
    /// both ends; a lone start date matches that single day; a lone end
    /// date adds no predicate at all.
    pub fn push_predicates<'a>(&'a self, query: &mut QueryBuilder<'a, Sqlite>) {
        let mut has_predicate = false;

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                push_separator(query, &mut has_predicate);
                query.push("publication_date >= ").push_bind(start);
                query.push(" AND publication_date <= ").push_bind(end);
            }
            (Some(start), None) => {
                push_separator(query, &mut has_predicate);
                query.push("publication_date = ").push_bind(start);
            }
            _ => {}
        }

        if let Some(source) = non_blank(&self.source) {
            push_separator(query, &mut has_predicate);
            query.push("source = ").push_bind(source);
        }

        if let Some(section) = non_blank(&self.section) {
            push_separator(query, &mut has_predicate);
            query.push("section = ").push_bind(section);
        }

        if let Some(country) = non_blank(&self.country) {
            push_separator(query, &mut has_predicate);
            query.push("country = ").push_bind(country);
        }

        if let Some(language) = non_blank(&self.language) {
            push_separator(query, &mut has_predicate);
            query.push("language = ").push_bind(language);
        }
    }
}

pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_separator(query: &mut QueryBuilder<'_, Sqlite>, has_predicate: &mut bool) {
    if *has_predicate {
        query.push(" AND ");
    } else {
        query.push(" WHERE ");
        *has_predicate = true;
    }
}
