use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

use crate::utils::config::Config;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    /// 500 with a generic message. The underlying error string is only
    /// exposed outside production.
    pub fn internal(message: &str, detail: impl std::fmt::Display, config: &Config) -> Self {
        let mut body = json!({"error": message});
        if !config.is_production() {
            body["details"] = Value::String(detail.to_string());
        }
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            body: Json(body),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}
