use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::error::StatsError;

/// Rejected options become a 400 whose body is the bare message; anything
/// else is a 500 with a JSON error body.
impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!(error = %self, "Rejected report request");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response();
        }

        error!(error = %self, "Report request failed");
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
