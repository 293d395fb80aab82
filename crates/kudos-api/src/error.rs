//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing or malformed {} header", crate::auth::USER_HEADER)]
  Unauthorized,

  #[error(transparent)]
  Core(#[from] kudos_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use kudos_core::Error as E;

    let status = match &self {
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Core(E::InvalidContentType(_) | E::InvalidPage(_)) => StatusCode::BAD_REQUEST,
      ApiError::Core(E::SelfLikeForbidden) => StatusCode::FORBIDDEN,
      ApiError::Core(E::ContentNotFound { .. }) => StatusCode::NOT_FOUND,
      ApiError::Core(E::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
