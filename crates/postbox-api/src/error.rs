//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Status mapping lives here and nowhere else: handlers return typed
//! failures; the transport decides what they look like on the wire.

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
  /// A required submission field was absent or blank — 422.
  #[error("{0}")]
  Validation(#[from] postbox_core::Error),

  /// The store failed or did not acknowledge a write — 500.
  ///
  /// Only the short textual cause is exposed; connection details stay
  /// server-side.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(e) => {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
