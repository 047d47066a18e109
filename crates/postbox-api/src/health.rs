//! Handler for the `/health` endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::ApiContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status:  &'static str,
  pub service: String,
}

/// `GET /health` — fixed payload, no side effects, cannot fail.
pub async fn check<S>(
  State(context): State<ApiContext<S>>,
) -> Json<HealthResponse> {
  Json(HealthResponse {
    status:  "healthy",
    service: context.service.to_string(),
  })
}
