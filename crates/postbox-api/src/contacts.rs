//! Handlers for the `/contact` and `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: [`SubmitBody`]; returns 200 + stored record |
//! | `GET`  | `/contacts` | `{"contacts":[...]}`, timestamp descending |

use axum::{Json, extract::State};
use postbox_core::{
  contact::{ContactRecord, ContactSubmission},
  store::ContactStore,
};
use serde::{Deserialize, Serialize};

use crate::{ApiContext, error::ApiError};

// ─── Submit ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /contact`.
///
/// Fields are optional at the deserialisation layer so that absence is
/// reported as a validation failure naming the field, not as a generic
/// body-rejection from the extractor.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub message: Option<String>,
}

/// `POST /contact` — validate, stamp, persist, echo back.
///
/// Each call appends a distinct record: repeated identical bodies get
/// fresh ids and timestamps. On any failure nothing is persisted.
pub async fn submit<S>(
  State(context): State<ApiContext<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<Json<ContactRecord>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let submission =
    ContactSubmission::new(body.name, body.email, body.message)?;
  let record = ContactRecord::create(submission);

  let stored = context
    .store
    .insert(record)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(stored))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactsResponse {
  pub contacts: Vec<ContactRecord>,
}

/// `GET /contacts` — every stored record, most recent first.
pub async fn list<S>(
  State(context): State<ApiContext<S>>,
) -> Result<Json<ContactsResponse>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = context
    .store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ContactsResponse { contacts }))
}
