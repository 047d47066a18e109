//! JSON REST API for Postbox.
//!
//! Exposes an axum [`Router`] backed by any [`postbox_core::store::ContactStore`].
//! CORS, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", postbox_api::api_router(context))
//! ```

pub mod contacts;
pub mod error;
pub mod health;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use postbox_core::store::ContactStore;

pub use error::ApiError;

/// Shared state threaded through all handlers: the injected store handle
/// plus the service name reported by the health probe.
pub struct ApiContext<S> {
  pub store:   Arc<S>,
  pub service: Arc<str>,
}

// Manual impl: `#[derive(Clone)]` would needlessly require `S: Clone`.
impl<S> Clone for ApiContext<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      service: Arc::clone(&self.service),
    }
  }
}

impl<S> ApiContext<S> {
  pub fn new(store: Arc<S>, service: impl Into<Arc<str>>) -> Self {
    Self { store, service: service.into() }
  }
}

/// Build a fully-materialised API router for `context`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(context: ApiContext<S>) -> Router<()>
where
  S: ContactStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/health", get(health::check::<S>))
    .route("/contact", post(contacts::submit::<S>))
    .route("/contacts", get(contacts::list::<S>))
    .with_state(context)
}
