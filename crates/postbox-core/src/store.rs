//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `postbox-store-sqlite`). The API layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::contact::ContactRecord;

/// Abstraction over a Postbox storage backend.
///
/// The store is append-only: records are inserted once and never mutated.
/// The caller assembles the full [`ContactRecord`] (id, timestamp, status);
/// the store persists it verbatim.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `record` and return it as stored.
  ///
  /// Returns an error if the underlying store does not acknowledge the
  /// insert. On error nothing is persisted.
  fn insert(
    &self,
    record: ContactRecord,
  ) -> impl Future<Output = Result<ContactRecord, Self::Error>> + Send + '_;

  /// Return all records ordered by timestamp descending (most recent
  /// first). An empty store yields an empty vector, not an error.
  ///
  /// Exact timestamp ties are broken by insertion order, newest first;
  /// under concurrent inserts that order is best-effort only.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactRecord>, Self::Error>> + Send + '_;
}
