//! Error type for `postbox-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown submission status: {0:?}")]
  UnknownStatus(String),

  /// The INSERT executed but reported no affected row.
  #[error("insert was not acknowledged by the store")]
  InsertNotAcknowledged,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
