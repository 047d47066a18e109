//! Error types for `postbox-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// One or more required submission fields were absent or blank.
  #[error("missing required field(s): {}", .0.join(", "))]
  MissingFields(Vec<&'static str>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
