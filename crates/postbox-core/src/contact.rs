//! Contact submissions and the records they become.
//!
//! A [`ContactSubmission`] is the validated visitor input; a
//! [`ContactRecord`] is the immutable stored form. Records are created
//! exactly once at submission time and never updated or deleted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{Error, Result};

/// Processing state of a stored submission.
///
/// Currently only one state exists: every record is persisted as
/// `received` and stays that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  Received,
}

/// A validated contact-form submission.
///
/// Construct via [`ContactSubmission::new`], which enforces that all three
/// fields are present and non-empty. Email format is deliberately not
/// checked beyond presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
  pub name:    String,
  pub email:   String,
  pub message: String,
}

impl ContactSubmission {
  /// Validate raw (possibly absent) field values into a submission.
  ///
  /// Returns [`Error::MissingFields`] naming every field that is absent or
  /// blank, so a caller can report all problems at once rather than the
  /// first one hit.
  pub fn new(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
  ) -> Result<Self> {
    let mut missing = Vec::new();

    fn present(v: &Option<String>) -> bool {
      v.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    if !present(&name) {
      missing.push("name");
    }
    if !present(&email) {
      missing.push("email");
    }
    if !present(&message) {
      missing.push("message");
    }

    match (name, email, message) {
      (Some(name), Some(email), Some(message)) if missing.is_empty() => {
        Ok(Self { name, email, message })
      }
      _ => Err(Error::MissingFields(missing)),
    }
  }
}

/// The immutable stored representation of one contact-form submission.
///
/// `id` and `timestamp` are assigned server-side at construction; the
/// store persists the record verbatim. Records are only ever produced
/// here and read back through the store's own row decoding, so the type
/// is serialise-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
  pub status:    SubmissionStatus,
}

impl ContactRecord {
  /// Stamp a submission into a record: fresh v4 UUID, current UTC instant,
  /// status `received`.
  pub fn create(submission: ContactSubmission) -> Self {
    Self {
      id:        Uuid::new_v4(),
      name:      submission.name,
      email:     submission.email,
      message:   submission.message,
      timestamp: Utc::now(),
      status:    SubmissionStatus::Received,
    }
  }
}
