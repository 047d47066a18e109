//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; UUIDs as hyphenated
//! lowercase strings; the status as its lowercase wire name.

use chrono::{DateTime, Utc};
use postbox_core::contact::{ContactRecord, SubmissionStatus};
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_status(status: SubmissionStatus) -> &'static str {
  match status {
    SubmissionStatus::Received => "received",
  }
}

pub fn decode_status(s: &str) -> Result<SubmissionStatus> {
  match s {
    "received" => Ok(SubmissionStatus::Received),
    other => Err(Error::UnknownStatus(other.to_owned())),
  }
}

/// Raw strings read directly from a `contacts` row.
pub struct RawRecord {
  pub id:        String,
  pub name:      String,
  pub email:     String,
  pub message:   String,
  pub timestamp: String,
  pub status:    String,
}

impl RawRecord {
  pub fn into_record(self) -> Result<ContactRecord> {
    Ok(ContactRecord {
      id:        decode_uuid(&self.id)?,
      name:      self.name,
      email:     self.email,
      message:   self.message,
      timestamp: decode_dt(&self.timestamp)?,
      status:    decode_status(&self.status)?,
    })
  }
}
