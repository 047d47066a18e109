//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use postbox_core::{contact::ContactRecord, store::ContactStore};

use crate::{
  Error, Result,
  encode::{RawRecord, encode_dt, encode_status, encode_uuid},
  schema::SCHEMA,
};

/// A Postbox contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, record: ContactRecord) -> Result<ContactRecord> {
    let id_str     = encode_uuid(record.id);
    let name       = record.name.clone();
    let email      = record.email.clone();
    let message    = record.message.clone();
    let at_str     = encode_dt(record.timestamp);
    let status_str = encode_status(record.status).to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "INSERT INTO contacts (id, name, email, message, timestamp, status)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, name, email, message, at_str, status_str],
        )?;
        Ok(n)
      })
      .await?;

    if affected != 1 {
      return Err(Error::InsertNotAcknowledged);
    }

    Ok(record)
  }

  async fn list(&self) -> Result<Vec<ContactRecord>> {
    // rowid breaks exact-timestamp ties: latest insert first.
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, message, timestamp, status
           FROM contacts
           ORDER BY timestamp DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawRecord {
              id:        row.get(0)?,
              name:      row.get(1)?,
              email:     row.get(2)?,
              message:   row.get(3)?,
              timestamp: row.get(4)?,
              status:    row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
