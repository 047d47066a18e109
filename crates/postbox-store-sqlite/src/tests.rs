//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{Duration, Utc};
use postbox_core::{
  contact::{ContactRecord, ContactSubmission, SubmissionStatus},
  store::ContactStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
  ContactSubmission::new(
    Some(name.to_string()),
    Some(email.to_string()),
    Some(message.to_string()),
  )
  .expect("valid submission")
}

#[tokio::test]
async fn insert_and_list_round_trip() {
  let s = store().await;

  let record = ContactRecord::create(submission("Ann", "a@x.com", "hi"));
  let stored = s.insert(record.clone()).await.unwrap();
  assert_eq!(stored, record);

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, record.id);
  assert_eq!(all[0].name, "Ann");
  assert_eq!(all[0].email, "a@x.com");
  assert_eq!(all[0].message, "hi");
  assert_eq!(all[0].status, SubmissionStatus::Received);
}

#[tokio::test]
async fn list_empty_store_yields_empty_vec() {
  let s = store().await;
  let all = s.list().await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn list_orders_by_timestamp_descending() {
  let s = store().await;

  // Hand-built records with explicit timestamps, inserted out of order.
  let base = Utc::now();
  for (name, offset) in [("middle", 1), ("oldest", 0), ("newest", 2)] {
    let mut record =
      ContactRecord::create(submission(name, "a@x.com", "hi"));
    record.timestamp = base + Duration::seconds(offset);
    s.insert(record).await.unwrap();
  }

  let all = s.list().await.unwrap();
  let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn equal_timestamps_fall_back_to_insertion_order() {
  let s = store().await;

  let at = Utc::now();
  for name in ["first", "second", "third"] {
    let mut record =
      ContactRecord::create(submission(name, "a@x.com", "hi"));
    record.timestamp = at;
    s.insert(record).await.unwrap();
  }

  let all = s.list().await.unwrap();
  let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, ["third", "second", "first"]);
}

#[tokio::test]
async fn insert_preserves_caller_assigned_fields() {
  let s = store().await;

  let record = ContactRecord::create(submission("Bea", "b@x.com", "yo"));
  let id = record.id;
  let at = record.timestamp;
  s.insert(record).await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(all[0].id, id);
  // RFC 3339 round-trips the instant exactly.
  assert_eq!(all[0].timestamp, at);
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
  let s = store().await;

  let record = ContactRecord::create(submission("Ann", "a@x.com", "hi"));
  s.insert(record.clone()).await.unwrap();

  let err = s.insert(record).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn ids_survive_the_text_encoding() {
  let s = store().await;

  let record = ContactRecord::create(submission("Cy", "c@x.com", "ok"));
  s.insert(record.clone()).await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(all[0].id, record.id);
  assert_ne!(all[0].id, Uuid::nil());
}
