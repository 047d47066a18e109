//! SQL schema for the Postbox SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Contacts are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
-- The implicit rowid stays internal; only `id` is ever exposed.
CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    message     TEXT NOT NULL,
    timestamp   TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    status      TEXT NOT NULL    -- 'received'
);

CREATE INDEX IF NOT EXISTS contacts_timestamp_idx ON contacts(timestamp);

PRAGMA user_version = 1;
";
