//! SQLite access helpers.
//!
//! Services open short-lived connections on demand via `open()`. The schema
//! is created idempotently at startup by `init_schema`, which also makes it
//! trivial to run db-touching tests against `Connection::open_in_memory()`.

use crate::config;
use rusqlite::Connection;

/// Opens a connection to the configured database file.
pub fn open() -> Result<Connection, rusqlite::Error> {
    Connection::open(config::database_path())
}

/// Creates all tables if they do not exist yet.
///
/// `template_files` and `generated_files` both use a composite natural
/// primary key, so `INSERT OR REPLACE` upserts can never produce duplicate
/// rows for the same logical file.
pub fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
             id   TEXT PRIMARY KEY,
             name TEXT NOT NULL UNIQUE
         );
         CREATE TABLE IF NOT EXISTS template_files (
             product_id  TEXT NOT NULL,
             path        TEXT NOT NULL,
             content     TEXT NOT NULL,
             content_md5 TEXT NOT NULL,
             PRIMARY KEY (product_id, path)
         );
         CREATE TABLE IF NOT EXISTS tenant_profiles (
             tenant_id    TEXT PRIMARY KEY,
             store_name   TEXT,
             owner_name   TEXT,
             phone_number TEXT,
             email        TEXT,
             address      TEXT,
             about_text   TEXT,
             instagram    TEXT,
             facebook     TEXT,
             whatsapp     TEXT,
             maps_url     TEXT
         );
         CREATE TABLE IF NOT EXISTS generated_files (
             tenant_id  TEXT NOT NULL,
             path       TEXT NOT NULL,
             content    TEXT NOT NULL,
             updated_at TEXT NOT NULL,
             PRIMARY KEY (tenant_id, path)
         );",
    )
}
