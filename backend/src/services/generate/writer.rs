//! Generated file persistence.
//!
//! One upsert per file, keyed on the natural key (`tenant_id`, `path`).
//! Chosen policy: last write wins. There is no version token and no
//! compare-and-swap; two generation runs racing for the same tenant
//! interleave per path and the later writer's content stands. The key space
//! partitions tenants from each other, so only same-tenant races are
//! affected, and re-running the pipeline repairs any mix.

use rusqlite::{params, Connection};

/// Upserts one generated file and bumps its `updated_at`.
///
/// Idempotent: repeated calls with identical arguments leave exactly one
/// row for (`tenant_id`, `path`).
pub(crate) fn write_generated_file(
    conn: &Connection,
    tenant_id: &str,
    path: &str,
    content: &str,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT OR REPLACE INTO generated_files (tenant_id, path, content, updated_at)
         VALUES (?1, ?2, ?3, datetime('now'))",
        params![tenant_id, path, content],
    )?;
    Ok(())
}
