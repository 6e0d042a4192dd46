//! Template source resolution for the generation pipeline.
//!
//! Maps a product *name* (what a tenant subscribes to) to that product's
//! ordered template files. Resolution is the one step of a generation run
//! that aborts the whole run on failure: an unknown product means every
//! downstream substitution would be garbage, so nothing is written at all.

use common::model::template::TemplateFile;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::services::templates::get::template_files_for_product;

/// Errors that abort a generation run before any file is written.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no product named '{name}'")]
    NotFound { name: String },
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// Resolves a product name to its template files, ordered ascending by path.
///
/// A product with zero template files resolves to an empty list; that is a
/// valid (no-op) input for the pipeline, not an error.
pub(crate) fn resolve_templates(
    conn: &Connection,
    product_name: &str,
) -> Result<Vec<TemplateFile>, ResolveError> {
    let mut stmt = conn.prepare("SELECT id FROM products WHERE name = ?1")?;
    let product_id: String = stmt
        .query_row(params![product_name], |row| row.get(0))
        .optional()?
        .ok_or_else(|| ResolveError::NotFound {
            name: product_name.to_string(),
        })?;

    Ok(template_files_for_product(conn, &product_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    fn seed_product(conn: &Connection, id: &str, name: &str) {
        conn.execute(
            "INSERT INTO products (id, name) VALUES (?1, ?2)",
            params![id, name],
        )
        .unwrap();
    }

    fn seed_template(conn: &Connection, product_id: &str, path: &str, content: &str) {
        conn.execute(
            "INSERT INTO template_files (product_id, path, content, content_md5)
             VALUES (?1, ?2, ?3, ?4)",
            params![product_id, path, content, format!("{:x}", md5::compute(content))],
        )
        .unwrap();
    }

    #[test]
    fn unknown_product_is_not_found() {
        let conn = test_conn();
        match resolve_templates(&conn, "no-such-product") {
            Err(ResolveError::NotFound { name }) => assert_eq!(name, "no-such-product"),
            other => panic!("expected NotFound, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn product_without_templates_resolves_to_empty_list() {
        let conn = test_conn();
        seed_product(&conn, "p1", "bare-product");
        let files = resolve_templates(&conn, "bare-product").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn templates_come_back_ordered_by_path() {
        let conn = test_conn();
        seed_product(&conn, "p1", "warung");
        seed_template(&conn, "p1", "menu.html", "b");
        seed_template(&conn, "p1", "about.html", "a");
        seed_template(&conn, "p1", "index.html", "c");

        let files = resolve_templates(&conn, "warung").unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["about.html", "index.html", "menu.html"]);
    }
}
