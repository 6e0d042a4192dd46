use actix_web::web;
use common::model::generated::GeneratedFile;
use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::db;

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    /// Optional path prefix filter, e.g. `assets/`.
    pub prefix: Option<String>,
}

/// Actix web handler for `GET /api/generated/{tenant_id}`.
pub(crate) async fn process(
    tenant_id: web::Path<String>,
    query: web::Query<ListQuery>,
) -> impl actix_web::Responder {
    match list_generated(&tenant_id, query.prefix.as_deref()) {
        Ok(files) => actix_web::HttpResponse::Ok().json(files),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing generated files: {}", e)),
    }
}

fn list_generated(tenant_id: &str, prefix: Option<&str>) -> Result<Vec<GeneratedFile>, String> {
    let conn = db::open().map_err(|e| e.to_string())?;
    generated_files_for_tenant(&conn, tenant_id, prefix).map_err(|e| e.to_string())
}

/// Escapes LIKE metacharacters so a prefix matches literally.
fn escape_like(prefix: &str) -> String {
    prefix
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub(crate) fn generated_files_for_tenant(
    conn: &Connection,
    tenant_id: &str,
    prefix: Option<&str>,
) -> Result<Vec<GeneratedFile>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT tenant_id, path, content, updated_at
         FROM generated_files
         WHERE tenant_id = ?1 AND path LIKE ?2 || '%' ESCAPE '\\'
         ORDER BY path ASC",
    )?;
    let prefix = escape_like(prefix.unwrap_or(""));
    let file_iter = stmt.query_map(params![tenant_id, prefix], |row| {
        Ok(GeneratedFile {
            tenant_id: row.get(0)?,
            path: row.get(1)?,
            content: row.get(2)?,
            updated_at: row.get(3)?,
        })
    })?;

    file_iter.collect()
}
