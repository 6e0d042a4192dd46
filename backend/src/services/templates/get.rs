use actix_web::web;
use common::model::template::TemplateFile;
use rusqlite::{params, Connection};

use crate::db;

/// Actix web handler for `GET /api/templates/{product_id}`.
pub(crate) async fn process(product_id: web::Path<String>) -> impl actix_web::Responder {
    match list_template_files(&product_id) {
        Ok(files) => actix_web::HttpResponse::Ok().json(files),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving templates: {}", e)),
    }
}

fn list_template_files(product_id: &str) -> Result<Vec<TemplateFile>, String> {
    let conn = db::open().map_err(|e| e.to_string())?;
    template_files_for_product(&conn, product_id).map_err(|e| e.to_string())
}

/// Loads a product's template files ordered ascending by path.
///
/// Path order is the resolution order the pipeline renders in, so it must be
/// stable across runs.
pub(crate) fn template_files_for_product(
    conn: &Connection,
    product_id: &str,
) -> Result<Vec<TemplateFile>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT product_id, path, content, content_md5
         FROM template_files WHERE product_id = ?1 ORDER BY path ASC",
    )?;
    let file_iter = stmt.query_map(params![product_id], |row| {
        Ok(TemplateFile {
            product_id: row.get(0)?,
            path: row.get(1)?,
            content: row.get(2)?,
            content_md5: row.get(3)?,
        })
    })?;

    file_iter.collect()
}
