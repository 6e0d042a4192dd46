use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::requests::TemplateUploadMeta;
use futures_util::StreamExt;
use rusqlite::params;
use serde_json::from_slice;

use crate::db;
use crate::services::generate::start::MANIFEST_PATH;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with the stored path and content digest.
/// - On failure: returns `400 Bad Request` with the error message.
pub(crate) async fn process(payload: Multipart) -> impl Responder {
    match upload_template_file(payload).await {
        Ok((path, content_md5)) => HttpResponse::Ok()
            .json(serde_json::json!({ "path": path, "content_md5": content_md5 })),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Stores one template file for a product from a multipart request.
///
/// Expects a `json` part carrying a `TemplateUploadMeta` and a `file` part
/// with the template text. The filename of the `file` part becomes the
/// template's path; uploading the same filename again replaces the stored
/// content (the pipeline always reads the latest copy).
async fn upload_template_file(
    mut payload: Multipart,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    let mut meta: Option<TemplateUploadMeta> = None;
    let mut filename: Option<String> = None;
    let mut file_bytes: Vec<u8> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("json") => {
                let mut buf: Vec<u8> = Vec::new();
                while let Some(chunk) = field.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                meta = Some(from_slice(&buf)?);
            }
            Some("file") => {
                filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()));
                while let Some(chunk) = field.next().await {
                    file_bytes.extend_from_slice(&chunk?);
                }
            }
            _ => {
                // Drain unknown parts so the stream can make progress.
                while let Some(chunk) = field.next().await {
                    let _ = chunk?;
                }
            }
        }
    }

    let meta = meta.ok_or("Missing 'json' metadata part")?;
    let path = filename
        .filter(|f| !f.trim().is_empty())
        .ok_or("Missing filename on 'file' part")?;
    if path == MANIFEST_PATH {
        return Err(format!("'{}' is reserved for the generated manifest", MANIFEST_PATH).into());
    }
    let content = String::from_utf8(file_bytes)
        .map_err(|_| "Template file must be valid UTF-8 text")?;

    let content_md5 = format!("{:x}", md5::compute(content.as_bytes()));

    let conn = db::open()?;
    // The owning product must exist before templates can be attached to it.
    let product_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM products WHERE id = ?1",
        params![&meta.product_id],
        |row| row.get(0),
    )?;
    if product_count == 0 {
        return Err(format!("No product with id '{}'", meta.product_id).into());
    }

    conn.execute(
        "INSERT OR REPLACE INTO template_files (product_id, path, content, content_md5)
         VALUES (?1, ?2, ?3, ?4)",
        params![&meta.product_id, &path, &content, &content_md5],
    )?;

    Ok((path, content_md5))
}
