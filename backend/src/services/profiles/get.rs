use actix_web::web;
use common::model::profile::StoreProfile;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db;

/// Actix web handler for `GET /api/profiles/{tenant_id}`.
pub(crate) async fn process(tenant_id: web::Path<String>) -> impl actix_web::Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            return actix_web::HttpResponse::ServiceUnavailable()
                .body(format!("Error retrieving profile: {}", e))
        }
    };

    match fetch_profile(&conn, &tenant_id) {
        Ok(Some(profile)) => actix_web::HttpResponse::Ok().json(profile),
        Ok(None) => actix_web::HttpResponse::NotFound().body("Profile not found"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving profile: {}", e)),
    }
}

/// Fetches a tenant's profile, or `None` when the tenant has not saved one.
///
/// Also used directly by the generation pipeline, which must keep working
/// (with all-empty substitutions) when no profile row exists.
pub(crate) fn fetch_profile(
    conn: &Connection,
    tenant_id: &str,
) -> Result<Option<StoreProfile>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT tenant_id, store_name, owner_name, phone_number, email, address,
                about_text, instagram, facebook, whatsapp, maps_url
         FROM tenant_profiles WHERE tenant_id = ?1",
    )?;

    stmt.query_row(params![tenant_id], |row| {
        Ok(StoreProfile {
            tenant_id: row.get(0)?,
            store_name: row.get(1)?,
            owner_name: row.get(2)?,
            phone_number: row.get(3)?,
            email: row.get(4)?,
            address: row.get(5)?,
            about_text: row.get(6)?,
            instagram: row.get(7)?,
            facebook: row.get(8)?,
            whatsapp: row.get(9)?,
            maps_url: row.get(10)?,
        })
    })
    .optional()
}
