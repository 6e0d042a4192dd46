use actix_web::{web, Responder};
use common::model::profile::StoreProfile;
use rusqlite::params;

use crate::db;

pub(crate) async fn process(payload: web::Json<StoreProfile>) -> impl Responder {
    match save_profile(&payload) {
        Ok(_) => actix_web::HttpResponse::Ok().body("Profile saved"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving profile: {}", e)),
    }
}

fn save_profile(payload: &StoreProfile) -> Result<(), String> {
    if payload.tenant_id.trim().is_empty() {
        return Err("tenant_id must not be empty".to_string());
    }

    let conn = db::open().map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO tenant_profiles
             (tenant_id, store_name, owner_name, phone_number, email, address,
              about_text, instagram, facebook, whatsapp, maps_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            &payload.tenant_id,
            &payload.store_name,
            &payload.owner_name,
            &payload.phone_number,
            &payload.email,
            &payload.address,
            &payload.about_text,
            &payload.instagram,
            &payload.facebook,
            &payload.whatsapp,
            &payload.maps_url,
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
