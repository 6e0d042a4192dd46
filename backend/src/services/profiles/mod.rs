//! # Tenant Profile Service
//!
//! Stores the per-tenant store profile that feeds placeholder substitution.
//! A profile is a single row keyed by `tenant_id` with a fixed set of
//! optional fields (store name, contact details, socials). Tenants may
//! generate a site before filling the form: the pipeline treats a missing
//! profile as "every field empty", so nothing here is required up front.
//!
//! ## Registered Routes:
//!
//! *   **`POST /save`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Upserts the full profile for a tenant from a JSON
//!       `StoreProfile` payload. Later saves overwrite earlier ones.
//!
//! *   **`GET /{tenant_id}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the stored profile, or `404` when the
//!       tenant has not saved one yet.

pub(crate) mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/profiles";

/// Configures and returns the Actix `Scope` for all profile routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/{tenant_id}", get().to(get::process))
}
