//! # Generated File Service
//!
//! Read-only access to a tenant's generated site files, for downstream
//! viewers and deployers. Nothing here writes: generated files are produced
//! exclusively by the generation pipeline.
//!
//! ## Registered Routes:
//!
//! *   **`GET /{tenant_id}`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Lists a tenant's generated files (path, content,
//!       `updated_at`), ordered by path. An optional `?prefix=` query
//!       restricts the listing to paths starting with that prefix.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/generated";

/// Configures and returns the Actix `Scope` for the generated-file routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{tenant_id}", get().to(list::process))
}
