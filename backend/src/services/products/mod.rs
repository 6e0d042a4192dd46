//! # Product Catalog Service
//!
//! CRUD surface for the product catalog. A product is the unit a tenant
//! subscribes to; each one owns the set of template files (managed by the
//! `templates` service) that the generation pipeline renders.
//!
//! ## Registered Routes:
//!
//! *   **`POST /save`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Creates a new product or renames an existing one.
//!       Expects a `SaveProductRequest`; assigns a fresh UUID when the
//!       payload carries no `id`. Responds with the product id.
//!
//! *   **`GET /`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Returns the full catalog, ordered by name.

mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/products";

/// Configures and returns the Actix `Scope` for all product catalog routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("", get().to(list::process))
}
