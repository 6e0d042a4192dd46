//! # Template File Service
//!
//! Manages the template stock: the per-product set of text files (HTML, CSS,
//! ...) whose placeholder tokens the generation pipeline fills in with tenant
//! profile data. Files are published here by operators and are read-only to
//! the pipeline, which resolves them through `resolve::resolve_templates`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /upload`**:
//!     - **Handler**: `upload::process`
//!     - **Description**: Accepts a multipart request with a `json` part (a
//!       `TemplateUploadMeta` naming the owning product) and a `file` part
//!       (the template text). The file is stored under
//!       (`product_id`, filename) together with an MD5 digest of its
//!       content; re-uploading the same filename replaces the stored copy.
//!       The filename `site.json` is reserved for the manifest the
//!       generation pipeline appends to every run and is rejected here.
//!
//! *   **`GET /{product_id}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Lists a product's template files, ordered by path.

pub(crate) mod get;
pub(crate) mod resolve;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload::process))
        .route("/{product_id}", get().to(get::process))
}
