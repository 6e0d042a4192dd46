//! # Site Generation Service
//!
//! The generation pipeline: turns a product's template files plus a tenant's
//! store profile into that tenant's generated site files.
//!
//! The pipeline is a synchronous batch transform that runs to completion
//! inside one request:
//!
//! 1. `resolve` — look up the product's template files (`templates::resolve`).
//!    An unknown product aborts the run with nothing written.
//! 2. `assemble` — flatten the tenant profile into one token → value map,
//!    shared by every file in the run. A missing profile degrades to
//!    all-empty values, it never blocks generation.
//! 3. Per template file: `substitute` tokens, then `write` the result via an
//!    idempotent upsert. A failed write is recorded and the run continues
//!    with the next file.
//! 4. A synthetic `site.json` manifest is written through the same path.
//! 5. The caller gets a summary: how many files were written and which paths
//!    failed.
//!
//! Re-invoking the pipeline with the same inputs re-derives and overwrites
//! every file; there is no incremental diffing, no retry policy and no queue.
//!
//! ## Registered Routes:
//!
//! *   **`POST /start`**:
//!     - **Handler**: `start::process`
//!     - **Description**: Runs the pipeline for a `GenerateRequest`
//!       (tenant id + product name) and responds with a `GenerateSummary`.

pub(crate) mod assemble;
pub(crate) mod start;
pub(crate) mod substitute;
pub(crate) mod writer;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/generate";

/// Configures and returns the Actix `Scope` for the generation routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/start", post().to(start::process))
}
