//! # Generation Run Service
//!
//! Provides the `POST /api/generate/start` endpoint that runs the whole
//! pipeline for one tenant and one product.
//!
//! ## Workflow:
//!
//! 1.  **HTTP Request**: `process` receives a `GenerateRequest` with the
//!     tenant scope id and the product name.
//!
//! 2.  **Blocking execution**: the run does sequential SQLite work, so it is
//!     moved onto the blocking thread pool via `tokio::task::spawn_blocking`
//!     and awaited; the response carries the finished `GenerateSummary`.
//!     There is no job table and no polling — a run is short and synchronous.
//!
//! 3.  **Resolution**: `generate_with_conn` resolves the product's template
//!     files. An unknown product aborts the run with zero files written and
//!     maps to `404` (wrong inputs for every file beat a half-generated
//!     site).
//!
//! 4.  **Assembly**: the tenant profile is fetched once and flattened into
//!     the token map shared by all files of the run. A missing profile is
//!     not an error; every token simply resolves to the empty string.
//!
//! 5.  **Per-file transform**: `run_pipeline` substitutes and writes each
//!     template file in path order. Write failures are collected per path
//!     and the loop continues; sibling files are never rolled back.
//!
//! 6.  **Manifest**: a synthetic `site.json` snapshot (tenant, product,
//!     profile, timestamp) is written through the same writer and counted
//!     like any other file.
//!
//! Re-invoking with identical inputs is always safe: every write is an
//! idempotent upsert on (`tenant_id`, `path`), so a re-run overwrites the
//! previous output path by path.

use actix_web::{web, HttpResponse, Responder};
use common::model::profile::StoreProfile;
use common::model::template::TemplateFile;
use common::requests::{GenerateFailure, GenerateRequest, GenerateSummary};
use log::{info, warn};
use rusqlite::Connection;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::db;
use crate::services::generate::{assemble, substitute, writer};
use crate::services::profiles::get::fetch_profile;
use crate::services::templates::resolve::{resolve_templates, ResolveError};

/// Path of the synthetic manifest file appended to every run.
///
/// Reserved: the templates service refuses uploads with this filename, and
/// the pipeline skips (and reports) any stored template that still carries
/// it, so a template can never shadow the manifest or be counted twice.
pub(crate) const MANIFEST_PATH: &str = "site.json";

/// The Actix web handler for `POST /api/generate/start`.
pub(crate) async fn process(payload: web::Json<GenerateRequest>) -> impl Responder {
    let req = payload.into_inner();
    let handle =
        tokio::task::spawn_blocking(move || generate_blocking(&req.tenant_id, &req.product_name));

    match handle.await {
        Ok(Ok(summary)) => HttpResponse::Ok().json(summary),
        Ok(Err(ResolveError::NotFound { name })) => {
            HttpResponse::NotFound().body(format!("No product named '{}'", name))
        }
        Ok(Err(e)) => {
            HttpResponse::ServiceUnavailable().body(format!("Error generating site: {}", e))
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Task join error: {}", e)),
    }
}

/// Runs one full generation on its own connection. Blocking.
fn generate_blocking(tenant_id: &str, product_name: &str) -> Result<GenerateSummary, ResolveError> {
    let conn = db::open()?;
    let summary = generate_with_conn(&conn, tenant_id, product_name)?;

    if summary.failures.is_empty() {
        info!(
            "generated {} files for tenant {} from product '{}'",
            summary.written, tenant_id, product_name
        );
    } else {
        warn!(
            "generated {} files for tenant {} from product '{}', {} failed",
            summary.written,
            tenant_id,
            product_name,
            summary.failures.len()
        );
    }
    Ok(summary)
}

/// The orchestrator: resolve → assemble → substitute/write per file → manifest.
///
/// Resolution errors abort the run before anything is written. From that
/// point on the run always completes: individual write failures land in the
/// summary instead of stopping the loop.
fn generate_with_conn(
    conn: &Connection,
    tenant_id: &str,
    product_name: &str,
) -> Result<GenerateSummary, ResolveError> {
    let templates = resolve_templates(conn, product_name)?;
    let profile = fetch_profile(conn, tenant_id)?;
    let values = assemble::assemble_values(profile.as_ref());
    let manifest = manifest_content(tenant_id, product_name, profile.as_ref());

    Ok(run_pipeline(&templates, &values, &manifest, |path, content| {
        writer::write_generated_file(conn, tenant_id, path, content).map_err(|e| e.to_string())
    }))
}

/// Substitutes and writes every file of a run, aggregating failures.
///
/// The writer is passed in as a closure so the continue-on-failure behavior
/// can be exercised without a real storage fault.
fn run_pipeline<W>(
    templates: &[TemplateFile],
    values: &HashMap<String, String>,
    manifest: &str,
    mut write: W,
) -> GenerateSummary
where
    W: FnMut(&str, &str) -> Result<(), String>,
{
    let mut written = 0u32;
    let mut failures = Vec::new();

    for template in templates {
        // The manifest path is reserved; rendering such a template would be
        // overwritten by the manifest below and inflate the written count.
        if template.path == MANIFEST_PATH {
            failures.push(GenerateFailure {
                path: template.path.clone(),
                error: format!("'{}' is reserved for the run manifest", MANIFEST_PATH),
            });
            continue;
        }

        let content = substitute::substitute(&template.content, values);
        match write(&template.path, &content) {
            Ok(()) => written += 1,
            Err(error) => failures.push(GenerateFailure {
                path: template.path.clone(),
                error,
            }),
        }
    }

    // The manifest goes through the same writer and counts like any file.
    match write(MANIFEST_PATH, manifest) {
        Ok(()) => written += 1,
        Err(error) => failures.push(GenerateFailure {
            path: MANIFEST_PATH.to_string(),
            error,
        }),
    }

    GenerateSummary { written, failures }
}

/// JSON snapshot of the run's inputs, stored next to the generated files.
fn manifest_content(tenant_id: &str, product_name: &str, profile: Option<&StoreProfile>) -> String {
    let generated_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    serde_json::json!({
        "tenant_id": tenant_id,
        "product": product_name,
        "profile": profile,
        "generated_at": generated_at,
    })
    .to_string()
}
