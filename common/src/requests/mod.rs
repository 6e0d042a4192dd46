use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
/// Request payload for the site generation endpoint.
/// Names the tenant scope (subscription id) and the product whose
/// template set should be rendered.
pub struct GenerateRequest {
    pub tenant_id: String,
    pub product_name: String,
}

/// One per-file failure from a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateFailure {
    pub path: String,
    pub error: String,
}

/// Outcome of one generation run.
///
/// `written` counts files actually persisted (template-derived plus the
/// manifest). A run can partially succeed: failed paths are listed in
/// `failures` while the remaining files are still written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSummary {
    pub written: u32,
    pub failures: Vec<GenerateFailure>,
}

#[derive(Debug, Serialize, Deserialize)]
/// Request payload for creating or renaming a product.
/// `id` is assigned server-side when absent.
pub struct SaveProductRequest {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
/// JSON metadata part of a template file upload, sent alongside the file
/// part in the same multipart request.
pub struct TemplateUploadMeta {
    pub product_id: String,
}
