use serde::{Deserialize, Serialize};

/// One generated output file, scoped to a tenant.
///
/// (`tenant_id`, `path`) is the natural key: regenerating a site overwrites
/// rows in place and never produces duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub tenant_id: String,
    pub path: String,
    pub content: String,
    /// Set by the writer on every (re)write, as `YYYY-MM-DD HH:MM:SS` UTC.
    pub updated_at: String,
}
