use serde::{Deserialize, Serialize};

/// A catalog entry that owns a set of template files.
///
/// Products are managed by operators; the generation pipeline only ever
/// reads them (by `name`) to locate the template stock for a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String, // UUID
    pub name: String,
}
