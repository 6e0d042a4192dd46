use serde::{Deserialize, Serialize};

/// Per-tenant store profile, filled in by the tenant after subscribing.
///
/// Every field except `tenant_id` is optional: a tenant may generate a site
/// before completing the form, in which case missing fields substitute as
/// empty strings. The field set is fixed; anything a template can reference
/// must be an explicit column here, not a free-form blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreProfile {
    pub tenant_id: String,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub about_text: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub maps_url: Option<String>,
}
