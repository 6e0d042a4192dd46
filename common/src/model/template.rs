use serde::{Deserialize, Serialize};

/// A single template source file belonging to a product.
///
/// Template files are published by operators and are read-only to the
/// generation pipeline. `path` is unique within one product and carries
/// through unchanged to the generated output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub product_id: String,
    /// Relative path of the file within the template set, e.g. `index.html`.
    pub path: String,
    /// Raw text content, with `{{token}}` (or legacy `[token]`) placeholders.
    pub content: String,
    /// MD5 digest of `content`, computed at upload time.
    pub content_md5: String,
}
