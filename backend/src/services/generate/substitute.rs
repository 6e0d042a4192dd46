//! Placeholder substitution engine.
//!
//! Pure text transform: one pass over the template, replacing every
//! occurrence of a known token with its value. `{{token}}` is the canonical
//! syntax; `[token]` is accepted because older template stock still uses it.
//! Both resolve through the same token map.
//!
//! Tokens the map does not know are left exactly as written. This keeps
//! literal brackets in template prose (and things like `[1]` footnotes) safe
//! from mangling, and means a typo'd token shows up verbatim in the output
//! where an operator can spot it.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches `{{ token }}` (group 1) or legacy `[token]` (group 2).
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}|\[([^\[\]]+)\]").expect("token pattern is valid")
});

/// Replaces all occurrences of known tokens in `template` with their values.
///
/// Single pass only: replacement values are inserted literally and never
/// re-scanned, so a value that itself contains token syntax comes through
/// unchanged. Deterministic and free of I/O, safe to call repeatedly and
/// from multiple threads.
pub(crate) fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| {
            let token = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().trim())
                .unwrap_or("");
            match values.get(token) {
                Some(value) => value.clone(),
                // Unknown token: keep the original text untouched.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_all_occurrences_of_known_tokens() {
        let v = values(&[("store_name", "Toko Budi"), ("phone_number", "0800")]);
        let out = substitute("Welcome to {{store_name}}, call {{phone_number}}", &v);
        assert_eq!(out, "Welcome to Toko Budi, call 0800");

        let out = substitute("{{store_name}} {{store_name}}", &v);
        assert_eq!(out, "Toko Budi Toko Budi");
    }

    #[test]
    fn legacy_bracket_tokens_resolve_through_the_same_map() {
        let v = values(&[("nama", ""), ("alamat", "")]);
        assert_eq!(substitute("[nama] - [alamat]", &v), " - ");
    }

    #[test]
    fn unknown_tokens_are_left_untouched() {
        let v = values(&[("store_name", "Toko Budi")]);
        let out = substitute("{{store_name}} {{mystery}} [also unknown]", &v);
        assert_eq!(out, "Toko Budi {{mystery}} [also unknown]");
    }

    #[test]
    fn empty_and_token_free_templates_pass_through() {
        let v = values(&[("store_name", "Toko Budi")]);
        assert_eq!(substitute("", &v), "");
        assert_eq!(substitute("plain text, no tokens", &v), "plain text, no tokens");
    }

    #[test]
    fn inserted_values_are_not_re_expanded() {
        // A value that looks like a token must land literally: single pass.
        let v = values(&[("store_name", "{{phone_number}}"), ("phone_number", "0800")]);
        assert_eq!(substitute("{{store_name}}", &v), "{{phone_number}}");
    }

    #[test]
    fn tokens_with_spaces_in_the_name_work() {
        let v = values(&[("nomor hp", "0812")]);
        assert_eq!(substitute("hp: [nomor hp] / {{nomor hp}}", &v), "hp: 0812 / 0812");
    }

    #[test]
    fn whitespace_inside_curly_delimiters_is_tolerated() {
        let v = values(&[("store_name", "Toko Budi")]);
        assert_eq!(substitute("{{ store_name }}", &v), "Toko Budi");
    }
}
