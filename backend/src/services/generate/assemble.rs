//! Tenant data assembly.
//!
//! Flattens a `StoreProfile` into the token → value map the substitution
//! engine consumes. The alias table below is fixed configuration: every
//! token a template may legally reference, mapped to the profile field it
//! reads from. Several tokens alias the same field — the legacy Indonesian
//! names date from the first template stock and stay supported so old
//! templates keep rendering.

use common::model::profile::StoreProfile;
use std::collections::HashMap;

/// Token → profile field. Tokens not listed here are never substituted.
const TOKEN_ALIASES: &[(&str, &str)] = &[
    // canonical tokens
    ("store_name", "store_name"),
    ("owner_name", "owner_name"),
    ("phone_number", "phone_number"),
    ("email", "email"),
    ("address", "address"),
    ("about", "about_text"),
    ("instagram", "instagram"),
    ("facebook", "facebook"),
    ("whatsapp", "whatsapp"),
    ("maps_url", "maps_url"),
    // legacy tokens from the original template stock
    ("nama", "store_name"),
    ("pemilik", "owner_name"),
    ("nomor hp", "phone_number"),
    ("telepon", "phone_number"),
    ("alamat", "address"),
    ("tentang", "about_text"),
];

fn field_value(profile: &StoreProfile, field: &str) -> Option<String> {
    match field {
        "store_name" => profile.store_name.clone(),
        "owner_name" => profile.owner_name.clone(),
        "phone_number" => profile.phone_number.clone(),
        "email" => profile.email.clone(),
        "address" => profile.address.clone(),
        "about_text" => profile.about_text.clone(),
        "instagram" => profile.instagram.clone(),
        "facebook" => profile.facebook.clone(),
        "whatsapp" => profile.whatsapp.clone(),
        "maps_url" => profile.maps_url.clone(),
        _ => None,
    }
}

/// Builds the substitution map for one generation run.
///
/// Every known token gets an entry. Missing fields — and a missing profile
/// altogether — coalesce to the empty string, so generation proceeds even
/// for a tenant who has not filled in any data yet.
pub(crate) fn assemble_values(profile: Option<&StoreProfile>) -> HashMap<String, String> {
    let mut values = HashMap::with_capacity(TOKEN_ALIASES.len());
    for (token, field) in TOKEN_ALIASES {
        let value = profile
            .and_then(|p| field_value(p, field))
            .unwrap_or_default();
        values.insert((*token).to_string(), value);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_maps_every_token_to_empty() {
        let values = assemble_values(None);
        assert_eq!(values.len(), TOKEN_ALIASES.len());
        assert!(values.values().all(|v| v.is_empty()));
    }

    #[test]
    fn fields_reach_their_tokens_and_aliases() {
        let profile = StoreProfile {
            tenant_id: "t1".to_string(),
            store_name: Some("Toko Budi".to_string()),
            phone_number: Some("0800".to_string()),
            ..Default::default()
        };
        let values = assemble_values(Some(&profile));

        assert_eq!(values["store_name"], "Toko Budi");
        assert_eq!(values["nama"], "Toko Budi");
        assert_eq!(values["phone_number"], "0800");
        assert_eq!(values["nomor hp"], "0800");
        assert_eq!(values["telepon"], "0800");
        // unfilled fields coalesce to empty, they are never absent
        assert_eq!(values["address"], "");
        assert_eq!(values["alamat"], "");
    }
}
