//! Session and access-control core.
//!
//! ARCHITECTURE
//! ============
//! Leaf-first: `credential` decodes bearer tokens, `store` persists the raw
//! token in one storage slot, `session` owns the authoritative
//! credential/identity pair and drives the request channel header, `guard`
//! decides navigation, and `menu` lists role-visible targets for chrome.
//!
//! Menu visibility is a convenience. Every guarded route re-runs
//! `guard::evaluate` against the live identity.

pub mod credential;
pub mod guard;
pub mod identity;
pub mod menu;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build an unsigned three-segment credential around `claims`.
    pub(crate) fn credential_for(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.sig")
    }

    /// Credential for a subject with the given numeric id, role, and name.
    pub(crate) fn credential(id: i64, role: &str, username: &str) -> String {
        credential_for(&serde_json::json!({
            "subject_id": id,
            "role": role,
            "username": username,
        }))
    }
}
