use std::collections::BTreeMap;

use sha1::{Digest, Sha1};

/// Sign request parameters the way the provider expects: sorted `key=value`
/// pairs joined by `&`, secret appended, SHA-1 hex digest. Empty values are
/// not part of the signature.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
