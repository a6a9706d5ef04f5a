//! Request signing for the upload API
//!
//! A signature is the lowercase hex SHA-1 of the request parameters,
//! sorted by name and joined as `k=v&k=v`, with the API secret appended
//! without a separator.

use sha1::{Digest, Sha1};
use std::collections::BTreeMap;
use std::fmt;

/// Parameters that take part in a signature, kept sorted by name.
pub type SignedParams<'a> = BTreeMap<&'a str, String>;

/// Computes request signatures from the API secret.
#[derive(Clone)]
pub struct Signer {
    api_secret: String,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Signer {
    pub fn new(api_secret: String) -> Self {
        Self { api_secret }
    }

    /// `k1=v1&k2=v2...` in key order, without the secret.
    pub fn string_to_sign(params: &SignedParams<'_>) -> String {
        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn sign(&self, params: &SignedParams<'_>) -> String {
        let mut hasher = Sha1::new();
        hasher.update(Self::string_to_sign(params).as_bytes());
        hasher.update(self.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Signature for an upload or destroy request. The public id is left out
    /// when the service is asked to pick a random one.
    pub fn sign_request(&self, public_id: Option<&str>, timestamp: i64) -> String {
        self.sign(&request_params(public_id, timestamp))
    }
}

pub fn request_params(public_id: Option<&str>, timestamp: i64) -> SignedParams<'static> {
    let mut params = SignedParams::new();
    if let Some(id) = public_id {
        params.insert("public_id", id.to_string());
    }
    params.insert("timestamp", timestamp.to_string());
    params
}
