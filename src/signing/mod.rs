//! Request signing.
//!
//! Every call carries a `Signature` parameter: the lowercase hex HMAC-SHA256
//! of the canonical parameter string, keyed with the user's API key. The
//! canonical string is the `key=value` list of all parameters except
//! `Signature`, sorted by key and RFC 3986 encoded, joined with `&`.

pub mod canonical;

use crate::parameters::ParameterSet;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Name of the signature parameter.
pub const SIGNATURE_PARAMETER: &str = "Signature";

/// Calculate HMAC-SHA256.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Build the string that gets signed for a parameter set.
pub fn string_to_sign(parameters: &ParameterSet) -> String {
    canonical::encode_pairs(
        parameters
            .iter()
            .filter(|(key, _)| *key != SIGNATURE_PARAMETER)
            .map(|(key, value)| (key, value.to_string())),
    )
}

/// A computed request signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of `parameters` with `secret_key`.
    pub fn generate(parameters: &ParameterSet, secret_key: &str) -> Self {
        let payload = string_to_sign(parameters);
        Signature(hex::encode(hmac_sha256(
            secret_key.as_bytes(),
            payload.as_bytes(),
        )))
    }

    /// The hex encoded signature.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the signature, returning the hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
