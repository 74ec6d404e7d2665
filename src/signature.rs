//! Signature methods and per-request nonce/timestamp generation
//! (RFC 5849 sections 3.3 and 3.4).

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha1::Sha1;

use crate::encode::percent_encode;
use crate::error::{SignError, SignResult};

const PLAINTEXT_NAME: &str = "PLAINTEXT";
const HMAC_SHA1_NAME: &str = "HMAC-SHA1";

const NONCE_LENGTH: usize = 32;

/// The signature methods this crate supports.
///
/// Token requests are always [`Plaintext`](SignatureMethod::Plaintext): no
/// token secret exists yet, so a keyed hash would add nothing over TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMethod {
    /// The shared secrets themselves, sent verbatim. Safe only over TLS.
    Plaintext,
    /// base64-encoded HMAC-SHA1 over the signature base string.
    HmacSha1,
}

impl SignatureMethod {
    /// The `oauth_signature_method` value for this method.
    pub fn name(self) -> &'static str {
        match self {
            SignatureMethod::Plaintext => PLAINTEXT_NAME,
            SignatureMethod::HmacSha1 => HMAC_SHA1_NAME,
        }
    }

    /// Resolves a method from its protocol name.
    ///
    /// Anything other than `PLAINTEXT` or `HMAC-SHA1` fails; there is no
    /// silent fallback.
    pub fn from_name(name: &str) -> SignResult<Self> {
        match name {
            PLAINTEXT_NAME => Ok(SignatureMethod::Plaintext),
            HMAC_SHA1_NAME => Ok(SignatureMethod::HmacSha1),
            other => Err(SignError::UnsupportedMethod(other.to_owned())),
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureMethod {
    type Err = SignError;

    fn from_str(s: &str) -> SignResult<Self> {
        SignatureMethod::from_name(s)
    }
}

/// Builds the signing key `enc(consumer_secret)&enc(token_secret)`.
///
/// Token requests pass an empty token secret, leaving a trailing `&`.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Signs `base_string` with the given method.
///
/// PLAINTEXT ignores the base string entirely and returns the signing key
/// verbatim.
pub fn sign(method: SignatureMethod, base_string: &str, hash_key: &str) -> String {
    match method {
        SignatureMethod::Plaintext => hash_key.to_owned(),
        SignatureMethod::HmacSha1 => {
            // HMAC accepts keys of any length
            let mut mac = Hmac::<Sha1>::new_from_slice(hash_key.as_bytes()).unwrap();
            mac.update(base_string.as_bytes());
            base64::encode(mac.finalize().into_bytes())
        }
    }
}

/// Generates a fresh 32-character alphanumeric nonce.
pub fn nonce() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Current wall-clock time as Unix seconds.
pub fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
