//! Signature base string construction (RFC 5849 section 3.4.1).

use std::fmt::Write;

use url::Url;

use crate::encode::percent_encode;
use crate::error::{SignError, SignResult};
use crate::request::ParameterSet;
use crate::{OAUTH_KEY_PREFIX, SECRET_KEY_SUFFIX, SIGNATURE_KEY};

/// Canonicalizes `url` per RFC 5849 section 3.4.1.2.
///
/// Output is `scheme://host[:port]/path` with the default port omitted and
/// any query or fragment stripped. A URL with no path normalizes to `/`.
pub fn normalize(url: &str) -> SignResult<String> {
    let url: Url = url.parse().map_err(SignError::InvalidEndpoint)?;
    Ok(normalize_url(&url))
}

fn normalize_url(url: &Url) -> String {
    let mut normalized = String::with_capacity(url.as_str().len());
    normalized.push_str(url.scheme());
    normalized.push_str("://");
    if let Some(host) = url.host_str() {
        normalized.push_str(host);
    }
    // `Url::port` already yields None for the scheme's default port
    if let Some(port) = url.port() {
        let _ = write!(normalized, ":{}", port);
    }
    normalized.push_str(url.path());
    normalized
}

/// Extracts the non-OAuth parameters of a raw query string.
///
/// Terms beginning with `oauth_` belong to the OAuth parameter namespace and
/// are dropped so they are not double-counted in the signature base. Terms
/// without `=` map to an empty value. When a key occurs twice, the last
/// occurrence wins.
pub fn extract_query(query: &str) -> ParameterSet {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut parameters = ParameterSet::new();
    for term in query.split('&') {
        if term.is_empty() || term.starts_with(OAUTH_KEY_PREFIX) {
            continue;
        }
        let (key, value) = match term.split_once('=') {
            Some((key, value)) => (key, value),
            None => (term, ""),
        };
        parameters.insert(key.to_owned(), value.to_owned());
    }
    parameters
}

/// Builds the signature base string for a `POST` to `url`.
///
/// Every non-empty entry of `oauth_params` whose key does not end in
/// `_secret` or `signature` is merged (prefixed with `oauth_`) with the
/// non-OAuth query parameters of `url`, sorted by key, joined as raw
/// `key=value` pairs, and the whole pair string is percent-encoded once as
/// a unit. The result is `POST&{enc(normalized url)}&{enc(pairs)}`.
pub fn signature_base(url: &str, oauth_params: &ParameterSet) -> SignResult<String> {
    let url: Url = url.parse().map_err(SignError::InvalidEndpoint)?;

    let mut parameters = extract_query(url.query().unwrap_or(""));
    for (key, value) in oauth_params {
        // Secrets are kept to ourselves and a pre-existing signature would
        // be invalid anyway.
        if !value.is_empty()
            && !key.ends_with(SECRET_KEY_SUFFIX)
            && !key.ends_with(SIGNATURE_KEY)
        {
            parameters.insert(format!("{}{}", OAUTH_KEY_PREFIX, key), value.clone());
        }
    }

    let pairs = parameters
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "POST&{}&{}",
        percent_encode(&normalize_url(&url)),
        percent_encode(&pairs)
    ))
}
