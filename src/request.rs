//! Typed OAuth 1.0a requests and the signing pipeline.
//!
//! A request is an immutable snapshot of its credentials; signing never
//! mutates it. [`Request::sign`] returns a fresh [`SignedRequest`] carrying
//! the final parameter set and the rendered `Authorization` header.

use std::collections::BTreeMap;

use log::debug;

use crate::base::signature_base;
use crate::error::{ArgumentError, ArgumentResult, SignResult};
use crate::header::authorization_header;
use crate::signature::{nonce, sign, signing_key, timestamp, SignatureMethod};
use crate::{
    CALLBACK_KEY, CONSUMER_KEY_KEY, CONSUMER_SECRET_KEY, NONCE_KEY, OAUTH_VERSION,
    SIGNATURE_KEY, SIGNATURE_METHOD_KEY, TIMESTAMP_KEY, TOKEN_KEY, TOKEN_SECRET_KEY,
    VERIFIER_KEY, VERSION_KEY,
};

/// Ordered parameter-name → value mapping. Insertion order is irrelevant;
/// `BTreeMap` keeps the set sorted by key, which is the order every stage of
/// the pipeline needs.
pub type ParameterSet = BTreeMap<String, String>;

/// Field table mapping an accessor to its unprefixed parameter key.
type Field<T> = (&'static str, fn(&T) -> &str);

static TOKEN_REQUEST_FIELDS: &[Field<TokenRequest>] = &[
    (CALLBACK_KEY, |request| &request.return_url),
    (CONSUMER_KEY_KEY, |request| &request.consumer_key),
    (CONSUMER_SECRET_KEY, |request| &request.consumer_secret),
];

static ACCESS_REQUEST_FIELDS: &[Field<AccessRequest>] = &[
    (CONSUMER_KEY_KEY, |request| &request.consumer_key),
    (CONSUMER_SECRET_KEY, |request| &request.consumer_secret),
    (TOKEN_KEY, |request| &request.token),
    (TOKEN_SECRET_KEY, |request| &request.token_secret),
    (VERIFIER_KEY, |request| &request.verifier),
];

fn ensure_not_empty(value: &str, name: &'static str) -> ArgumentResult<()> {
    if value.is_empty() {
        Err(ArgumentError::Empty(name))
    } else {
        Ok(())
    }
}

/// A request for a temporary (request) token.
///
/// Always signed with PLAINTEXT: no token secret exists yet, so HMAC would
/// not strengthen anything.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    consumer_key: String,
    consumer_secret: String,
    return_url: String,
}

impl TokenRequest {
    /// Creates a token request. Every argument must be non-empty.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        return_url: impl Into<String>,
    ) -> ArgumentResult<Self> {
        let request = TokenRequest {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            return_url: return_url.into(),
        };
        ensure_not_empty(&request.consumer_key, "consumer_key")?;
        ensure_not_empty(&request.consumer_secret, "consumer_secret")?;
        ensure_not_empty(&request.return_url, "return_url")?;
        Ok(request)
    }
}

/// A request exchanging an authorized request token for an access token.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
    verifier: String,
    signature_method: SignatureMethod,
}

impl AccessRequest {
    /// Creates an access request. Every argument must be non-empty.
    ///
    /// Defaults to PLAINTEXT; use [`signature_method`](Self::signature_method)
    /// to select HMAC-SHA1.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
        verifier: impl Into<String>,
    ) -> ArgumentResult<Self> {
        let request = AccessRequest {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
            verifier: verifier.into(),
            signature_method: SignatureMethod::Plaintext,
        };
        ensure_not_empty(&request.consumer_key, "consumer_key")?;
        ensure_not_empty(&request.consumer_secret, "consumer_secret")?;
        ensure_not_empty(&request.token, "token")?;
        ensure_not_empty(&request.token_secret, "token_secret")?;
        ensure_not_empty(&request.verifier, "verifier")?;
        Ok(request)
    }

    /// Selects the signature method for this request.
    pub fn signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }
}

/// A token or access request, sharing one signing routine.
#[derive(Debug, Clone)]
pub enum Request {
    Token(TokenRequest),
    Access(AccessRequest),
}

impl From<TokenRequest> for Request {
    fn from(request: TokenRequest) -> Self {
        Request::Token(request)
    }
}

impl From<AccessRequest> for Request {
    fn from(request: AccessRequest) -> Self {
        Request::Access(request)
    }
}

impl Request {
    /// The signature method this request signs with.
    pub fn signature_method(&self) -> SignatureMethod {
        match self {
            // token requests always use PLAINTEXT
            Request::Token(_) => SignatureMethod::Plaintext,
            Request::Access(request) => request.signature_method,
        }
    }

    fn consumer_secret(&self) -> &str {
        match self {
            Request::Token(request) => &request.consumer_secret,
            Request::Access(request) => &request.consumer_secret,
        }
    }

    fn token_secret(&self) -> &str {
        match self {
            Request::Token(_) => "",
            Request::Access(request) => &request.token_secret,
        }
    }

    /// Collects this request's fields into a fresh parameter set, keyed by
    /// unprefixed names (`token`, not `oauth_token`).
    pub fn parameters(&self) -> ParameterSet {
        let mut parameters = ParameterSet::new();
        match self {
            Request::Token(request) => {
                for (key, value_of) in TOKEN_REQUEST_FIELDS {
                    parameters.insert((*key).to_owned(), value_of(request).to_owned());
                }
            }
            Request::Access(request) => {
                for (key, value_of) in ACCESS_REQUEST_FIELDS {
                    parameters.insert((*key).to_owned(), value_of(request).to_owned());
                }
            }
        }
        parameters.insert(
            SIGNATURE_METHOD_KEY.to_owned(),
            self.signature_method().name().to_owned(),
        );
        parameters.insert(VERSION_KEY.to_owned(), OAUTH_VERSION.to_owned());
        parameters
    }

    /// Signs this request for a `POST` to `endpoint`.
    ///
    /// HMAC-SHA1 requests get a freshly generated nonce and timestamp;
    /// PLAINTEXT requests never carry them.
    pub fn sign(&self, endpoint: &str) -> SignResult<SignedRequest> {
        match self.signature_method() {
            SignatureMethod::HmacSha1 => {
                self.sign_with(endpoint, Some(nonce()), Some(timestamp()))
            }
            SignatureMethod::Plaintext => self.sign_with(endpoint, None, None),
        }
    }

    /// Signs this request with a caller-supplied nonce and timestamp.
    ///
    /// Signing is a pure function of its inputs, so fixing both makes
    /// HMAC-SHA1 output reproducible. PLAINTEXT requests ignore them.
    pub fn sign_with(
        &self,
        endpoint: &str,
        nonce: Option<String>,
        timestamp: Option<u64>,
    ) -> SignResult<SignedRequest> {
        let method = self.signature_method();
        let mut parameters = self.parameters();
        if method == SignatureMethod::HmacSha1 {
            if let Some(nonce) = nonce {
                parameters.insert(NONCE_KEY.to_owned(), nonce);
            }
            if let Some(timestamp) = timestamp {
                parameters.insert(TIMESTAMP_KEY.to_owned(), timestamp.to_string());
            }
        }

        let base = signature_base(endpoint, &parameters)?;
        debug!("signature base string: {}", base);

        let hash_key = signing_key(self.consumer_secret(), self.token_secret());
        let signature = sign(method, &base, &hash_key);
        parameters.insert(SIGNATURE_KEY.to_owned(), signature);

        let authorization = authorization_header(&parameters, None);
        Ok(SignedRequest {
            authorization,
            parameters,
        })
    }
}

/// The immutable result of signing a request.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Rendered `Authorization` header value.
    pub authorization: String,
    /// The full signed parameter set, secrets included. The header rendering
    /// already excludes secret-bearing keys.
    pub parameters: ParameterSet,
}
