/*!
oauth1-handshake: OAuth 1.0a request signing and token acquisition.

# Overview

This library implements the client side of the OAuth 1.0a handshake
(RFC 5849): it builds the canonical signature base string from an HTTP
request's method, URL and parameters, signs it with PLAINTEXT or HMAC-SHA1,
renders the `Authorization` header, and parses the form-encoded token
responses a provider sends back. A thin [reqwest](https://crates.io/crates/reqwest)
client performs the actual token-request and access-token POSTs.

# How to use

```no_run
use oauth1_handshake::{
    authorize_redirect_url, AccessRequest, Client, SignatureMethod, TokenRequest,
};

# async fn run() -> Result<(), oauth1_handshake::Error> {
let client = Client::new();

// step 1: acquire a temporary request token
let request = TokenRequest::new(
    "[CONSUMER_KEY]",
    "[CONSUMER_SECRET]",
    "http://localhost/callback",
)?;
let response = client
    .acquire_request_token("https://provider.example.com/oauth/request_token", request)
    .await?;

// step 2: send the user off to authorize the token
let redirect = authorize_redirect_url(
    "https://provider.example.com/oauth/authorize",
    &response.token,
    Some("MyApp"),
);
println!("please access: {}", redirect);
let verifier = "[VERIFIER_FROM_BROWSER]";

// step 3: exchange it for an access token
let request = AccessRequest::new(
    "[CONSUMER_KEY]",
    "[CONSUMER_SECRET]",
    response.token,
    response.token_secret,
    verifier,
)?
.signature_method(SignatureMethod::HmacSha1);
let access = client
    .acquire_access_token("https://provider.example.com/oauth/access_token", request)
    .await?;
println!(
    "your token and secret is: \n token: {}\n secret: {}",
    access.token, access.token_secret
);
# Ok(())
# }
```
*/
mod base;
mod client;
mod encode;
mod error;
mod header;
mod request;
mod response;
mod signature;

// exposed to external programs
pub use base::{extract_query, normalize, signature_base};
pub use client::{authorize_redirect_url, Client};
pub use encode::percent_encode;
pub use error::{
    ArgumentError, ArgumentResult, Error, ResponseError, ResponseResult, Result, SignError,
    SignResult,
};
pub use header::authorization_header;
pub use request::{AccessRequest, ParameterSet, Request, SignedRequest, TokenRequest};
pub use response::{parse_token_response, TokenReader, TokenReaderFuture, TokenResponse};
pub use signature::{nonce, sign, signing_key, timestamp, SignatureMethod};

// exposed constant variables
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";
/// The only protocol version this crate speaks.
pub const OAUTH_VERSION: &str = "1.0";

// crate-private constant variables
//
// Parameter sets are keyed by unprefixed names; the `oauth_` prefix is
// applied when the base string and the authorization header are rendered.
pub(crate) const OAUTH_KEY_PREFIX: &str = "oauth_";
pub(crate) const REALM_KEY: &str = "realm";
pub(crate) const CALLBACK_KEY: &str = "callback";
pub(crate) const CONSUMER_KEY_KEY: &str = "consumer_key";
pub(crate) const CONSUMER_SECRET_KEY: &str = "consumer_secret";
pub(crate) const NONCE_KEY: &str = "nonce";
pub(crate) const SIGNATURE_KEY: &str = "signature";
pub(crate) const SIGNATURE_METHOD_KEY: &str = "signature_method";
pub(crate) const TIMESTAMP_KEY: &str = "timestamp";
pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const TOKEN_SECRET_KEY: &str = "token_secret";
pub(crate) const VERIFIER_KEY: &str = "verifier";
pub(crate) const VERSION_KEY: &str = "version";
pub(crate) const SECRET_KEY_SUFFIX: &str = "_secret";
pub(crate) const HEADER_SECRET_SUFFIX: &str = "secret";
