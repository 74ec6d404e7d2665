//! Token acquisition over reqwest.

use http::header::AUTHORIZATION;
use log::debug;
use reqwest::Client as HttpClient;

use crate::error::{Error, Result};
use crate::request::{AccessRequest, Request, TokenRequest};
use crate::response::{parse_token_response, TokenResponse};
use crate::OAUTH_TOKEN_KEY;

/// OAuth 1.0a token-acquisition client.
///
/// Signs each request and performs a single `POST` per call; failures are
/// surfaced, never retried.
#[derive(Debug, Clone, Default)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Constructs a new `Client`.
    ///
    /// This method calls `reqwest::Client::new()` internally.
    pub fn new() -> Self {
        Client {
            http: HttpClient::new(),
        }
    }

    /// Constructs a new `Client` around an existing `reqwest::Client`.
    pub fn with_client(http: HttpClient) -> Self {
        Client { http }
    }

    /// Acquires a temporary request token from `endpoint`.
    pub async fn acquire_request_token(
        &self,
        endpoint: &str,
        request: TokenRequest,
    ) -> Result<TokenResponse> {
        self.submit(endpoint, &Request::from(request)).await
    }

    /// Exchanges an authorized request token for an access token.
    pub async fn acquire_access_token(
        &self,
        endpoint: &str,
        request: AccessRequest,
    ) -> Result<TokenResponse> {
        self.submit(endpoint, &Request::from(request)).await
    }

    async fn submit(&self, endpoint: &str, request: &Request) -> Result<TokenResponse> {
        let signed = request.sign(endpoint)?;
        debug!("submitting signed {} request to {}", request.signature_method(), endpoint);

        let response = self
            .http
            .post(endpoint)
            .header(AUTHORIZATION, signed.authorization)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // keep the provider's own diagnostics (invalid signature,
            // expired token, ...) attached to the failure
            return Err(Error::Provider { status, body });
        }
        Ok(parse_token_response(&body)?)
    }
}

/// Builds the URL users are redirected to for authorizing a request token:
/// `{endpoint}?oauth_token={token}[&name={application_name}]`.
pub fn authorize_redirect_url(
    endpoint: &str,
    token: &str,
    application_name: Option<&str>,
) -> String {
    let mut url = format!("{}?{}={}", endpoint, OAUTH_TOKEN_KEY, token);
    if let Some(name) = application_name {
        url.push_str("&name=");
        url.push_str(name);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_url_contains_token() {
        let url = authorize_redirect_url(
            "https://provider.example.com/authorize",
            "tempauthtoken",
            None,
        );
        assert_eq!(
            url,
            "https://provider.example.com/authorize?oauth_token=tempauthtoken"
        );
    }

    #[test]
    fn redirect_url_appends_application_name() {
        let url = authorize_redirect_url(
            "https://provider.example.com/authorize",
            "tempauthtoken",
            Some("MyApp"),
        );
        assert!(url.contains("?oauth_token=tempauthtoken"));
        assert!(url.ends_with("&name=MyApp"));
    }
}
