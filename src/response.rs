//! Form-encoded token response parsing.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

use crate::error::{Error, ResponseError, ResponseResult, Result};
use crate::{OAUTH_TOKEN_KEY, OAUTH_TOKEN_SECRET_KEY};

/// A parsed token-endpoint response.
///
/// Constructed once from the response body and immutable thereafter.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// The granted token.
    #[serde(rename = "oauth_token")]
    pub token: String,
    /// The secret paired with the token.
    #[serde(rename = "oauth_token_secret")]
    pub token_secret: String,
    /// Provider-specific extras (`user_id`, `screen_name`, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

/// Parses an `application/x-www-form-urlencoded`-style body.
///
/// Pairs split on the first `=`; a pair without `=` parses as an empty
/// value. `oauth_token` and `oauth_token_secret` must both be present.
pub fn parse_token_response(body: &str) -> ResponseResult<TokenResponse> {
    let mut pairs = body
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_owned(), value.to_owned()),
            None => (pair.to_owned(), String::new()),
        })
        .collect::<HashMap<String, String>>();

    let token = pairs.remove(OAUTH_TOKEN_KEY);
    let token_secret = pairs.remove(OAUTH_TOKEN_SECRET_KEY);
    match (token, token_secret) {
        (Some(token), Some(token_secret)) => Ok(TokenResponse {
            token,
            token_secret,
            extra: pairs,
        }),
        (None, _) => Err(ResponseError::KeyNotFound(OAUTH_TOKEN_KEY, body.to_owned())),
        (_, _) => Err(ResponseError::KeyNotFound(
            OAUTH_TOKEN_SECRET_KEY,
            body.to_owned(),
        )),
    }
}

/// Adds `parse_oauth_token` to `reqwest::Response`.
// this trait is sealed
#[async_trait(?Send)]
pub trait TokenReader: private::Sealed {
    async fn parse_oauth_token(self) -> Result<TokenResponse>;
}

#[async_trait(?Send)]
impl TokenReader for Response {
    async fn parse_oauth_token(self) -> Result<TokenResponse> {
        let text = self.text().await?;
        Ok(parse_token_response(&text)?)
    }
}

/// Adds `parse_oauth_token` to futures of `reqwest::Response`.
// this trait is also sealed
#[async_trait(?Send)]
pub trait TokenReaderFuture: private::SealedWrapper {
    async fn parse_oauth_token(self) -> Result<TokenResponse>;
}

#[async_trait(?Send)]
impl<T, E> TokenReaderFuture for T
where
    T: Future<Output = std::result::Result<Response, E>>,
    E: Into<Error> + 'static,
{
    async fn parse_oauth_token(self) -> Result<TokenResponse> {
        match self.await {
            Ok(response) => response.parse_oauth_token().await,
            Err(err) => Err(err.into()),
        }
    }
}

mod private {
    use std::future::Future;

    use reqwest::Response;

    use crate::error::Error;

    pub trait Sealed {}
    impl Sealed for Response {}

    pub trait SealedWrapper {}
    impl<T, E> SealedWrapper for T
    where
        T: Future<Output = Result<Response, E>>,
        E: Into<Error>,
    {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_typical() {
        let body = "oauth_token=Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik\
                    &oauth_token_secret=Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM\
                    &oauth_callback_confirmed=true";
        for parsed in &[
            parse_token_response(body).unwrap(),
            serde_urlencoded::from_str::<TokenResponse>(body).unwrap(),
        ] {
            assert_eq!(parsed.token, "Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik");
            assert_eq!(parsed.token_secret, "Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM");
            assert_eq!(parsed.extra.len(), 1);
            assert_eq!(parsed.extra.get("oauth_callback_confirmed").unwrap(), "true");
        }
    }

    #[test]
    fn parse_response_edge() {
        let body = "oauth_token==&oauth_token_secret=&keyonly=&keyonly2&=&&";
        for parsed in &[
            parse_token_response(body).unwrap(),
            serde_urlencoded::from_str::<TokenResponse>(body).unwrap(),
        ] {
            assert_eq!(parsed.token, "=");
            assert_eq!(parsed.token_secret, "");
            assert_eq!(parsed.extra.len(), 3);
            assert_eq!(parsed.extra.get("keyonly").unwrap(), "");
            assert_eq!(parsed.extra.get("keyonly2").unwrap(), "");
            assert_eq!(parsed.extra.get("").unwrap(), "");
        }
    }

    #[test]
    fn parse_minimal() {
        let parsed = parse_token_response("oauth_token&oauth_token_secret").unwrap();
        assert_eq!(parsed.token, "");
        assert_eq!(parsed.token_secret, "");
        assert_eq!(parsed.extra.len(), 0);
    }

    #[test]
    fn parse_token_notfound() {
        let body = "oauth_token_secret=";
        match parse_token_response(body) {
            Err(ResponseError::KeyNotFound(key, raw)) => {
                assert_eq!(key, OAUTH_TOKEN_KEY);
                assert_eq!(raw, body);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_token_secret_notfound() {
        let body = "oauth_token=";
        match parse_token_response(body) {
            Err(ResponseError::KeyNotFound(key, raw)) => {
                assert_eq!(key, OAUTH_TOKEN_SECRET_KEY);
                assert_eq!(raw, body);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn parse_oauth_token_from_response() {
        let response =
            Response::from(http::Response::new("oauth_token=t&oauth_token_secret=s"));
        let parsed = response.parse_oauth_token().await.unwrap();
        assert_eq!(parsed.token, "t");
        assert_eq!(parsed.token_secret, "s");
    }

    #[tokio::test]
    async fn parse_oauth_token_from_response_future() {
        let pending = async {
            Ok::<_, reqwest::Error>(Response::from(http::Response::new(
                "oauth_token=t&oauth_token_secret=s",
            )))
        };
        let parsed = pending.parse_oauth_token().await.unwrap();
        assert_eq!(parsed.token, "t");
    }

    #[test]
    fn round_trips_rendered_form_body() {
        let body = serde_urlencoded::to_string(&[
            ("oauth_token", "tok"),
            ("oauth_token_secret", "sec"),
            ("user_id", "42"),
        ])
        .unwrap();
        let parsed = parse_token_response(&body).unwrap();
        assert_eq!(parsed.token, "tok");
        assert_eq!(parsed.token_secret, "sec");
        assert_eq!(parsed.extra.get("user_id").unwrap(), "42");
    }
}
