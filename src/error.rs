use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type ArgumentResult<T> = std::result::Result<T, ArgumentError>;
pub type SignResult<T> = std::result::Result<T, SignError>;
pub type ResponseResult<T> = std::result::Result<T, ResponseError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid request argument : {0}")]
    Argument(#[from] ArgumentError),
    #[error("OAuth sign failed : {0}")]
    Sign(#[from] SignError),
    #[error("token response could not be parsed : {0}")]
    Response(#[from] ResponseError),
    #[error("request failed : {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status. The response body is
    /// carried verbatim so server-side rejections (bad signature, expired
    /// token) stay diagnosable.
    #[error("provider rejected the request ({status}) : {body}")]
    Provider { status: StatusCode, body: String },
}

#[derive(Error, Debug, Clone)]
pub enum ArgumentError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Error, Debug)]
pub enum SignError {
    #[error("unsupported signature method : {0}")]
    UnsupportedMethod(String),
    #[error("endpoint URL could not be parsed : {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    #[error("response has malformed format: not found {0} in {1}")]
    KeyNotFound(&'static str, String),
}
