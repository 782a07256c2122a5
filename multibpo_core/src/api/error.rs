use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while talking to the backend. Business failures are
/// not here: the backend reports those in-band through `success` flags in the
/// response bodies.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't reach the server or read its answer as the expected JSON.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server fell over (5xx) without a usable body.
    #[error("the server had an internal problem")]
    Server,

    /// The server returned something it never should (it is not supposed to
    /// issue redirects or informational responses).
    #[error("unexpected status from the server: {0}")]
    Unexpected(reqwest::StatusCode),
}
