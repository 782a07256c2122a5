use super::error::{self, Error};
use super::{register, resend_verification, subscription, verify_email};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the funnel API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://multibpo.com.br`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    #[must_use]
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Register a new account.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn register(
        &self,
        client: &reqwest::Client,
        req: &register::Req,
    ) -> error::Result<register::Resp> {
        let url = Url::parse(&self.server)?.join(register::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Confirm an email address with the one-time token from the emailed
    /// link.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn verify_email(
        &self,
        client: &reqwest::Client,
        token: &str,
    ) -> error::Result<verify_email::Resp> {
        let url = Url::parse(&self.server)?.join(&verify_email::path(token))?;

        Self::handle_response(client.get(url)).await
    }

    /// Ask the backend to send the verification email again.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn resend_verification(
        &self,
        client: &reqwest::Client,
        req: &resend_verification::Req,
    ) -> error::Result<resend_verification::Resp> {
        let url = Url::parse(&self.server)?.join(resend_verification::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Ask the payment backend for a hosted checkout session.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn create_subscription(
        &self,
        client: &reqwest::Client,
        req: &subscription::Req,
    ) -> error::Result<subscription::Resp> {
        let url = Url::parse(&self.server)?.join(subscription::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Convert an HTTP response into a result, interpreting errors in a
    /// standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx) or a client error
    ///   (4xx) — the backend reports business failures through `success`
    ///   flags in the body, with a 4xx status alongside.
    /// - `Error::Server` if the server returned a server error (5xx)
    /// - `Error::Unexpected` if the server returned something else (the
    ///   server is not supposed to issue redirects or informational
    ///   responses.)
    async fn handle_response<T>(resp: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = resp.send().await?;

        let status = resp.status();

        if status.is_success() || status.is_client_error() {
            Ok(resp.json().await?)
        } else if status.is_server_error() {
            Err(Error::Server)
        } else {
            Err(Error::Unexpected(status))
        }
    }
}
