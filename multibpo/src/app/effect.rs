use super::Action;
use multibpo_core::api::{register, resend_verification, subscription};
use multibpo_core::session::{self, SessionStore, SessionTokens};
use multibpo_core::Client;
use std::io;
use std::sync::Arc;

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
pub struct EffectContext {
    /// an HTTP client with reqwest
    pub http: reqwest::Client,

    /// where auto-login tokens get persisted
    pub session: Arc<dyn SessionStore + Send + Sync>,
}

impl EffectContext {
    /// Get a new `EffectContext` around the given session store.
    pub fn new(session: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug)]
pub enum Effect {
    /// Submit the registration form
    Register(Client, register::Req),

    /// Check a one-time verification token
    VerifyEmail(Client, String),

    /// Ask for the verification email again
    ResendVerification(Client, resend_verification::Req),

    /// Ask the payment backend for a checkout session
    CreateSubscription(Client, subscription::Req),

    /// Persist the tokens granted by an auto-login
    SaveSession(SessionTokens),

    /// Hand a URL to the system browser
    OpenUrl(String),
}

impl Effect {
    /// Whether this effect only matters to the screen that started it.
    /// View-bound effects are aborted when the user navigates away; writes
    /// and browser handoffs run to completion regardless.
    pub fn is_view_bound(&self) -> bool {
        matches!(
            self,
            Self::Register(..)
                | Self::VerifyEmail(..)
                | Self::ResendVerification(..)
                | Self::CreateSubscription(..)
        )
    }

    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle
    pub async fn run(self, conn: &EffectContext) -> Option<Action> {
        match self.run_inner(conn).await {
            Ok(action) => action,
            Err(problem) => {
                tracing::error!(?problem, "problem running effect");
                Some(Action::Problem(problem.to_string()))
            }
        }
    }

    /// The actual implementation of `run`, but with a `Result` wrapper to make
    /// it more ergonomic to write. Network answers travel back inside the
    /// action, errors included, so the screen that asked can phrase them.
    async fn run_inner(self, conn: &EffectContext) -> Result<Option<Action>, Problem> {
        match self {
            Self::Register(client, req) => {
                tracing::info!("registering");

                Ok(Some(Action::Registered(
                    client.register(&conn.http, &req).await,
                )))
            }

            Self::VerifyEmail(client, token) => {
                tracing::info!("checking verification token");

                Ok(Some(Action::Verified(
                    client.verify_email(&conn.http, &token).await,
                )))
            }

            Self::ResendVerification(client, req) => {
                tracing::info!("resending verification email");

                Ok(Some(Action::Resent(
                    client.resend_verification(&conn.http, &req).await,
                )))
            }

            Self::CreateSubscription(client, req) => {
                tracing::info!("creating checkout session");

                Ok(Some(Action::SubscriptionCreated(
                    client.create_subscription(&conn.http, &req).await,
                )))
            }

            Self::SaveSession(tokens) => {
                tracing::info!("saving session tokens");

                conn.session.set(&tokens)?;

                Ok(Some(Action::SavedSession))
            }

            Self::OpenUrl(url) => {
                tracing::info!(%url, "opening in the browser");

                open::that_detached(&url)?;

                Ok(None)
            }
        }
    }
}

/// Problems that can happen while running an `Effect`.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    /// We couldn't persist the session tokens.
    #[error("session error: {0}")]
    Session(#[from] session::Error),

    /// We couldn't hand the URL to the system browser.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
