use crate::session::SessionTokens;
use serde::{Deserialize, Serialize};

/// The account the token belonged to, as the backend reports it on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    /// The verified email address.
    pub email: String,
}

/// Result of following a verification link. The backend multiplexes every
/// outcome through flags on this one body; `crate::verify::Outcome` is the
/// structured reading of it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// Whether the token was accepted.
    pub success: bool,

    /// Set when the token was accepted before and the account was active all
    /// along.
    #[serde(default)]
    pub already_verified: bool,

    /// Set when the backend established a session as a side effect of the
    /// verification.
    #[serde(default)]
    pub auto_login: bool,

    /// The granted session, present only alongside `auto_login`.
    #[serde(default)]
    pub tokens: Option<SessionTokens>,

    /// The verified account, on success.
    #[serde(default)]
    pub user: Option<User>,

    /// Set when the token aged out.
    #[serde(default)]
    pub expired: bool,

    /// Set when the token never existed or was mangled.
    #[serde(default)]
    pub invalid_token: bool,

    /// Human-readable detail for failures without a dedicated flag.
    #[serde(default)]
    pub message: Option<String>,

    /// Email echoed on failures, when the backend could still tell whose
    /// token it was.
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Where the verify endpoint lives, with the token interpolated into the
/// path.
#[must_use]
pub fn path(token: &str) -> String {
    format!("/api/v1/whatsapp/verify-email/{token}/")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_interpolates_the_token() {
        assert_eq!(
            path("abc123"),
            "/api/v1/whatsapp/verify-email/abc123/"
        );
    }
}
