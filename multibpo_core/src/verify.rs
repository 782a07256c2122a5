use crate::api::verify_email;
use crate::session::SessionTokens;

/// Terminal result of the one verification round trip. The screen enters
/// `loading`, the backend answers once, and one of these is where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The token was used before; the account is already active. Never
    /// carries tokens, even if the backend sent some.
    AlreadyVerified {
        /// Email the backend confirmed, when it echoed one.
        email: Option<String>,
    },

    /// The token checked out and the account is now active.
    Verified {
        /// Email the backend confirmed, when it echoed one.
        email: Option<String>,

        /// Present only when the backend auto-logged the user in; the caller
        /// persists these as a side effect.
        tokens: Option<SessionTokens>,
    },

    /// The token aged out. The only way forward is a new registration.
    Expired {
        /// Email the backend associated with the stale token, if any.
        email: Option<String>,
    },

    /// The link itself is broken or was tampered with.
    InvalidLink {
        /// Email the backend associated with the token, if any.
        email: Option<String>,
    },

    /// The backend refused for some other reason.
    Failed {
        /// The backend's own message, when it sent one.
        message: Option<String>,

        /// Email the backend associated with the token, if any.
        email: Option<String>,
    },
}

impl Outcome {
    /// Whether this outcome is one of the success variants.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyVerified { .. } | Self::Verified { .. })
    }

    /// The email to display, whatever the variant.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::AlreadyVerified { email }
            | Self::Verified { email, .. }
            | Self::Expired { email }
            | Self::InvalidLink { email }
            | Self::Failed { email, .. } => email.as_deref(),
        }
    }
}

impl From<verify_email::Resp> for Outcome {
    fn from(resp: verify_email::Resp) -> Self {
        if resp.success {
            let email = resp.user.map(|user| user.email);

            if resp.already_verified {
                Self::AlreadyVerified { email }
            } else {
                // Tokens count only when the backend explicitly flagged the
                // auto-login; a token pair without the flag is ignored.
                let tokens = if resp.auto_login { resp.tokens } else { None };

                Self::Verified { email, tokens }
            }
        } else if resp.expired {
            Self::Expired {
                email: resp.user_email,
            }
        } else if resp.invalid_token {
            Self::InvalidLink {
                email: resp.user_email,
            }
        } else {
            Self::Failed {
                message: resp.message,
                email: resp.user_email,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    /// Parse a backend answer the way the client does.
    fn resp(value: serde_json::Value) -> verify_email::Resp {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn already_verified_wins_over_tokens() {
        let outcome = Outcome::from(resp(json!({
            "success": true,
            "already_verified": true,
            "auto_login": true,
            "tokens": {"access": "a", "refresh": "r"},
            "user": {"email": "user@example.com"},
        })));

        assert_eq!(
            outcome,
            Outcome::AlreadyVerified {
                email: Some("user@example.com".to_owned())
            }
        );
    }

    #[test]
    fn auto_login_carries_tokens_out() {
        let outcome = Outcome::from(resp(json!({
            "success": true,
            "auto_login": true,
            "tokens": {"access": "a", "refresh": "r"},
            "user": {"email": "user@example.com"},
        })));

        assert_eq!(
            outcome,
            Outcome::Verified {
                email: Some("user@example.com".to_owned()),
                tokens: Some(SessionTokens {
                    access: "a".to_owned(),
                    refresh: "r".to_owned(),
                }),
            }
        );
    }

    #[test]
    fn tokens_without_the_flag_are_dropped() {
        let outcome = Outcome::from(resp(json!({
            "success": true,
            "tokens": {"access": "a", "refresh": "r"},
        })));

        assert_eq!(
            outcome,
            Outcome::Verified {
                email: None,
                tokens: None,
            }
        );
    }

    #[test]
    fn expired_flag_is_terminal() {
        let outcome = Outcome::from(resp(json!({
            "success": false,
            "expired": true,
            "user_email": "user@example.com",
        })));

        assert_eq!(
            outcome,
            Outcome::Expired {
                email: Some("user@example.com".to_owned())
            }
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn invalid_token_maps_to_invalid_link() {
        let outcome = Outcome::from(resp(json!({
            "success": false,
            "invalid_token": true,
        })));

        assert_eq!(outcome, Outcome::InvalidLink { email: None });
    }

    #[test]
    fn other_failures_keep_the_server_message() {
        let outcome = Outcome::from(resp(json!({
            "success": false,
            "message": "Conta bloqueada",
        })));

        assert_eq!(
            outcome,
            Outcome::Failed {
                message: Some("Conta bloqueada".to_owned()),
                email: None,
            }
        );
    }
}
