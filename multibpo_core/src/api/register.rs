use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The request to register a new account.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Email to use for contact and login.
    pub email: String,

    /// WhatsApp number the account is reachable at.
    pub whatsapp: String,

    /// Plaintext password to use for login.
    pub password: String,
}

/// Result of registering a new account.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// Whether the account was created.
    pub success: bool,

    /// Email the account was created with, echoed back so the verification
    /// screen can display it.
    #[serde(default)]
    pub email: Option<String>,

    /// Per-field messages when server-side validation failed. Keys match the
    /// form field names.
    #[serde(default)]
    pub field_errors: Option<BTreeMap<String, String>>,

    /// A general business message when there is no field to pin it on.
    #[serde(default)]
    pub message: Option<String>,
}

/// Where the register endpoint lives.
pub const PATH: &str = "/api/v1/whatsapp/mobile/register/";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn failure_body_with_field_errors_parses() {
        let resp: Resp = serde_json::from_str(
            r#"{
                "success": false,
                "field_errors": {"email": "Este e-mail já está cadastrado"}
            }"#,
        )
        .unwrap();

        assert!(!resp.success);
        assert_eq!(
            resp.field_errors
                .as_ref()
                .and_then(|errors| errors.get("email"))
                .map(String::as_str),
            Some("Este e-mail já está cadastrado")
        );
        assert_eq!(resp.message, None);
    }

    #[test]
    fn success_body_parses_without_optional_fields() {
        let resp: Resp =
            serde_json::from_str(r#"{"success": true, "email": "user@example.com"}"#).unwrap();

        assert!(resp.success);
        assert_eq!(resp.email.as_deref(), Some("user@example.com"));
    }
}
