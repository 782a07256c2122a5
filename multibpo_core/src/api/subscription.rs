use serde::{Deserialize, Serialize};

/// The request for a hosted checkout session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// International-prefixed number identifying the subscriber, e.g.
    /// `+5511999998888`.
    pub phone_number: String,
}

/// Result of asking for a checkout session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// Whether a session was created.
    pub success: bool,

    /// Where to send the browser to complete the purchase.
    #[serde(default)]
    pub checkout_url: Option<String>,

    /// The payment backend's own error wording.
    #[serde(default)]
    pub error: Option<String>,

    /// General detail some deployments send instead of `error`.
    #[serde(default)]
    pub message: Option<String>,
}

/// Where the checkout-session endpoint lives.
pub const PATH: &str = "/api/v1/whatsapp/asaas/create-subscription/";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn success_body_carries_the_checkout_url() {
        let resp: Resp = serde_json::from_str(
            r#"{"success": true, "checkout_url": "https://sandbox.asaas.com/c/abc123"}"#,
        )
        .unwrap();

        assert!(resp.success);
        assert_eq!(
            resp.checkout_url.as_deref(),
            Some("https://sandbox.asaas.com/c/abc123")
        );
    }

    #[test]
    fn failure_body_parses_with_error_only() {
        let resp: Resp =
            serde_json::from_str(r#"{"success": false, "error": "Cliente não encontrado"}"#)
                .unwrap();

        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Cliente não encontrado"));
        assert_eq!(resp.checkout_url, None);
    }
}
