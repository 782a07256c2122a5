use serde::{Deserialize, Serialize};

/// The request to send the verification email again.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Email the original verification message went to.
    pub email: String,
}

/// Result of asking for a resend.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// Whether a new email went out.
    pub success: bool,

    /// Human-readable detail; shown when the resend failed.
    #[serde(default)]
    pub message: Option<String>,
}

/// Where the resend endpoint lives.
pub const PATH: &str = "/api/v1/whatsapp/mobile/resend-verification/";
