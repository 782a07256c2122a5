/// The client itself.
pub mod client;
pub use client::Client;

/// Things that can go wrong in the API.
pub mod error;
pub use error::Error;

/// Register a new account.
pub mod register;

/// Ask for the verification email again.
pub mod resend_verification;

/// Start a subscription checkout.
pub mod subscription;

/// Confirm an email address with a one-time token.
pub mod verify_email;
