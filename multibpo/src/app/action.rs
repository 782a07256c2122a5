use crossterm::event::KeyEvent;
use multibpo_core::api::{error, register, resend_verification, subscription, verify_email};

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// Something bad happened; display it to the user
    Problem(String),

    /// The backend answered the registration attempt
    Registered(error::Result<register::Resp>),

    /// The backend answered the verification-token check
    Verified(error::Result<verify_email::Resp>),

    /// The backend answered the resend request
    Resent(error::Result<resend_verification::Resp>),

    /// The payment backend answered the checkout-session request
    SubscriptionCreated(error::Result<subscription::Resp>),

    /// The auto-login tokens made it to disk
    SavedSession,
}
