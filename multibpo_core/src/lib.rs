//! Domain logic shared by MultiBPO funnel clients: form validation, phone
//! normalization, the backend API, and session persistence. Everything here is
//! UI-free so the interactive client stays a thin shell.

/// Talk to the funnel backend.
pub mod api;
pub use api::Client;

/// Normalization for Brazilian WhatsApp numbers.
pub mod phone;

/// Static legal content and the accordion that displays it.
pub mod policy;

/// The registration form and its validation rules.
pub mod registration;
pub use registration::RegistrationDraft;

/// The lifecycle of a single backend request, as a screen sees it.
pub mod request;
pub use request::RequestState;

/// Session tokens granted on auto-login, and where they live between runs.
pub mod session;
pub use session::{SessionStore, SessionTokens};

/// Interpreting the answer to an email-verification attempt.
pub mod verify;
pub use verify::Outcome;
