use crate::api::register;
use regex::Regex;
use std::collections::BTreeMap;

/// A field of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// Login email. Trimmed and lower-cased before submission.
    Email,

    /// WhatsApp number, kept as the user typed it.
    Whatsapp,

    /// Plaintext password.
    Password,

    /// The password again, to catch typos.
    ConfirmPassword,

    /// Acceptance of the privacy policy and terms of use.
    Terms,
}

impl Field {
    /// Match a `field_errors` key from the backend to a form field, so
    /// server-side validation lands under the same input as ours.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "email" => Some(Self::Email),
            "whatsapp" => Some(Self::Whatsapp),
            "password" => Some(Self::Password),
            "confirm_password" => Some(Self::ConfirmPassword),
            "terms" => Some(Self::Terms),
            _ => None,
        }
    }
}

/// Validation messages keyed by the field they belong to. Empty means the
/// draft may be submitted.
pub type FieldErrors = BTreeMap<Field, String>;

/// What the registration screen collects. Page-scoped: created on entry,
/// mutated on every keystroke, dropped on navigation.
#[derive(Debug, Default, Clone)]
pub struct RegistrationDraft {
    /// Login email as typed.
    pub email: String,

    /// WhatsApp number as typed (possibly pre-filled from the deep link).
    pub whatsapp: String,

    /// Password as typed.
    pub password: String,

    /// Password confirmation as typed.
    pub confirm_password: String,

    /// Whether the terms checkbox is ticked.
    pub accept_terms: bool,
}

impl RegistrationDraft {
    /// Run every local rule and report the failures per field. Submission is
    /// blocked unless the result is empty.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "E-mail é obrigatório".to_owned());
        } else if !is_valid_email(self.email.trim()) {
            errors.insert(Field::Email, "E-mail inválido".to_owned());
        }

        if self.whatsapp.trim().is_empty() {
            errors.insert(Field::Whatsapp, "WhatsApp é obrigatório".to_owned());
        }

        if self.password.trim().is_empty() {
            errors.insert(Field::Password, "Senha é obrigatória".to_owned());
        } else if self.password.len() < 6 {
            errors.insert(
                Field::Password,
                "Senha deve ter pelo menos 6 caracteres".to_owned(),
            );
        }

        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Senhas não coincidem".to_owned());
        }

        if !self.accept_terms {
            errors.insert(Field::Terms, "Você deve aceitar os termos".to_owned());
        }

        errors
    }

    /// Build the request the backend expects: trimmed lower-cased email,
    /// trimmed phone, password exactly as typed. Call only after `validate`
    /// came back empty.
    #[must_use]
    pub fn submission(&self) -> register::Req {
        register::Req {
            email: self.email.trim().to_lowercase(),
            whatsapp: self.whatsapp.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

/// Check an email against the same minimal shape the backend enforces:
/// something, an `@`, something, a dot, something.
fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod test {
    use super::*;

    /// A draft that passes every rule, for tests to break one field at a time.
    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            email: "User@Example.com".to_owned(),
            whatsapp: " +5511999998888 ".to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            accept_terms: true,
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn missing_email_is_reported() {
        let draft = RegistrationDraft {
            email: "   ".to_owned(),
            ..valid_draft()
        };

        assert_eq!(
            draft.validate().get(&Field::Email).map(String::as_str),
            Some("E-mail é obrigatório")
        );
    }

    #[test]
    fn email_without_domain_is_reported() {
        for email in ["user", "user@", "user@host", "@host.com"] {
            let draft = RegistrationDraft {
                email: email.to_owned(),
                ..valid_draft()
            };

            assert_eq!(
                draft.validate().get(&Field::Email).map(String::as_str),
                Some("E-mail inválido"),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn missing_whatsapp_is_reported() {
        let draft = RegistrationDraft {
            whatsapp: String::new(),
            ..valid_draft()
        };

        assert!(draft.validate().contains_key(&Field::Whatsapp));
    }

    #[test]
    fn short_password_is_reported_even_when_confirmation_matches() {
        let draft = RegistrationDraft {
            password: "five5".to_owned(),
            confirm_password: "five5".to_owned(),
            ..valid_draft()
        };

        assert_eq!(
            draft.validate().get(&Field::Password).map(String::as_str),
            Some("Senha deve ter pelo menos 6 caracteres")
        );
        assert!(!draft.validate().contains_key(&Field::ConfirmPassword));
    }

    #[test]
    fn mismatched_confirmation_blocks_an_otherwise_valid_draft() {
        let draft = RegistrationDraft {
            confirm_password: "secret2".to_owned(),
            ..valid_draft()
        };

        let errors = draft.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::ConfirmPassword).map(String::as_str),
            Some("Senhas não coincidem")
        );
    }

    #[test]
    fn unaccepted_terms_block_an_otherwise_valid_draft() {
        let draft = RegistrationDraft {
            accept_terms: false,
            ..valid_draft()
        };

        let errors = draft.validate();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::Terms));
    }

    #[test]
    fn submission_normalizes_email_and_whatsapp_but_not_password() {
        let req = valid_draft().submission();

        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.whatsapp, "+5511999998888");
        assert_eq!(req.password, "secret1");
    }

    #[test]
    fn backend_keys_map_to_fields() {
        assert_eq!(Field::from_key("email"), Some(Field::Email));
        assert_eq!(Field::from_key("terms"), Some(Field::Terms));
        assert_eq!(Field::from_key("cpf"), None);
    }
}
