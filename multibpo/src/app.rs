use crate::config::{Config, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use multibpo_core::Client;
use ratatui::{
    layout::{Constraint, Layout},
    widgets::Paragraph,
    Frame,
};
use std::process::ExitCode;

/// Things that can happen to this app
pub mod action;
pub use action::Action;

/// Side effects and how to run them
pub mod effect;
pub use effect::{Effect, EffectContext};

/// The registration form
mod cadastro;

/// The checkout confirmation
mod confirmacao;

/// The landing screen
mod home;

/// The legal text
mod politica;

/// The subscription pitch and checkout
mod premium;

/// The verification-link screen
mod validar;

/// The "check your inbox" screen
mod verificar;

use cadastro::Cadastro;
use confirmacao::Confirmacao;
use politica::Politica;
use premium::Premium;
use validar::Validar;
use verificar::Verificar;

/// The "functional core" of the app.
pub struct App {
    /// How to reach the backend
    client: Client,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Which page of the funnel is on screen
    screen: Screen,

    /// Set once we're done and want to leave with this code
    exit: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app, opening the screen the deep link
    /// points at.
    pub fn new(config: &Config) -> Self {
        let screen = match &config.route {
            None => Screen::Home,
            Some(Route::Cadastro { phone }) => Screen::Cadastro(Cadastro::new(phone.as_deref())),
            Some(Route::VerificarEmail { email }) => {
                Screen::Verificar(Verificar::new(email.clone()))
            }
            Some(Route::ValidarEmail { token }) => {
                Screen::Validar(Validar::with_token(token.clone()))
            }
            Some(Route::Sucesso) => Screen::Validar(Validar::direct_success()),
            Some(Route::Premium { phone, origin }) => {
                Screen::Premium(Premium::new(phone.clone(), origin.clone()))
            }
            Some(Route::PremiumSucesso {
                subscription_id,
                phone,
                origin,
            }) => Screen::Confirmacao(Confirmacao::new(
                subscription_id.clone(),
                phone.clone(),
                origin.as_deref(),
            )),
            Some(Route::Politica) => Screen::Politica(Politica::new()),
        };

        Self {
            client: Client::new(config.server.clone()),
            status_line: None,
            screen,
            exit: None,
        }
    }

    /// Produce any side effects needed to enter the initial screen. The
    /// verification-link screen is the only one that starts working on its
    /// own; everything else waits for input.
    pub fn init(&self) -> Vec<Effect> {
        match &self.screen {
            Screen::Validar(validar) => validar
                .token()
                .map(|token| Effect::VerifyEmail(self.client.clone(), token.to_owned()))
                .into_iter()
                .collect(),
            _ => vec![],
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match &mut self.screen {
            Screen::Home => home::render(body_area, frame),
            Screen::Cadastro(cadastro) => cadastro.render(body_area, frame),
            Screen::Verificar(verificar) => verificar.render(body_area, frame),
            Screen::Validar(validar) => validar.render(body_area, frame),
            Screen::Premium(premium) => premium.render(body_area, frame),
            Screen::Confirmacao(confirmacao) => confirmacao.render(body_area, frame),
            Screen::Politica(politica) => politica.render(body_area, frame),
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None => "Tudo certo!",
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side
    /// effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)
                } else {
                    vec![]
                }
            }

            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }

            Action::SavedSession => {
                self.status_line = Some("Sessão salva para o próximo acesso".to_owned());

                vec![]
            }

            Action::Registered(result) => {
                if let Screen::Cadastro(cadastro) = &mut self.screen {
                    if let Some(email) = cadastro.apply(result) {
                        self.screen = Screen::Verificar(Verificar::new(Some(email)));
                    }
                }

                vec![]
            }

            Action::Verified(result) => {
                if let Screen::Validar(validar) = &mut self.screen {
                    return validar
                        .apply(result)
                        .map(Effect::SaveSession)
                        .into_iter()
                        .collect();
                }

                vec![]
            }

            Action::Resent(result) => {
                if let Screen::Verificar(verificar) = &mut self.screen {
                    verificar.apply(result);
                }

                vec![]
            }

            Action::SubscriptionCreated(result) => {
                if let Screen::Premium(premium) = &mut self.screen {
                    return premium
                        .apply(result)
                        .map(Effect::OpenUrl)
                        .into_iter()
                        .collect();
                }

                vec![]
            }
        }
    }

    /// Key dispatch, screen by screen.
    #[expect(clippy::too_many_lines)]
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        // Ctrl+C leaves from anywhere, even inside a text field.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.exit = Some(ExitCode::SUCCESS);

            return vec![];
        }

        match &mut self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('c') => {
                    self.screen = Screen::Cadastro(Cadastro::new(None));

                    vec![]
                }
                KeyCode::Char('a') => {
                    self.screen = Screen::Premium(Premium::new(None, None));

                    vec![]
                }
                KeyCode::Char('p') => {
                    self.screen = Screen::Politica(Politica::new());

                    vec![]
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                _ => vec![],
            },

            Screen::Cadastro(cadastro) => match key.code {
                KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                _ => cadastro
                    .handle_key(key)
                    .map(|req| Effect::Register(self.client.clone(), req))
                    .into_iter()
                    .collect(),
            },

            Screen::Verificar(verificar) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Enter | KeyCode::Char('e') => {
                    vec![Effect::OpenUrl("mailto:".to_owned())]
                }
                _ => verificar
                    .handle_key(key)
                    .map(|req| Effect::ResendVerification(self.client.clone(), req))
                    .into_iter()
                    .collect(),
            },

            Screen::Validar(validar) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Char('w') if validar.is_success() => {
                    vec![Effect::OpenUrl(validar::WHATSAPP_URL.to_owned())]
                }
                KeyCode::Char('i') if validar.offers_home() => {
                    self.screen = Screen::Home;

                    vec![]
                }
                KeyCode::Char('c') if validar.is_expired() => {
                    self.screen = Screen::Cadastro(Cadastro::new(None));

                    vec![]
                }
                _ => vec![],
            },

            Screen::Premium(premium) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Enter | KeyCode::Char('a') => premium
                    .subscribe()
                    .map(|req| Effect::CreateSubscription(self.client.clone(), req))
                    .into_iter()
                    .collect(),
                _ => vec![],
            },

            Screen::Confirmacao(confirmacao) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Char('w') if confirmacao.from_whatsapp() => {
                    vec![Effect::OpenUrl("https://wa.me/".to_owned())]
                }
                KeyCode::Char('i') => {
                    self.screen = Screen::Home;

                    vec![]
                }
                _ => vec![],
            },

            Screen::Politica(politica) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.exit = Some(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Char('c') => {
                    self.screen = Screen::Cadastro(Cadastro::new(None));

                    vec![]
                }
                KeyCode::Char('i') => {
                    self.screen = Screen::Home;

                    vec![]
                }
                _ => {
                    politica.handle_key(key);

                    vec![]
                }
            },
        }
    }

    /// Identity of the current screen, used to bound effect lifetimes.
    pub fn screen_key(&self) -> ScreenKey {
        self.screen.key()
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exit
    }
}

/// Which page of the funnel is on screen.
enum Screen {
    /// The landing screen
    Home,

    /// The registration form
    Cadastro(Cadastro),

    /// "Check your inbox" after registering
    Verificar(Verificar),

    /// The verification-link state machine
    Validar(Validar),

    /// The subscription pitch and checkout
    Premium(Premium),

    /// The checkout confirmation
    Confirmacao(Confirmacao),

    /// The legal text
    Politica(Politica),
}

impl Screen {
    /// The key identifying this screen.
    fn key(&self) -> ScreenKey {
        match self {
            Self::Home => ScreenKey::Home,
            Self::Cadastro(_) => ScreenKey::Cadastro,
            Self::Verificar(_) => ScreenKey::Verificar,
            Self::Validar(_) => ScreenKey::Validar,
            Self::Premium(_) => ScreenKey::Premium,
            Self::Confirmacao(_) => ScreenKey::Confirmacao,
            Self::Politica(_) => ScreenKey::Politica,
        }
    }
}

/// Identity of a screen, used to tag view-bound effects so navigation can
/// abort the ones whose screen is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKey {
    /// The landing screen
    Home,

    /// The registration form
    Cadastro,

    /// "Check your inbox"
    Verificar,

    /// The verification-link screen
    Validar,

    /// The subscription checkout
    Premium,

    /// The checkout confirmation
    Confirmacao,

    /// The legal text
    Politica,
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use multibpo_core::api::{register, verify_email};
    use multibpo_core::session::SessionTokens;

    /// Start the app the way a deep link would.
    fn app(args: &[&str]) -> App {
        App::new(&Config::parse_from(args))
    }

    /// A plain key press.
    fn press(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Type a string into the active field.
    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            assert!(app.handle(press(KeyCode::Char(c))).is_empty());
        }
    }

    /// A verify-email response with every flag off.
    fn blank_resp() -> verify_email::Resp {
        verify_email::Resp {
            success: false,
            already_verified: false,
            auto_login: false,
            tokens: None,
            user: None,
            expired: false,
            invalid_token: false,
            message: None,
            user_email: None,
        }
    }

    #[test]
    fn empty_form_submit_stays_local() {
        let mut app = app(&["multibpo", "cadastro"]);

        assert!(app.handle(press(KeyCode::Enter)).is_empty());
        assert!(matches!(app.screen, Screen::Cadastro(_)));
    }

    #[test]
    fn filled_form_submits_and_navigates_on_success() {
        let mut app = app(&["multibpo", "cadastro", "--phone", "11999998888"]);

        type_str(&mut app, "User@Example.com");
        app.handle(press(KeyCode::Tab)); // whatsapp, already pre-filled
        app.handle(press(KeyCode::Tab)); // senha
        type_str(&mut app, "secret1");
        app.handle(press(KeyCode::Tab)); // repetir senha
        type_str(&mut app, "secret1");
        app.handle(press(KeyCode::Tab)); // termos

        // Terms still unticked: submit is blocked locally.
        assert!(app.handle(press(KeyCode::Enter)).is_empty());

        app.handle(press(KeyCode::Char(' ')));
        let effects = app.handle(press(KeyCode::Enter));
        assert_eq!(effects.len(), 1);
        let Effect::Register(_, req) = &effects[0] else {
            panic!("expected a register effect");
        };
        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.whatsapp, "+5511999998888");

        // While the submission is in flight, enter does not resubmit.
        assert!(app.handle(press(KeyCode::Enter)).is_empty());

        let resp = register::Resp {
            success: true,
            email: Some("user@example.com".to_owned()),
            field_errors: None,
            message: None,
        };
        assert!(app.handle(Action::Registered(Ok(resp))).is_empty());
        assert!(matches!(app.screen, Screen::Verificar(_)));
    }

    #[test]
    fn premium_without_phone_makes_no_network_call() {
        let mut app = app(&["multibpo", "premium"]);

        assert!(app.init().is_empty());
        assert!(app.handle(press(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn premium_with_phone_formats_and_submits() {
        let mut app = app(&["multibpo", "premium", "--phone", "11999998888"]);

        let effects = app.handle(press(KeyCode::Enter));
        assert_eq!(effects.len(), 1);
        let Effect::CreateSubscription(_, req) = &effects[0] else {
            panic!("expected a subscription effect");
        };
        assert_eq!(req.phone_number, "+5511999998888");
    }

    #[test]
    fn verification_token_is_checked_once_on_entry() {
        let app = app(&["multibpo", "validar-email", "tok123"]);

        let effects = app.init();
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::VerifyEmail(_, token) if token == "tok123"));
    }

    #[test]
    fn direct_success_entry_checks_nothing() {
        let app = app(&["multibpo", "sucesso"]);

        assert!(app.init().is_empty());
    }

    #[test]
    fn expired_outcome_offers_only_a_new_registration() {
        let mut app = app(&["multibpo", "validar-email", "tok123"]);

        let resp = verify_email::Resp {
            expired: true,
            ..blank_resp()
        };
        assert!(app.handle(Action::Verified(Ok(resp))).is_empty());

        // Home is not on offer from an expired link.
        assert!(app.handle(press(KeyCode::Char('i'))).is_empty());
        assert!(matches!(app.screen, Screen::Validar(_)));

        app.handle(press(KeyCode::Char('c')));
        assert!(matches!(app.screen, Screen::Cadastro(_)));
    }

    #[test]
    fn auto_login_tokens_are_persisted_exactly_once() {
        let mut app = app(&["multibpo", "validar-email", "tok123"]);

        let resp = verify_email::Resp {
            success: true,
            auto_login: true,
            tokens: Some(SessionTokens {
                access: "a".to_owned(),
                refresh: "r".to_owned(),
            }),
            ..blank_resp()
        };
        let effects = app.handle(Action::Verified(Ok(resp)));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::SaveSession(tokens) if tokens.access == "a"));

        // A duplicate (late) answer changes nothing.
        let late = verify_email::Resp {
            success: true,
            auto_login: true,
            tokens: Some(SessionTokens {
                access: "x".to_owned(),
                refresh: "y".to_owned(),
            }),
            ..blank_resp()
        };
        assert!(app.handle(Action::Verified(Ok(late))).is_empty());
    }

    #[test]
    fn already_verified_outcome_persists_nothing() {
        let mut app = app(&["multibpo", "validar-email", "tok123"]);

        let resp = verify_email::Resp {
            success: true,
            already_verified: true,
            auto_login: true,
            tokens: Some(SessionTokens {
                access: "a".to_owned(),
                refresh: "r".to_owned(),
            }),
            ..blank_resp()
        };
        assert!(app.handle(Action::Verified(Ok(resp))).is_empty());
    }

    #[test]
    fn resend_is_disabled_while_in_flight() {
        let mut app = app(&[
            "multibpo",
            "verificar-email",
            "--email",
            "user@example.com",
        ]);

        assert_eq!(app.handle(press(KeyCode::Char('r'))).len(), 1);
        assert!(app.handle(press(KeyCode::Char('r'))).is_empty());
    }
}
