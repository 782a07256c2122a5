use multibpo_core::api::{error, verify_email};
use multibpo_core::request::{FailureKind, RequestState};
use multibpo_core::session::SessionTokens;
use multibpo_core::verify::Outcome;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Where "Voltar ao WhatsApp" points.
pub const WHATSAPP_URL: &str = "https://wa.me/5511999999999";

/// The screen behind the emailed verification link: one round trip, one
/// terminal state.
#[derive(Debug)]
pub struct Validar {
    /// The one-time token from the deep link, when there was one
    token: Option<String>,

    /// The round trip and where it landed
    request: RequestState<Outcome>,
}

impl Validar {
    /// Entered from an emailed link: check the token once.
    pub fn with_token(token: String) -> Self {
        Self {
            token: Some(token),
            request: RequestState::Pending,
        }
    }

    /// Entered without a token, as the confirmation screen after an external
    /// redirect. Nothing is re-checked.
    pub fn direct_success() -> Self {
        Self {
            token: None,
            request: RequestState::Success(Outcome::Verified {
                email: None,
                tokens: None,
            }),
        }
    }

    /// The token to check on entry, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Fold the backend's answer in. Applies at most once; a late answer is
    /// dropped. `Some` carries auto-login tokens for the caller to persist.
    pub fn apply(&mut self, result: error::Result<verify_email::Resp>) -> Option<SessionTokens> {
        let (next, tokens) = match result {
            Ok(resp) => {
                let outcome = Outcome::from(resp);

                let tokens = match &outcome {
                    Outcome::Verified {
                        tokens: Some(tokens),
                        ..
                    } => Some(tokens.clone()),
                    _ => None,
                };

                (RequestState::Success(outcome), tokens)
            }
            Err(problem) => {
                tracing::error!(?problem, "problem checking verification token");

                (
                    RequestState::failure(
                        FailureKind::Connection,
                        "Erro de conexão. Tente novamente mais tarde.",
                    ),
                    None,
                )
            }
        };

        if self.request.complete_with(next) {
            tokens
        } else {
            None
        }
    }

    /// Whether we landed on a success variant.
    pub fn is_success(&self) -> bool {
        matches!(&self.request, RequestState::Success(outcome) if outcome.is_success())
    }

    /// Whether the token aged out, which only offers a fresh registration.
    pub fn is_expired(&self) -> bool {
        matches!(
            &self.request,
            RequestState::Success(Outcome::Expired { .. })
        )
    }

    /// Whether the screen offers the way back to the home screen. Everything
    /// terminal does, except `expired` (which only offers re-registering).
    pub fn offers_home(&self) -> bool {
        !self.request.is_pending() && !self.is_expired()
    }

    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(13)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(55)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let (title, title_color, message, email, help) = match &self.request {
            RequestState::Idle | RequestState::Pending => (
                "Verificando seu email…",
                Color::Blue,
                "Aguarde enquanto validamos sua conta.".to_owned(),
                None,
                "q sai",
            ),
            RequestState::Success(outcome) => match outcome {
                Outcome::AlreadyVerified { email } => (
                    "Cadastro validado com sucesso!",
                    Color::Green,
                    "Este email já foi verificado anteriormente.".to_owned(),
                    email.as_deref(),
                    "w abre o WhatsApp · i vai para o início · q sai",
                ),
                Outcome::Verified { email, .. } => (
                    "Cadastro validado com sucesso!",
                    Color::Green,
                    "Email verificado com sucesso! Sua conta está ativa.".to_owned(),
                    email.as_deref(),
                    "w abre o WhatsApp · i vai para o início · q sai",
                ),
                Outcome::Expired { email } => (
                    "Link expirado",
                    Color::Red,
                    "Token de verificação expirado. Solicite um novo cadastro.".to_owned(),
                    email.as_deref(),
                    "c faz um novo cadastro · q sai",
                ),
                Outcome::InvalidLink { email } => (
                    "Erro na verificação",
                    Color::Red,
                    "Link de verificação inválido.".to_owned(),
                    email.as_deref(),
                    "i volta ao início · q sai",
                ),
                Outcome::Failed { message, email } => (
                    "Erro na verificação",
                    Color::Red,
                    message
                        .clone()
                        .unwrap_or_else(|| "Erro ao verificar email.".to_owned()),
                    email.as_deref(),
                    "i volta ao início · q sai",
                ),
            },
            RequestState::Failure { message, .. } => (
                "Erro na verificação",
                Color::Red,
                message.clone(),
                None,
                "i volta ao início · q sai",
            ),
        };

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(title_color));
        let inner = card.inner(popup_area);
        frame.render_widget(card, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([2, 3, 2, 3, 1]));
        let [title_area, message_area, email_area, welcome_area, help_area] = rows.areas(inner);

        frame.render_widget(
            Paragraph::new(title)
                .style(Style::default().fg(title_color))
                .bold()
                .centered(),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(message).wrap(Wrap { trim: true }).centered(),
            message_area,
        );

        if let Some(email) = email {
            frame.render_widget(
                Paragraph::new(format!("Email confirmado: {email}"))
                    .bold()
                    .centered(),
                email_area,
            );
        }

        if self.is_success() {
            frame.render_widget(
                Paragraph::new(
                    "Bem-vindo à MULTI BPO! Agora você tem acesso completo a todos os \
                     nossos serviços e benefícios exclusivos.",
                )
                .wrap(Wrap { trim: true })
                .centered(),
                welcome_area,
            );
        }

        frame.render_widget(
            Paragraph::new(help)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            help_area,
        );
    }
}
