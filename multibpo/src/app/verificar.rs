use crossterm::event::{KeyCode, KeyEvent};
use multibpo_core::api::{error, resend_verification};
use multibpo_core::request::{FailureKind, RequestState};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Placeholder shown when the deep link did not carry an email.
const FALLBACK_EMAIL: &str = "seu-email@exemplo.com";

/// "Check your inbox": shown right after registering, with a resend trigger.
#[derive(Debug)]
pub struct Verificar {
    /// Email the verification message went to, when the deep link carried it
    email: Option<String>,

    /// How the resend request is going; success carries the feedback line
    resend: RequestState<String>,
}

impl Verificar {
    /// Open the screen for the given email.
    pub fn new(email: Option<String>) -> Self {
        Self {
            email,
            resend: RequestState::Idle,
        }
    }

    /// The email shown on screen and posted on resend.
    fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(FALLBACK_EMAIL)
    }

    /// React to a key press. `Some` means a resend request should go out.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<resend_verification::Req> {
        match key.code {
            KeyCode::Char('r') if !self.resend.is_pending() => {
                self.resend = RequestState::Pending;

                Some(resend_verification::Req {
                    email: self.display_email().to_owned(),
                })
            }
            _ => None,
        }
    }

    /// Fold the backend's answer in. The outcome is read off the structured
    /// `success` flag, never the message wording.
    pub fn apply(&mut self, result: error::Result<resend_verification::Resp>) {
        let next = match result {
            Ok(resp) if resp.success => RequestState::Success(
                "E-mail reenviado com sucesso! Verifique sua caixa de entrada.".to_owned(),
            ),
            Ok(resp) => RequestState::failure(
                FailureKind::Backend,
                resp.message
                    .unwrap_or_else(|| "Erro ao reenviar e-mail. Tente novamente.".to_owned()),
            ),
            Err(problem) => {
                tracing::error!(?problem, "problem resending verification email");

                RequestState::failure(
                    FailureKind::Connection,
                    "Erro de conexão. Tente novamente mais tarde.",
                )
            }
        };

        self.resend.complete_with(next);
    }

    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(14)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(55)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = card.inner(popup_area);
        frame.render_widget(card, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([2, 1, 2, 3, 2, 1]));
        let [title_area, intro_area, email_area, instruction_area, feedback_area, help_area] =
            rows.areas(inner);

        frame.render_widget(
            Paragraph::new("Cadastro realizado com sucesso!")
                .bold()
                .centered(),
            title_area,
        );
        frame.render_widget(
            Paragraph::new("Acesse o email abaixo para confirmar seu cadastro:").centered(),
            intro_area,
        );
        frame.render_widget(
            Paragraph::new(self.display_email()).bold().centered(),
            email_area,
        );
        frame.render_widget(
            Paragraph::new(
                "Clique no link em seu email para validar seu cadastro. Se você não \
                 encontrar o email, verifique sua caixa de spam.",
            )
            .wrap(Wrap { trim: true })
            .centered(),
            instruction_area,
        );

        let feedback = match &self.resend {
            RequestState::Pending => Paragraph::new("Reenviando…")
                .style(Style::default().fg(Color::Blue))
                .centered(),
            RequestState::Success(message) => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Green))
                .wrap(Wrap { trim: true })
                .centered(),
            RequestState::Failure { message, .. } => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .centered(),
            RequestState::Idle => Paragraph::new(""),
        };
        frame.render_widget(feedback, feedback_area);

        frame.render_widget(
            Paragraph::new("enter abre sua caixa de entrada · r reenvia · q sai")
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            help_area,
        );
    }
}
