use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use multibpo_core::api::{error, register};
use multibpo_core::phone;
use multibpo_core::registration::{self, FieldErrors, RegistrationDraft};
use multibpo_core::request::{FailureKind, RequestState};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(
    Field,
    Email => "E-mail",
    Whatsapp => "WhatsApp",
    Senha => "Senha",
    RepetirSenha => "Repetir Senha",
    Termos => "Termos",
);

/// The registration form: four inputs, the terms checkbox, and one submit.
#[derive(Debug)]
pub struct Cadastro {
    /// Which field we're editing
    active: Field,

    /// Login email
    email: Input,

    /// WhatsApp number (possibly pre-filled from the deep link)
    whatsapp: Input,

    /// What's your password? (Will be masked)
    password: Input,

    /// The password again, also masked
    confirm_password: Input,

    /// Whether the terms checkbox is ticked
    accept_terms: bool,

    /// Local or backend validation messages, per field
    errors: FieldErrors,

    /// How the submission is going. A failure here is the "general" error
    /// with no field to pin it on.
    submit: RequestState<()>,
}

impl Cadastro {
    /// Open the form, pre-filling the WhatsApp field when the deep link
    /// carried a phone number.
    pub fn new(phone_param: Option<&str>) -> Self {
        Self {
            active: Field::Email,
            email: Input::new(String::new()),
            whatsapp: Input::new(phone_param.map(phone::prefill).unwrap_or_default()),
            password: Input::new(String::new()),
            confirm_password: Input::new(String::new()),
            accept_terms: false,
            errors: FieldErrors::new(),
            submit: RequestState::Idle,
        }
    }

    /// The draft as currently typed.
    fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            email: self.email.value().to_owned(),
            whatsapp: self.whatsapp.value().to_owned(),
            password: self.password.value().to_owned(),
            confirm_password: self.confirm_password.value().to_owned(),
            accept_terms: self.accept_terms,
        }
    }

    /// React to a key press. `Some` means the form validated and this is the
    /// request to send.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<register::Req> {
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();

                None
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();

                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.active == Field::Termos => {
                self.accept_terms = !self.accept_terms;

                None
            }
            _ => {
                let event = Event::Key(key);

                match self.active {
                    Field::Email => self.email.handle_event(&event),
                    Field::Whatsapp => self.whatsapp.handle_event(&event),
                    Field::Senha => self.password.handle_event(&event),
                    Field::RepetirSenha => self.confirm_password.handle_event(&event),
                    Field::Termos => None,
                };

                None
            }
        }
    }

    /// Validate and, if everything holds, move to `Pending` and hand the
    /// request up. A submission already in flight swallows the key.
    fn submit(&mut self) -> Option<register::Req> {
        if self.submit.is_pending() {
            return None;
        }

        let draft = self.draft();
        let errors = draft.validate();

        if errors.is_empty() {
            self.errors.clear();
            self.submit = RequestState::Pending;

            Some(draft.submission())
        } else {
            self.errors = errors;

            None
        }
    }

    /// Fold the backend's answer in. `Some` carries the email to show on the
    /// verification screen; the caller navigates there. Late answers (the
    /// form is no longer waiting) are dropped.
    pub fn apply(&mut self, result: error::Result<register::Resp>) -> Option<String> {
        if !self.submit.is_pending() {
            return None;
        }

        match result {
            Ok(resp) if resp.success => {
                Some(resp.email.unwrap_or_else(|| self.draft().submission().email))
            }
            Ok(resp) => {
                if let Some(field_errors) = resp.field_errors {
                    self.errors = field_errors
                        .iter()
                        .filter_map(|(key, message)| {
                            registration::Field::from_key(key).map(|field| (field, message.clone()))
                        })
                        .collect();
                    self.submit = RequestState::Idle;
                } else {
                    self.submit = RequestState::failure(
                        FailureKind::Backend,
                        resp.message
                            .unwrap_or_else(|| "Erro ao cadastrar usuário".to_owned()),
                    );
                }

                None
            }
            Err(problem) => {
                tracing::error!(?problem, "problem registering");

                self.submit = RequestState::failure(
                    FailureKind::Connection,
                    "Erro de conexão. Tente novamente.",
                );

                None
            }
        }
    }

    /// The validation message for a form field, if any.
    fn error_for(&self, field: Field) -> Option<&str> {
        let key = match field {
            Field::Email => registration::Field::Email,
            Field::Whatsapp => registration::Field::Whatsapp,
            Field::Senha => registration::Field::Password,
            Field::RepetirSenha => registration::Field::ConfirmPassword,
            Field::Termos => registration::Field::Terms,
        };

        self.errors.get(&key).map(String::as_str)
    }

    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(24)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let width = popup_area.width.saturating_sub(3); // -2 for the border, -1 for the cursor

        let rows = Layout::vertical(Constraint::from_lengths([2, 4, 4, 4, 4, 2, 2, 2]));
        let [title_area, email_area, whatsapp_area, senha_area, repetir_area, termos_area, general_area, help_area] =
            rows.areas(popup_area);

        frame.render_widget(
            Paragraph::new("Cadastre-se e tenha acesso à benefícios exclusivos")
                .bold()
                .centered(),
            title_area,
        );

        self.render_input(frame, email_area, Field::Email, false, width);
        self.render_input(frame, whatsapp_area, Field::Whatsapp, false, width);
        self.render_input(frame, senha_area, Field::Senha, true, width);
        self.render_input(frame, repetir_area, Field::RepetirSenha, true, width);

        // TERMS
        {
            let [checkbox_area, error_area] =
                Layout::vertical(Constraint::from_lengths([1, 1])).areas(termos_area);

            let mark = if self.accept_terms { "x" } else { " " };
            let mut checkbox = Paragraph::new(format!(
                "[{mark}] Aceito a Política de Privacidade e os Termos de Uso"
            ));

            if self.active == Field::Termos {
                checkbox = checkbox.style(Style::default().fg(Color::Blue));
            }

            frame.render_widget(checkbox, checkbox_area);

            if let Some(error) = self.error_for(Field::Termos) {
                frame.render_widget(
                    Paragraph::new(error).style(Style::default().fg(Color::Red)),
                    error_area,
                );
            }
        }

        let general = match &self.submit {
            RequestState::Pending => {
                Paragraph::new("Enviando…").style(Style::default().fg(Color::Blue))
            }
            RequestState::Failure { message, .. } => {
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red))
            }
            RequestState::Idle | RequestState::Success(()) => Paragraph::new(""),
        };
        frame.render_widget(general, general_area);

        frame.render_widget(
            Paragraph::new("tab muda de campo · espaço marca os termos · enter envia · esc sai")
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    /// Render one bordered input with its error line underneath.
    #[expect(clippy::cast_possible_truncation)]
    fn render_input(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        field: Field,
        masked: bool,
        width: u16,
    ) {
        let [input_area, error_area] =
            Layout::vertical(Constraint::from_lengths([3, 1])).areas(area);

        let input = match field {
            Field::Email => &self.email,
            Field::Whatsapp => &self.whatsapp,
            Field::Senha => &self.password,
            Field::RepetirSenha => &self.confirm_password,
            Field::Termos => return,
        };

        let error = self.error_for(field);
        let border_style = if error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Blue)
        };

        let input_scroll = input.visual_scroll(width as usize);

        let value = if masked {
            "*".repeat(input.value().len())
        } else {
            input.value().to_owned()
        };

        let widget = Paragraph::new(value)
            .scroll((0, input_scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .border_style(border_style),
            );

        frame.render_widget(widget, input_area);

        if let Some(error) = error {
            frame.render_widget(
                Paragraph::new(error).style(Style::default().fg(Color::Red)),
                error_area,
            );
        }

        if self.active == field {
            frame.set_cursor_position((
                input_area.x
                    + (input.visual_cursor().max(input_scroll) - input_scroll) as u16 // current end of text
                    + 1, // just past the end of the text
                input_area.y + 1, // +1 row for the border/title
            ));
        }
    }
}
