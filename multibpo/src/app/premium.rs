use multibpo_core::api::{error, subscription};
use multibpo_core::phone;
use multibpo_core::request::{FailureKind, RequestState};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// What the subscription buys, shown above the price.
const BENEFITS: &[&str] = &[
    "Perguntas ILIMITADAS no WhatsApp e no site",
    "IA mais avançada, com respostas mais precisas",
    "Acesso pelo computador em multibpo.com.br",
    "Suporte prioritário",
    "Relatórios personalizados",
];

/// The subscription pitch plus the checkout trigger. The phone has to come in
/// through the deep link; there is no way to type one here.
#[derive(Debug)]
pub struct Premium {
    /// Phone number from the deep link, required before any network call
    phone: Option<String>,

    /// Where the visitor came from (the deep link's `ref`)
    origin: Option<String>,

    /// How checkout creation is going; success carries the checkout URL
    checkout: RequestState<String>,
}

impl Premium {
    /// Open the pitch for the given deep-link parameters.
    pub fn new(phone: Option<String>, origin: Option<String>) -> Self {
        Self {
            phone,
            origin,
            checkout: RequestState::Idle,
        }
    }

    /// Try to start a checkout. `Some` is the request to send; `None` means
    /// validation already settled the attempt (or one is in flight).
    pub fn subscribe(&mut self) -> Option<subscription::Req> {
        if self.checkout.is_pending() {
            return None;
        }

        let Some(phone) = &self.phone else {
            self.checkout = RequestState::failure(
                FailureKind::Validation,
                "Número de telefone não encontrado. Acesse via WhatsApp.",
            );

            return None;
        };

        if !phone::validate(phone) {
            self.checkout =
                RequestState::failure(FailureKind::Validation, "Número de telefone inválido");

            return None;
        }

        self.checkout = RequestState::Pending;

        Some(subscription::Req {
            phone_number: phone::format(phone),
        })
    }

    /// Fold the payment backend's answer in. `Some` carries the checkout URL
    /// for the caller to open in the browser.
    pub fn apply(&mut self, result: error::Result<subscription::Resp>) -> Option<String> {
        if !self.checkout.is_pending() {
            return None;
        }

        match result {
            Ok(subscription::Resp {
                success: true,
                checkout_url: Some(url),
                ..
            }) => {
                self.checkout
                    .complete_with(RequestState::Success(url.clone()));

                Some(url)
            }
            Ok(resp) => {
                self.checkout.complete_with(RequestState::failure(
                    FailureKind::Backend,
                    resp.error
                        .or(resp.message)
                        .unwrap_or_else(|| "Erro ao processar assinatura".to_owned()),
                ));

                None
            }
            Err(problem) => {
                tracing::error!(?problem, "problem creating checkout session");

                self.checkout.complete_with(RequestState::failure(
                    FailureKind::Connection,
                    "Erro de conexão. Tente novamente.",
                ));

                None
            }
        }
    }

    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(19)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = card.inner(popup_area);
        frame.render_widget(card, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([2, 1, 5, 2, 3, 2, 1]));
        let [title_area, subtitle_area, benefits_area, price_area, state_area, footnote_area, help_area] =
            rows.areas(inner);

        frame.render_widget(
            Paragraph::new("Desbloqueie o Poder Completo!").bold().centered(),
            title_area,
        );
        frame.render_widget(
            Paragraph::new("Acesso ilimitado à IA contábil mais avançada do Brasil").centered(),
            subtitle_area,
        );

        let benefits: Vec<Line> = BENEFITS
            .iter()
            .map(|benefit| Line::from(format!("• {benefit}")))
            .collect();
        frame.render_widget(Paragraph::new(benefits), benefits_area);

        frame.render_widget(
            Paragraph::new("R$ 29,90/mês — garantia de 7 dias")
                .bold()
                .centered(),
            price_area,
        );

        let state = match &self.checkout {
            RequestState::Idle => {
                if self.phone.is_some() {
                    Paragraph::new("")
                } else {
                    Paragraph::new("Acesse esta página através do WhatsApp")
                        .style(Style::default().fg(Color::Yellow))
                        .centered()
                }
            }
            RequestState::Pending => Paragraph::new("Processando…")
                .style(Style::default().fg(Color::Blue))
                .centered(),
            RequestState::Success(url) => Paragraph::new(format!("Checkout aberto no navegador: {url}"))
                .style(Style::default().fg(Color::Green))
                .wrap(Wrap { trim: true })
                .centered(),
            RequestState::Failure { message, .. } => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .centered(),
        };
        frame.render_widget(state, state_area);

        if self.origin.as_deref() == Some("whatsapp") {
            frame.render_widget(
                Paragraph::new("Você veio do WhatsApp")
                    .style(Style::default().fg(Color::DarkGray))
                    .centered(),
                footnote_area,
            );
        }

        frame.render_widget(
            Paragraph::new("enter assina agora · q sai")
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            help_area,
        );
    }
}
