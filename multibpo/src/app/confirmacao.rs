use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation screen the checkout redirects back to. Display only; the
/// subscription itself already exists on the payment backend.
#[derive(Debug)]
pub struct Confirmacao {
    /// Subscription id echoed by the payment provider, when present
    subscription_id: Option<String>,

    /// Phone number the subscription belongs to
    phone: Option<String>,

    /// Whether the visitor came from WhatsApp
    from_whatsapp: bool,
}

impl Confirmacao {
    /// Open the confirmation for the redirect's parameters.
    pub fn new(
        subscription_id: Option<String>,
        phone: Option<String>,
        origin: Option<&str>,
    ) -> Self {
        Self {
            subscription_id,
            phone,
            from_whatsapp: origin == Some("whatsapp"),
        }
    }

    /// Whether the WhatsApp way out applies.
    pub fn from_whatsapp(&self) -> bool {
        self.from_whatsapp
    }

    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(11)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(55)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = card.inner(popup_area);
        frame.render_widget(card, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([2, 5, 2]));
        let [title_area, details_area, help_area] = rows.areas(inner);

        frame.render_widget(
            Paragraph::new("Assinatura confirmada!").bold().centered(),
            title_area,
        );

        let mut details = vec![
            Line::from("Plano: MultiBPO Premium"),
            Line::from("Status: Ativa"),
        ];
        if let Some(phone) = &self.phone {
            details.push(Line::from(format!("Telefone: {phone}")));
        }
        if let Some(id) = &self.subscription_id {
            details.push(Line::from(format!("Assinatura: {id}")));
        }
        frame.render_widget(Paragraph::new(details).centered(), details_area);

        let help = if self.from_whatsapp {
            "w volta ao WhatsApp · i vai para o início · q sai"
        } else {
            "i vai para o início · q sai"
        };
        frame.render_widget(
            Paragraph::new(help)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            help_area,
        );
    }
}
