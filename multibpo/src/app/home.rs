use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the landing screen: where you end up without a deep link, and the
/// target of every "Voltar ao início".
pub fn render(body_area: Rect, frame: &mut Frame<'_>) {
    let popup_vert = Layout::vertical([Constraint::Length(11)]).flex(Flex::Center);
    let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

    let [popup_area] = popup_vert.areas(body_area);
    let [popup_area] = popup_horiz.areas(popup_area);
    frame.render_widget(Clear, popup_area);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = card.inner(popup_area);
    frame.render_widget(card, popup_area);

    let lines = vec![
        Line::from("MULTI BPO").bold(),
        Line::from("Automação, IA e atendimento para escritórios contábeis"),
        Line::default(),
        Line::from("c — Cadastre-se"),
        Line::from("a — Assine o Premium"),
        Line::from("p — Política de Privacidade e Termos de Uso"),
        Line::default(),
        Line::from("q — Sair").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines).centered(), inner);
}
