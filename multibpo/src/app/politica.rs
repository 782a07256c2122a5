use crossterm::event::{KeyCode, KeyEvent};
use multibpo_core::policy::{self, Accordion, Section};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// The privacy policy and terms of use, as an accordion: one section open at
/// a time, nothing fetched from anywhere.
#[derive(Debug)]
pub struct Politica {
    /// Every section, privacy first
    sections: Vec<Section>,

    /// Which row the cursor is on
    selected: usize,

    /// Which section is open
    accordion: Accordion,
}

impl Politica {
    /// Open the legal text with everything collapsed.
    pub fn new() -> Self {
        Self {
            sections: policy::sections(),
            selected: 0,
            accordion: Accordion::default(),
        }
    }

    /// React to a key press (movement and toggling only; navigation away is
    /// the app's business).
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.sections.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                self.accordion.toggle(self.sections[self.selected].id);
            }
            _ => {}
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_horiz = Layout::horizontal([Constraint::Percentage(70)]).flex(Flex::Center);
        let [area] = popup_horiz.areas(body_area);

        let mut lines: Vec<Line> = vec![
            Line::from("Política de Privacidade e Termos de Uso").bold(),
            Line::from(format!("Última atualização: {}", policy::LAST_UPDATED)),
            Line::from(policy::RESPONSIBLE).style(Style::default().fg(Color::DarkGray)),
            Line::default(),
        ];

        // Remember where the cursor row lands so we can keep it on screen.
        let mut selected_line = 0;

        for (idx, section) in self.sections.iter().enumerate() {
            let expanded = self.accordion.is_expanded(section.id);
            let marker = if expanded { "▾" } else { "▸" };

            let mut title = Line::from(format!("{marker} {}", section.title));
            if idx == self.selected {
                selected_line = lines.len();
                title = title.style(Style::default().fg(Color::Blue)).bold();
            }
            lines.push(title);

            if expanded {
                lines.push(Line::from(section.body));
                lines.push(Line::default());
            }
        }

        lines.push(Line::default());
        lines.push(
            Line::from("j/k move · enter abre e fecha · c aceita e continua · i início · q sai")
                .style(Style::default().fg(Color::DarkGray)),
        );

        let scroll = (selected_line as u16).saturating_sub(area.height / 2);

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((scroll, 0)),
            area,
        );
    }
}
