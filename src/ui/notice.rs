use super::centered;
use crate::session::Notice;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Modal box drawn on top of everything else.
pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let area = centered(f.size(), 44, 7);
    f.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.message(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Yellow))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" ⚠ Notice ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(body, area);
}
