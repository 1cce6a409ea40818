use super::{muted, title_style, PRIMARY};
use crate::consts::{SUPPORT_EMAIL, SUPPORT_HOURS, TELEGRAM_URL};
use crate::model::FAQ;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FAQ.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let faq = List::new(FAQ.iter().map(|q| ListItem::new(format!("• {q}")))).block(
        Block::default()
            .title(" 💬 Frequently asked questions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(faq, chunks[0]);

    let telegram = Paragraph::new(Line::from(vec![
        Span::styled(
            " Message us on Telegram ",
            Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {TELEGRAM_URL}  [Enter]"), muted()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(telegram, chunks[1]);

    let contact = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("📧 "),
            Span::styled("Email: ", muted()),
            Span::raw(SUPPORT_EMAIL),
        ]),
        Line::from(vec![
            Span::raw("⏰ "),
            Span::styled("Hours: ", muted()),
            Span::raw(SUPPORT_HOURS),
        ]),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Contact us ", title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(contact, chunks[2]);
}
