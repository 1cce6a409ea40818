use super::{muted, title_style, ACCENT, MUTED, PRIMARY};
use crate::session::Session;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search(f, chunks[0], session);

    let servers = session.visible_servers();
    if servers.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No servers match your search", muted())),
            chunks[1],
        );
        return;
    }

    // Keep the cursor on screen when the list is taller than the area.
    let fits = (chunks[1].height / CARD_HEIGHT).max(1) as usize;
    let first = session.server_cursor().saturating_sub(fits - 1);

    let mut y = chunks[1].y;
    for (i, server) in servers.iter().enumerate().skip(first).take(fits) {
        let card = Rect::new(chunks[1].x, y, chunks[1].width, CARD_HEIGHT).intersection(chunks[1]);
        y += CARD_HEIGHT;

        let focused = i == session.server_cursor();
        let selected = session.selected_server() == Some(*server);
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else if selected {
            Style::default().fg(PRIMARY)
        } else {
            Style::default().fg(MUTED)
        };
        let mark = if selected { " ✓" } else { "" };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Line::from(vec![
                        Span::raw(format!(" {} ", server.flag)),
                        Span::styled(server.name, title_style()),
                        Span::styled(format!("  ping {}ms{} ", server.ping_ms, mark), muted()),
                    ]))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            )
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Black).add_modifier(Modifier::BOLD))
            .percent(server.load)
            .label(format!("Server load {}%", server.load));
        f.render_widget(gauge, card);
    }
}

fn render_search(f: &mut Frame, area: Rect, session: &Session) {
    let filter = session.filter();
    let (text, style) = if filter.editing {
        (format!("/{}▏", filter.query), Style::default().fg(Color::Yellow))
    } else if filter.query.is_empty() {
        ("press / to search".to_string(), muted())
    } else {
        (format!("/{}", filter.query), Style::default().fg(PRIMARY))
    };
    let search = Paragraph::new(Span::styled(text, style)).block(
        Block::default()
            .title(" 🌍 Servers ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(search, area);
}
