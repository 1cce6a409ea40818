//! Header, section tabs and footer

use super::{muted, title_style, MUTED, PRIMARY};
use crate::consts::{APP_NAME, APP_VERSION, TAGLINE};
use crate::model::Section;
use crate::session::Session;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn render_header(f: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::raw("🎄 "),
        Span::styled(APP_NAME, title_style()),
        Span::styled(format!(" v{}", APP_VERSION), muted()),
    ]));
    f.render_widget(title, chunks[0]);

    let badge = if session.is_connected() {
        Span::styled(
            " ✓ Protected ",
            Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " ✗ Not protected ",
            Style::default().fg(Color::White).bg(MUTED),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(badge)).alignment(Alignment::Right),
        chunks[1],
    );
}

pub fn render_tabs(f: &mut Frame, area: Rect, session: &Session) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {} {}", i + 1, s.icon(), s.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).border_style(muted()))
        .select(session.active_section().index())
        .style(muted())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", muted()));
    f.render_widget(tabs, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, session: &Session) {
    let hints = match session.active_section() {
        Section::Servers if session.filter().editing => "[Enter] done  [Esc] clear  type to search",
        Section::Servers => "[↑↓] move  [Enter] select  [/] search  [c] connect",
        Section::Home => "[↑↓] move  [Enter] select  [c] connect",
        Section::Settings => "[↑↓] move  [Enter] toggle",
        Section::Support => "[Enter] open Telegram",
        _ => "[c] connect",
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{hints}  [Tab] sections  [q] quit"),
            Style::default().fg(PRIMARY),
        )),
        Line::from(Span::styled(format!("© 2024 {APP_NAME}. {TAGLINE} 🎄"), muted())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .border_style(muted()),
    );
    f.render_widget(footer, area);
}
