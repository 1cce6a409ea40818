use super::{centered, muted, title_style, ACCENT, MUTED, PRIMARY};
use crate::consts::{APP_NAME, TAGLINE};
use crate::format::format_elapsed;
use crate::model::Server;
use crate::session::Session;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let status_height = if session.is_connected() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(status_height),
            Constraint::Min(4),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(format!("{APP_NAME} 🎄"), title_style())),
        Line::from(Span::styled(TAGLINE, muted())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    render_button(f, chunks[1], session);

    if session.is_connected() {
        let server = session.selected_server();
        let status = Paragraph::new(vec![
            Line::from(Span::styled(
                "You are protected!",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                server.map(|s| format!("{} {}", s.flag, s.name)).unwrap_or_default(),
                muted(),
            )),
            Line::from(format!("Time: {}", format_elapsed(session.connection_time()))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(status, chunks[2]);
    }

    render_picker(f, centered(chunks[3], 60, chunks[3].height), session);
}

fn render_button(f: &mut Frame, area: Rect, session: &Session) {
    let (label, style) = if session.is_connected() {
        (
            "🔓 Disconnect",
            Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD),
        )
    } else {
        ("🔒 Connect", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    };

    let button = Paragraph::new(vec![Line::from(""), Line::from(label), Line::from("[c]")])
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if session.is_connected() { PRIMARY } else { MUTED })),
        );
    f.render_widget(button, centered(area, 24, 5));
}

fn render_picker(f: &mut Frame, area: Rect, session: &Session) {
    let selected = session.selected_server();
    let disabled = session.is_connected();

    let items: Vec<ListItem> = session
        .visible_servers()
        .into_iter()
        .map(|server| server_item(server, selected == Some(server), disabled))
        .collect();

    let mut state = ListState::default();
    state.select(Some(session.server_cursor()));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 🌍 Choose a server ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn server_item(server: &Server, selected: bool, disabled: bool) -> ListItem<'static> {
    let style = if disabled {
        muted()
    } else if selected {
        Style::default().fg(Color::Black).bg(PRIMARY)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::raw(format!("{} ", server.flag)),
        Span::raw(format!("{:<14}", server.name)),
        Span::styled(format!("{:>4}ms", server.ping_ms), Style::default().fg(ACCENT)),
        Span::raw(format!("   load {:>3}%", server.load)),
    ]))
    .style(style)
}
