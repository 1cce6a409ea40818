use super::{muted, title_style, PRIMARY};
use crate::model::PROFILE;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

fn row<'a>(label: &'a str, value: &'a str, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), muted()),
        Span::styled(value, value_style),
    ])
}

pub fn render(f: &mut Frame, area: Rect) {
    let p = &PROFILE;
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", p.avatar)),
            Span::styled(p.display_name, title_style()),
        ]),
        Line::from(Span::styled(format!("    {}", p.plan), muted())),
        Line::from(""),
        row("Email", p.email, Style::default()),
        row("Subscription", p.subscription, Style::default().fg(PRIMARY)),
        row("Registered", p.registered, Style::default()),
        row("Total connections", p.total_connections, Style::default()),
        Line::from(""),
        Line::from(Span::styled(
            "[ Sign out ]",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::DIM),
        )),
    ];

    let profile = Paragraph::new(lines).block(
        Block::default()
            .title(" 👤 Profile ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(profile, area);
}
