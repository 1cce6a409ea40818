use super::{muted, PRIMARY};
use crate::format::{format_elapsed, format_megabytes};
use crate::session::Session;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[0]);

    let used = session.data_used();
    stat_card(f, cards[0], "Connection time", format_elapsed(session.connection_time()));
    stat_card(f, cards[1], "Downloaded", format_megabytes(used.download));
    stat_card(f, cards[2], "Uploaded", format_megabytes(used.upload));

    let labels: Vec<String> = (1..=session.usage_bars().len()).map(|i| i.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(session.usage_bars().iter().copied())
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Data usage ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .data(data.as_slice())
        .max(100)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(PRIMARY))
        .value_style(Style::default().fg(Color::Black).bg(PRIMARY))
        .label_style(muted());
    f.render_widget(chart, chunks[1]);
}

fn stat_card(f: &mut Frame, area: Rect, title: &str, value: String) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), muted())),
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(card, area);
}
