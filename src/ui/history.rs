use super::{muted, title_style, PRIMARY};
use crate::model::HISTORY;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect) {
    let rows = HISTORY.iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.flag),
            Cell::from(entry.server),
            Cell::from(entry.date).style(muted()),
            Cell::from(entry.duration).style(Style::default().fg(PRIMARY)),
        ])
        .height(2)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Min(8),
        ],
    )
    .header(Row::new(vec!["", "Server", "Date", "Duration"]).style(title_style()).bottom_margin(1))
    .block(
        Block::default()
            .title(" 📜 Connection history ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(table, area);
}
