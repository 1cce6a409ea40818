use super::{muted, PRIMARY};
use crate::model::SETTINGS;
use crate::session::Session;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let items: Vec<ListItem> = SETTINGS
        .iter()
        .zip(session.settings())
        .map(|(def, on)| {
            let switch = if *on {
                Span::styled(" ON  ●", Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
            } else {
                Span::styled("○ OFF ", muted())
            };
            ListItem::new(vec![
                Line::from(vec![switch, Span::raw("  "), Span::raw(def.title)]),
                Line::from(Span::styled(format!("          {}", def.description), muted())),
                Line::from(""),
            ])
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(session.settings_cursor()));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" ⚙ Settings ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut state);
}
