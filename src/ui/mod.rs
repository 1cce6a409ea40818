//! Dashboard rendering
//!
//! One module per section plus the shared chrome (header, tabs, footer),
//! the snow layer and the notice overlay.

mod chrome;
mod history;
mod home;
mod notice;
mod profile;
mod servers;
mod settings;
mod snow;
mod stats;
mod support;

use crate::model::Section;
use crate::session::Session;
use crate::snowfall::Snowfall;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::time::Duration;

pub(crate) const PRIMARY: Color = Color::Cyan;
pub(crate) const ACCENT: Color = Color::LightBlue;
pub(crate) const MUTED: Color = Color::DarkGray;
const DARK_BG: Color = Color::Rgb(16, 20, 24);

pub(crate) fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub(crate) fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Draw the whole dashboard for the current frame.
pub fn render(f: &mut Frame, session: &Session, snowfall: &Snowfall, now: Duration) {
    if session.dark_theme() {
        f.render_widget(Block::default().style(Style::default().bg(DARK_BG)), f.size());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(f.size());

    chrome::render_header(f, chunks[0], session);
    chrome::render_tabs(f, chunks[1], session);
    render_section(f, chunks[2], session);
    chrome::render_footer(f, chunks[3], session);

    f.render_widget(snow::SnowLayer::new(snowfall, now), f.size());

    if let Some(n) = session.notice() {
        notice::render_notice(f, n);
    }
}

fn render_section(f: &mut Frame, area: Rect, session: &Session) {
    match session.active_section() {
        Section::Home => home::render(f, area, session),
        Section::Servers => servers::render(f, area, session),
        Section::Stats => stats::render(f, area, session),
        Section::Settings => settings::render(f, area, session),
        Section::History => history::render(f, area),
        Section::Profile => profile::render(f, area),
        Section::Support => support::render(f, area),
    }
}

/// Rectangle of `width` x `height` centered in `area`, clamped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
