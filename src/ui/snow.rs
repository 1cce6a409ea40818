use crate::snowfall::Snowfall;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use std::time::Duration;

/// Paints live flakes over blank cells only, so text stays readable.
pub struct SnowLayer<'a> {
    snowfall: &'a Snowfall,
    now: Duration,
}

impl<'a> SnowLayer<'a> {
    pub fn new(snowfall: &'a Snowfall, now: Duration) -> Self {
        Self { snowfall, now }
    }
}

impl Widget for SnowLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for flake in self.snowfall.flakes() {
            let x = area.x + ((flake.x / 100.0) * f64::from(area.width - 1)).round() as u16;
            let y = area.y + (flake.progress(self.now) * f64::from(area.height - 1)).round() as u16;
            let cell = buf.get_mut(x, y);
            if cell.symbol() != " " {
                continue;
            }
            let level = (flake.opacity * 255.0) as u8;
            cell.set_char(flake.glyph()).set_fg(Color::Rgb(level, level, level));
        }
    }
}
