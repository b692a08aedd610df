//! Launch-offer countdown banner pinned above the shell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use clubdeck_app::countdown::CountdownState;

use crate::theme::{palette, styles};

pub struct OfferBanner<'a> {
    countdown: &'a CountdownState,
    now_ms: i64,
}

impl<'a> OfferBanner<'a> {
    pub fn new(countdown: &'a CountdownState, now_ms: i64) -> Self {
        Self { countdown, now_ms }
    }
}

impl Widget for OfferBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.countdown.is_visible() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::OFFER_GREEN));
        let inner = block.inner(area);
        block.render(area, buf);

        let clock = self.countdown.format_hms(self.now_ms);
        let line = Line::from(vec![
            Span::styled(" LAUNCH PRICING ", styles::text_muted().add_modifier(Modifier::BOLD)),
            Span::raw(" Save "),
            Span::styled("30%", Style::default().fg(palette::OFFER_GREEN).add_modifier(Modifier::BOLD)),
            Span::raw(" — pay $700 instead of $1,000   "),
            Span::styled(clock, styles::text_primary().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("[c]", styles::keybinding()),
            Span::styled(" claim $700 offer  ", Style::default().fg(palette::OFFER_GREEN)),
            Span::styled("[x]", styles::keybinding()),
            Span::styled(" dismiss", styles::text_muted()),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}
