//! Full-screen feature breakdown overlay ("here's exactly what you're
//! getting"). Opening and closing it never touches the reveal latch.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use clubdeck_core::fixtures::PRICING_SECTIONS;

use crate::theme::{palette, styles};
use crate::widgets::modal;

pub struct BreakdownOverlay;

impl Widget for BreakdownOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal::centered(area, 78, area.height.saturating_sub(2).max(10));
        Clear.render(rect, buf);
        let block = styles::neon_panel("Here's exactly what you're getting", palette::NEON_PURPLE);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut lines = Vec::new();
        for section in PRICING_SECTIONS {
            lines.push(Line::styled(
                section.title,
                styles::text_primary().add_modifier(Modifier::BOLD),
            ));
            for item in section.items {
                lines.push(Line::from(vec![
                    Span::styled("  • ", styles::accent()),
                    Span::styled(*item, styles::text_secondary()),
                ]));
            }
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::styled("Everything above for ", styles::text_muted()),
            Span::styled(
                "$700",
                ratatui::style::Style::default()
                    .fg(palette::OFFER_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  $1,000", styles::text_muted().add_modifier(Modifier::CROSSED_OUT)),
            Span::styled("  + $30/mo hosting", styles::text_muted()),
        ]));

        // Static fit: the list is clipped to the modal height
        Paragraph::new(lines).render(inner, buf);
    }
}
