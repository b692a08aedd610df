//! Overview (pitch) tab: the feature carousel and the pricing section.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use clubdeck_app::carousel::CarouselState;
use clubdeck_app::pricing::{PricingState, RevealStage};
use clubdeck_core::fixtures::FEATURES;

use crate::theme::{palette, styles};

/// Accent color per slide, cycled.
const SLIDE_COLORS: [ratatui::style::Color; 5] = [
    palette::NEON_PURPLE,
    palette::NEON_CYAN,
    palette::NEON_PINK,
    palette::NEON_GREEN,
    palette::NEON_AMBER,
];

pub struct OverviewView<'a> {
    carousel: &'a CarouselState,
    pricing: &'a PricingState,
    now: Instant,
}

impl<'a> OverviewView<'a> {
    pub fn new(carousel: &'a CarouselState, pricing: &'a PricingState, now: Instant) -> Self {
        Self {
            carousel,
            pricing,
            now,
        }
    }

    fn render_carousel(&self, area: Rect, buf: &mut Buffer) {
        if self.carousel.is_empty() {
            return;
        }
        let index = self.carousel.index();
        let card = &FEATURES[index.min(FEATURES.len() - 1)];
        let color = SLIDE_COLORS[index % SLIDE_COLORS.len()];

        let block = styles::neon_panel("Built Around How Clubs Actually Work", color);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // counter
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Min(2),    // description
            Constraint::Length(1), // progress
            Constraint::Length(1), // dots
        ])
        .split(inner);

        let counter = format!(
            "{:02} / {:02}{}",
            index + 1,
            self.carousel.len(),
            if self.carousel.is_paused() {
                "   ⏸ paused"
            } else {
                ""
            }
        );
        Paragraph::new(Line::styled(counter, styles::text_muted())).render(rows[0], buf);

        Paragraph::new(Line::styled(
            card.title,
            styles::text_primary().add_modifier(Modifier::BOLD),
        ))
        .render(rows[1], buf);

        Paragraph::new(Line::styled(card.subtitle, Style::default().fg(color))).render(rows[2], buf);

        Paragraph::new(Line::styled(card.description, styles::text_secondary()))
            .wrap(Wrap { trim: true })
            .render(rows[3], buf);

        // Per-slide progress over the auto-advance interval (empty while paused)
        let filled = (self.carousel.progress(self.now) * rows[4].width as f64) as usize;
        let bar: String = "▬".repeat(filled);
        Paragraph::new(Line::styled(bar, Style::default().fg(color))).render(rows[4], buf);

        // Dots, active one widened
        let mut dots = Vec::new();
        for i in 0..self.carousel.len() {
            if i == index {
                dots.push(Span::styled("▬▬ ", Style::default().fg(color)));
            } else {
                dots.push(Span::styled("· ", styles::text_muted()));
            }
        }
        Paragraph::new(Line::from(dots)).render(rows[5], buf);
    }

    fn render_pricing(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel("Pricing");
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.pricing.stage(self.now) {
            RevealStage::Hidden => Line::from(vec![
                Span::styled("$1,000", styles::text_primary().add_modifier(Modifier::BOLD)),
                Span::styled("  launch package, deployed to your club   ", styles::text_muted()),
                Span::styled("[v]", styles::keybinding()),
                Span::styled(" reveal launch offer", styles::accent()),
            ]),
            RevealStage::Striking => Line::from(vec![Span::styled(
                "$1,000",
                styles::text_primary().add_modifier(Modifier::CROSSED_OUT),
            )]),
            RevealStage::Fading => Line::from(vec![Span::styled(
                "$1,000",
                styles::text_muted().add_modifier(Modifier::CROSSED_OUT),
            )]),
            RevealStage::Discounted => Line::from(vec![
                Span::styled(
                    "$700",
                    Style::default()
                        .fg(palette::OFFER_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  $1,000", styles::text_muted().add_modifier(Modifier::CROSSED_OUT)),
                Span::styled("  -30% LAUNCH", styles::focused_selected()),
                Span::styled("  + $30/mo hosting   ", styles::text_muted()),
                Span::styled("[b]", styles::keybinding()),
                Span::styled(" what's included", styles::accent()),
            ]),
        };

        Paragraph::new(line).render(inner, buf);
    }
}

impl Widget for OverviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows =
            Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).split(area);
        self.render_carousel(rows[0], buf);
        self.render_pricing(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_core::SignalBus;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_view(carousel: &CarouselState, pricing: &PricingState, now: Instant) -> String {
        let backend = TestBackend::new(90, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(OverviewView::new(carousel, pricing, now), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_overview_shows_current_slide_and_hidden_price() {
        let now = Instant::now();
        let mut bus = SignalBus::new();
        let carousel = CarouselState::new(FEATURES.len(), now);
        let pricing = PricingState::new(&mut bus);
        let content = render_view(&carousel, &pricing, now);
        assert!(content.contains("01 / 09"));
        assert!(content.contains("Smart Auto-Roster"));
        assert!(content.contains("$1,000"));
        assert!(content.contains("reveal launch offer"));
        assert!(!content.contains("$700"));
    }

    #[test]
    fn test_overview_revealed_price() {
        let now = Instant::now();
        let mut bus = SignalBus::new();
        let carousel = CarouselState::new(FEATURES.len(), now);
        let mut pricing = PricingState::new(&mut bus);
        pricing.reveal(now);
        let later = now + std::time::Duration::from_secs(2);
        let content = render_view(&carousel, &pricing, later);
        assert!(content.contains("$700"));
        assert!(content.contains("-30% LAUNCH"));
        assert!(content.contains("what's included"));
    }

    #[test]
    fn test_overview_paused_marker() {
        let now = Instant::now();
        let mut bus = SignalBus::new();
        let mut carousel = CarouselState::new(FEATURES.len(), now);
        carousel.set_paused(true, now);
        let pricing = PricingState::new(&mut bus);
        let content = render_view(&carousel, &pricing, now);
        assert!(content.contains("paused"));
    }

    #[test]
    fn test_second_slide_after_manual_next() {
        let now = Instant::now();
        let mut bus = SignalBus::new();
        let mut carousel = CarouselState::new(FEATURES.len(), now);
        carousel.manual_next(now);
        let pricing = PricingState::new(&mut bus);
        let content = render_view(&carousel, &pricing, now);
        assert!(content.contains("02 / 09"));
        assert!(content.contains("Real-Time Tip Tracking"));
    }
}
