//! Bottom key-hint bar; hints follow the active context.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::{AppState, DemoTab, Overlay};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if matches!(self.state.overlay, Some(Overlay::Booking(_))) {
            return vec![
                ("Tab", "column"),
                ("↑↓", "scroll"),
                ("Home/End", "jump"),
                ("Enter", "book"),
                ("Esc", "cancel"),
            ];
        }
        if self.state.pricing.breakdown_open() {
            return vec![("Esc", "close")];
        }
        let mut hints = vec![("Tab", "tabs"), ("r", "role")];
        match self.state.active_tab {
            DemoTab::Overview => {
                hints.push(("←→", "slides"));
                hints.push(("p", "pause"));
                hints.push(("v", "reveal"));
                hints.push(("b", "breakdown"));
            }
            DemoTab::Dashboard => {
                hints.push(("z/d/s", "tip club/dj/host"));
            }
            DemoTab::Schedule | DemoTab::Events => {
                hints.push(("e", "new event"));
            }
            DemoTab::Apply => {
                hints.push(("Enter", "submit"));
            }
            _ => {}
        }
        if self.state.countdown.is_visible() {
            hints.push(("c", "claim"));
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), styles::keybinding()));
            spans.push(Span::styled(format!("{action} "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
