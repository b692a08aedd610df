//! Shared "restricted" notice shown when a view is gated above the
//! current role.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct LockedNotice {
    message: String,
    hint: String,
}

impl LockedNotice {
    pub fn new(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// The guest variant used by most views.
    pub fn guest() -> Self {
        Self::new(
            "Login required to view this section.",
            "Press r to switch the demo role.",
        )
    }
}

impl Widget for LockedNotice {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top_pad = area.height / 3;
        let mut lines = vec![Line::raw(""); top_pad as usize];
        lines.push(Line::styled("🔒", styles::text_muted()));
        lines.push(Line::raw(""));
        lines.push(Line::styled(self.message, styles::text_secondary()));
        lines.push(Line::styled(self.hint, styles::text_muted()));
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
