//! Rendering for one wheel-picker column.
//!
//! Shows a window of items around the current scroll position with the
//! centered (selected) row highlighted. During a user scroll the displayed
//! position transiently leads the committed value, exactly like the state
//! machine underneath.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use clubdeck_app::wheel::WheelState;

use crate::theme::styles;

pub struct WheelColumn<'a> {
    wheel: &'a WheelState,
    title: &'static str,
    focused: bool,
}

impl<'a> WheelColumn<'a> {
    pub fn new(wheel: &'a WheelState, title: &'static str, focused: bool) -> Self {
        Self {
            wheel,
            title,
            focused,
        }
    }
}

impl Widget for WheelColumn<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = if self.focused {
            styles::panel(self.title).border_style(styles::border_active())
        } else {
            styles::panel(self.title)
        };
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        let items = self.wheel.items();
        if items.is_empty() {
            return;
        }

        let center_row = (inner.height / 2) as i64;
        let selected = self.wheel.nearest_index() as i64;

        let mut lines = Vec::with_capacity(inner.height as usize);
        for row in 0..inner.height as i64 {
            let idx = selected + row - center_row;
            if idx < 0 || idx >= items.len() as i64 {
                lines.push(Line::raw(""));
                continue;
            }
            let label = items[idx as usize].label.clone();
            let line = if idx == selected {
                let style = if self.focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                };
                Line::styled(format!("▸{label}◂"), style)
            } else {
                Line::styled(label, styles::text_muted())
            };
            lines.push(line);
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
