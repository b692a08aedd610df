//! New-event booking dialog: six wheel columns composing a start/end range.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use clubdeck_app::date_range::WheelSlot;
use clubdeck_app::BookingState;

use crate::theme::{palette, styles};
use crate::widgets::modal;
use crate::widgets::wheel_column::WheelColumn;

pub struct BookingDialog<'a> {
    booking: &'a BookingState,
}

impl<'a> BookingDialog<'a> {
    pub fn new(booking: &'a BookingState) -> Self {
        Self { booking }
    }

    fn render_group(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &'static str,
        color: ratatui::style::Color,
        slots: [WheelSlot; 3],
    ) {
        let block = styles::neon_panel(title, color);
        let inner = block.inner(area);
        block.render(area, buf);

        let cols = Layout::horizontal([
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(8),
        ])
        .split(inner);

        let focused = self.booking.picker.focused();
        for (i, slot) in slots.into_iter().enumerate() {
            let title = match slot {
                WheelSlot::StartDay | WheelSlot::EndDay => "Day",
                WheelSlot::StartHour | WheelSlot::EndHour => "Hour",
                WheelSlot::StartMinute | WheelSlot::EndMinute => "Min",
            };
            WheelColumn::new(self.booking.picker.wheel(slot), title, focused == slot)
                .render(cols[i], buf);
        }
    }
}

impl Widget for BookingDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal::centered(area, 72, 22.min(area.height));
        Clear.render(rect, buf);
        let block = styles::neon_panel("New Event", palette::NEON_CYAN);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let rows = Layout::vertical([
            Constraint::Min(9),
            Constraint::Min(9),
            Constraint::Length(1),
        ])
        .split(inner);

        self.render_group(
            rows[0],
            buf,
            "START",
            palette::NEON_CYAN,
            [WheelSlot::StartDay, WheelSlot::StartHour, WheelSlot::StartMinute],
        );
        self.render_group(
            rows[1],
            buf,
            "END",
            palette::NEON_PURPLE,
            [WheelSlot::EndDay, WheelSlot::EndHour, WheelSlot::EndMinute],
        );

        let duration = match self.booking.picker.duration_hours() {
            Some(hours) => format!("Duration: {hours:.1} hours"),
            None => "Duration: —".to_string(),
        };
        Paragraph::new(Line::from(Span::styled(duration, styles::text_muted())))
            .render(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_dialog(booking: &BookingState) -> String {
        let backend = TestBackend::new(90, 26);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(BookingDialog::new(booking), f.area()))
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
    fn test_dialog_shows_groups_and_duration() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
        let booking = BookingState::new(today);
        let content = render_dialog(&booking);
        assert!(content.contains("New Event"));
        assert!(content.contains("START"));
        assert!(content.contains("END"));
        assert!(content.contains("Duration: 3.0 hours"));
        assert!(content.contains("Today"));
    }

    #[test]
    fn test_dialog_marks_selected_hour() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
        let booking = BookingState::new(today);
        let content = render_dialog(&booking);
        // Seeded 20:00 – 23:00
        assert!(content.contains("▸20◂"));
        assert!(content.contains("▸23◂"));
    }
}
