//! Notifications dropdown anchored under the topbar bell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use clubdeck_app::notifications::notices_for;
use clubdeck_core::Role;

use crate::theme::styles;

pub struct NotificationsPopup {
    role: Option<Role>,
}

impl NotificationsPopup {
    pub fn new(role: Option<Role>) -> Self {
        Self { role }
    }
}

impl Widget for NotificationsPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 44.min(area.width);
        let notices = notices_for(self.role);
        let height = (notices.len() as u16 * 3 + 3).min(area.height);
        let rect = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height,
        };
        Clear.render(rect, buf);
        let block = styles::panel("Notifications");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut lines = Vec::new();
        if notices.is_empty() {
            lines.push(Line::styled(
                "Caught up! No new notifications.",
                styles::text_muted(),
            ));
        }
        for notice in notices {
            let marker = if notice.unread { "• " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::status_red()),
                Span::styled(notice.title, styles::text_primary().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", notice.time), styles::text_muted()),
            ]));
            lines.push(Line::styled(format!("  {}", notice.description), styles::text_secondary()));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_popup(role: Option<Role>) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(NotificationsPopup::new(role), f.area()))
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
    fn test_manager_sees_roster_alert() {
        let content = render_popup(Some(Role::Manager));
        assert!(content.contains("Roster Alert"));
        assert!(content.contains("Missing DJ"));
    }

    #[test]
    fn test_dj_sees_shift_notices() {
        let content = render_popup(Some(Role::Dj));
        assert!(content.contains("Shift Confirmed"));
    }

    #[test]
    fn test_member_sees_empty_state() {
        let content = render_popup(Some(Role::Member));
        assert!(content.contains("Caught up"));
    }
}
