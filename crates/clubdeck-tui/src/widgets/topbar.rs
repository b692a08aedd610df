//! Title row with the demo role toggle and the notification bell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::notifications;
use clubdeck_core::{Role, RoleContext, DEMO_ROLES};

use crate::theme::styles;

pub struct TopBar<'a> {
    role: &'a RoleContext,
}

impl<'a> TopBar<'a> {
    pub fn new(role: &'a RoleContext) -> Self {
        Self { role }
    }

    fn toggle_label(entry: Option<Role>) -> &'static str {
        match entry {
            Some(role) => role.short_label(),
            None => "GUEST",
        }
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" CLUBDECK OS ", styles::accent_bold()),
            Span::styled("v2.4", styles::text_muted()),
            Span::raw("  "),
        ];

        // Role toggle pills, current one highlighted
        for entry in DEMO_ROLES {
            let label = Self::toggle_label(entry);
            if entry == self.role.current() {
                spans.push(Span::styled(format!(" {label} "), styles::focused_selected()));
            } else {
                spans.push(Span::styled(format!(" {label} "), styles::text_muted()));
            }
        }
        spans.push(Span::styled(" [r]", styles::keybinding()));

        // Bell with unread dot (guests have no bell)
        if !self.role.is_guest() {
            spans.push(Span::raw("   "));
            if notifications::has_unread(self.role.current()) {
                spans.push(Span::styled("🔔•", styles::status_red().add_modifier(Modifier::BOLD)));
            } else {
                spans.push(Span::styled("🔔", styles::text_muted()));
            }
            spans.push(Span::styled(" [n]", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_topbar(role: &RoleContext) -> String {
        let backend = TestBackend::new(90, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(TopBar::new(role), f.area()))
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
    fn test_topbar_lists_demo_roles() {
        let content = render_topbar(&RoleContext::new());
        assert!(content.contains("CLUBDECK OS"));
        assert!(content.contains("SA"));
        assert!(content.contains("GUEST"));
        assert!(content.contains("MGR"));
    }

    #[test]
    fn test_guest_topbar_has_no_bell() {
        let content = render_topbar(&RoleContext::with_role(None));
        assert!(!content.contains("🔔"));
    }
}
