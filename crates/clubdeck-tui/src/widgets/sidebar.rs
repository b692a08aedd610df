//! Sidebar tab list plus the profile card at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use clubdeck_app::DemoTab;
use clubdeck_core::RoleContext;

use crate::theme::styles;

pub struct Sidebar<'a> {
    active: DemoTab,
    role: &'a RoleContext,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: DemoTab, role: &'a RoleContext) -> Self {
        Self { active, role }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(DemoTab::ALL.len() + 3);
        for tab in DemoTab::ALL {
            let marker = if tab == self.active { "▎" } else { " " };
            let style = if tab == self.active {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(tab.label(), style),
            ]));
        }

        // Profile card pinned under the tabs
        lines.push(Line::raw(""));
        let (name, title) = match self.role.current() {
            Some(role) => ("Nova Resident", role.label()),
            None => ("Guest", "Visitor"),
        };
        let max = inner.width.saturating_sub(1) as usize;
        lines.push(Line::styled(truncate_name(name, max), styles::text_primary()));
        lines.push(Line::styled(truncate_name(title, max), styles::text_muted()));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate a name to a display width, adding ellipsis if needed
fn truncate_name(name: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut out = String::new();
    for c in name.chars() {
        let candidate = format!("{out}{c}");
        if candidate.width() + 1 > max_width {
            break;
        }
        out = candidate;
    }
    format!("{out}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_sidebar(active: DemoTab, role: &RoleContext) -> String {
        let backend = TestBackend::new(16, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(Sidebar::new(active, role), f.area()))
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
    fn test_sidebar_lists_all_tabs() {
        let content = render_sidebar(DemoTab::Dashboard, &RoleContext::new());
        for tab in DemoTab::ALL {
            assert!(content.contains(tab.label()), "missing {}", tab.label());
        }
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 10), "Short");
        assert_eq!(truncate_name("General Manager", 10), "General M…");
        assert_eq!(truncate_name("AB", 1), "…");
        assert_eq!(truncate_name("日本語テスト", 7), "日本語…");
    }

    #[test]
    fn test_sidebar_shows_profile_for_role() {
        let content = render_sidebar(DemoTab::Overview, &RoleContext::new());
        assert!(content.contains("Nova Resident"));
        assert!(content.contains("Super Admin"));

        let guest = render_sidebar(DemoTab::Overview, &RoleContext::with_role(None));
        assert!(guest.contains("Guest"));
        assert!(guest.contains("Visitor"));
    }
}
