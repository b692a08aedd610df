//! Events tab: upcoming event cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::{fixtures, EventStatus, Role};

use crate::theme::styles;
use crate::widgets::LockedNotice;

pub struct EventsView<'a> {
    state: &'a AppState,
}

impl<'a> EventsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_style(status: EventStatus) -> ratatui::style::Style {
        match status {
            EventStatus::Confirmed | EventStatus::Live => styles::status_green(),
            EventStatus::Scheduled => styles::status_yellow(),
            EventStatus::Draft => styles::text_muted(),
            EventStatus::Completed => styles::text_secondary(),
            EventStatus::Cancelled => styles::status_red(),
        }
    }
}

impl Widget for EventsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.role.is_guest() {
            LockedNotice::guest().render(area, buf);
            return;
        }

        let block = styles::panel("Upcoming Events");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        if self.state.role.can(Role::Manager) {
            lines.push(Line::from(vec![
                Span::styled("[e]", styles::keybinding()),
                Span::styled(" new event", styles::accent()),
            ]));
            lines.push(Line::raw(""));
        }

        for event in fixtures::events() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", event.date.format("%d %b")),
                    styles::accent_bold(),
                ),
                Span::styled(
                    event.name.clone(),
                    styles::text_primary().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}–{}", event.start_time, event.end_time),
                    styles::text_secondary(),
                ),
                Span::styled(format!("  {}", event.genre), styles::text_muted()),
                Span::styled(
                    format!("  {}", event.status.label()),
                    Self::status_style(event.status),
                ),
            ]));
            lines.push(Line::styled(
                format!("  {}", event.description),
                styles::text_muted(),
            ));
            let mut crew = Vec::new();
            if let Some(dj) = &event.dj_name {
                crew.push(Span::styled(format!("  ♪ {dj}"), styles::text_secondary()));
            }
            if let Some(host) = &event.host_name {
                crew.push(Span::styled(format!("  🎤 {host}"), styles::text_secondary()));
            }
            if event.is_recurring {
                crew.push(Span::styled("  ↻ recurring", styles::text_muted()));
            }
            if !crew.is_empty() {
                lines.push(Line::from(crew));
            }
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_app::{message::Message, update, Settings};
    use clubdeck_core::EphemeralDeadlineStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn render_events(role: Option<Role>) -> String {
        let now = Instant::now();
        let mut state = AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            now,
        );
        update(&mut state, Message::SetRole(role), now);

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(EventsView::new(&state), f.area()))
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
    fn test_guest_locked() {
        let content = render_events(None);
        assert!(content.contains("Login required"));
    }

    #[test]
    fn test_host_sees_events_without_create() {
        let content = render_events(Some(Role::Host));
        assert!(content.contains("Neon Nights"));
        assert!(content.contains("Confirmed"));
        assert!(!content.contains("new event"));
    }

    #[test]
    fn test_manager_gets_create_hint() {
        let content = render_events(Some(Role::Manager));
        assert!(content.contains("new event"));
        assert!(content.contains("Lo-Fi Lounge"));
        assert!(content.contains("Draft"));
    }
}
