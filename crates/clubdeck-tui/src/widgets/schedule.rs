//! Schedule tab: this week's grid plus the smart-roster proposals.

use chrono::{Datelike, Duration};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::{fixtures, Role};

use crate::theme::{palette, styles};
use crate::widgets::LockedNotice;

pub struct ScheduleView<'a> {
    state: &'a AppState,
}

impl<'a> ScheduleView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_week(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel("This Week");
        let inner = block.inner(area);
        block.render(area, buf);

        let today = fixtures::today();
        let events = fixtures::events();
        let cols = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(inner);

        for (i, col) in cols.iter().enumerate() {
            let date = today + Duration::days(i as i64);
            let mut lines = vec![Line::styled(
                format!("{} {}", date.format("%a"), date.day()),
                if i == 0 {
                    styles::accent_bold()
                } else {
                    styles::text_muted()
                },
            )];
            for event in events.iter().filter(|e| e.date == date) {
                lines.push(Line::styled(
                    event.name.clone(),
                    styles::text_primary().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled(
                    format!("{}–{}", event.start_time, event.end_time),
                    styles::text_muted(),
                ));
                if let (Some(dj), Some(response)) = (&event.dj_name, event.dj_response) {
                    let (badge, style) = styles::response_indicator(response);
                    lines.push(Line::from(vec![
                        Span::styled(format!("♪ {dj} "), styles::text_secondary()),
                        Span::styled(badge, style),
                    ]));
                }
                if let (Some(host), Some(response)) = (&event.host_name, event.host_response) {
                    let (badge, style) = styles::response_indicator(response);
                    lines.push(Line::from(vec![
                        Span::styled(format!("🎤 {host} "), styles::text_secondary()),
                        Span::styled(badge, style),
                    ]));
                }
            }
            Paragraph::new(lines).render(*col, buf);
        }
    }

    fn render_pairings(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::neon_panel("Smart Roster Proposals", palette::NEON_PURPLE);
        let inner = block.inner(area);
        block.render(area, buf);
        let lines: Vec<Line> = fixtures::pairings()
            .into_iter()
            .map(|pair| {
                Line::from(vec![
                    Span::styled(format!("{} ", pair.date.format("%a %d %b")), styles::accent()),
                    Span::styled(pair.event_name, styles::text_primary()),
                    Span::styled(
                        format!("  {} + {}", pair.dj_name, pair.host_name),
                        styles::text_secondary(),
                    ),
                    Span::styled("  proposed", styles::status_yellow()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_booked(&self, area: Rect, buf: &mut Buffer) {
        if let Some((start, end)) = self.state.booked_range {
            let line = Line::from(vec![
                Span::styled("Booked: ", styles::text_muted()),
                Span::styled(
                    format!(
                        "{} → {}",
                        start.format("%a %d %b %H:%M"),
                        end.format("%a %d %b %H:%M")
                    ),
                    styles::status_green(),
                ),
            ]);
            Paragraph::new(line).render(area, buf);
        }
    }
}

impl Widget for ScheduleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Guests see a locked notice, like the product's public site
        if self.state.role.is_guest() {
            LockedNotice::guest().render(area, buf);
            return;
        }

        let manager = self.state.role.can(Role::Manager);
        let rows = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(if manager { 5 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_week(rows[0], buf);
        if manager {
            self.render_pairings(rows[1], buf);
        }
        self.render_booked(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_app::{message::Message, update, Settings};
    use clubdeck_core::EphemeralDeadlineStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn render_schedule(role: Option<Role>) -> String {
        let now = Instant::now();
        let mut state = AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            now,
        );
        update(&mut state, Message::SetRole(role), now);

        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(ScheduleView::new(&state), f.area()))
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
    fn test_guest_is_locked_out() {
        let content = render_schedule(None);
        assert!(content.contains("Login required"));
        assert!(!content.contains("This Week"));
    }

    #[test]
    fn test_host_sees_week_without_proposals() {
        let content = render_schedule(Some(Role::Host));
        assert!(content.contains("This Week"));
        assert!(content.contains("Neon Nights"));
        assert!(!content.contains("Smart Roster Proposals"));
    }

    #[test]
    fn test_manager_sees_proposals() {
        let content = render_schedule(Some(Role::Manager));
        assert!(content.contains("Smart Roster Proposals"));
        assert!(content.contains("Techno Tuesday"));
    }
}
