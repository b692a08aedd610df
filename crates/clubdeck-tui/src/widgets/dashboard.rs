//! Dashboard tab: live floor, real-time stats, feeds.
//!
//! Sections are filtered through the capability check the way the product
//! gates them: the live floor and tip buttons are public, stats and feeds
//! are staff-only, financial panels are manager-and-up.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Sparkline, Widget},
};

use clubdeck_app::{AppState, TipTarget};
use clubdeck_core::{fixtures, FeedKind, Role};

use crate::theme::{palette, styles};

/// Waveform bar heights for the DJ booth visual.
const WAVE_HEIGHTS: [u8; 16] = [60, 80, 45, 90, 70, 55, 85, 40, 75, 95, 50, 65, 88, 42, 78, 58];

pub struct DashboardView<'a> {
    state: &'a AppState,
    now: Instant,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState, now: Instant) -> Self {
        Self { state, now }
    }

    fn tip_span(&self, target: TipTarget, key: &'static str) -> Span<'static> {
        if self.state.tip_flashing(target, self.now) {
            Span::styled(
                "♥ Tipped!",
                Style::default()
                    .fg(palette::NEON_PINK)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[{key}] {}", target.label()), styles::keybinding())
        }
    }

    fn render_dj_booth(&self, area: Rect, buf: &mut Buffer) {
        let booth = fixtures::dj_booth();
        let block = styles::neon_panel("DJ Booth", palette::NEON_PURPLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let wave: String = WAVE_HEIGHTS
            .iter()
            .map(|&h| match h {
                0..=50 => '▂',
                51..=70 => '▄',
                71..=85 => '▆',
                _ => '█',
            })
            .collect();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(&*booth.dj_name, styles::text_primary().add_modifier(Modifier::BOLD)),
                if booth.is_live {
                    Span::styled("  ● LIVE", styles::status_green())
                } else {
                    Span::styled("  ○ off air", styles::text_muted())
                },
            ]),
            Line::styled(format!("Genre: {}", booth.genre), styles::text_secondary()),
            Line::styled(format!("Now: {}", booth.current_track), styles::text_muted()),
            Line::styled(wave, Style::default().fg(palette::NEON_CYAN)),
            Line::styled(format!("Stream: {}", booth.stream_url), styles::text_muted()),
        ];
        lines.push(Line::from(vec![
            Span::styled(
                format!("Tips: L${}", booth.tips_this_session),
                styles::text_secondary(),
            ),
            Span::raw("   "),
            self.tip_span(TipTarget::Dj, "d"),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_host_station(&self, area: Rect, buf: &mut Buffer) {
        let station = fixtures::host_station();
        let stats = fixtures::dashboard_stats();
        let block = styles::neon_panel("Host Station", palette::NEON_PINK);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    &*station.host_name,
                    styles::text_primary().add_modifier(Modifier::BOLD),
                ),
                if station.on_break {
                    Span::styled("  ● on break", styles::status_yellow())
                } else {
                    Span::styled("  ● active", styles::status_green())
                },
            ]),
            Line::styled(
                format!(
                    "Greeted {}   Current {}   New {}",
                    station.guests_greeted, stats.current_guests, stats.new_members_this_event
                ),
                styles::text_secondary(),
            ),
        ];
        if self.state.role.can(Role::Host) {
            lines.push(Line::styled(
                "Send Message · View Profile",
                styles::accent(),
            ));
        }
        lines.push(Line::from(self.tip_span(TipTarget::Host, "s")));
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_club_tip(&self, area: Rect, buf: &mut Buffer) {
        let stats = fixtures::dashboard_stats();
        let line = Line::from(vec![
            Span::styled("Your Club", styles::text_primary().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  club jar L${} tonight   ", stats.tips_club),
                styles::text_muted(),
            ),
            self.tip_span(TipTarget::Club, "z"),
        ]);
        Paragraph::new(line)
            .block(styles::panel("Support the Club"))
            .render(area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = fixtures::dashboard_stats();
        let block = styles::neon_panel("Real-Time Stats", palette::NEON_CYAN);
        let inner = block.inner(area);
        block.render(area, buf);

        let pct = stats.capacity_pct();
        let capacity_style = if pct > 85 {
            styles::status_red()
        } else if pct > 60 {
            styles::status_yellow()
        } else {
            styles::status_green()
        };
        let filled = (pct as usize * 20) / 100;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} / {} guests  ", stats.current_guests, stats.max_capacity),
                    styles::text_primary(),
                ),
                Span::styled(bar, capacity_style),
            ]),
            Line::styled(
                format!("Avg spend / guest: L${}", stats.avg_spend_per_guest),
                styles::text_secondary(),
            ),
            Line::from(vec![
                Span::styled("Tips  ", styles::text_muted()),
                Span::styled(format!("Club L${}  ", stats.tips_club), styles::accent()),
                Span::styled(
                    format!("Host L${}  ", stats.tips_host),
                    Style::default().fg(palette::NEON_PINK),
                ),
                Span::styled(
                    format!("DJ L${}", stats.tips_dj),
                    Style::default().fg(palette::NEON_PURPLE),
                ),
            ]),
            Line::styled(
                format!(
                    "Members joined {}  online {}  new {}",
                    stats.group_members_joined,
                    stats.group_members_online,
                    stats.new_members_this_event
                ),
                styles::text_muted(),
            ),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_vibe_graph(&self, area: Rect, buf: &mut Buffer) {
        let history = fixtures::tip_history();
        let block = styles::neon_panel("Vibe Graph", palette::NEON_PURPLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).split(inner);
        let club: Vec<u64> = history.iter().map(|s| s.club as u64).collect();
        Sparkline::default()
            .data(&club)
            .style(Style::default().fg(palette::NEON_CYAN))
            .render(rows[0], buf);
        let last = history.last();
        let label = match last {
            Some(sample) => format!(
                "tonight  club L${}  dj L${}  host L${}",
                sample.club, sample.dj, sample.host
            ),
            None => String::new(),
        };
        Paragraph::new(Line::styled(label, styles::text_muted())).render(rows[1], buf);
    }

    fn render_events_or_shifts(&self, area: Rect, buf: &mut Buffer) {
        let role = self.state.role.current();
        if matches!(role, Some(Role::Dj) | Some(Role::Host)) {
            let block = styles::panel("My Upcoming Shifts");
            let inner = block.inner(area);
            block.render(area, buf);
            let lines: Vec<Line> = fixtures::my_shifts()
                .into_iter()
                .map(|shift| {
                    let (badge, style) = styles::response_indicator(shift.response);
                    Line::from(vec![
                        Span::styled(shift.event_name, styles::text_primary()),
                        Span::styled(
                            format!("  {} · {}  ", shift.date_label, shift.time),
                            styles::text_muted(),
                        ),
                        Span::styled(badge, style),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(inner, buf);
        } else {
            let block = styles::panel("Upcoming");
            let inner = block.inner(area);
            block.render(area, buf);
            let lines: Vec<Line> = fixtures::events()
                .into_iter()
                .map(|event| {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", event.date.format("%d %b")),
                            styles::accent(),
                        ),
                        Span::styled(event.name, styles::text_primary()),
                        Span::styled(
                            format!("  {}–{} · {}", event.start_time, event.end_time, event.genre),
                            styles::text_muted(),
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(inner, buf);
        }
    }

    fn render_tip_feed(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::neon_panel("Tip Feed", palette::NEON_GREEN);
        let inner = block.inner(area);
        block.render(area, buf);
        let lines: Vec<Line> = fixtures::tips()
            .into_iter()
            .map(|tip| {
                Line::from(vec![
                    Span::styled(format!("L${:<5}", tip.amount), styles::status_green()),
                    Span::styled(
                        format!("{} → {}", tip.tipper_name, tip.recipient_name),
                        styles::text_secondary(),
                    ),
                    Span::styled(format!("  {}m ago", tip.minutes_ago), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_guest_activity(&self, area: Rect, buf: &mut Buffer) {
        let visits = fixtures::guest_visits();
        let block = styles::panel("Guest Activity");
        let inner = block.inner(area);
        block.render(area, buf);
        let lines: Vec<Line> = visits
            .iter()
            .map(|guest| {
                let mut spans = vec![Span::styled(guest.name.clone(), styles::text_secondary())];
                if guest.is_new_member {
                    spans.push(Span::styled(" new", styles::status_green()));
                }
                spans.push(Span::styled(
                    format!("  {}m", guest.duration_minutes),
                    styles::text_muted(),
                ));
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_staff_feed(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel("Staff Feed");
        let inner = block.inner(area);
        block.render(area, buf);
        let lines: Vec<Line> = fixtures::staff_feed()
            .into_iter()
            .map(|msg| {
                let (tag, style) = match msg.kind {
                    FeedKind::Alert => ("alert ", styles::status_yellow()),
                    FeedKind::Message => ("msg   ", styles::accent()),
                    FeedKind::System => ("system", styles::text_muted()),
                };
                Line::from(vec![
                    Span::styled(tag, style),
                    Span::raw(" "),
                    Span::styled(msg.message, styles::text_secondary()),
                    Span::styled(format!("  {}m ago", msg.minutes_ago), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let role = &self.state.role;
        let staff = role.can(Role::Host);

        let rows = Layout::vertical([
            Constraint::Length(8),                                  // live floor
            Constraint::Length(3),                                  // club tip
            Constraint::Min(6),                                     // main grid
            Constraint::Length(if staff { 5 } else { 0 }),          // staff feed
        ])
        .split(area);

        let floor = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);
        self.render_dj_booth(floor[0], buf);
        self.render_host_station(floor[1], buf);
        self.render_club_tip(rows[1], buf);

        let grid = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        // Left column: vibe graph (manager+) over events/shifts
        let vibe = role.can(Role::Manager);
        let left = Layout::vertical([
            Constraint::Length(if vibe { 5 } else { 0 }),
            Constraint::Min(3),
        ])
        .split(grid[0]);
        if vibe {
            self.render_vibe_graph(left[0], buf);
        }
        self.render_events_or_shifts(left[1], buf);

        // Right column: staff-only panels
        if staff {
            let tip_feed = role.can(Role::Manager);
            let right = Layout::vertical([
                Constraint::Length(6),
                Constraint::Min(3),
                Constraint::Length(if tip_feed { 5 } else { 0 }),
            ])
            .split(grid[1]);
            self.render_stats(right[0], buf);
            self.render_guest_activity(right[1], buf);
            if tip_feed {
                self.render_tip_feed(right[2], buf);
            }
            self.render_staff_feed(rows[3], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_app::{message::Message, update, Settings};
    use clubdeck_core::EphemeralDeadlineStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_dashboard(role: Option<Role>) -> String {
        let now = Instant::now();
        let mut state = AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            now,
        );
        update(&mut state, Message::SetRole(role), now);

        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(DashboardView::new(&state, now), f.area()))
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
    fn test_manager_sees_financial_panels() {
        let content = render_dashboard(Some(Role::Manager));
        assert!(content.contains("Vibe Graph"));
        assert!(content.contains("Tip Feed"));
        assert!(content.contains("Real-Time Stats"));
        assert!(content.contains("Staff Feed"));
    }

    #[test]
    fn test_host_sees_stats_but_not_financials() {
        let content = render_dashboard(Some(Role::Host));
        assert!(content.contains("Real-Time Stats"));
        assert!(content.contains("Guest Activity"));
        assert!(!content.contains("Vibe Graph"));
        assert!(!content.contains("Tip Feed"));
        // DJs/hosts see their own shifts instead of the event list
        assert!(content.contains("My Upcoming Shifts"));
    }

    #[test]
    fn test_guest_sees_only_public_floor() {
        let content = render_dashboard(None);
        assert!(content.contains("DJ Booth"));
        assert!(content.contains("Host Station"));
        assert!(content.contains("Support the Club"));
        assert!(!content.contains("Real-Time Stats"));
        assert!(!content.contains("Staff Feed"));
        assert!(content.contains("Upcoming"));
    }
}
