//! Settings tab: mock preference toggles; the admin section is owner-gated.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::Role;

use crate::theme::{palette, styles};
use crate::widgets::LockedNotice;

pub struct SettingsView<'a> {
    state: &'a AppState,
}

impl<'a> SettingsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn toggle(label: &'static str, description: &'static str, on: bool) -> Vec<Line<'static>> {
        let marker = if on {
            Span::styled("[on ]", styles::status_green())
        } else {
            Span::styled("[off]", styles::text_muted())
        };
        vec![
            Line::from(vec![
                marker,
                Span::styled(format!(" {label}"), styles::text_primary()),
            ]),
            Line::styled(format!("      {description}"), styles::text_muted()),
        ]
    }
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.role.is_guest() {
            LockedNotice::new(
                "Login required to access personal settings.",
                "Press r to switch the demo role.",
            )
            .render(area, buf);
            return;
        }

        let owner = self.state.role.can(Role::Owner);
        let rows = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(if owner { 7 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(area);

        let appearance = styles::panel("Appearance");
        let inner = appearance.inner(rows[0]);
        appearance.render(rows[0], buf);
        let mut lines = Self::toggle("Dark Mode", "Use the dark theme for the dashboard.", true);
        lines.extend(Self::toggle(
            "Background Particles",
            "Enable dynamic background particle effects.",
            true,
        ));
        Paragraph::new(lines).render(inner, buf);

        let sound = styles::panel("Notifications & Sound");
        let inner = sound.inner(rows[1]);
        sound.render(rows[1], buf);
        Paragraph::new(Self::toggle(
            "UI Sound Effects",
            "Play sounds when receiving tips or warnings.",
            true,
        ))
        .render(inner, buf);

        if owner {
            let admin = styles::neon_panel("System Admin", palette::NEON_PURPLE);
            let inner = admin.inner(rows[2]);
            admin.render(rows[2], buf);
            let mut lines = Self::toggle("Grid API Sync", "Synchronously pull in-world data.", true);
            lines.extend(Self::toggle(
                "Enforce Security Protocols",
                "Require 2FA for all manager actions. (locked)",
                true,
            ));
            Paragraph::new(lines).render(inner, buf);
        }
    }
}
