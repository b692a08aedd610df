//! Logs tab: the audit trail. Restricted to Owner and Super Admin.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::{fixtures, AuditAction, Role};

use crate::theme::styles;
use crate::widgets::LockedNotice;

pub struct LogsView<'a> {
    state: &'a AppState,
}

impl<'a> LogsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn action_style(action: AuditAction) -> ratatui::style::Style {
        match action {
            AuditAction::EventCreated | AuditAction::StaffCreated | AuditAction::TipReceived => {
                styles::status_green()
            }
            AuditAction::EventDeleted => styles::status_red(),
            AuditAction::EventUpdated
            | AuditAction::AvailabilitySet
            | AuditAction::SettingsChanged => styles::status_yellow(),
            AuditAction::StaffUpdated | AuditAction::NotificationSent => styles::accent(),
            AuditAction::RosterPosted => styles::text_secondary(),
            AuditAction::Login => styles::text_muted(),
        }
    }

    fn age_label(minutes_ago: u32) -> String {
        if minutes_ago < 60 {
            format!("{minutes_ago}m ago")
        } else {
            format!("{}h ago", minutes_ago / 60)
        }
    }
}

impl Widget for LogsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Restricted to Super Admin and Owner roles
        if !self.state.role.can(Role::Owner) {
            LockedNotice::new(
                "Activity Logs are restricted to Super Admin and Owner roles.",
                "Press r to switch the demo role.",
            )
            .render(area, buf);
            return;
        }

        let block = styles::panel("Activity Logs");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = fixtures::audit_log()
            .into_iter()
            .map(|entry| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<14}", entry.action.label()),
                        Self::action_style(entry.action).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.actor_name, styles::text_primary()),
                ];
                if let Some(target) = entry.target_name {
                    spans.push(Span::styled(format!(" → {target}"), styles::text_secondary()));
                }
                spans.push(Span::styled(
                    format!("  {}", entry.details),
                    styles::text_muted(),
                ));
                spans.push(Span::styled(
                    format!("  {}", Self::age_label(entry.minutes_ago)),
                    styles::text_muted(),
                ));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
