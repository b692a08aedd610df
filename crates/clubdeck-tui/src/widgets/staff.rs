//! Staff tab: the roster grouped management / DJs / hosts. Manager-gated.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::{fixtures, Role, StaffMember};

use crate::theme::styles;
use crate::widgets::LockedNotice;

pub struct StaffView<'a> {
    state: &'a AppState,
}

impl<'a> StaffView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn member_line(member: &StaffMember) -> Line<'static> {
        let (dot, dot_style) = styles::presence_indicator(member.online_status);
        let mut spans = vec![
            Span::styled(dot, dot_style),
            Span::styled(
                format!(" {:<12}", member.display_name),
                styles::text_primary(),
            ),
            Span::styled(format!("{:<6}", member.role.short_label()), styles::accent()),
            Span::styled(format!("{:>3}h", member.hours_this_week), styles::text_secondary()),
        ];
        if member.tips_this_week > 0 {
            spans.push(Span::styled(
                format!("  L${}", member.tips_this_week),
                styles::status_green(),
            ));
        }
        if let Some(rating) = member.rating {
            spans.push(Span::styled(format!("  ★{rating:.1}"), styles::status_yellow()));
        }
        if !member.specialties.is_empty() {
            spans.push(Span::styled(
                format!("  {}", member.specialties.join(", ")),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for StaffView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.role.can(Role::Manager) {
            LockedNotice::new(
                "Staff management is restricted to Manager roles and above.",
                "Press r to switch the demo role.",
            )
            .render(area, buf);
            return;
        }

        let block = styles::panel("Staff Roster");
        let inner = block.inner(area);
        block.render(area, buf);

        let roster = fixtures::staff_roster();
        let mut lines = Vec::new();

        for (title, filter) in [
            ("Management", Role::Manager),
            ("DJs", Role::Dj),
            ("Hosts", Role::Host),
        ] {
            lines.push(Line::styled(
                title,
                styles::text_muted().add_modifier(Modifier::BOLD),
            ));
            for member in roster.iter().filter(|m| match filter {
                Role::Manager => m.role.rank() >= Role::Manager.rank(),
                role => m.role == role,
            }) {
                lines.push(Self::member_line(member));
            }
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
