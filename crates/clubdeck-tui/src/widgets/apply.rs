//! Apply tab: the mock hiring form. Open to everyone, including guests.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clubdeck_app::AppState;

use crate::theme::{palette, styles};

pub struct ApplyView<'a> {
    state: &'a AppState,
}

impl<'a> ApplyView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }
}

impl Widget for ApplyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::neon_panel("Join the Crew", palette::NEON_AMBER);
        let inner = block.inner(area);
        block.render(area, buf);

        let decision = if self.state.apply_decision_accept {
            Span::styled(
                "accept",
                ratatui::style::Style::default()
                    .fg(palette::OFFER_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("undecided", styles::text_muted())
        };

        let mut lines = vec![
            Line::styled(
                "Applications post straight to the club's private hiring channel.",
                styles::text_secondary(),
            ),
            Line::raw(""),
            Self::field("Position", "DJ  /  Host".to_string()),
            Self::field("Grid name", "________________".to_string()),
            Self::field("Timezone", "UTC-8".to_string()),
            Self::field("Voice", "yes / no".to_string()),
            Self::field("Genres", "House · Techno · Synthwave".to_string()),
            Self::field("Experience", "________________".to_string()),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Decision"), styles::text_muted()),
                decision,
            ]),
            Line::raw(""),
        ];

        if self.state.application_sent {
            lines.push(Line::styled(
                "✓ Application sent — management will reach out in Discord.",
                styles::status_green(),
            ));
        } else {
            lines.push(Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" submit application", styles::accent()),
            ]));
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

    fn render_apply(state: &AppState) -> String {
        let backend = TestBackend::new(90, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(ApplyView::new(state), f.area()))
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
    fn test_fresh_form_is_undecided() {
        let state = AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            Instant::now(),
        );
        let content = render_apply(&state);
        assert!(content.contains("Join the Crew"));
        assert!(content.contains("undecided"));
        assert!(content.contains("submit application"));
    }

    #[test]
    fn test_claim_flow_presets_accept() {
        let now = Instant::now();
        let mut state = AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            now,
        );
        state.apply_decision_accept = true;
        let content = render_apply(&state);
        assert!(content.contains("accept"));
        assert!(!content.contains("undecided"));
        update(&mut state, Message::SubmitApplication, now);
        let content = render_apply(&state);
        assert!(content.contains("Application sent"));
    }
}
