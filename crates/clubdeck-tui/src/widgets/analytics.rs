//! Analytics tab: revenue trend, peak hours, event ROI. Manager-gated.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Sparkline, Widget},
};

use clubdeck_app::AppState;
use clubdeck_core::{fixtures, Role};

use crate::theme::{palette, styles};
use crate::widgets::LockedNotice;

pub struct AnalyticsView<'a> {
    state: &'a AppState,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_revenue(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::neon_panel("Revenue Trend", palette::NEON_CYAN);
        let inner = block.inner(area);
        block.render(area, buf);

        let trend = fixtures::revenue_trend();
        let max = trend.iter().map(|w| w.revenue).max().unwrap_or(1);
        let lines: Vec<Line> = trend
            .iter()
            .map(|week| {
                let width = (week.revenue as usize * 30) / max as usize;
                Line::from(vec![
                    Span::styled(format!("{:<7}", week.week), styles::text_muted()),
                    Span::styled("█".repeat(width), styles::accent()),
                    Span::styled(
                        format!(" L${}  (exp L${})", week.revenue, week.expenses),
                        styles::text_secondary(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_peak_hours(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::neon_panel("Peak Hours", palette::NEON_PURPLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).split(inner);
        let peaks = fixtures::peak_hours();
        let guests: Vec<u64> = peaks.iter().map(|p| p.guests as u64).collect();
        Sparkline::default()
            .data(&guests)
            .style(Style::default().fg(palette::NEON_PURPLE))
            .render(rows[0], buf);

        let busiest = peaks.iter().max_by_key(|p| p.guests);
        let label = match busiest {
            Some(peak) => format!(
                "busiest {} · {} guests · L${} tips",
                peak.hour, peak.guests, peak.tips
            ),
            None => String::new(),
        };
        Paragraph::new(Line::styled(label, styles::text_muted())).render(rows[1], buf);
    }

    fn render_roi(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel("Event ROI");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::styled(
            format!(
                "{:<16}{:>9}{:>7}{:>11}{:>6}",
                "event", "revenue", "cost", "attendees", "roi"
            ),
            styles::text_muted(),
        )];
        for row in fixtures::event_roi() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", row.event), styles::text_primary()),
                Span::styled(format!("{:>9}", row.revenue), styles::status_green()),
                Span::styled(format!("{:>7}", row.cost), styles::text_secondary()),
                Span::styled(format!("{:>11}", row.attendees), styles::text_secondary()),
                Span::styled(format!("{:>6.1}", row.roi), styles::accent()),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for AnalyticsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.role.can(Role::Manager) {
            LockedNotice::new(
                "Analytics are restricted to Manager roles and above.",
                "Press r to switch the demo role.",
            )
            .render(area, buf);
            return;
        }

        let rows = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(9),
        ])
        .split(area);
        self.render_revenue(rows[0], buf);
        self.render_peak_hours(rows[1], buf);
        self.render_roi(rows[2], buf);
    }
}
