//! Main render/view function (View in TEA pattern)

use std::time::Instant;

use chrono::Utc;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use clubdeck_app::{AppState, DemoTab, Overlay};

use crate::theme::palette;
use crate::widgets::analytics::AnalyticsView;
use crate::widgets::apply::ApplyView;
use crate::widgets::dashboard::DashboardView;
use crate::widgets::events::EventsView;
use crate::widgets::logs::LogsView;
use crate::widgets::overview::OverviewView;
use crate::widgets::schedule::ScheduleView;
use crate::widgets::settings::SettingsView;
use crate::widgets::staff::StaffView;
use crate::widgets::{
    BookingDialog, BreakdownOverlay, NotificationsPopup, OfferBanner, Sidebar, StatusBar, TopBar,
};
use crate::layout;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering - reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.countdown.is_visible());

    if let Some(banner_area) = areas.banner {
        frame.render_widget(
            OfferBanner::new(&state.countdown, Utc::now().timestamp_millis()),
            banner_area,
        );
    }

    frame.render_widget(TopBar::new(&state.role), areas.topbar);
    frame.render_widget(Sidebar::new(state.active_tab, &state.role), areas.sidebar);

    match state.active_tab {
        DemoTab::Overview => frame.render_widget(
            OverviewView::new(&state.carousel, &state.pricing, now),
            areas.content,
        ),
        DemoTab::Dashboard => {
            frame.render_widget(DashboardView::new(state, now), areas.content)
        }
        DemoTab::Schedule => frame.render_widget(ScheduleView::new(state), areas.content),
        DemoTab::Staff => frame.render_widget(StaffView::new(state), areas.content),
        DemoTab::Events => frame.render_widget(EventsView::new(state), areas.content),
        DemoTab::Apply => frame.render_widget(ApplyView::new(state), areas.content),
        DemoTab::Analytics => frame.render_widget(AnalyticsView::new(state), areas.content),
        DemoTab::Settings => frame.render_widget(SettingsView::new(state), areas.content),
        DemoTab::Logs => frame.render_widget(LogsView::new(state), areas.content),
    }

    frame.render_widget(StatusBar::new(state), areas.status);

    // Overlays stack over everything
    if state.notifications_open {
        frame.render_widget(
            NotificationsPopup::new(state.role.current()),
            areas.content,
        );
    }
    if state.pricing.breakdown_open() {
        frame.render_widget(BreakdownOverlay, area);
    }
    if let Some(Overlay::Booking(booking)) = &state.overlay {
        frame.render_widget(BookingDialog::new(booking), area);
    }
}
