//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime};

use clubdeck_core::{DeadlineStore, RoleContext, SignalBus};

use crate::carousel::CarouselState;
use crate::config::Settings;
use crate::countdown::CountdownState;
use crate::date_range::DateRangeState;
use crate::message::TipTarget;
use crate::pricing::PricingState;
use crate::tabs::DemoTab;

/// How long a simulated tip button flashes its confirmation.
pub const TIP_FLASH: Duration = Duration::from_secs(2);

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Dialog stacked over the active tab.
#[derive(Debug)]
pub enum Overlay {
    /// New-event booking dialog wrapping the date range picker.
    Booking(BookingState),
}

/// State of the booking dialog.
#[derive(Debug)]
pub struct BookingState {
    pub picker: DateRangeState,
    /// Live preview of the last valid composed range.
    pub range: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl BookingState {
    /// Fresh dialog seeded for tonight's typical slot (20:00 – 23:00).
    /// The picker is uncontrolled after this seed.
    pub fn new(today: NaiveDate) -> Self {
        let start = today.and_hms_opt(20, 0, 0).unwrap_or_default();
        let end = today.and_hms_opt(23, 0, 0).unwrap_or_default();
        let picker = DateRangeState::new(start, end, true, today);
        let range = picker.compose();
        Self { picker, range }
    }
}

/// The whole model.
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Current simulated role; injected so tests can swap it.
    pub role: RoleContext,
    /// Page-scoped broadcast bus (banner -> pricing).
    pub bus: SignalBus,

    pub active_tab: DemoTab,
    pub notifications_open: bool,

    pub countdown: CountdownState,
    pub carousel: CarouselState,
    pub pricing: PricingState,

    pub overlay: Option<Overlay>,

    /// Last confirmed booking range, shown on the schedule view.
    pub booked_range: Option<(NaiveDateTime, NaiveDateTime)>,

    /// The apply form's decision field; the claim flow presets "accept".
    pub apply_decision_accept: bool,
    /// Simulated application was submitted this session.
    pub application_sent: bool,

    /// Active tip-button flash, if any.
    pub tip_flash: Option<(TipTarget, Instant)>,
}

impl AppState {
    pub fn new(settings: Settings, store: &mut dyn DeadlineStore, now: Instant) -> Self {
        let mut bus = SignalBus::new();
        let offer_ms = settings.demo.offer_hours as i64 * 60 * 60 * 1000;
        let mut countdown = CountdownState::with_duration(store, offer_ms);
        if !settings.demo.show_banner {
            countdown.dismiss();
        }
        let carousel = CarouselState::with_interval(
            clubdeck_core::fixtures::FEATURES.len(),
            Duration::from_millis(settings.demo.carousel_interval_ms),
            now,
        );
        let pricing = PricingState::new(&mut bus);
        let role = if settings.demo.start_as_guest {
            RoleContext::with_role(None)
        } else {
            match settings.demo.default_role {
                Some(role) => RoleContext::with_role(Some(role)),
                None => RoleContext::new(),
            }
        };

        Self {
            phase: AppPhase::Running,
            settings,
            role,
            bus,
            active_tab: DemoTab::Overview,
            notifications_open: false,
            countdown,
            carousel,
            pricing,
            overlay: None,
            booked_range: None,
            apply_decision_accept: false,
            application_sent: false,
            tip_flash: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// The booking dialog, when open.
    pub fn booking_mut(&mut self) -> Option<&mut BookingState> {
        match self.overlay.as_mut() {
            Some(Overlay::Booking(booking)) => Some(booking),
            None => None,
        }
    }

    pub fn booking(&self) -> Option<&BookingState> {
        match self.overlay.as_ref() {
            Some(Overlay::Booking(booking)) => Some(booking),
            None => None,
        }
    }

    /// Whether the tip flash for `target` is currently showing.
    pub fn tip_flashing(&self, target: TipTarget, now: Instant) -> bool {
        matches!(
            self.tip_flash,
            Some((t, at)) if t == target && now.duration_since(at) < TIP_FLASH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_core::{EphemeralDeadlineStore, Role};

    fn new_state() -> AppState {
        AppState::new(
            Settings::default(),
            &mut EphemeralDeadlineStore::new(),
            Instant::now(),
        )
    }

    #[test]
    fn test_fresh_state_defaults() {
        let state = new_state();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.active_tab, DemoTab::Overview);
        assert_eq!(state.role.current(), Some(Role::SuperAdmin));
        assert!(state.countdown.is_visible());
        assert!(!state.pricing.is_revealed());
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_config_default_role_respected() {
        let mut settings = Settings::default();
        settings.demo.default_role = Some(Role::Host);
        let state = AppState::new(settings, &mut EphemeralDeadlineStore::new(), Instant::now());
        assert_eq!(state.role.current(), Some(Role::Host));
    }

    #[test]
    fn test_start_as_guest_overrides_default_role() {
        let mut settings = Settings::default();
        settings.demo.default_role = Some(Role::Owner);
        settings.demo.start_as_guest = true;
        let state = AppState::new(settings, &mut EphemeralDeadlineStore::new(), Instant::now());
        assert!(state.role.is_guest());
    }

    #[test]
    fn test_banner_config_off() {
        let mut settings = Settings::default();
        settings.demo.show_banner = false;
        let state = AppState::new(settings, &mut EphemeralDeadlineStore::new(), Instant::now());
        assert!(!state.countdown.is_visible());
    }

    #[test]
    fn test_tip_flash_window() {
        let mut state = new_state();
        let now = Instant::now();
        state.tip_flash = Some((TipTarget::Dj, now));
        assert!(state.tip_flashing(TipTarget::Dj, now + Duration::from_secs(1)));
        assert!(!state.tip_flashing(TipTarget::Club, now + Duration::from_secs(1)));
        assert!(!state.tip_flashing(TipTarget::Dj, now + Duration::from_secs(3)));
    }

    #[test]
    fn test_booking_state_seeds_tonight() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
        let booking = BookingState::new(today);
        let (start, end) = booking.range.expect("seed composes");
        assert_eq!(start, today.and_hms_opt(20, 0, 0).unwrap());
        assert_eq!(end, today.and_hms_opt(23, 0, 0).unwrap());
        assert_eq!(booking.picker.duration_hours(), Some(3.0));
    }
}
