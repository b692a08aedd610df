//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::info;

use crate::countdown::CountdownEvent;
use crate::message::Message;
use crate::state::{AppState, BookingState, Overlay, TIP_FLASH};
use crate::tabs::DemoTab;
use clubdeck_core::Role;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
///
/// `now` is threaded through explicitly so every timer-driven transition is
/// reproducible in tests.
pub fn update(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => handle_tick(state, now),

        // ─────────────────────────────────────────────────────────
        // Shell Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.active_tab = state.active_tab.next();
            UpdateResult::none()
        }
        Message::PrevTab => {
            state.active_tab = state.active_tab.prev();
            UpdateResult::none()
        }
        Message::SelectTab(tab) => {
            state.active_tab = tab;
            UpdateResult::none()
        }
        Message::CycleRole => {
            state.role.cycle_demo_role();
            state.notifications_open = false;
            UpdateResult::none()
        }
        Message::SetRole(role) => {
            state.role.set_role(role);
            state.notifications_open = false;
            UpdateResult::none()
        }
        Message::ToggleNotifications => {
            // Guests have no bell to open
            if state.role.is_guest() {
                state.notifications_open = false;
            } else {
                state.notifications_open = !state.notifications_open;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Countdown Banner
        // ─────────────────────────────────────────────────────────
        Message::ClaimOffer => {
            if state.countdown.is_visible() {
                // Jump to the pricing section and broadcast the claim
                state.active_tab = DemoTab::Overview;
                let AppState {
                    ref mut countdown,
                    ref mut bus,
                    ..
                } = *state;
                countdown.claim(bus, now);
            }
            UpdateResult::none()
        }
        Message::DismissBanner => {
            state.countdown.dismiss();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Feature Carousel
        // ─────────────────────────────────────────────────────────
        Message::CarouselNext => {
            state.carousel.manual_next(now);
            UpdateResult::none()
        }
        Message::CarouselPrev => {
            state.carousel.manual_prev(now);
            UpdateResult::none()
        }
        Message::CarouselGoTo(index) => {
            state.carousel.go_to(index, now);
            UpdateResult::none()
        }
        Message::CarouselSwipe(offset_x) => {
            state.carousel.swipe(offset_x, now);
            UpdateResult::none()
        }
        Message::CarouselTogglePause => {
            state.carousel.toggle_paused(now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pricing Section
        // ─────────────────────────────────────────────────────────
        Message::RevealPricing => {
            state.pricing.reveal(now);
            UpdateResult::none()
        }
        Message::ToggleBreakdown => {
            state.pricing.toggle_breakdown();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Booking Dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenBooking => {
            // Creating events is a manager+ affordance
            if state.role.can(Role::Manager) && state.overlay.is_none() {
                state.overlay = Some(Overlay::Booking(BookingState::new(
                    clubdeck_core::fixtures::today(),
                )));
            }
            UpdateResult::none()
        }
        Message::BookingFocusNext => {
            if let Some(booking) = state.booking_mut() {
                booking.picker.focus_next();
            }
            UpdateResult::none()
        }
        Message::BookingFocusPrev => {
            if let Some(booking) = state.booking_mut() {
                booking.picker.focus_prev();
            }
            UpdateResult::none()
        }
        Message::BookingScroll(delta) => {
            if let Some(booking) = state.booking_mut() {
                booking.picker.scroll_focused(delta, now);
            }
            UpdateResult::none()
        }
        Message::BookingClick(index) => {
            if let Some(booking) = state.booking_mut() {
                if let Some(range) = booking.picker.click_focused(index, now) {
                    booking.range = Some(range);
                }
            }
            UpdateResult::none()
        }
        Message::ConfirmBooking => {
            if let Some(Overlay::Booking(booking)) = state.overlay.take() {
                state.booked_range = booking.picker.compose().or(booking.range);
                if let Some((start, end)) = state.booked_range {
                    info!("booked event slot {start} – {end}");
                }
            }
            UpdateResult::none()
        }
        Message::CloseOverlay => {
            state.overlay = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard Interactions
        // ─────────────────────────────────────────────────────────
        Message::Tip(target) => {
            state.tip_flash = Some((target, now));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Apply Form
        // ─────────────────────────────────────────────────────────
        Message::SubmitApplication => {
            // The real product posts to a hiring webhook; the demo only logs.
            state.application_sent = true;
            info!("demo application submitted (no-op)");
            UpdateResult::none()
        }
    }
}

/// Advance every owned timer by one tick.
fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    // Countdown follow-up: the delayed jump to the decision form
    if state.countdown.on_tick(now) == Some(CountdownEvent::FocusDecision) {
        state.apply_decision_accept = true;
        state.active_tab = DemoTab::Apply;
    }

    // Carousel auto-advance
    state.carousel.on_tick(now);

    // Pricing drains the broadcast bus
    let AppState {
        ref mut pricing,
        ref mut bus,
        ..
    } = *state;
    pricing.on_tick(bus, now);

    // Booking dialog wheels settle on their own clock
    if let Some(booking) = state.booking_mut() {
        if let Some(range) = booking.picker.on_tick(now) {
            booking.range = Some(range);
        }
    }

    // Tip flash expiry
    if let Some((_, at)) = state.tip_flash {
        if now.duration_since(at) >= TIP_FLASH {
            state.tip_flash = None;
        }
    }

    UpdateResult::none()
}
