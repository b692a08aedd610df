//! Handler integration tests: drive update() with messages the way the
//! event loop does, feeding follow-up messages back in.

use std::time::{Duration, Instant};

use crate::carousel::AUTO_INTERVAL;
use crate::config::Settings;
use crate::countdown::CLAIM_FOLLOWUP_DELAY;
use crate::handler::update;
use crate::input_key::InputKey;
use crate::message::{Message, TipTarget};
use crate::state::AppState;
use crate::tabs::DemoTab;
use crate::wheel::SETTLE_DEBOUNCE;
use clubdeck_core::{EphemeralDeadlineStore, Role};

fn new_state(now: Instant) -> AppState {
    AppState::new(Settings::default(), &mut EphemeralDeadlineStore::new(), now)
}

/// Process a message plus any follow-ups, like the event loop does.
fn step(state: &mut AppState, message: Message, now: Instant) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        next = update(state, message, now).message;
    }
}

fn press(state: &mut AppState, key: InputKey, now: Instant) {
    step(state, Message::Key(key), now);
}

#[test]
fn test_quit_message() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::Quit, now);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_quits() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('q'), now);
    assert!(state.should_quit());
}

#[test]
fn test_tab_cycling_keys() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Tab, now);
    assert_eq!(state.active_tab, DemoTab::Dashboard);
    press(&mut state, InputKey::BackTab, now);
    assert_eq!(state.active_tab, DemoTab::Overview);
}

#[test]
fn test_digit_jumps_to_tab_outside_overview() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Dashboard), now);
    press(&mut state, InputKey::Char('9'), now);
    assert_eq!(state.active_tab, DemoTab::Logs);
}

#[test]
fn test_digit_on_overview_drives_carousel() {
    let now = Instant::now();
    let mut state = new_state(now);
    assert_eq!(state.active_tab, DemoTab::Overview);
    press(&mut state, InputKey::Char('4'), now);
    assert_eq!(state.active_tab, DemoTab::Overview); // not a tab jump
    assert_eq!(state.carousel.index(), 3);
}

#[test]
fn test_role_cycle_key() {
    let now = Instant::now();
    let mut state = new_state(now);
    assert_eq!(state.role.current(), Some(Role::SuperAdmin));
    press(&mut state, InputKey::Char('r'), now);
    assert_eq!(state.role.current(), Some(Role::Owner));
}

#[test]
fn test_guest_cannot_open_notifications() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SetRole(None), now);
    press(&mut state, InputKey::Char('n'), now);
    assert!(!state.notifications_open);
}

#[test]
fn test_notifications_toggle_and_close_on_role_switch() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('n'), now);
    assert!(state.notifications_open);
    step(&mut state, Message::CycleRole, now);
    assert!(!state.notifications_open);
}

#[test]
fn test_claim_flow_end_to_end() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Dashboard), now);

    // Claim: jumps to the pricing section and broadcasts
    press(&mut state, InputKey::Char('c'), now);
    assert_eq!(state.active_tab, DemoTab::Overview);
    assert!(!state.pricing.is_revealed());

    // Next tick drains the bus -> discount revealed
    step(&mut state, Message::Tick, now + Duration::from_millis(50));
    assert!(state.pricing.is_revealed());

    // After the follow-up delay: decision form focused, preset to accept
    assert!(!state.apply_decision_accept);
    step(&mut state, Message::Tick, now + CLAIM_FOLLOWUP_DELAY);
    assert!(state.apply_decision_accept);
    assert_eq!(state.active_tab, DemoTab::Apply);
}

#[test]
fn test_dismissed_banner_ignores_claim_key() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('x'), now);
    assert!(!state.countdown.is_visible());
    press(&mut state, InputKey::Char('c'), now);
    step(&mut state, Message::Tick, now + Duration::from_millis(50));
    assert!(!state.pricing.is_revealed());
    assert_eq!(state.active_tab, DemoTab::Overview);
}

#[test]
fn test_reveal_key_and_breakdown_independence() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('b'), now);
    assert!(state.pricing.breakdown_open());
    assert!(!state.pricing.is_revealed());

    // While the breakdown is open, only its close keys work
    press(&mut state, InputKey::Char('v'), now);
    assert!(!state.pricing.is_revealed());
    press(&mut state, InputKey::Esc, now);
    assert!(!state.pricing.breakdown_open());

    press(&mut state, InputKey::Char('v'), now);
    assert!(state.pricing.is_revealed());
}

#[test]
fn test_carousel_keys_reset_timer() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Right, now + Duration::from_secs(4));
    assert_eq!(state.carousel.index(), 1);
    // The original 5s deadline must not fire
    step(&mut state, Message::Tick, now + AUTO_INTERVAL);
    assert_eq!(state.carousel.index(), 1);
    // A full interval after the manual step it advances
    step(&mut state, Message::Tick, now + Duration::from_secs(9));
    assert_eq!(state.carousel.index(), 2);
}

#[test]
fn test_carousel_pause_key() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('p'), now);
    assert!(state.carousel.is_paused());
    step(&mut state, Message::Tick, now + Duration::from_secs(30));
    assert_eq!(state.carousel.index(), 0);
}

#[test]
fn test_booking_requires_manager() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Schedule), now);

    step(&mut state, Message::SetRole(Some(Role::Host)), now);
    press(&mut state, InputKey::Char('e'), now);
    assert!(state.overlay.is_none());

    step(&mut state, Message::SetRole(Some(Role::Manager)), now);
    press(&mut state, InputKey::Char('e'), now);
    assert!(state.booking().is_some());
}

#[test]
fn test_booking_scroll_settle_updates_range() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Events), now);
    press(&mut state, InputKey::Char('e'), now);

    // Focus the start hour wheel and scroll one row down: 20 -> 21
    press(&mut state, InputKey::Tab, now);
    press(&mut state, InputKey::Down, now);
    press(&mut state, InputKey::Down, now);
    step(&mut state, Message::Tick, now + SETTLE_DEBOUNCE);

    let booking = state.booking().expect("dialog open");
    let (start, _) = booking.range.expect("range composed");
    assert_eq!(chrono::Timelike::hour(&start), 21);
}

#[test]
fn test_booking_confirm_saves_range_and_closes() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Schedule), now);
    press(&mut state, InputKey::Char('e'), now);
    press(&mut state, InputKey::Enter, now);
    assert!(state.overlay.is_none());
    let (start, end) = state.booked_range.expect("range saved");
    assert!(end > start);
}

#[test]
fn test_booking_escape_discards() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Schedule), now);
    press(&mut state, InputKey::Char('e'), now);
    press(&mut state, InputKey::Esc, now);
    assert!(state.overlay.is_none());
    assert!(state.booked_range.is_none());
}

#[test]
fn test_tip_flash_and_expiry() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Dashboard), now);
    press(&mut state, InputKey::Char('d'), now);
    assert!(state.tip_flashing(TipTarget::Dj, now + Duration::from_secs(1)));
    step(&mut state, Message::Tick, now + Duration::from_secs(3));
    assert!(state.tip_flash.is_none());
}

#[test]
fn test_apply_submit() {
    let now = Instant::now();
    let mut state = new_state(now);
    step(&mut state, Message::SelectTab(DemoTab::Apply), now);
    press(&mut state, InputKey::Enter, now);
    assert!(state.application_sent);
}

#[test]
fn test_unmapped_key_is_ignored() {
    let now = Instant::now();
    let mut state = new_state(now);
    press(&mut state, InputKey::Char('!'), now);
    press(&mut state, InputKey::Delete, now);
    assert_eq!(state.active_tab, DemoTab::Overview);
    assert!(!state.should_quit());
}
