//! Key event routing per UI context.
//!
//! Maps an [`InputKey`] plus the current state to a follow-up [`Message`].
//! Dialogs capture the keyboard while open; otherwise keys are global plus
//! a per-tab layer.

use crate::input_key::InputKey;
use crate::message::{Message, TipTarget};
use crate::state::{AppState, Overlay};
use crate::tabs::DemoTab;
use crate::wheel::DEFAULT_ITEM_HEIGHT;

/// Scroll delta for one arrow press on a wheel column: half a row, so
/// settling exercises the nearest-index rounding.
const WHEEL_STEP: f32 = DEFAULT_ITEM_HEIGHT / 2.0;

/// Page step: three rows at once.
const WHEEL_PAGE: f32 = DEFAULT_ITEM_HEIGHT * 3.0;

/// Route a key press. Returns `None` for keys with no meaning here.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // The booking dialog owns the keyboard while open
    if matches!(state.overlay, Some(Overlay::Booking(_))) {
        return booking_keys(key);
    }

    // The breakdown overlay only listens for its close keys
    if state.pricing.breakdown_open() {
        return match key {
            InputKey::Esc | InputKey::Char('b') | InputKey::Char('q') => {
                Some(Message::ToggleBreakdown)
            }
            _ => None,
        };
    }

    // Notifications dropdown closes on Esc or its own toggle
    if state.notifications_open {
        if matches!(key, InputKey::Esc | InputKey::Char('n')) {
            return Some(Message::ToggleNotifications);
        }
    }

    global_keys(state, key)
}

fn booking_keys(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter => Some(Message::ConfirmBooking),
        InputKey::Tab | InputKey::Right => Some(Message::BookingFocusNext),
        InputKey::BackTab | InputKey::Left => Some(Message::BookingFocusPrev),
        InputKey::Up => Some(Message::BookingScroll(-WHEEL_STEP)),
        InputKey::Down => Some(Message::BookingScroll(WHEEL_STEP)),
        InputKey::PageUp => Some(Message::BookingScroll(-WHEEL_PAGE)),
        InputKey::PageDown => Some(Message::BookingScroll(WHEEL_PAGE)),
        InputKey::Home => Some(Message::BookingClick(0)),
        InputKey::End => Some(Message::BookingClick(usize::MAX)),
        _ => None,
    }
}

fn global_keys(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PrevTab),
        InputKey::Char('r') => Some(Message::CycleRole),
        InputKey::Char('n') => Some(Message::ToggleNotifications),
        InputKey::Char('c') if state.countdown.is_visible() => Some(Message::ClaimOffer),
        InputKey::Char('x') if state.countdown.is_visible() => Some(Message::DismissBanner),
        _ => tab_keys(state, key),
    }
}

fn tab_keys(state: &AppState, key: InputKey) -> Option<Message> {
    match state.active_tab {
        DemoTab::Overview => match key {
            InputKey::Left => Some(Message::CarouselPrev),
            InputKey::Right => Some(Message::CarouselNext),
            InputKey::Char('p') => Some(Message::CarouselTogglePause),
            InputKey::Char('v') => Some(Message::RevealPricing),
            InputKey::Char('b') => Some(Message::ToggleBreakdown),
            InputKey::Char(c @ '1'..='9') => {
                Some(Message::CarouselGoTo(c as usize - '1' as usize))
            }
            _ => None,
        },
        DemoTab::Dashboard => match key {
            InputKey::Char('z') => Some(Message::Tip(TipTarget::Club)),
            InputKey::Char('d') => Some(Message::Tip(TipTarget::Dj)),
            InputKey::Char('s') => Some(Message::Tip(TipTarget::Host)),
            _ => digit_tab(key),
        },
        DemoTab::Schedule | DemoTab::Events => match key {
            InputKey::Char('e') => Some(Message::OpenBooking),
            _ => digit_tab(key),
        },
        DemoTab::Apply => match key {
            InputKey::Enter => Some(Message::SubmitApplication),
            _ => digit_tab(key),
        },
        _ => digit_tab(key),
    }
}

/// Digits jump straight to a tab everywhere except the Overview carousel.
fn digit_tab(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c @ '1'..='9') => {
            DemoTab::from_index(c as usize - '1' as usize).map(Message::SelectTab)
        }
        InputKey::Left => Some(Message::PrevTab),
        InputKey::Right => Some(Message::NextTab),
        _ => None,
    }
}
