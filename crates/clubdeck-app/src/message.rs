//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::tabs::DemoTab;
use clubdeck_core::Role;

/// Which jar a simulated tip interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipTarget {
    Club,
    Dj,
    Host,
}

impl TipTarget {
    pub fn label(self) -> &'static str {
        match self {
            TipTarget::Club => "Tip Club",
            TipTarget::Dj => "Tip DJ",
            TipTarget::Host => "Tip Host",
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (timers, animations)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Shell Navigation
    // ─────────────────────────────────────────────────────────
    /// Move to the next sidebar tab
    NextTab,
    /// Move to the previous sidebar tab
    PrevTab,
    /// Jump directly to a tab
    SelectTab(DemoTab),
    /// Cycle the demo role toggle (includes guest)
    CycleRole,
    /// Set a specific role, `None` for guest
    SetRole(Option<Role>),
    /// Toggle the notifications dropdown
    ToggleNotifications,

    // ─────────────────────────────────────────────────────────
    // Countdown Banner
    // ─────────────────────────────────────────────────────────
    /// Claim the launch offer (jumps to pricing + broadcasts)
    ClaimOffer,
    /// Hide the banner for the rest of the session
    DismissBanner,

    // ─────────────────────────────────────────────────────────
    // Feature Carousel
    // ─────────────────────────────────────────────────────────
    /// Manual step forward
    CarouselNext,
    /// Manual step backward
    CarouselPrev,
    /// Dot click: jump straight to a slide
    CarouselGoTo(usize),
    /// Swipe release with the final horizontal offset
    CarouselSwipe(f32),
    /// Hover on/off equivalent: suspend or resume auto-advance
    CarouselTogglePause,

    // ─────────────────────────────────────────────────────────
    // Pricing Section
    // ─────────────────────────────────────────────────────────
    /// Reveal the discounted price (one-way)
    RevealPricing,
    /// Open/close the full feature breakdown overlay
    ToggleBreakdown,

    // ─────────────────────────────────────────────────────────
    // Booking Dialog (date range picker)
    // ─────────────────────────────────────────────────────────
    /// Open the new-event booking dialog (manager and above)
    OpenBooking,
    /// Move focus to the next wheel column
    BookingFocusNext,
    /// Move focus to the previous wheel column
    BookingFocusPrev,
    /// Scroll the focused wheel by a pixel delta
    BookingScroll(f32),
    /// Click directly on an item of the focused wheel
    BookingClick(usize),
    /// Accept the composed range and close the dialog
    ConfirmBooking,
    /// Close the topmost dialog/overlay without effect
    CloseOverlay,

    // ─────────────────────────────────────────────────────────
    // Dashboard Interactions
    // ─────────────────────────────────────────────────────────
    /// Simulated tip button; flashes a confirmation for a moment
    Tip(TipTarget),

    // ─────────────────────────────────────────────────────────
    // Apply Form
    // ─────────────────────────────────────────────────────────
    /// Simulated application submit (logged no-op)
    SubmitApplication,
}
