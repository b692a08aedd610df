//! Pricing disclosure state machine.
//!
//! The discount starts hidden and reveals one-way: once revealed it never
//! returns to hidden within the session. Reveal is triggered either by the
//! user directly or by the banner's claim broadcast — both idempotent. An
//! independent boolean opens the full feature-breakdown overlay; it does
//! not touch the reveal latch.

use std::time::{Duration, Instant};

use clubdeck_core::{Signal, SignalBus, SubscriptionId};

/// Visual staging of the reveal animation. Sequencing only — the latch
/// itself is just `revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Hidden,
    /// Original price strikes through.
    Striking,
    /// Struck price fades back.
    Fading,
    /// Discounted price and badge are in.
    Discounted,
}

const STRIKE_WINDOW: Duration = Duration::from_millis(400);
const FADE_WINDOW: Duration = Duration::from_millis(900);

#[derive(Debug)]
pub struct PricingState {
    revealed_at: Option<Instant>,
    breakdown_open: bool,
    subscription: SubscriptionId,
}

impl PricingState {
    /// Subscribes to the broadcast bus on construction; pair with
    /// [`teardown`] when the component unmounts.
    ///
    /// [`teardown`]: PricingState::teardown
    pub fn new(bus: &mut SignalBus) -> Self {
        Self {
            revealed_at: None,
            breakdown_open: false,
            subscription: bus.subscribe(),
        }
    }

    pub fn teardown(&self, bus: &mut SignalBus) {
        bus.unsubscribe(self.subscription);
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn breakdown_open(&self) -> bool {
        self.breakdown_open
    }

    /// One-way reveal. Re-triggering while revealed is a no-op, so entry
    /// animations never replay.
    pub fn reveal(&mut self, now: Instant) {
        if self.revealed_at.is_none() {
            self.revealed_at = Some(now);
            tracing::debug!("pricing discount revealed");
        }
    }

    pub fn open_breakdown(&mut self) {
        self.breakdown_open = true;
    }

    pub fn close_breakdown(&mut self) {
        self.breakdown_open = false;
    }

    pub fn toggle_breakdown(&mut self) {
        self.breakdown_open = !self.breakdown_open;
    }

    /// Drain the bus; any pending claim broadcast reveals the discount.
    pub fn on_tick(&mut self, bus: &mut SignalBus, now: Instant) {
        for signal in bus.drain(self.subscription) {
            match signal {
                Signal::ClaimDiscount => self.reveal(now),
            }
        }
    }

    /// Animation stage for rendering.
    pub fn stage(&self, now: Instant) -> RevealStage {
        match self.revealed_at {
            None => RevealStage::Hidden,
            Some(at) => {
                let elapsed = now.duration_since(at);
                if elapsed < STRIKE_WINDOW {
                    RevealStage::Striking
                } else if elapsed < FADE_WINDOW {
                    RevealStage::Fading
                } else {
                    RevealStage::Discounted
                }
            }
        }
    }
}
