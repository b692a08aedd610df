//! Launch-offer countdown banner state.
//!
//! The deadline is created once per terminal session through a
//! [`DeadlineStore`] and never recomputed, so relaunching within the same
//! session resumes the same countdown. Claiming broadcasts
//! [`Signal::ClaimDiscount`] for the pricing section and, after a short
//! delay, pre-fills the apply form's decision field — the two-step flow the
//! banner's call-to-action performs.

use std::time::{Duration, Instant};

use clubdeck_core::{DeadlineStore, Signal, SignalBus};

/// Offer window: 72 hours.
pub const OFFER_DURATION_MS: i64 = 72 * 60 * 60 * 1000;

/// Delay between claiming and the follow-up jump to the decision form.
pub const CLAIM_FOLLOWUP_DELAY: Duration = Duration::from_millis(1800);

/// What the banner asks the shell to do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// The post-claim delay elapsed: focus the decision form, preset to
    /// "accept".
    FocusDecision,
}

#[derive(Debug)]
pub struct CountdownState {
    deadline_ms: i64,
    visible: bool,
    claim_followup_at: Option<Instant>,
}

impl CountdownState {
    /// Read or create the 72-hour deadline from the store.
    pub fn new(store: &mut dyn DeadlineStore) -> Self {
        Self::with_duration(store, OFFER_DURATION_MS)
    }

    pub fn with_duration(store: &mut dyn DeadlineStore, duration_ms: i64) -> Self {
        Self {
            deadline_ms: store.get_or_create(duration_ms),
            visible: true,
            claim_followup_at: None,
        }
    }

    /// Deadline as epoch milliseconds. Immutable once created.
    pub fn deadline_ms(&self) -> i64 {
        self.deadline_ms
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Remaining time at `now_ms`, clamped at zero.
    pub fn remaining_ms_at(&self, now_ms: i64) -> i64 {
        (self.deadline_ms - now_ms).max(0)
    }

    /// Remaining time as (hours, minutes, seconds).
    pub fn hms_at(&self, now_ms: i64) -> (i64, i64, i64) {
        let total_secs = self.remaining_ms_at(now_ms) / 1000;
        (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60)
    }

    /// Zero-padded `HH:MM:SS` display string.
    pub fn format_hms(&self, now_ms: i64) -> String {
        let (h, m, s) = self.hms_at(now_ms);
        format!("{h:02}:{m:02}:{s:02}")
    }

    /// Hide the banner for the rest of the session. Memory only; a reload
    /// brings it back.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Claim the offer: broadcast to the pricing section and arm the
    /// delayed jump to the decision form.
    pub fn claim(&mut self, bus: &mut SignalBus, now: Instant) {
        bus.publish(Signal::ClaimDiscount);
        self.claim_followup_at = Some(now + CLAIM_FOLLOWUP_DELAY);
    }

    /// Advance timers; at most one event per call.
    pub fn on_tick(&mut self, now: Instant) -> Option<CountdownEvent> {
        if let Some(at) = self.claim_followup_at {
            if now >= at {
                self.claim_followup_at = None;
                return Some(CountdownEvent::FocusDecision);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck_core::EphemeralDeadlineStore;

    fn state() -> CountdownState {
        CountdownState::new(&mut EphemeralDeadlineStore::new())
    }

    #[test]
    fn test_remaining_decreases_monotonically_and_clamps() {
        let countdown = state();
        let deadline = countdown.deadline_ms();
        let t1 = deadline - 10_000;
        let t2 = deadline - 3_000;
        assert!(countdown.remaining_ms_at(t1) > countdown.remaining_ms_at(t2));
        assert!(countdown.remaining_ms_at(t2) > 0);
        // At and past the deadline, remaining is exactly zero
        assert_eq!(countdown.remaining_ms_at(deadline), 0);
        assert_eq!(countdown.remaining_ms_at(deadline + 5_000), 0);
        assert_eq!(countdown.hms_at(deadline + 5_000), (0, 0, 0));
    }

    #[test]
    fn test_hms_formatting() {
        let countdown = state();
        let deadline = countdown.deadline_ms();
        // 71:59:59 one second after creation of a fresh 72h window
        let now = deadline - (71 * 3600 + 59 * 60 + 59) * 1000;
        assert_eq!(countdown.format_hms(now), "71:59:59");
        assert_eq!(countdown.format_hms(deadline), "00:00:00");
        assert_eq!(countdown.format_hms(deadline - 61_000), "00:01:01");
    }

    #[test]
    fn test_deadline_stable_across_reads_from_same_store() {
        let mut store = EphemeralDeadlineStore::new();
        let first = CountdownState::new(&mut store);
        let second = CountdownState::new(&mut store);
        assert_eq!(first.deadline_ms(), second.deadline_ms());
    }

    #[test]
    fn test_fresh_store_yields_fresh_deadline() {
        let first = CountdownState::with_duration(&mut EphemeralDeadlineStore::new(), 1000);
        let second =
            CountdownState::with_duration(&mut EphemeralDeadlineStore::new(), OFFER_DURATION_MS);
        assert!(second.deadline_ms() > first.deadline_ms());
    }

    #[test]
    fn test_claim_broadcasts_and_schedules_followup() {
        let mut bus = SignalBus::new();
        let sub = bus.subscribe();
        let mut countdown = state();
        let now = Instant::now();

        countdown.claim(&mut bus, now);
        assert_eq!(bus.drain(sub), vec![Signal::ClaimDiscount]);

        assert_eq!(countdown.on_tick(now + Duration::from_millis(500)), None);
        assert_eq!(
            countdown.on_tick(now + CLAIM_FOLLOWUP_DELAY),
            Some(CountdownEvent::FocusDecision)
        );
        // Fires exactly once
        assert_eq!(
            countdown.on_tick(now + CLAIM_FOLLOWUP_DELAY + Duration::from_secs(1)),
            None
        );
    }

    #[test]
    fn test_dismiss_is_memory_only() {
        let mut countdown = state();
        assert!(countdown.is_visible());
        countdown.dismiss();
        assert!(!countdown.is_visible());
        // A "reload" (fresh state from the same store) shows it again
        let mut store = EphemeralDeadlineStore::new();
        let _ = CountdownState::new(&mut store);
        let reloaded = CountdownState::new(&mut store);
        assert!(reloaded.is_visible());
    }
}
