//! Wheel picker scroll state machine.
//!
//! A single scrollable column of labeled values, one of which is committed
//! (centered). Users pick a value either by scrolling-and-settling or by
//! clicking an item directly; the parent can also push a value in from
//! outside.
//!
//! The scroll protocol is an explicit state machine rather than a pair of
//! mutable flags, so click-driven and scroll-driven updates cannot race:
//!
//! ```text
//!              scroll                    settle debounce elapses
//!   Idle ────────────────► UserScrolling ───────────────────────► Settling
//!    ▲  ▲                      ▲    │ scroll (re-arms debounce)      │
//!    │  │                      └────┘                                │
//!    │  │                      ▲                                     │
//!    │  │        scroll mid-snap│                                    │
//!    │  └────────────────────── ┴────────────────────────────────────┘
//!    │            animation window elapses (snaps to committed)
//!    └─────────────────── ProgrammaticScroll ◄── click / external set_value
//! ```
//!
//! Invariant: after any settle window the offset sits exactly on the
//! committed item's position. The change callback (the `Option<String>`
//! returned from [`WheelState::on_tick`] / [`WheelState::click`]) fires at
//! most once per commit and only when the value actually changed.

use std::time::{Duration, Instant};

/// Quiet period after the last scroll event before the wheel settles.
pub const SETTLE_DEBOUNCE: Duration = Duration::from_millis(80);

/// Duration of the snap animation after a settle.
pub const SNAP_ANIMATION: Duration = Duration::from_millis(200);

/// Duration of the smooth scroll triggered by clicks and external updates.
pub const PROGRAMMATIC_ANIMATION: Duration = Duration::from_millis(300);

/// Default row height in virtual pixels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 32.0;

/// A selectable (label, value) pair. Values are unique within one wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelItem {
    pub label: String,
    pub value: String,
}

impl WheelItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Item whose label doubles as its value.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

/// Named scroll phases; each transition owns its own timer deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// At rest on the committed item.
    Idle,
    /// The user is actively scrolling; external updates are suppressed.
    UserScrolling,
    /// A scripted scroll (click or external set) is in flight.
    ProgrammaticScroll,
    /// Post-settle snap animation; still counts as user interaction.
    Settling,
}

/// One scroll-snapping value column.
#[derive(Debug, Clone)]
pub struct WheelState {
    items: Vec<WheelItem>,
    item_height: f32,
    /// Scroll offset in virtual pixels; `index * item_height` when at rest.
    offset: f32,
    /// Last committed value. May name a value outside `items` if the seed
    /// or an external update did; the wheel simply stays where it is then.
    committed: Option<String>,
    phase: ScrollPhase,
    /// Settle deadline while `UserScrolling`, animation end otherwise.
    phase_until: Option<Instant>,
}

impl WheelState {
    /// Build a wheel positioned synchronously (no animation) on `value`.
    pub fn new(items: Vec<WheelItem>, value: impl Into<String>) -> Self {
        Self::with_item_height(items, value, DEFAULT_ITEM_HEIGHT)
    }

    pub fn with_item_height(
        items: Vec<WheelItem>,
        value: impl Into<String>,
        item_height: f32,
    ) -> Self {
        let value = value.into();
        let offset = items
            .iter()
            .position(|i| i.value == value)
            .map(|idx| idx as f32 * item_height)
            .unwrap_or(0.0);
        Self {
            items,
            item_height,
            offset,
            committed: Some(value),
            phase: ScrollPhase::Idle,
            phase_until: None,
        }
    }

    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// The last committed value.
    pub fn committed_value(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Index nearest the current scroll offset, clamped into range.
    pub fn nearest_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let raw = (self.offset / self.item_height).round();
        (raw.max(0.0) as usize).min(self.items.len() - 1)
    }

    fn max_offset(&self) -> f32 {
        if self.items.is_empty() {
            0.0
        } else {
            (self.items.len() - 1) as f32 * self.item_height
        }
    }

    fn is_interacting(&self) -> bool {
        matches!(
            self.phase,
            ScrollPhase::UserScrolling | ScrollPhase::Settling
        )
    }

    /// External (parent-driven) value update.
    ///
    /// Ignored while the user is interacting, and when the value equals the
    /// last committed one (prevents redundant animation). Otherwise commits
    /// immediately and smooth-scrolls to the new position.
    pub fn set_value(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        if self.is_interacting() {
            return;
        }
        if self.committed.as_deref() == Some(value.as_str()) {
            return;
        }
        self.committed = Some(value.clone());
        if let Some(idx) = self.items.iter().position(|i| i.value == value) {
            self.offset = idx as f32 * self.item_height;
            self.phase = ScrollPhase::ProgrammaticScroll;
            self.phase_until = Some(now + PROGRAMMATIC_ANIMATION);
        }
    }

    /// A user scroll event moving the offset by `delta` pixels.
    ///
    /// During a programmatic animation the delta still moves the viewport
    /// but does not flip the wheel into user control; the animation-end snap
    /// realigns it. Rubber-banding past either end is clamped.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        match self.phase {
            ScrollPhase::ProgrammaticScroll => {}
            ScrollPhase::Idle | ScrollPhase::UserScrolling | ScrollPhase::Settling => {
                self.phase = ScrollPhase::UserScrolling;
                self.phase_until = Some(now + SETTLE_DEBOUNCE);
            }
        }
    }

    /// Direct click on an item: smooth-scroll there and commit.
    ///
    /// Returns the newly committed value when it differs from the previous
    /// commit (the change callback), `None` otherwise.
    pub fn click(&mut self, index: usize, now: Instant) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let index = index.min(self.items.len() - 1);
        self.offset = index as f32 * self.item_height;
        self.phase = ScrollPhase::ProgrammaticScroll;
        self.phase_until = Some(now + PROGRAMMATIC_ANIMATION);

        let value = self.items[index].value.clone();
        if self.committed.as_deref() != Some(value.as_str()) {
            self.committed = Some(value.clone());
            Some(value)
        } else {
            None
        }
    }

    /// Advance timers. Returns the newly committed value when a settle
    /// commits a change (the change callback), `None` otherwise.
    pub fn on_tick(&mut self, now: Instant) -> Option<String> {
        let Some(until) = self.phase_until else {
            return None;
        };
        if now < until {
            return None;
        }
        match self.phase {
            ScrollPhase::Idle => {
                self.phase_until = None;
                None
            }
            ScrollPhase::UserScrolling => {
                // Settle: snap to the nearest item, commit once if changed.
                let idx = self.nearest_index();
                self.offset = idx as f32 * self.item_height;
                self.phase = ScrollPhase::Settling;
                self.phase_until = Some(now + SNAP_ANIMATION);

                let value = match self.items.get(idx) {
                    Some(item) => item.value.clone(),
                    None => return None,
                };
                if self.committed.as_deref() != Some(value.as_str()) {
                    self.committed = Some(value.clone());
                    Some(value)
                } else {
                    None
                }
            }
            ScrollPhase::Settling => {
                self.phase = ScrollPhase::Idle;
                self.phase_until = None;
                None
            }
            ScrollPhase::ProgrammaticScroll => {
                // Animation over: realign on the committed item in case
                // scroll events drifted the viewport mid-flight.
                if let Some(committed) = self.committed.as_deref() {
                    if let Some(idx) = self.items.iter().position(|i| i.value == committed) {
                        self.offset = idx as f32 * self.item_height;
                    }
                }
                self.phase = ScrollPhase::Idle;
                self.phase_until = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<WheelItem> {
        (0..n)
            .map(|i| match i {
                0 => WheelItem::new("Today", "v0"),
                1 => WheelItem::new("Tomorrow", "v1"),
                _ => WheelItem::new(format!("Jan {}", i + 13), format!("v{i}")),
            })
            .collect()
    }

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_mount_positions_synchronously_on_value() {
        // 60 entries, item height 32, initialized to "Tomorrow"
        let wheel = WheelState::new(items(60), "v1");
        assert_eq!(wheel.offset(), 32.0);
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
        assert_eq!(wheel.committed_value(), Some("v1"));
    }

    #[test]
    fn test_click_commits_and_settles_exactly() {
        let mut wheel = WheelState::new(items(60), "v1");
        let now = t0();
        let changed = wheel.click(5, now);
        assert_eq!(changed.as_deref(), Some("v5"));
        assert_eq!(wheel.offset(), 32.0 * 5.0);
        assert_eq!(wheel.phase(), ScrollPhase::ProgrammaticScroll);

        // Animation ends, wheel returns to rest on the same spot
        assert_eq!(wheel.on_tick(now + PROGRAMMATIC_ANIMATION), None);
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
        assert_eq!(wheel.offset(), 160.0);
    }

    #[test]
    fn test_click_same_value_fires_no_callback() {
        let mut wheel = WheelState::new(items(10), "v3");
        assert_eq!(wheel.click(3, t0()), None);
    }

    #[test]
    fn test_click_index_clamped() {
        let mut wheel = WheelState::new(items(4), "v0");
        let changed = wheel.click(99, t0());
        assert_eq!(changed.as_deref(), Some("v3"));
        assert_eq!(wheel.offset(), 3.0 * 32.0);
    }

    #[test]
    fn test_scroll_settle_commits_once() {
        let mut wheel = WheelState::new(items(10), "v1");
        let now = t0();
        wheel.scroll_by(40.0, now); // 32 -> 72, nearest index 2
        assert_eq!(wheel.phase(), ScrollPhase::UserScrolling);

        // Nothing commits before the debounce elapses
        assert_eq!(wheel.on_tick(now + Duration::from_millis(40)), None);
        assert_eq!(wheel.phase(), ScrollPhase::UserScrolling);

        let committed = wheel.on_tick(now + SETTLE_DEBOUNCE);
        assert_eq!(committed.as_deref(), Some("v2"));
        assert_eq!(wheel.offset(), 64.0);
        assert_eq!(wheel.phase(), ScrollPhase::Settling);

        // Snap animation clears back to Idle without re-firing
        assert_eq!(
            wheel.on_tick(now + SETTLE_DEBOUNCE + SNAP_ANIMATION),
            None
        );
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_settle_on_committed_offset_is_idempotent() {
        let mut wheel = WheelState::new(items(10), "v2");
        let now = t0();
        // Wander off and back to exactly the committed offset
        wheel.scroll_by(10.0, now);
        wheel.scroll_by(-10.0, now + Duration::from_millis(10));
        let committed = wheel.on_tick(now + Duration::from_millis(10) + SETTLE_DEBOUNCE);
        assert_eq!(committed, None, "unchanged value must not re-fire");
        assert_eq!(wheel.offset(), 64.0);
    }

    #[test]
    fn test_scroll_rearms_debounce() {
        let mut wheel = WheelState::new(items(10), "v1");
        let now = t0();
        wheel.scroll_by(16.0, now);
        // A second event 60ms later pushes the settle out
        wheel.scroll_by(16.0, now + Duration::from_millis(60));
        assert_eq!(wheel.on_tick(now + SETTLE_DEBOUNCE), None);
        let committed = wheel.on_tick(now + Duration::from_millis(60) + SETTLE_DEBOUNCE);
        assert_eq!(committed.as_deref(), Some("v2"));
    }

    #[test]
    fn test_overscroll_clamps() {
        let mut wheel = WheelState::new(items(4), "v1");
        let now = t0();
        wheel.scroll_by(-1000.0, now);
        assert_eq!(wheel.offset(), 0.0);
        wheel.scroll_by(100_000.0, now);
        assert_eq!(wheel.offset(), 3.0 * 32.0);
        assert_eq!(wheel.nearest_index(), 3);
    }

    #[test]
    fn test_round_trip_every_value() {
        let list = items(8);
        for target in &list {
            let mut wheel = WheelState::new(list.clone(), "v0");
            let now = t0();
            wheel.set_value(&target.value, now);
            wheel.on_tick(now + PROGRAMMATIC_ANIMATION);
            assert_eq!(wheel.committed_value(), Some(target.value.as_str()));
            let idx = list.iter().position(|i| i.value == target.value).unwrap();
            assert_eq!(wheel.offset(), idx as f32 * 32.0);
            assert_eq!(wheel.phase(), ScrollPhase::Idle);
        }
    }

    #[test]
    fn test_external_update_ignored_while_user_scrolls() {
        let mut wheel = WheelState::new(items(10), "v1");
        let now = t0();
        wheel.scroll_by(8.0, now);
        wheel.set_value("v7", now);
        assert_eq!(wheel.committed_value(), Some("v1"));
        assert_eq!(wheel.phase(), ScrollPhase::UserScrolling);
        // The user's own settle wins
        let committed = wheel.on_tick(now + SETTLE_DEBOUNCE);
        assert_eq!(committed, None); // 40px rounds back to index 1
        assert_eq!(wheel.offset(), 32.0);
    }

    #[test]
    fn test_external_update_equal_value_is_noop() {
        let mut wheel = WheelState::new(items(10), "v1");
        wheel.set_value("v1", t0());
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_external_update_unknown_value_keeps_offset() {
        let mut wheel = WheelState::new(items(10), "v1");
        wheel.set_value("nonexistent", t0());
        assert_eq!(wheel.committed_value(), Some("nonexistent"));
        assert_eq!(wheel.offset(), 32.0);
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_scroll_during_programmatic_realigns_at_animation_end() {
        let mut wheel = WheelState::new(items(10), "v1");
        let now = t0();
        wheel.click(5, now);
        // A stray scroll event mid-animation drifts the viewport
        wheel.scroll_by(13.0, now + Duration::from_millis(50));
        assert_eq!(wheel.phase(), ScrollPhase::ProgrammaticScroll);
        wheel.on_tick(now + PROGRAMMATIC_ANIMATION);
        // Animation end snaps back onto the committed item
        assert_eq!(wheel.offset(), 160.0);
        assert_eq!(wheel.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_scroll_during_settle_returns_control_to_user() {
        let mut wheel = WheelState::new(items(10), "v1");
        let now = t0();
        wheel.scroll_by(40.0, now);
        wheel.on_tick(now + SETTLE_DEBOUNCE); // commits v2, Settling
        wheel.scroll_by(30.0, now + SETTLE_DEBOUNCE + Duration::from_millis(10));
        assert_eq!(wheel.phase(), ScrollPhase::UserScrolling);
        let committed =
            wheel.on_tick(now + SETTLE_DEBOUNCE + Duration::from_millis(10) + SETTLE_DEBOUNCE);
        assert_eq!(committed.as_deref(), Some("v3")); // 94px rounds to 3
    }

    #[test]
    fn test_empty_wheel_is_inert() {
        let mut wheel = WheelState::new(Vec::new(), "anything");
        let now = t0();
        wheel.scroll_by(100.0, now);
        assert_eq!(wheel.offset(), 0.0);
        assert_eq!(wheel.click(0, now), None);
        assert_eq!(wheel.on_tick(now + SETTLE_DEBOUNCE), None);
        assert_eq!(wheel.nearest_index(), 0);
    }
}
