//! Start/end datetime selection composed from six wheel pickers.
//!
//! Seeded once from two datetimes at construction and never re-synced from
//! the parent afterwards — the wheels are uncontrolled after the seed. This
//! one-time-initialization contract is deliberate: re-syncing from a
//! controlled parent re-creates the circular update loop between
//! parent-driven and wheel-driven changes.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::wheel::{WheelItem, WheelState};

/// Number of day options offered, starting today.
pub const DAY_SPAN: usize = 60;

/// Minutes snap to this grid.
pub const MINUTE_STEP: u32 = 15;

/// One of the six sub-pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelSlot {
    StartDay,
    StartHour,
    StartMinute,
    EndDay,
    EndHour,
    EndMinute,
}

impl WheelSlot {
    const RANGE: [WheelSlot; 6] = [
        WheelSlot::StartDay,
        WheelSlot::StartHour,
        WheelSlot::StartMinute,
        WheelSlot::EndDay,
        WheelSlot::EndHour,
        WheelSlot::EndMinute,
    ];

    /// Slots active for the given mode, in focus order.
    pub fn all(is_range: bool) -> &'static [WheelSlot] {
        if is_range {
            &Self::RANGE
        } else {
            &Self::RANGE[..3]
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WheelSlot::StartDay => "Start day",
            WheelSlot::StartHour => "Start hour",
            WheelSlot::StartMinute => "Start min",
            WheelSlot::EndDay => "End day",
            WheelSlot::EndHour => "End hour",
            WheelSlot::EndMinute => "End min",
        }
    }
}

/// Day options for the next `days` days: "Today", "Tomorrow", then
/// weekday/month labels, with ISO dates as values.
pub fn day_options(today: NaiveDate, days: usize) -> Vec<WheelItem> {
    (0..days)
        .map(|i| {
            let date = today + Duration::days(i as i64);
            let label = match i {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => date.format("%a, %b %-d").to_string(),
            };
            WheelItem::new(label, date.format("%Y-%m-%d").to_string())
        })
        .collect()
}

fn hour_options() -> Vec<WheelItem> {
    (0..24).map(|h| WheelItem::plain(format!("{h:02}"))).collect()
}

fn minute_options() -> Vec<WheelItem> {
    (0..60)
        .step_by(MINUTE_STEP as usize)
        .map(|m| WheelItem::plain(format!("{m:02}")))
        .collect()
}

/// Round to the nearest allowed minute, wrapping at 60 (58 → 00).
pub fn snap_minute(minute: u32) -> u32 {
    let step = MINUTE_STEP as f64;
    ((minute as f64 / step).round() as u32 * MINUTE_STEP) % 60
}

/// The composed six-wheel picker.
#[derive(Debug, Clone)]
pub struct DateRangeState {
    start_day: WheelState,
    start_hour: WheelState,
    start_minute: WheelState,
    end_day: WheelState,
    end_hour: WheelState,
    end_minute: WheelState,
    is_range: bool,
    focus: usize,
}

impl DateRangeState {
    /// Seed from two datetimes. `today` anchors the day options so tests
    /// can pin the calendar.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, is_range: bool, today: NaiveDate) -> Self {
        let days = day_options(today, DAY_SPAN);
        let seed_day = |dt: NaiveDateTime| dt.date().format("%Y-%m-%d").to_string();
        let seed_hour = |dt: NaiveDateTime| format!("{:02}", dt.hour());
        let seed_minute = |dt: NaiveDateTime| format!("{:02}", snap_minute(dt.minute()));

        Self {
            start_day: WheelState::new(days.clone(), seed_day(start)),
            start_hour: WheelState::new(hour_options(), seed_hour(start)),
            start_minute: WheelState::new(minute_options(), seed_minute(start)),
            end_day: WheelState::new(days, seed_day(end)),
            end_hour: WheelState::new(hour_options(), seed_hour(end)),
            end_minute: WheelState::new(minute_options(), seed_minute(end)),
            is_range,
            focus: 0,
        }
    }

    pub fn is_range(&self) -> bool {
        self.is_range
    }

    pub fn focused(&self) -> WheelSlot {
        WheelSlot::all(self.is_range)[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % WheelSlot::all(self.is_range).len();
    }

    pub fn focus_prev(&mut self) {
        let len = WheelSlot::all(self.is_range).len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn wheel(&self, slot: WheelSlot) -> &WheelState {
        match slot {
            WheelSlot::StartDay => &self.start_day,
            WheelSlot::StartHour => &self.start_hour,
            WheelSlot::StartMinute => &self.start_minute,
            WheelSlot::EndDay => &self.end_day,
            WheelSlot::EndHour => &self.end_hour,
            WheelSlot::EndMinute => &self.end_minute,
        }
    }

    fn wheel_mut(&mut self, slot: WheelSlot) -> &mut WheelState {
        match slot {
            WheelSlot::StartDay => &mut self.start_day,
            WheelSlot::StartHour => &mut self.start_hour,
            WheelSlot::StartMinute => &mut self.start_minute,
            WheelSlot::EndDay => &mut self.end_day,
            WheelSlot::EndHour => &mut self.end_hour,
            WheelSlot::EndMinute => &mut self.end_minute,
        }
    }

    /// Scroll the focused wheel by `delta` pixels.
    pub fn scroll_focused(&mut self, delta: f32, now: std::time::Instant) {
        let slot = self.focused();
        self.wheel_mut(slot).scroll_by(delta, now);
    }

    /// Click an item on the focused wheel. Returns the recomposed range
    /// when the commit produced a valid pair of datetimes.
    pub fn click_focused(
        &mut self,
        index: usize,
        now: std::time::Instant,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let slot = self.focused();
        let changed = self.wheel_mut(slot).click(index, now);
        match changed {
            Some(value) => self.apply_commit(slot, &value, now),
            None => None,
        }
    }

    /// Advance all six wheels' timers; settles produce commits. Returns the
    /// recomposed range when any commit landed and both datetimes are valid.
    pub fn on_tick(&mut self, now: std::time::Instant) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut result = None;
        for &slot in WheelSlot::all(self.is_range) {
            if let Some(value) = self.wheel_mut(slot).on_tick(now) {
                result = self.apply_commit(slot, &value, now).or(result);
            }
        }
        result
    }

    /// Cross-field rule plus recomposition after one sub-picker committed.
    fn apply_commit(
        &mut self,
        slot: WheelSlot,
        value: &str,
        now: std::time::Instant,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if slot == WheelSlot::StartDay {
            // ISO dates compare lexicographically; advance the end day when
            // it would precede the new start day, leave it otherwise.
            let end_day = self.end_day.committed_value().unwrap_or_default();
            if end_day < value {
                self.end_day.set_value(value.to_string(), now);
            }
        }
        self.compose()
    }

    /// Build both datetimes from the six committed values. `None` (no
    /// callback, no error) when anything fails to parse — composition is
    /// expected to always succeed, this is defensive only.
    pub fn compose(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = compose_one(&self.start_day, &self.start_hour, &self.start_minute)?;
        let end = if self.is_range {
            compose_one(&self.end_day, &self.end_hour, &self.end_minute)?
        } else {
            start
        };
        Some((start, end))
    }

    /// Duration in hours for display, wrapping past midnight when negative.
    /// A heuristic, not calendar-accurate for multi-day ranges.
    pub fn duration_hours(&self) -> Option<f64> {
        let (start, end) = self.compose()?;
        let mut hours = (end - start).num_minutes() as f64 / 60.0;
        if hours < 0.0 {
            hours += 24.0;
        }
        Some(hours)
    }
}

fn compose_one(day: &WheelState, hour: &WheelState, minute: &WheelState) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(day.committed_value()?, "%Y-%m-%d").ok()?;
    let h: u32 = hour.committed_value()?.parse().ok()?;
    let m: u32 = minute.committed_value()?.parse().ok()?;
    date.and_hms_opt(h, m, 0)
}
