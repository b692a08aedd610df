//! Auto-advancing feature carousel state.
//!
//! Rotates through a fixed list of cards on a 5-second interval. Any manual
//! navigation bumps an epoch counter and re-arms the interval from scratch,
//! so a manual step always gets a full interval before the next automatic
//! advance. Pausing tears the timer down entirely; resuming re-arms it.

use std::time::{Duration, Instant};

/// Automatic advance interval.
pub const AUTO_INTERVAL: Duration = Duration::from_secs(5);

/// Horizontal drag distance that counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct CarouselState {
    len: usize,
    index: usize,
    /// +1 forward / -1 backward; only picks the transition orientation.
    direction: i8,
    /// Bumped on every manual interaction; each bump restarts the timer.
    epoch: u64,
    paused: bool,
    /// When the current interval was armed. `None` while paused or empty.
    armed_at: Option<Instant>,
    interval: Duration,
}

impl CarouselState {
    pub fn new(len: usize, now: Instant) -> Self {
        Self::with_interval(len, AUTO_INTERVAL, now)
    }

    pub fn with_interval(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            direction: 1,
            epoch: 0,
            paused: false,
            armed_at: (len > 0).then_some(now),
            interval,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn arm(&mut self, now: Instant) {
        self.armed_at = (!self.paused && self.len > 0).then_some(now);
    }

    fn bump_epoch(&mut self, now: Instant) {
        self.epoch += 1;
        self.arm(now);
    }

    /// Manual forward step; restarts the timer.
    pub fn manual_next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.direction = 1;
        self.index = (self.index + 1) % self.len;
        self.bump_epoch(now);
    }

    /// Manual backward step; restarts the timer.
    pub fn manual_prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.direction = -1;
        self.index = (self.index + self.len - 1) % self.len;
        self.bump_epoch(now);
    }

    /// Jump straight to a slide (dot click). Direction is inferred from the
    /// target's position relative to the current slide.
    pub fn go_to(&mut self, target: usize, now: Instant) {
        if self.len == 0 {
            return;
        }
        let target = target.min(self.len - 1);
        self.direction = if target > self.index { 1 } else { -1 };
        self.index = target;
        self.bump_epoch(now);
    }

    /// Horizontal drag release: beyond the threshold it is a manual step.
    pub fn swipe(&mut self, offset_x: f32, now: Instant) {
        if offset_x < -SWIPE_THRESHOLD {
            self.manual_next(now);
        } else if offset_x > SWIPE_THRESHOLD {
            self.manual_prev(now);
        }
    }

    /// Pointer-enter/leave equivalent. Pausing tears the interval down (not
    /// just visually frozen); resuming arms a fresh full interval.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if paused {
            self.armed_at = None;
        } else {
            self.arm(now);
        }
    }

    pub fn toggle_paused(&mut self, now: Instant) {
        let paused = !self.paused;
        self.set_paused(paused, now);
    }

    /// Automatic advance when the armed interval has elapsed. Returns true
    /// when the slide changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let Some(armed_at) = self.armed_at else {
            return false;
        };
        if now.duration_since(armed_at) < self.interval {
            return false;
        }
        self.direction = 1;
        self.index = (self.index + 1) % self.len.max(1);
        self.arm(now);
        true
    }

    /// Fraction of the current interval already elapsed, for the per-slide
    /// progress bar. Zero while paused.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.armed_at {
            Some(armed_at) => {
                let elapsed = now.duration_since(armed_at).as_secs_f64();
                (elapsed / self.interval.as_secs_f64()).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 9;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_wraparound_forward_and_backward() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.go_to(N - 1, now);
        carousel.manual_next(now);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), 1);

        carousel.manual_prev(now);
        assert_eq!(carousel.index(), N - 1);
        assert_eq!(carousel.direction(), -1);
    }

    #[test]
    fn test_auto_advance_wraps() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.go_to(N - 1, now);
        assert!(carousel.on_tick(now + AUTO_INTERVAL));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), 1);
    }

    #[test]
    fn test_auto_advance_waits_full_interval() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        assert!(!carousel.on_tick(now + AUTO_INTERVAL / 2));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.on_tick(now + AUTO_INTERVAL));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_nav_restarts_timer() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        let before = carousel.epoch();

        // Manual step 4s in: the pending auto advance must not fire at 5s
        carousel.manual_next(now + Duration::from_secs(4));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.epoch() > before);
        assert!(!carousel.on_tick(now + Duration::from_secs(5)));
        assert_eq!(carousel.index(), 1);

        // Full fresh interval after the manual step
        assert!(carousel.on_tick(now + Duration::from_secs(9)));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_back_to_back_manual_nav_yields_no_extra_advances() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.manual_next(now + Duration::from_secs(4));
        carousel.manual_next(now + Duration::from_millis(4500));
        assert_eq!(carousel.index(), 2);
        // No automatic advance sneaks in before 4.5s + interval
        assert!(!carousel.on_tick(now + Duration::from_secs(9)));
        assert!(carousel.on_tick(now + Duration::from_millis(9500)));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_go_to_infers_direction() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.go_to(4, now);
        assert_eq!(carousel.direction(), 1);
        carousel.go_to(2, now);
        assert_eq!(carousel.direction(), -1);
        assert_eq!(carousel.index(), 2);
        // Out-of-range target clamps
        carousel.go_to(99, now);
        assert_eq!(carousel.index(), N - 1);
    }

    #[test]
    fn test_pause_tears_timer_down() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.set_paused(true, now + Duration::from_secs(3));
        assert!(!carousel.on_tick(now + Duration::from_secs(60)));
        assert_eq!(carousel.progress(now + Duration::from_secs(60)), 0.0);

        // Resume re-arms a full interval from the resume point
        let resume = now + Duration::from_secs(60);
        carousel.set_paused(false, resume);
        assert!(!carousel.on_tick(resume + Duration::from_secs(4)));
        assert!(carousel.on_tick(resume + AUTO_INTERVAL));
    }

    #[test]
    fn test_swipe_threshold() {
        let now = t0();
        let mut carousel = CarouselState::new(N, now);
        carousel.swipe(-30.0, now); // below threshold
        assert_eq!(carousel.index(), 0);
        carousel.swipe(-51.0, now);
        assert_eq!(carousel.index(), 1);
        carousel.swipe(51.0, now);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), -1);
    }

    #[test]
    fn test_progress_fraction() {
        let now = t0();
        let carousel = CarouselState::new(N, now);
        assert_eq!(carousel.progress(now), 0.0);
        let half = carousel.progress(now + AUTO_INTERVAL / 2);
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(carousel.progress(now + AUTO_INTERVAL * 2), 1.0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let now = t0();
        let mut carousel = CarouselState::new(0, now);
        carousel.manual_next(now);
        carousel.manual_prev(now);
        carousel.go_to(3, now);
        assert!(!carousel.on_tick(now + AUTO_INTERVAL));
        assert_eq!(carousel.index(), 0);
    }
}
