//! Time facilities: frame timing and event pacing.
//!
//! [`Time`] gives the host loop elapsed/delta/FPS numbers. [`Throttle`]
//! and [`Debounce`] rate-limit bursty native events (pointer moves,
//! window resizes) before they reach the field. All three are plain
//! `std::time` state machines with no background threads.

use std::time::{Duration, Instant};

/// Frame timing for the host loop.
///
/// Call [`update`](Self::update) once per frame; FPS is recalculated about
/// twice a second rather than per frame to keep the number readable.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total elapsed time in seconds (cached for fast access).
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update the FPS calculation.
    fps_update_interval: Duration,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-edge rate limiter.
///
/// The first [`ready`](Self::ready) call passes and starts the interval;
/// further calls are rejected until the interval elapses. Used for pointer
/// moves, which arrive far faster than the field needs them.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval between passes.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether the caller should run now. A `true` result consumes the slot.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Trailing-edge coalescer for bursty events.
///
/// Each [`trigger`](Self::trigger) restarts the quiet period;
/// [`fire`](Self::fire) reports `true` once the period has elapsed with no
/// further triggers. Used for window resizes, so a drag produces one field
/// reallocation instead of hundreds.
#[derive(Debug)]
pub struct Debounce {
    interval: Duration,
    pending: Option<Instant>,
}

impl Debounce {
    /// Create a debounce with the given quiet period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Note an event; restarts the quiet period.
    pub fn trigger(&mut self) {
        self.pending = Some(Instant::now());
    }

    /// Whether the coalesced event should run now. A `true` result clears
    /// the pending state; poll once per frame.
    pub fn fire(&mut self) -> bool {
        match self.pending {
            Some(t) if t.elapsed() >= self.interval => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an event is waiting out its quiet period.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.fps(), 0.0);
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = time.update();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_throttle_leading_edge() {
        let mut throttle = Throttle::new(Duration::from_millis(30));
        assert!(throttle.ready());
        assert!(!throttle.ready());

        thread::sleep(Duration::from_millis(35));
        assert!(throttle.ready());
        assert!(!throttle.ready());
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let mut debounce = Debounce::new(Duration::from_millis(30));
        assert!(!debounce.fire());

        debounce.trigger();
        assert!(debounce.is_pending());
        assert!(!debounce.fire());

        thread::sleep(Duration::from_millis(35));
        assert!(debounce.fire());
        assert!(!debounce.is_pending());
        assert!(!debounce.fire());
    }

    #[test]
    fn test_debounce_retrigger_restarts_period() {
        let mut debounce = Debounce::new(Duration::from_millis(40));
        debounce.trigger();
        thread::sleep(Duration::from_millis(25));
        debounce.trigger();
        assert!(!debounce.fire());
        thread::sleep(Duration::from_millis(45));
        assert!(debounce.fire());
    }
}
