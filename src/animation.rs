//! Linear value animation driven by an external frame clock.
//!
//! The animation never reads the wall clock itself. Whoever owns it feeds
//! elapsed time through [`LinearAnimation::advance`], which keeps every step
//! reproducible and lets the step line drive it from bubbletea ticks or any
//! other host clock.
//!
//! ```rust
//! use bubbletea_stepline::animation::LinearAnimation;
//! use std::time::Duration;
//!
//! let mut anim = LinearAnimation::new(0.0, 300.0, Duration::from_millis(600));
//! assert_eq!(anim.advance(Duration::from_millis(300)), 150.0);
//! anim.advance(Duration::from_millis(400));
//! assert!(anim.is_finished());
//! assert_eq!(anim.value(), 300.0);
//! ```

use std::time::Duration;

/// Interpolates from one value to another at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl LinearAnimation {
    /// Starts an animation at `from`, reaching `to` after `duration`.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Start value.
    pub fn from(&self) -> f32 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Total length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time consumed so far, never more than the duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Completed share of the timeline in `[0, 1]`. A zero-length animation
    /// is complete from the start.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// The interpolated value at the current point of the timeline.
    pub fn value(&self) -> f32 {
        let t = self.fraction();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    /// Moves the timeline forward by `dt` and returns the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }

    /// Sends the animation from `from` toward `to` over the time it had
    /// left. A finished animation stays finished.
    pub fn retarget(&mut self, from: f32, to: f32) {
        let remaining = self.duration.saturating_sub(self.elapsed);
        *self = Self::new(from, to, remaining);
    }

    /// True once the end value has been reached.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
