//! Setters, progress math and animation handling for the step line.

use super::model::Model;
use super::types::{AnimationState, FrameMsg, DEFAULT_DURATION, DEFAULT_MAX_PROGRESS, FPS};
use crate::animation::LinearAnimation;
use crate::attributes::Attributes;
use crate::color::Color;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;

pub(super) fn max_or_default(n: i32) -> i32 {
    if n < 0 {
        tracing::warn!(max_progress = n, "negative step count, using default");
        DEFAULT_MAX_PROGRESS
    } else {
        n
    }
}

// Layout scalars are non-negative extents.
pub(super) fn extent(v: f32) -> f32 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        tracing::warn!(value = v, "invalid extent, using 0");
        0.0
    }
}

fn duration_or_default(millis: i64) -> Duration {
    if millis < 0 {
        tracing::warn!(duration_ms = millis, "negative duration, using default");
        DEFAULT_DURATION
    } else {
        Duration::from_millis(millis as u64)
    }
}

fn color_or(raw: Option<&str>, fallback: Color, attribute: &str) -> Color {
    let Some(raw) = raw else {
        return fallback;
    };
    match Color::parse(raw) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(attribute, error = %err, "unusable color attribute, keeping default");
            fallback
        }
    }
}

fn frame_interval() -> Duration {
    Duration::from_nanos(1_000_000_000 / FPS as u64)
}

impl Model {
    /// Applies declarative attributes on top of the current configuration.
    ///
    /// Negative `maxProgress` and `progressDuration` fall back to 5 steps and
    /// 600 ms, colors that fail to parse keep their current value. The
    /// current step is taken as is and not animated.
    pub fn apply_attributes(&mut self, attrs: &Attributes) {
        if let Some(n) = attrs.max_progress {
            self.max_progress = max_or_default(n);
        }
        if let Some(n) = attrs.current_progress {
            self.current_progress = n;
        }
        if let Some(ms) = attrs.progress_duration {
            self.duration = duration_or_default(ms);
        }

        self.enabled_progress_color = color_or(
            attrs.enable_progress_color.as_deref(),
            self.enabled_progress_color,
            "enableProgressColor",
        );
        self.disabled_progress_color = color_or(
            attrs.disable_progress_color.as_deref(),
            self.disabled_progress_color,
            "disableProgressColor",
        );
        self.enabled_text_color = color_or(
            attrs.enable_text_color.as_deref(),
            self.enabled_text_color,
            "enableTextColor",
        );
        self.disabled_text_color = color_or(
            attrs.disable_text_color.as_deref(),
            self.disabled_text_color,
            "disableTextColor",
        );

        if let Some(v) = attrs.progress_text_size {
            self.text_size = extent(v);
        }
        if let Some(v) = attrs.progress_margin {
            self.progress_margin = extent(v);
        }
        if let Some(v) = attrs.text_margin {
            self.text_margin = extent(v);
        }
        if let Some(v) = attrs.progress_height {
            self.progress_height = extent(v);
        }
        self.invalidate();
    }

    /// Number of steps.
    pub fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Sets the number of steps and requests a redraw. A negative count
    /// falls back to 5. The boundary does not move until the next
    /// [`set_current_progress`](Self::set_current_progress).
    pub fn set_max_progress(&mut self, n: i32) {
        self.max_progress = max_or_default(n);
        self.invalidate();
    }

    /// Number of completed steps.
    pub fn current_progress(&self) -> i32 {
        self.current_progress
    }

    /// Sets the number of completed steps, requests a redraw and animates
    /// the boundary to its new position.
    ///
    /// A running animation is cancelled and the new one starts wherever the
    /// boundary currently is. The returned command delivers the first
    /// animation frame; pass the resulting [`FrameMsg`] back to
    /// [`update`](Self::update).
    ///
    /// ```rust
    /// use bubbletea_stepline::layout::MeasureSpec;
    /// use bubbletea_stepline::stepline::new;
    /// use std::time::Duration;
    ///
    /// let mut line = new(&[]);
    /// line.measure(MeasureSpec::Exactly(500), MeasureSpec::Unspecified);
    /// let _cmd = line.set_current_progress(3);
    ///
    /// line.advance(Duration::from_millis(300));
    /// let halfway = line.progress_fraction().unwrap();
    /// assert!((halfway - 150.0).abs() < 0.5);
    /// ```
    pub fn set_current_progress(&mut self, n: i32) -> Cmd {
        // a widget that was never drawn animates from where the old state
        // would have been drawn, not from zero
        self.ensure_initialized();
        self.current_progress = n;
        self.invalidate();
        self.start_animation()
    }

    /// Animation length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sets the length of future animations. Does not request a redraw.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Sets the length of future animations in milliseconds; negative values
    /// fall back to 600 ms. Does not request a redraw.
    pub fn set_duration_millis(&mut self, millis: i64) {
        self.duration = duration_or_default(millis);
    }

    /// Completed bar segment color.
    pub fn enabled_progress_color(&self) -> Color {
        self.enabled_progress_color
    }

    /// Sets the completed bar segment color.
    pub fn set_enabled_progress_color(&mut self, color: Color) {
        self.enabled_progress_color = color;
        self.invalidate();
    }

    /// Remaining bar segment color.
    pub fn disabled_progress_color(&self) -> Color {
        self.disabled_progress_color
    }

    /// Sets the remaining bar segment color.
    pub fn set_disabled_progress_color(&mut self, color: Color) {
        self.disabled_progress_color = color;
        self.invalidate();
    }

    /// Completed label color.
    pub fn enabled_text_color(&self) -> Color {
        self.enabled_text_color
    }

    /// Sets the completed label color.
    pub fn set_enabled_text_color(&mut self, color: Color) {
        self.enabled_text_color = color;
        self.invalidate();
    }

    /// Remaining label color.
    pub fn disabled_text_color(&self) -> Color {
        self.disabled_text_color
    }

    /// Sets the remaining label color.
    pub fn set_disabled_text_color(&mut self, color: Color) {
        self.disabled_text_color = color;
        self.invalidate();
    }

    /// Label size.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Sets the label size. Negative or non-finite sizes become 0.
    pub fn set_text_size(&mut self, px: f32) {
        self.text_size = extent(px);
        self.invalidate();
    }

    /// Bar offset from the top.
    pub fn progress_margin(&self) -> f32 {
        self.progress_margin
    }

    /// Sets the bar offset from the top.
    pub fn set_progress_margin(&mut self, px: f32) {
        self.progress_margin = extent(px);
        self.invalidate();
    }

    /// Label baseline offset from the top.
    pub fn text_margin(&self) -> f32 {
        self.text_margin
    }

    /// Sets the label baseline offset from the top.
    pub fn set_text_margin(&mut self, px: f32) {
        self.text_margin = extent(px);
        self.invalidate();
    }

    /// Bar thickness.
    pub fn progress_height(&self) -> f32 {
        self.progress_height
    }

    /// Sets the bar thickness.
    pub fn set_progress_height(&mut self, px: f32) {
        self.progress_height = extent(px);
        self.invalidate();
    }

    /// Measured width.
    pub fn view_width(&self) -> u32 {
        self.view_width
    }

    /// Measured height.
    pub fn view_height(&self) -> u32 {
        self.view_height
    }

    /// Current boundary position, `None` before the first draw.
    pub fn progress_fraction(&self) -> Option<f32> {
        self.progress_fraction
    }

    /// Start-tracking value for the next animation: the target of the last
    /// one started.
    pub fn previous_fraction(&self) -> f32 {
        self.previous_fraction
    }

    /// Whether the boundary is moving.
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// The animation state machine.
    pub fn animation_state(&self) -> &AnimationState {
        &self.animation
    }

    /// True when something changed since the last draw.
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Returns and clears the pending redraw request. Requests coalesce:
    /// any number of changes yield a single `true`.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Target boundary position for the current configuration:
    /// `view_width * current / max`.
    ///
    /// Combinations that make no sense (current above max, either one
    /// negative, or zero steps) count as complete and yield the full width.
    ///
    /// ```rust
    /// use bubbletea_stepline::layout::MeasureSpec;
    /// use bubbletea_stepline::stepline::{new, with_current_progress, with_max_progress};
    ///
    /// let mut line = new(&[with_max_progress(5), with_current_progress(7)]);
    /// line.measure(MeasureSpec::Exactly(500), MeasureSpec::Unspecified);
    /// assert_eq!(line.calculate_progress(), 500.0);
    /// ```
    pub fn calculate_progress(&self) -> f32 {
        let width = self.view_width as f32;
        if self.is_complete_by_policy() {
            return width;
        }
        width * self.current_progress as f32 / self.max_progress as f32
    }

    /// True when the step values are out of range and the widget renders as
    /// complete.
    pub(super) fn is_complete_by_policy(&self) -> bool {
        self.max_progress <= 0
            || self.current_progress < 0
            || self.current_progress > self.max_progress
    }

    /// Handles animation frames for this widget. Frames for other widgets
    /// or for a cancelled animation are ignored. Returns the next frame
    /// command while the animation runs.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(frame_msg) = msg.downcast_ref::<FrameMsg>() {
            if frame_msg.id != self.id || frame_msg.tag != self.tag {
                return std::option::Option::None;
            }

            if self.advance(frame_interval()) {
                return std::option::Option::Some(self.next_frame());
            }
        }

        std::option::Option::None
    }

    /// Moves a running animation forward by `dt`, for hosts that run their
    /// own frame clock. Stores the new boundary, requests a redraw and
    /// returns whether the animation is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let AnimationState::Animating(anim) = &mut self.animation else {
            return false;
        };
        let value = anim.advance(dt);
        let finished = anim.is_finished();

        self.progress_fraction = Some(self.clamp_fraction(value));
        self.invalidate();
        tracing::trace!(id = self.id, fraction = value, "step line frame");

        if finished {
            self.animation = AnimationState::Idle;
            tracing::debug!(id = self.id, fraction = value, "step line animation finished");
        }
        !finished
    }

    /// Keeps a boundary position inside the bar.
    pub(super) fn clamp_fraction(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.view_width as f32;
        }
        value.clamp(0.0, self.view_width as f32)
    }

    /// Computes the boundary on first use without animating.
    pub(super) fn ensure_initialized(&mut self) {
        if self.progress_fraction.is_none() {
            let fraction = self.calculate_progress();
            self.progress_fraction = Some(fraction);
            self.previous_fraction = fraction;
        }
    }

    pub(super) fn invalidate(&mut self) {
        self.redraw = true;
    }

    fn start_animation(&mut self) -> Cmd {
        let target = self.calculate_progress();
        let from = self.progress_fraction.unwrap_or(self.previous_fraction);

        if self.animation.is_animating() {
            tracing::debug!(id = self.id, at = from, "cancelling step line animation");
        }

        self.tag += 1;
        self.animation =
            AnimationState::Animating(LinearAnimation::new(from, target, self.duration));
        self.previous_fraction = target;
        tracing::debug!(
            id = self.id,
            from,
            to = target,
            duration_ms = self.duration.as_millis() as u64,
            "starting step line animation"
        );

        self.next_frame()
    }

    /// Internal method to create next frame command
    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(frame_interval(), move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }
}
