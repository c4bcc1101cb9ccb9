//! Messages and state types for the step line component.

use crate::animation::LinearAnimation;
use std::time::Duration;

/// Frames per second of the tick-driven animation.
pub(super) const FPS: u32 = 60;
/// Step count used when none (or a negative one) is given.
pub const DEFAULT_MAX_PROGRESS: i32 = 5;
/// Completed step count of a fresh widget.
pub const DEFAULT_CURRENT_PROGRESS: i32 = 0;
/// Animation length used when none (or a negative one) is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Message asking a step line to process one animation frame.
///
/// Frames carry the widget id and the animation tag they were scheduled for.
/// Starting a new animation bumps the tag, so frames of a cancelled
/// animation are dropped when they arrive.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(super) id: i64,
    pub(super) tag: i64,
}

/// Whether the boundary between the segments is moving.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnimationState {
    /// The boundary rests at its target.
    #[default]
    Idle,
    /// The boundary is moving toward the animation's end value.
    Animating(LinearAnimation),
}

impl AnimationState {
    /// True while an animation is running.
    pub fn is_animating(&self) -> bool {
        matches!(self, AnimationState::Animating(_))
    }
}
