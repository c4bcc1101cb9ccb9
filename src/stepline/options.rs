//! Construction options for the step line.
//!
//! Options follow the usual bubbles pattern: build a slice of them with the
//! `with_*` helpers and hand it to [`new`](super::new).
//!
//! ```rust
//! use bubbletea_stepline::stepline::{new, with_current_progress, with_max_progress};
//!
//! let line = new(&[with_max_progress(8), with_current_progress(3)]);
//! assert_eq!(line.max_progress(), 8);
//! assert_eq!(line.current_progress(), 3);
//! ```

use super::methods::{extent, max_or_default};
use super::model::Model;
use crate::attributes::Attributes;
use crate::color::Color;
use crate::resources::Resources;
use std::time::Duration;

/// A single construction option.
///
/// Options apply in order, except [`StepLineOption::WithResources`]: the last
/// resources option is always applied first because every other option
/// overrides a resource default.
#[derive(Debug, Clone)]
pub enum StepLineOption {
    /// Total number of steps. Negative values fall back to the default.
    WithMaxProgress(i32),
    /// Completed step count. Applied without animating.
    WithCurrentProgress(i32),
    /// Animation length.
    WithDuration(Duration),
    /// Completed bar segment color.
    WithEnabledProgressColor(Color),
    /// Remaining bar segment color.
    WithDisabledProgressColor(Color),
    /// Completed label color.
    WithEnabledTextColor(Color),
    /// Remaining label color.
    WithDisabledTextColor(Color),
    /// Label size.
    WithTextSize(f32),
    /// Label baseline offset.
    WithTextMargin(f32),
    /// Bar offset.
    WithProgressMargin(f32),
    /// Bar thickness.
    WithProgressHeight(f32),
    /// Glyphs for the completed and remaining segments on cell surfaces.
    WithFillCharacters(char, char),
    /// Bold step labels.
    WithBoldLabels,
    /// Resource defaults to start from.
    WithResources(Box<Resources>),
    /// Declarative attributes, applied as a group.
    WithAttributes(Box<Attributes>),
}

impl StepLineOption {
    pub(super) fn apply(&self, m: &mut Model) {
        match self {
            StepLineOption::WithMaxProgress(n) => m.max_progress = max_or_default(*n),
            StepLineOption::WithCurrentProgress(n) => m.current_progress = *n,
            StepLineOption::WithDuration(d) => m.duration = *d,
            StepLineOption::WithEnabledProgressColor(c) => m.enabled_progress_color = *c,
            StepLineOption::WithDisabledProgressColor(c) => m.disabled_progress_color = *c,
            StepLineOption::WithEnabledTextColor(c) => m.enabled_text_color = *c,
            StepLineOption::WithDisabledTextColor(c) => m.disabled_text_color = *c,
            StepLineOption::WithTextSize(v) => m.text_size = extent(*v),
            StepLineOption::WithTextMargin(v) => m.text_margin = extent(*v),
            StepLineOption::WithProgressMargin(v) => m.progress_margin = extent(*v),
            StepLineOption::WithProgressHeight(v) => m.progress_height = extent(*v),
            StepLineOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            StepLineOption::WithBoldLabels => m.bold_labels = true,
            // consumed by `new` before any other option
            StepLineOption::WithResources(_) => {}
            StepLineOption::WithAttributes(attrs) => m.apply_attributes(attrs),
        }
    }
}

/// Sets the number of steps.
pub fn with_max_progress(n: i32) -> StepLineOption {
    StepLineOption::WithMaxProgress(n)
}

/// Sets the completed step count the widget starts at.
pub fn with_current_progress(n: i32) -> StepLineOption {
    StepLineOption::WithCurrentProgress(n)
}

/// Sets the animation length.
pub fn with_duration(d: Duration) -> StepLineOption {
    StepLineOption::WithDuration(d)
}

/// Sets the completed bar segment color.
pub fn with_enabled_progress_color(c: Color) -> StepLineOption {
    StepLineOption::WithEnabledProgressColor(c)
}

/// Sets the remaining bar segment color.
pub fn with_disabled_progress_color(c: Color) -> StepLineOption {
    StepLineOption::WithDisabledProgressColor(c)
}

/// Sets the completed label color.
pub fn with_enabled_text_color(c: Color) -> StepLineOption {
    StepLineOption::WithEnabledTextColor(c)
}

/// Sets the remaining label color.
pub fn with_disabled_text_color(c: Color) -> StepLineOption {
    StepLineOption::WithDisabledTextColor(c)
}

/// Sets the label size.
pub fn with_text_size(v: f32) -> StepLineOption {
    StepLineOption::WithTextSize(v)
}

/// Sets the label baseline offset.
pub fn with_text_margin(v: f32) -> StepLineOption {
    StepLineOption::WithTextMargin(v)
}

/// Sets the bar offset from the top.
pub fn with_progress_margin(v: f32) -> StepLineOption {
    StepLineOption::WithProgressMargin(v)
}

/// Sets the bar thickness.
pub fn with_progress_height(v: f32) -> StepLineOption {
    StepLineOption::WithProgressHeight(v)
}

/// Customizes the characters used for the two segments on terminal surfaces.
///
/// ```rust
/// use bubbletea_stepline::stepline::{new, with_fill_characters};
///
/// // ASCII look for terminals without block glyphs
/// let line = new(&[with_fill_characters('=', '-')]);
/// ```
pub fn with_fill_characters(full: char, empty: char) -> StepLineOption {
    StepLineOption::WithFillCharacters(full, empty)
}

/// Renders the step labels in bold.
pub fn with_bold_labels() -> StepLineOption {
    StepLineOption::WithBoldLabels
}

/// Starts from the given resource defaults instead of [`Resources::default`].
pub fn with_resources(resources: Resources) -> StepLineOption {
    StepLineOption::WithResources(Box::new(resources))
}

/// Applies declarative attributes, see [`Model::apply_attributes`].
pub fn with_attributes(attrs: Attributes) -> StepLineOption {
    StepLineOption::WithAttributes(Box::new(attrs))
}
