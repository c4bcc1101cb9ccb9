//! Step line component for Bubble Tea applications.
//!
//! A horizontal progress bar divided into numbered steps. Completed steps are
//! highlighted and the boundary between the completed and the remaining
//! segment slides linearly whenever the current step changes.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_stepline::stepline::{new, with_max_progress, with_duration};
//! use std::time::Duration;
//!
//! let mut line = new(&[
//!     with_max_progress(4),
//!     with_duration(Duration::from_millis(300)),
//! ]);
//!
//! // Returns the command that drives the animation
//! let cmd = line.set_current_progress(2);
//! ```
//!
//! # Hosting
//!
//! Inside a bubbletea program the widget is a regular model: forward
//! messages to [`Model::update`] and print [`Model::view`]. Other hosts use
//! the [`Renderable`](crate::Renderable) surface instead: call
//! [`Model::measure`] during layout, [`Model::draw`] with any
//! [`Canvas`](crate::canvas::Canvas), and [`Model::advance`] from their frame
//! clock.
//!
//! ```rust
//! use bubbletea_stepline::canvas::Recorder;
//! use bubbletea_stepline::layout::MeasureSpec;
//! use bubbletea_stepline::stepline::new;
//! use bubbletea_stepline::Renderable;
//!
//! let mut line = new(&[]);
//! line.measure(MeasureSpec::Exactly(100), MeasureSpec::Exactly(2));
//!
//! let mut canvas = Recorder::new();
//! line.draw(&mut canvas);
//! // two segments and five labels
//! assert_eq!(canvas.ops().len(), 7);
//! ```

pub mod methods;
pub mod model;
pub mod options;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::{new, Model};
pub use options::{
    with_attributes, with_bold_labels, with_current_progress, with_disabled_progress_color,
    with_disabled_text_color, with_duration, with_enabled_progress_color, with_enabled_text_color,
    with_fill_characters, with_max_progress, with_progress_height, with_progress_margin,
    with_resources, with_text_margin, with_text_size, StepLineOption,
};
pub use types::{
    AnimationState, FrameMsg, DEFAULT_CURRENT_PROGRESS, DEFAULT_DURATION, DEFAULT_MAX_PROGRESS,
};
pub use view::label;
