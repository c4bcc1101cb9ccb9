#![warn(missing_docs)]

//! # bubbletea-stepline
//!
//! A segmented, animated step-progress indicator for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, in the style of the bubbles component family.
//!
//! The step line is a horizontal bar subdivided into numbered steps. Completed
//! steps are highlighted, and when the current step changes the boundary between
//! the completed and the remaining segment slides to its new place with a linear
//! animation.
//!
//! ```text
//! 01      02      03      04      05
//! ████████████████████████░░░░░░░░░░░░░░░░
//! ```
//!
//! ## Features
//!
//! - **Elm Architecture** model with `update()` / `view()` and tick-driven frames
//! - **Host independent core**: measure and draw against any [`canvas::Canvas`]
//! - **Declarative configuration** from JSON or markup attributes
//! - **Never fails at runtime**: out-of-range input falls back to safe defaults
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_stepline::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     steps: StepLine,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let steps = stepline_new(&[with_max_progress(4)]);
//!         (Self { steps }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward animation frames to the step line
//!         self.steps.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.steps.view()
//!     }
//! }
//! ```
//!
//! ## Custom hosts
//!
//! Everything the bubbletea model does is also reachable through [`Renderable`]
//! and [`stepline::Model::advance`], so the widget can be laid out, drawn and
//! animated by any other frame loop.

pub mod animation;
pub mod attributes;
pub mod canvas;
pub mod cells;
pub mod color;
pub mod layout;
pub mod resources;
pub mod stepline;

use canvas::Canvas;
use layout::{MeasureSpec, Size};

/// A component that a host lays out and paints.
///
/// The host calls [`measure`](Renderable::measure) during its layout pass and
/// [`draw`](Renderable::draw) whenever the component needs painting. Neither
/// call may fail: components clamp whatever state they hold into something
/// drawable.
///
/// # Examples
///
/// ```rust
/// use bubbletea_stepline::canvas::Recorder;
/// use bubbletea_stepline::layout::{MeasureSpec, Size};
/// use bubbletea_stepline::Renderable;
///
/// fn paint_once<R: Renderable>(component: &mut R) -> Recorder {
///     component.measure(MeasureSpec::Exactly(80), MeasureSpec::Unspecified);
///     let mut canvas = Recorder::new();
///     component.draw(&mut canvas);
///     canvas
/// }
///
/// let mut line = bubbletea_stepline::stepline::new(&[]);
/// let canvas = paint_once(&mut line);
/// assert!(!canvas.ops().is_empty());
/// ```
pub trait Renderable {
    /// Resolves the component's size from the parent's constraints and
    /// remembers it for subsequent draws.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Paints the component onto `canvas` at its measured size.
    fn draw(&mut self, canvas: &mut dyn Canvas);
}

pub use animation::LinearAnimation;
pub use attributes::{AttributeError, Attributes};
pub use canvas::{DrawOp, RectPaint, Recorder, TextAlign, TextPaint};
pub use cells::CellCanvas;
pub use color::{Color, ColorError};
pub use layout::Rect;
pub use resources::Resources;
pub use stepline::{label, FrameMsg, Model as StepLine, StepLineOption};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_stepline::prelude::*;
///
/// let line = stepline_new(&[with_current_progress(2)]);
/// assert_eq!(line.current_progress(), 2);
/// ```
pub mod prelude {
    pub use crate::attributes::Attributes;
    pub use crate::canvas::{Canvas, Recorder};
    pub use crate::cells::CellCanvas;
    pub use crate::color::Color;
    pub use crate::layout::{MeasureSpec, Rect, Size};
    pub use crate::resources::Resources;
    pub use crate::stepline::{
        new as stepline_new, with_attributes, with_bold_labels, with_current_progress,
        with_disabled_progress_color, with_disabled_text_color, with_duration,
        with_enabled_progress_color, with_enabled_text_color, with_fill_characters,
        with_max_progress, with_progress_height, with_progress_margin, with_resources,
        with_text_margin, with_text_size, AnimationState, FrameMsg, Model as StepLine,
        StepLineOption,
    };
    pub use crate::Renderable;
}
