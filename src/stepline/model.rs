//! Core model for the step line component.

use super::options::StepLineOption;
use super::types::{
    AnimationState, DEFAULT_CURRENT_PROGRESS, DEFAULT_DURATION, DEFAULT_MAX_PROGRESS,
};
use crate::attributes::Attributes;
use crate::canvas::{DEFAULT_EMPTY_GLYPH, DEFAULT_GLYPH};
use crate::color::Color;
use crate::resources::Resources;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for step line instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A horizontal bar split into numbered steps.
///
/// The bar has two segments: the completed one, from the left edge to the
/// progress boundary, and the remaining one, from the boundary to the right
/// edge. Step labels `01`, `02`, ... sit above it, one per step, highlighted
/// once their step is complete. Changing the current step slides the
/// boundary linearly to its new position.
///
/// # Examples
///
/// ```rust
/// use bubbletea_stepline::layout::MeasureSpec;
/// use bubbletea_stepline::stepline::new;
///
/// let mut line = new(&[]);
/// line.measure(MeasureSpec::Exactly(50), MeasureSpec::Unspecified);
///
/// // returns the first animation frame command
/// let _cmd = line.set_current_progress(2);
/// assert!(line.is_animating());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Unique instance id, used to route frame messages.
    pub(super) id: i64,
    /// Animation sequence; frames carrying an older tag are stale.
    pub(super) tag: i64,

    pub(super) max_progress: i32,
    pub(super) current_progress: i32,

    /// Pixel position of the segment boundary. `None` until first drawn.
    pub(super) progress_fraction: Option<f32>,
    /// Target of the most recently started animation.
    pub(super) previous_fraction: f32,

    pub(super) duration: Duration,
    pub(super) animation: AnimationState,

    pub(super) enabled_progress_color: Color,
    pub(super) disabled_progress_color: Color,
    pub(super) enabled_text_color: Color,
    pub(super) disabled_text_color: Color,

    pub(super) text_size: f32,
    pub(super) text_margin: f32,
    pub(super) progress_height: f32,
    pub(super) progress_margin: f32,

    pub(super) view_width: u32,
    pub(super) view_height: u32,
    pub(super) default_width: u32,
    pub(super) default_height: u32,

    /// Completed segment glyph on cell surfaces.
    pub(super) full: char,
    /// Remaining segment glyph on cell surfaces.
    pub(super) empty: char,
    pub(super) bold_labels: bool,

    /// Set by every visual change, cleared by a draw.
    pub(super) redraw: bool,
}

/// Creates a step line with default resources and the given options.
///
/// The widget starts out measured at its default size, so it can be viewed
/// right away; a host layout pass may resize it with
/// [`Model::measure`].
///
/// ```rust
/// use bubbletea_stepline::stepline::{new, with_max_progress};
/// use std::time::Duration;
///
/// let line = new(&[with_max_progress(4)]);
/// assert_eq!(line.max_progress(), 4);
/// assert_eq!(line.current_progress(), 0);
/// assert_eq!(line.duration(), Duration::from_millis(600));
/// ```
pub fn new(opts: &[StepLineOption]) -> Model {
    let resources = opts
        .iter()
        .rev()
        .find_map(|opt| match opt {
            StepLineOption::WithResources(res) => Some(res.as_ref().clone()),
            _ => None,
        })
        .unwrap_or_default();

    let mut m = Model::from_resources(&resources);
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Model {
    /// Creates a step line whose geometry and colors come from `resources`.
    pub fn from_resources(resources: &Resources) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            max_progress: DEFAULT_MAX_PROGRESS,
            current_progress: DEFAULT_CURRENT_PROGRESS,
            progress_fraction: None,
            previous_fraction: 0.0,
            duration: DEFAULT_DURATION,
            animation: AnimationState::Idle,
            enabled_progress_color: resources.enabled_progress_color,
            disabled_progress_color: resources.disabled_progress_color,
            enabled_text_color: resources.enabled_text_color,
            disabled_text_color: resources.disabled_text_color,
            text_size: resources.text_size,
            text_margin: resources.text_margin,
            progress_height: resources.progress_height,
            progress_margin: resources.progress_margin,
            view_width: resources.view_width,
            view_height: resources.view_height,
            default_width: resources.view_width,
            default_height: resources.view_height,
            full: DEFAULT_GLYPH,
            empty: DEFAULT_EMPTY_GLYPH,
            bold_labels: false,
            redraw: true,
        }
    }

    /// Creates a step line from resource defaults overridden by declarative
    /// attributes. Never fails: out-of-range values fall back to defaults.
    ///
    /// ```rust
    /// use bubbletea_stepline::attributes::Attributes;
    /// use bubbletea_stepline::resources::Resources;
    /// use bubbletea_stepline::stepline::Model;
    ///
    /// let attrs = Attributes::parse_markup(r#"maxProgress="-3" currentProgress="2""#).unwrap();
    /// let line = Model::from_attributes(&Resources::default(), &attrs);
    /// assert_eq!(line.max_progress(), 5);
    /// assert_eq!(line.current_progress(), 2);
    /// ```
    pub fn from_attributes(resources: &Resources, attrs: &Attributes) -> Self {
        let mut m = Self::from_resources(resources);
        m.apply_attributes(attrs);
        m
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let model = new(&[]);
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
