//! Measurement and drawing for the step line.

use super::model::Model;
use super::types::AnimationState;
use crate::canvas::{Canvas, RectPaint, TextAlign, TextPaint};
use crate::cells::CellCanvas;
use crate::layout::{MeasureSpec, Rect, Size};
use crate::Renderable;

/// Label text for a step: zero-padded to two digits, longer numbers as is.
///
/// ```rust
/// use bubbletea_stepline::stepline::label;
///
/// assert_eq!(label(1), "01");
/// assert_eq!(label(10), "10");
/// assert_eq!(label(123), "123");
/// ```
pub fn label(index: i32) -> String {
    format!("{:02}", index)
}

impl Model {
    /// Resolves the widget size for the given constraints. Exact constraints
    /// are used as given; anything else falls back to the resource default.
    ///
    /// When the width changes while the boundary rests, the boundary is
    /// recomputed for the new width. A running animation is clamped into the
    /// new bar and sent toward the new target over the time it had left.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = Size::new(
            width.resolve(self.default_width),
            height.resolve(self.default_height),
        );

        if size.width != self.view_width {
            self.view_width = size.width;
            if let Some(fraction) = self.progress_fraction {
                let from = self.clamp_fraction(fraction);
                let target = self.calculate_progress();
                if let AnimationState::Animating(anim) = &mut self.animation {
                    anim.retarget(from, target);
                    self.progress_fraction = Some(from);
                    self.previous_fraction = target;
                    tracing::debug!(
                        id = self.id,
                        from,
                        to = target,
                        "retargeted step line animation"
                    );
                } else {
                    self.progress_fraction = Some(target);
                    self.previous_fraction = target;
                }
            }
            self.invalidate();
        }
        if size.height != self.view_height {
            self.view_height = size.height;
            self.invalidate();
        }

        tracing::debug!(
            id = self.id,
            width = size.width,
            height = size.height,
            "measured step line"
        );
        size
    }

    /// Draws the widget: the completed segment, the remaining segment, then
    /// one label per step. The first draw computes the boundary from the
    /// current configuration instead of animating from zero. Clears the
    /// pending redraw request.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.ensure_initialized();
        let fraction = self.resolved_fraction();
        self.paint(canvas, fraction, false);
        self.redraw = false;
    }

    /// Renders the widget into a string of terminal cells at its measured
    /// size.
    ///
    /// Of several labels starting in the same column only the last one is
    /// visible, so only that one is drawn. The output matches drawing every
    /// label onto a [`CellCanvas`].
    pub fn view(&self) -> String {
        let mut canvas = CellCanvas::new(self.view_width, self.view_height);
        self.paint(&mut canvas, self.resolved_fraction(), true);
        canvas.render()
    }

    fn resolved_fraction(&self) -> f32 {
        let fraction = self
            .progress_fraction
            .unwrap_or_else(|| self.calculate_progress());
        self.clamp_fraction(fraction)
    }

    // `cells` paints only the labels a cell grid can show
    fn paint(&self, canvas: &mut dyn Canvas, fraction: f32, cells: bool) {
        let width = self.view_width as f32;
        let top = self.progress_margin;
        let bottom = self.progress_height + self.progress_margin;

        canvas.fill_rect(
            Rect::new(0.0, top, fraction, bottom),
            &RectPaint::new(self.enabled_progress_color).with_glyph(self.full),
        );
        canvas.fill_rect(
            Rect::new(fraction, top, width, bottom),
            &RectPaint::new(self.disabled_progress_color).with_glyph(self.empty),
        );

        if self.max_progress <= 0 {
            return;
        }

        let step = width / self.max_progress as f32;
        if cells && step < 1.0 {
            for index in self.last_label_per_column(step) {
                self.paint_label(canvas, index, step);
            }
        } else {
            for index in 1..=self.max_progress {
                self.paint_label(canvas, index, step);
            }
        }
    }

    fn paint_label(&self, canvas: &mut dyn Canvas, index: i32, step: f32) {
        // out-of-range values render as complete, labels included
        let color = if self.is_complete_by_policy() || index <= self.current_progress {
            self.enabled_text_color
        } else {
            self.disabled_text_color
        };
        let paint = TextPaint {
            color,
            size: self.text_size,
            align: TextAlign::Left,
            bold: self.bold_labels,
        };
        canvas.draw_text(
            &label(index),
            (index - 1) as f32 * step,
            self.text_margin,
            &paint,
        );
    }

    /// For every column of the bar, the last step whose label starts there.
    /// Walks columns instead of steps, so the cost is bounded by the width.
    fn last_label_per_column(&self, step: f32) -> Vec<i32> {
        let last = self.max_progress as i64 - 1;
        let column = |k: i64| (k as f32 * step).floor() as i64;

        let mut indices = Vec::new();
        for c in 0..self.view_width as i64 {
            let guess = ((c + 1) as f64 / step as f64).ceil() as i64 - 1;
            let mut k = guess.clamp(0, last);
            while k < last && column(k + 1) <= c {
                k += 1;
            }
            while k > 0 && column(k) > c {
                k -= 1;
            }
            if column(k) == c {
                indices.push(k as i32 + 1);
            }
        }
        indices
    }
}

impl Renderable for Model {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Model::measure(self, width, height)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        Model::draw(self, canvas)
    }
}
