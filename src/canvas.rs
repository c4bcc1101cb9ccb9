//! The drawing surface a widget paints onto.
//!
//! A [`Canvas`] exposes the two primitives the step line needs: filling a
//! rectangle and drawing a run of text. Paints are plain values built fresh
//! for every draw call, so nothing a canvas does can leak into the next frame.
//!
//! [`Recorder`] keeps every call as a [`DrawOp`], which makes it handy for
//! inspecting exactly what a widget drew:
//!
//! ```rust
//! use bubbletea_stepline::canvas::{Canvas, DrawOp, RectPaint, Recorder};
//! use bubbletea_stepline::color::Color;
//! use bubbletea_stepline::layout::Rect;
//!
//! let mut rec = Recorder::new();
//! rec.fill_rect(Rect::new(0.0, 1.0, 10.0, 2.0), &RectPaint::new(Color::ACCENT));
//! assert!(matches!(rec.ops()[0], DrawOp::Rect { .. }));
//! ```

use crate::color::Color;
use crate::layout::Rect;

/// The glyph used for filled cells on character surfaces.
pub const DEFAULT_GLYPH: char = '█';

/// The glyph used for unfilled bar cells on character surfaces.
pub const DEFAULT_EMPTY_GLYPH: char = '░';

/// Paint for a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPaint {
    /// Fill color.
    pub color: Color,
    /// Character used by cell-based surfaces; pixel surfaces ignore it.
    pub glyph: char,
}

impl RectPaint {
    /// A paint with the default block glyph.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            glyph: DEFAULT_GLYPH,
        }
    }

    /// Replaces the glyph.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }
}

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at x.
    #[default]
    Left,
    /// Text is centred on x.
    Center,
    /// Text ends at x.
    Right,
}

/// Paint for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    /// Text color.
    pub color: Color,
    /// Text size in surface units. Cell surfaces render every size as one row.
    pub size: f32,
    /// Anchoring.
    pub align: TextAlign,
    /// Heavier weight.
    pub bold: bool,
}

impl TextPaint {
    /// A left-aligned, regular-weight paint.
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            align: TextAlign::Left,
            bold: false,
        }
    }
}

/// A 2D surface with fill-rectangle and draw-text primitives.
pub trait Canvas {
    /// Fills `rect` with the paint's color.
    fn fill_rect(&mut self, rect: Rect, paint: &RectPaint);

    /// Draws `text` anchored at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A [`Canvas::fill_rect`] call.
    Rect {
        /// Rectangle passed by the caller.
        rect: Rect,
        /// Paint passed by the caller.
        paint: RectPaint,
    },
    /// A [`Canvas::draw_text`] call.
    Text {
        /// The text.
        text: String,
        /// Anchor x.
        x: f32,
        /// Anchor y.
        y: f32,
        /// Paint passed by the caller.
        paint: TextPaint,
    },
}

/// A canvas that records calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the rectangle calls.
    pub fn rects(&self) -> Vec<(Rect, RectPaint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, paint } => Some((*rect, *paint)),
                DrawOp::Text { .. } => None,
            })
            .collect()
    }

    /// Only the text calls.
    pub fn texts(&self) -> Vec<(&str, f32, f32, TextPaint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, y, paint } => Some((text.as_str(), *x, *y, *paint)),
                DrawOp::Rect { .. } => None,
            })
            .collect()
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn fill_rect(&mut self, rect: Rect, paint: &RectPaint) {
        self.ops.push(DrawOp::Rect {
            rect,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            paint: *paint,
        });
    }
}
