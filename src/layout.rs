//! Measurement constraints and geometry shared by the widget and its canvases.

/// A constraint handed to a widget for one axis during the measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The parent decided the size; the widget must use it.
    Exactly(u32),
    /// The widget may be at most this large.
    AtMost(u32),
    /// No constraint at all.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves the axis size. Only an exact constraint is honoured; upper
    /// bounds and missing constraints behave like "wrap content" and use
    /// `default`.
    ///
    /// ```rust
    /// use bubbletea_stepline::layout::MeasureSpec;
    ///
    /// assert_eq!(MeasureSpec::Exactly(80).resolve(40), 80);
    /// assert_eq!(MeasureSpec::AtMost(80).resolve(40), 40);
    /// assert_eq!(MeasureSpec::Unspecified.resolve(40), 40);
    /// ```
    pub fn resolve(self, default: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => default,
        }
    }
}

/// A measured extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge, inclusive.
    pub left: f32,
    /// Top edge, inclusive.
    pub top: f32,
    /// Right edge, exclusive.
    pub right: f32,
    /// Bottom edge, exclusive.
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent; negative for an inverted rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}
