//! A [`Canvas`] backed by a grid of terminal cells.
//!
//! One canvas unit is one cell: x counts columns, y counts rows. Rectangles
//! claim the cells whose centre they contain, so two rectangles sharing an
//! edge never fight over a cell. Later draws overwrite earlier ones.
//!
//! ```rust
//! use bubbletea_stepline::canvas::{Canvas, RectPaint};
//! use bubbletea_stepline::cells::CellCanvas;
//! use bubbletea_stepline::color::Color;
//! use bubbletea_stepline::layout::Rect;
//!
//! let mut canvas = CellCanvas::new(4, 1);
//! canvas.fill_rect(Rect::new(0.0, 0.0, 2.0, 1.0), &RectPaint::new(Color::ACCENT).with_glyph('#'));
//! assert_eq!(canvas.plain(), "##  ");
//! ```

use crate::canvas::{Canvas, RectPaint, TextAlign, TextPaint};
use crate::color::Color;
use crate::layout::Rect;
use lipgloss_extras::lipgloss;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CellStyle {
    color: Option<Color>,
    bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    // Empty for the trailing half of a double-width grapheme.
    text: String,
    style: CellStyle,
}

impl Cell {
    fn blank() -> Self {
        Self {
            text: " ".to_string(),
            style: CellStyle::default(),
        }
    }

    fn is_continuation(&self) -> bool {
        self.text.is_empty()
    }
}

/// A fixed-size character grid that renders to a styled terminal string.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Creates a blank canvas of `width` columns by `height` rows.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as usize;
        let height = height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width * height],
        }
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The grapheme stored at a cell, `None` outside the grid. The trailing
    /// half of a wide grapheme reads as an empty string.
    pub fn glyph(&self, col: usize, row: usize) -> Option<&str> {
        self.index(col, row).map(|i| self.cells[i].text.as_str())
    }

    /// The color stored at a cell, `None` for untouched cells or outside the grid.
    pub fn color(&self, col: usize, row: usize) -> Option<Color> {
        self.index(col, row).and_then(|i| self.cells[i].style.color)
    }

    /// Renders rows joined by `\n`, each run of equally styled cells wrapped
    /// in one lipgloss style.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }

            let mut run = String::new();
            let mut run_style = CellStyle::default();
            for cell in self.row(row) {
                if cell.is_continuation() {
                    continue;
                }
                if cell.style != run_style && !run.is_empty() {
                    out.push_str(&styled(&run, run_style));
                    run.clear();
                }
                run_style = cell.style;
                run.push_str(&cell.text);
            }
            out.push_str(&styled(&run, run_style));
        }
        out
    }

    /// Same grid as [`render`](Self::render) without any escape sequences.
    pub fn plain(&self) -> String {
        (0..self.height)
            .map(|row| {
                self.row(row)
                    .iter()
                    .map(|cell| cell.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    // Writes `text` occupying `span` cells starting at (col, row). Any wide
    // grapheme cut in half by the write is blanked.
    fn put(&mut self, col: usize, row: usize, text: &str, span: usize, style: CellStyle) {
        for c in col..col + span {
            self.detach(c, row);
        }
        if let Some(i) = self.index(col, row) {
            self.cells[i] = Cell {
                text: text.to_string(),
                style,
            };
        }
        for c in col + 1..col + span {
            if let Some(i) = self.index(c, row) {
                self.cells[i] = Cell {
                    text: String::new(),
                    style,
                };
            }
        }
    }

    fn detach(&mut self, col: usize, row: usize) {
        let Some(i) = self.index(col, row) else {
            return;
        };
        if self.cells[i].is_continuation() && col > 0 {
            if let Some(head) = self.index(col - 1, row) {
                self.cells[head] = Cell::blank();
            }
        }
        if !self.cells[i].is_continuation() {
            if let Some(tail) = self.index(col + 1, row) {
                if self.cells[tail].is_continuation() {
                    self.cells[tail] = Cell::blank();
                }
            }
        }
    }
}

fn styled(run: &str, style: CellStyle) -> String {
    if run.is_empty() {
        return String::new();
    }
    match style.color {
        None if !style.bold => run.to_string(),
        color => {
            let mut s = lipgloss::Style::new();
            if let Some(color) = color {
                s = s.foreground(lipgloss::Color::from(color));
            }
            if style.bold {
                s = s.bold(true);
            }
            s.render(run)
        }
    }
}

// First and one-past-last cell whose centre lies in [lo, hi), clipped to `limit`.
fn cover(lo: f32, hi: f32, limit: usize) -> (usize, usize) {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f32);
    if !(start < end) {
        return (0, 0);
    }
    (start as usize, end as usize)
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: &RectPaint) {
        if rect.is_empty() {
            return;
        }
        let (c0, c1) = cover(rect.left, rect.right, self.width);
        let (r0, r1) = cover(rect.top, rect.bottom, self.height);
        let style = CellStyle {
            color: Some(paint.color),
            bold: false,
        };
        let mut buf = [0u8; 4];
        let glyph: &str = paint.glyph.encode_utf8(&mut buf);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, glyph, 1, style);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint) {
        if !x.is_finite() || !y.is_finite() || y < 0.0 {
            return;
        }
        let row = y.floor() as usize;
        if row >= self.height {
            return;
        }

        let text_width = text.width() as f32;
        let start = match paint.align {
            TextAlign::Left => x,
            TextAlign::Center => x - text_width / 2.0,
            TextAlign::Right => x - text_width,
        };
        let style = CellStyle {
            color: Some(paint.color),
            bold: paint.bold,
        };

        let mut col = start.floor() as i64;
        for grapheme in text.graphemes(true) {
            let span = grapheme.width();
            if span == 0 {
                continue;
            }
            if col >= self.width as i64 || col + span as i64 > self.width as i64 {
                break;
            }
            if col >= 0 {
                self.put(col as usize, row, grapheme, span, style);
            }
            col += span as i64;
        }
    }
}
