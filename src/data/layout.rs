//! Layout metrics derived from the array on every reset.
//!
//! Metrics are fixed for the lifetime of a sort so that bars keep a stable
//! width and height scale while values move around.

/// Size of the plot region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bar geometry for one array generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Smallest value in the array at reset time.
    pub min: i64,
    /// Largest value in the array at reset time.
    pub max: i64,
    /// Columns per bar (at least one).
    pub bar_width: u16,
    /// Rows per unit of `value - min`.
    pub unit_height: f64,
}

impl LayoutMetrics {
    /// Compute metrics for `values` drawn on `canvas`.
    ///
    /// An empty array or a zero value range never divides by zero: the
    /// range is clamped to one.
    pub fn compute(values: &[i64], canvas: Canvas) -> Self {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let count = values.len().max(1);

        let bar_width = (usize::from(canvas.width) / count).clamp(1, usize::from(u16::MAX)) as u16;
        // abs_diff: the full i64 range does not fit in an i64
        let range = max.abs_diff(min).max(1);
        let unit_height = f64::from(canvas.height) / range as f64;

        Self {
            min,
            max,
            bar_width,
            unit_height,
        }
    }

    /// Height of a bar in eighths of a row, the resolution of the block
    /// glyphs used to draw it.
    pub fn bar_eighths(&self, value: i64) -> u32 {
        if value <= self.min {
            return 0;
        }
        let above_min = value.abs_diff(self.min) as f64;
        (above_min * self.unit_height * 8.0).round() as u32
    }
}
