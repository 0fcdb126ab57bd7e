//! Bar chart of the array being sorted.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::data::LayoutMetrics;
use crate::sort::Highlights;
use crate::ui::Theme;

/// Partial block characters (eighths of a row, from one to eight).
const BAR_CHARS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// One bar per value, bottom-aligned, coloured by highlight role.
///
/// Geometry comes from the [`LayoutMetrics`] captured at reset, so bars keep
/// their width and scale for the whole sort. Bars that fall outside the area
/// are clipped.
pub struct BarPlot<'a> {
    values: &'a [i64],
    highlights: &'a Highlights,
    layout: &'a LayoutMetrics,
    theme: &'a Theme,
}

impl<'a> BarPlot<'a> {
    pub fn new(
        values: &'a [i64],
        highlights: &'a Highlights,
        layout: &'a LayoutMetrics,
        theme: &'a Theme,
    ) -> Self {
        Self {
            values,
            highlights,
            layout,
            theme,
        }
    }
}

impl Widget for BarPlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let bar_width = usize::from(self.layout.bar_width.max(1));
        let max_eighths = u32::from(area.height) * 8;

        for (index, &value) in self.values.iter().enumerate() {
            let left = usize::from(area.x) + index * bar_width;
            if left >= usize::from(area.right()) {
                break;
            }

            let color = self.theme.bar_color(index, self.highlights.role(index));
            let eighths = self.layout.bar_eighths(value).min(max_eighths);
            let full_rows = (eighths / 8) as u16;
            let remainder = (eighths % 8) as usize;

            let right = (left + bar_width).min(usize::from(area.right()));
            for x in (left..right).map(|x| x as u16) {
                for row in 0..full_rows {
                    if let Some(cell) = buf.cell_mut((x, area.bottom() - 1 - row)) {
                        cell.set_symbol(BAR_CHARS[7]).set_fg(color);
                    }
                }
                if remainder > 0 && full_rows < area.height {
                    if let Some(cell) = buf.cell_mut((x, area.bottom() - 1 - full_rows)) {
                        cell.set_symbol(BAR_CHARS[remainder - 1]).set_fg(color);
                    }
                }
            }
        }
    }
}
