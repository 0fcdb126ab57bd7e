//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`chart`]: the bar chart widget ([`BarPlot`])
//! - [`common`]: title, instruction lines, status bar and help overlay
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Screen Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Title (common::render_title)         │
//! │ Instructions (2 lines)               │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Bar chart (chart::BarPlot)           │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Help overlay rendered on top (common::render_help)
//! ```
//!
//! The chart draws the last frame handed to the [`PlotFrame`] sink by the
//! session controller, not the live array.

pub mod chart;
pub mod common;
pub mod theme;

pub use chart::BarPlot;
pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Canvas;
use crate::render::PlotFrame;

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Split the screen into title, instructions, chart and status bar.
fn screen_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(2), // Instructions
        Constraint::Min(4),    // Chart
        Constraint::Length(1), // Status bar
    ])
    .areas(area)
}

fn chart_block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

/// Size of the region the bars are drawn in, for a terminal of the given size.
pub fn plot_canvas(width: u16, height: u16) -> Canvas {
    let [_, _, chart, _] = screen_areas(Rect::new(0, 0, width, height));
    let inner = Block::default().borders(Borders::ALL).inner(chart);
    Canvas::new(inner.width, inner.height)
}

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &App, plot: &PlotFrame) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(
            0,
            (area.height / 2).saturating_sub(2),
            area.width,
            5.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let [title, instructions, chart, status] = screen_areas(area);

    common::render_title(frame, app, title);
    common::render_instructions(frame, app, instructions);
    render_chart(frame, app, plot, chart);
    common::render_status_bar(frame, app, status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Render the bordered chart region from the latest plot frame.
fn render_chart(frame: &mut Frame, app: &App, plot: &PlotFrame, area: Rect) {
    let block = chart_block(app);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if plot.full_redraw {
        frame.render_widget(Clear, inner);
    }
    let bars = BarPlot::new(&plot.values, &plot.highlights, app.array().layout(), &app.theme);
    frame.render_widget(bars, inner);
}
