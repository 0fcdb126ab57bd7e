//! Frame sink contract between the session controller and the display.
//!
//! The controller hands exactly one frame to a [`FrameSink`] per tick. The
//! terminal UI uses [`PlotFrame`], which keeps the latest frame around until
//! ratatui draws it.

use crate::sort::Highlights;

/// Receives the array state to display for one tick.
pub trait FrameSink {
    /// Present `values` with `highlights` applied.
    ///
    /// `full_redraw` asks for the plot area to be cleared before the bars are
    /// drawn; it is set for frames produced by a sort step.
    fn render_frame(&mut self, values: &[i64], highlights: &Highlights, full_redraw: bool);
}

/// The most recent frame handed to the sink.
#[derive(Debug, Clone, Default)]
pub struct PlotFrame {
    pub values: Vec<i64>,
    pub highlights: Highlights,
    pub full_redraw: bool,
    /// Frames received so far.
    pub frames: u64,
}

impl PlotFrame {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for PlotFrame {
    fn render_frame(&mut self, values: &[i64], highlights: &Highlights, full_redraw: bool) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.highlights.clone_from(highlights);
        self.full_redraw = full_redraw;
        self.frames += 1;
    }
}
