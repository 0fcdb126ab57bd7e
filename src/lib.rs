//! # sortscope
//!
//! A terminal visualizer that animates comparison sorts one step at a time.
//!
//! Every algorithm is written as a resumable state machine that performs a
//! single comparison or mutation per call. A fixed-rate tick loop pulls one
//! step per tick and redraws the array as a bar chart, highlighting the bars
//! that step touched.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐  advance  ┌──────────┐                          │
//! │  │  app    │──────────▶│   sort   │── mutates ──▶ data       │
//! │  │ (state) │◀── Step ──│(sequencer)                          │
//! │  └────┬────┘           └──────────┘                          │
//! │       │ render_frame                                         │
//! │       ▼                                                      │
//! │  ┌─────────┐    ┌─────────┐    ┌──────────┐                  │
//! │  │ render  │───▶│   ui    │───▶│ Terminal │                  │
//! │  │ (sink)  │    │(ratatui)│    │          │                  │
//! │  └─────────┘    └─────────┘    └──────────┘                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Idle/Running session controller and user commands
//! - **[`sort`]**: the five step sequencers ([`StepSequencer`]) and the
//!   [`Algorithm`]/[`Direction`] selectors
//! - **[`data`]**: the array being sorted ([`SortArray`]) and its layout metrics
//! - **[`render`]**: the [`FrameSink`] contract between controller and display
//! - **[`ui`]**: ratatui drawing of the chart, chrome and help overlay
//! - **[`config`]**: layered [`Settings`] (defaults, file, environment, CLI)
//!
//! ## Usage
//!
//! ```bash
//! sortscope --algorithm merge --size 80
//! ```
//!
//! ### Driving a sort without a terminal
//!
//! ```
//! use sortscope::{App, Canvas, Command, PlotFrame, Settings};
//!
//! let settings = Settings { array_size: 16, seed: Some(7), ..Settings::default() };
//! let mut app = App::new(&settings, Canvas::new(80, 20));
//! let mut plot = PlotFrame::new();
//!
//! app.apply(Command::StartSort);
//! while app.is_sorting() {
//!     app.tick(&mut plot);
//! }
//! assert!(app.direction().is_sorted(app.array().values()));
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod render;
pub mod sort;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Command, SessionState};
pub use config::{Overrides, Settings};
pub use data::{Canvas, LayoutMetrics, SortArray};
pub use render::{FrameSink, PlotFrame};
pub use sort::{Algorithm, Direction, Highlights, Role, Step, StepSequencer};
