//! Session controller: the Idle/Running state machine driven by the tick loop.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::Settings;
use crate::data::{Canvas, SortArray};
use crate::render::FrameSink;
use crate::sort::{Algorithm, Direction, Highlights, StepSequencer};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// User commands, consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Regenerate the array. Cancels a running sort.
    Reset,
    StartSort,
    SetAscending,
    SetDescending,
    SelectAlgorithm(Algorithm),
    ToggleHelp,
}

/// Whether a sort is being drained.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A sort in progress, advanced one step per tick.
    Running(Box<dyn StepSequencer>),
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Running(_) => "Running",
        }
    }
}

/// Main application state.
pub struct App {
    /// Cleared by [`Command::Quit`]; the main loop exits when false.
    pub running: bool,
    pub show_help: bool,
    pub theme: Theme,

    array: SortArray,
    algorithm: Algorithm,
    direction: Direction,
    state: SessionState,

    // Array generation
    array_size: usize,
    min_value: i64,
    max_value: i64,
    rng: StdRng,

    /// Latest plot size; applied to the layout whenever the session is idle.
    canvas: Canvas,

    // Progress of the current (or last) run
    steps_taken: u64,
    last_pivot: Option<usize>,

    status_message: Option<(String, Instant)>,
}

impl App {
    /// Create an idle app with a freshly generated array and the dark theme.
    pub fn new(settings: &Settings, canvas: Canvas) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let array = SortArray::random(
            &mut rng,
            settings.array_size,
            settings.min_value,
            settings.max_value,
            canvas,
        );

        Self {
            running: true,
            show_help: false,
            theme: Theme::dark(),
            array,
            algorithm: settings.algorithm,
            direction: settings.direction,
            state: SessionState::Idle,
            array_size: settings.array_size,
            min_value: settings.min_value,
            max_value: settings.max_value,
            rng,
            canvas,
            steps_taken: 0,
            last_pivot: None,
            status_message: None,
        }
    }

    /// Replace the array with explicit values. Cancels a running sort.
    pub fn with_values(mut self, values: Vec<i64>) -> Self {
        self.state = SessionState::Idle;
        self.array = SortArray::from_values(values, self.canvas);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_sorting(&self) -> bool {
        self.state.is_running()
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn last_pivot(&self) -> Option<usize> {
        self.last_pivot
    }

    /// Number of bars that fit in the plot. Bars past the right edge are
    /// clipped when the array is wider than the terminal.
    pub fn visible_bars(&self) -> usize {
        let bar_width = usize::from(self.array.layout().bar_width.max(1));
        self.array.len().min(usize::from(self.canvas.width) / bar_width)
    }

    /// Title shown above the chart, e.g. "Merge Sort - Descending".
    pub fn title(&self) -> String {
        format!("{} - {}", self.algorithm.label(), self.direction.label())
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Apply a user command.
    ///
    /// Selection and direction changes are ignored while a sort is running.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::Reset => self.reset(),
            Command::ToggleHelp => self.show_help = !self.show_help,
            _ if self.is_sorting() => {
                debug!(?command, "ignored while sorting");
            }
            Command::StartSort => self.start(),
            Command::SetAscending => self.direction = Direction::Ascending,
            Command::SetDescending => self.direction = Direction::Descending,
            Command::SelectAlgorithm(algorithm) => self.algorithm = algorithm,
        }
    }

    /// Begin sorting the current array with the selected algorithm.
    fn start(&mut self) {
        let sequencer = self.algorithm.sequencer(self.array.len(), self.direction);
        self.state = SessionState::Running(sequencer);
        self.steps_taken = 0;
        self.last_pivot = None;
        info!(
            algorithm = %self.algorithm,
            direction = self.direction.label(),
            len = self.array.len(),
            "sort started"
        );
    }

    /// Drop any running sort and generate a new array.
    fn reset(&mut self) {
        if self.is_sorting() {
            info!(steps = self.steps_taken, "sort cancelled");
        }
        self.state = SessionState::Idle;
        self.array.relayout(self.canvas);
        self.array.reset(&mut self.rng, self.array_size, self.min_value, self.max_value);
        self.steps_taken = 0;
        self.last_pivot = None;
        debug!(len = self.array.len(), "array regenerated");
    }

    /// Record a new plot size. The layout follows it while idle; a running
    /// sort keeps its layout until it ends.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        if !self.is_sorting() {
            self.array.relayout(canvas);
        }
    }

    /// Advance one tick, handing exactly one frame to `sink`.
    ///
    /// While running, one step is pulled from the sequencer and its
    /// highlights are rendered. A sequencer that has nothing left ends the
    /// run and the tick renders a plain frame, as does every idle tick.
    pub fn tick(&mut self, sink: &mut impl FrameSink) {
        if let SessionState::Running(sequencer) = &mut self.state {
            if let Some(step) = sequencer.advance(self.array.values_mut()) {
                self.steps_taken += 1;
                if step.pivot.is_some() {
                    self.last_pivot = step.pivot;
                }
                sink.render_frame(self.array.values(), &step.highlights, true);
                return;
            }
            self.finish();
        }
        sink.render_frame(self.array.values(), &Highlights::new(), false);
    }

    fn finish(&mut self) {
        self.state = SessionState::Idle;
        if self.array.canvas() != self.canvas {
            self.array.relayout(self.canvas);
        }
        info!(
            algorithm = %self.algorithm,
            steps = self.steps_taken,
            "sort finished"
        );
        self.set_status_message(format!(
            "{} finished in {} steps",
            self.algorithm.label(),
            self.steps_taken
        ));
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
