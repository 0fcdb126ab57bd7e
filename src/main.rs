use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortscope::{events, ui, Algorithm, App, Direction, Overrides, PlotFrame, Settings};

#[derive(Parser, Debug)]
#[command(name = "sortscope")]
#[command(about = "Watch sorting algorithms work, one comparison at a time")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of bars
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Smallest generated value
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,

    /// Largest generated value
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,

    /// Ticks (sort steps) per second
    #[arg(short, long)]
    tick_rate: Option<u32>,

    /// Algorithm selected at startup
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Start in descending order
    #[arg(short, long)]
    descending: bool,

    /// Seed for array generation
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            array_size: self.size,
            min_value: self.min,
            max_value: self.max,
            tick_rate: self.tick_rate,
            algorithm: self.algorithm,
            direction: self.descending.then_some(Direction::Descending),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?.apply(args.overrides());
    settings.validate()?;

    if let Some(ref path) = settings.log_file {
        init_logging(path)?;
    }
    info!(?settings, "starting");

    run_tui(&settings)
}

/// Send tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortscope=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(settings: &Settings) -> Result<()> {
    // Detect the background before raw mode takes over the terminal
    let theme = ui::Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let size = terminal.size()?;
    let mut app =
        App::new(settings, ui::plot_canvas(size.width, size.height)).with_theme(theme);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Fixed-rate loop: one controller tick and one draw per interval, with
/// input handled while waiting for the next tick.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    settings: &Settings,
) -> Result<()> {
    let interval = settings.tick_interval();
    let mut plot = PlotFrame::new();
    let mut next_tick = Instant::now();

    while app.running {
        app.tick(&mut plot);
        terminal.draw(|frame| ui::render(frame, app, &plot))?;

        next_tick += interval;
        let now = Instant::now();
        if next_tick < now {
            // Fell behind (slow terminal); don't try to catch up
            next_tick = now;
        }

        // Drain input until the next tick is due
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            let Some(event) = events::poll_event(timeout)? else {
                break;
            };
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(width, height) => app.resize(ui::plot_canvas(width, height)),
                _ => {}
            }
            if !app.running || timeout.is_zero() {
                break;
            }
        }
    }

    info!("quit");
    Ok(())
}
