// algoviz: step-by-step sorting and searching visualizer

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algoviz::dataset::{Dataset, DatasetGenerator, InputProfile};
use algoviz::playback::{IntervalScheduler, Player, SpeedTier};
use algoviz::registry::{Algorithm, Visualizer};
use algoviz::step::Value;
use algoviz::ui::App;

#[derive(Parser, Debug)]
#[command(name = "algoviz", version, about = "Watch sorting and searching algorithms run step by step")]
struct Cli {
    /// Algorithm id or short name (bubble, selection, insertion, merge, quick, linear, binary)
    #[arg(short, long, default_value = "bubble-sort")]
    algorithm: Algorithm,

    /// View to render: bars, blocks or tree (defaults to the algorithm's own)
    #[arg(long)]
    view: Option<Visualizer>,

    /// Comma separated input values, e.g. 5,3,8,1
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<Value>>,

    /// Size of a random input (ignored with --values)
    #[arg(long)]
    size: Option<usize>,

    /// Search target (random value from the input when omitted)
    #[arg(long, allow_hyphen_values = true)]
    target: Option<Value>,

    /// Seed for reproducible random inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Playback speed: 0.25x, 0.5x, 1x, 2x or 4x
    #[arg(long, default_value = "1x", value_parser = parse_speed)]
    speed: SpeedTier,

    /// Print every step as a JSON line instead of starting the TUI
    #[arg(long)]
    trace: bool,

    /// Write logs here (the TUI owns the terminal, so nothing is logged without it)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_speed(s: &str) -> Result<SpeedTier, String> {
    SpeedTier::from_label(s)
        .ok_or_else(|| format!("unknown speed '{}' (expected 0.25x, 0.5x, 1x, 2x or 4x)", s))
}

fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Dataset the run starts with: explicit values, a random input, or the
/// view's fixed startup data
fn build_dataset(
    cli: &Cli,
    visualizer: Visualizer,
    generator: &mut DatasetGenerator,
) -> Result<Dataset> {
    let mut dataset = match (&cli.values, cli.size) {
        (Some(values), _) => Dataset::new(values.clone()),
        (None, Some(size)) => generator.dataset(visualizer, size),
        (None, None) if cli.seed.is_some() => {
            let size = InputProfile::for_visualizer(visualizer).default_size;
            generator.dataset(visualizer, size)
        }
        (None, None) => Dataset::initial(visualizer),
    };

    if let Some(target) = cli.target {
        dataset.target = Some(target);
    } else if cli.algorithm.is_search() && dataset.target.is_none() {
        dataset.target = generator.target(&dataset.values);
        if dataset.target.is_none() {
            bail!("{} needs --target when the input is empty", cli.algorithm);
        }
    }
    Ok(dataset)
}

/// Headless run: one JSON object per step on stdout
fn trace(algorithm: Algorithm, visualizer: Visualizer, dataset: &Dataset) -> Result<()> {
    let mut producer = algorithm.producer(visualizer, dataset)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;
    while let Some(step) = producer.next_step()? {
        serde_json::to_writer(&mut out, &step)?;
        writeln!(out)?;
        count += 1;
    }
    tracing::info!(algorithm = algorithm.id(), steps = count, "trace complete");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.trace)?;

    let algorithm = cli.algorithm;
    let visualizer = cli.view.unwrap_or_else(|| algorithm.default_visualizer());
    if !algorithm.supports(visualizer) {
        bail!("{} cannot be shown in the {} view", algorithm, visualizer);
    }

    let mut generator = DatasetGenerator::new(cli.seed);
    let dataset = build_dataset(&cli, visualizer, &mut generator)?;
    tracing::debug!(algorithm = algorithm.id(), %visualizer, len = dataset.len(), "starting");

    if cli.trace {
        return trace(algorithm, visualizer, &dataset);
    }

    let mut player = Player::new(IntervalScheduler::new(), algorithm);
    player.set_speed(cli.speed);
    player.switch(algorithm, visualizer, dataset)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player, generator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
