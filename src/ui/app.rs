//! Main TUI application state and logic

use crate::constants::FRAME_POLL_MS;
use crate::dataset::{Dataset, DatasetGenerator, InputProfile};
use crate::playback::{IntervalScheduler, Player, SpeedTier, StepOutcome};
use crate::projection::tree::TreeView;
use crate::registry::{Algorithm, Visualizer};
use crate::step::Step;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{self, RunState, SourceScrollState, StatusRenderData};
use super::theme::DEFAULT_THEME;

/// The main application state
pub struct App {
    /// Playback controller of the visible run
    pub player: Player<IntervalScheduler>,

    /// Source of random datasets and targets
    generator: DatasetGenerator,

    /// Recursion tree rebuilt from the tree steps seen so far
    tree: TreeView,

    source_scroll: SourceScrollState,

    /// Requested input size for randomized datasets
    size: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app around a loaded player
    pub fn new(player: Player<IntervalScheduler>, generator: DatasetGenerator) -> Self {
        let size = player
            .dataset()
            .map(Dataset::len)
            .unwrap_or_else(|| InputProfile::for_visualizer(player.visualizer()).default_size);
        let mut app = App {
            player,
            generator,
            tree: TreeView::new(),
            source_scroll: SourceScrollState::default(),
            size,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };
        app.sync_tree();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame_poll = Duration::from_millis(FRAME_POLL_MS);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Wake up for whichever comes first: the next timer firing or a redraw
            let timeout = self
                .player
                .scheduler()
                .until_next()
                .map_or(frame_poll, |due| due.min(frame_poll));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Deliver due auto-advance ticks
    fn tick(&mut self) {
        if !self.player.is_playing() {
            return;
        }
        let tree = &mut self.tree;
        let result = self.player.pump_each(|step| {
            if let Some(tree_step) = step.as_tree() {
                tree.apply(tree_step);
            }
        });
        match result {
            Ok(_) if self.player.is_complete() => {
                self.status_message = "Run complete".to_string();
            }
            Ok(_) => {}
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Rebuild the tree view from the current step
    fn sync_tree(&mut self) {
        self.tree.clear();
        if let Some(step) = self.player.current_step().and_then(Step::as_tree) {
            self.tree.apply(step);
        }
    }

    fn load(&mut self, dataset: Dataset) {
        self.size = dataset.len();
        match self.player.load(dataset) {
            Ok(()) => {
                self.status_message = format!("Loaded {} values", self.size);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
        self.sync_tree();
    }

    /// Change algorithm and view, keeping the dataset when it suits the new view
    fn switch(&mut self, algorithm: Algorithm, visualizer: Visualizer) {
        let profile = InputProfile::for_visualizer(visualizer);
        let dataset = self
            .player
            .dataset()
            .filter(|d| {
                (profile.min_size..=profile.max_size).contains(&d.len())
                    && (!algorithm.is_search() || d.target.is_some())
            })
            .cloned()
            .unwrap_or_else(|| Dataset::initial(visualizer));
        self.size = dataset.len();

        match self.player.switch(algorithm, visualizer, dataset) {
            Ok(()) => {
                self.status_message = format!("{} ({} view)", algorithm, visualizer);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
        self.sync_tree();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        // Left column: visualization (top) | info (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[0]);

        let algorithm = self.player.algorithm();
        let info = algorithm.info();
        let title = format!("{} · {}", info.title, self.player.visualizer());
        let failure = self.player.failure().map(ToString::to_string);

        self.render_visualization(frame, left_rows[0], &title);

        panes::render_info_pane(
            frame,
            left_rows[1],
            &info,
            self.player
                .current_step()
                .map_or("Not ready", Step::description),
            failure.as_deref(),
        );

        let (source, line) = self.player.source_view();
        panes::render_source_pane(
            frame,
            columns[1],
            "Pseudocode",
            source,
            line,
            failure.is_some(),
            &mut self.source_scroll,
        );

        let state = if failure.is_some() {
            RunState::Failed
        } else if self.player.is_playing() {
            RunState::Playing
        } else if self.player.is_complete() {
            RunState::Done
        } else if self.player.step_count() == 0 {
            RunState::Start
        } else {
            RunState::Paused
        };
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                step_count: self.player.step_count(),
                speed_label: self.player.speed().label(),
                state,
            },
        );
    }

    fn render_visualization(&self, frame: &mut Frame, area: Rect, title: &str) {
        match self.player.current_step() {
            Some(Step::Sort(step)) => panes::render_array_pane(frame, area, title, step),
            Some(Step::Search(step)) => panes::render_search_pane(frame, area, title, step),
            Some(Step::Tree(_)) => panes::render_tree_pane(frame, area, title, &self.tree),
            None => {
                let block = Block::default()
                    .title(format!(" {} ", title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
                let paragraph = Paragraph::new("Nothing loaded. Press n for a new dataset.")
                    .style(Style::default().fg(DEFAULT_THEME.comment))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(paragraph, area);
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let visualizer = self.player.visualizer();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.player.toggle_play() {
                        "Playing...".to_string()
                    } else if self.player.is_complete() {
                        "Run complete, press r to replay".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Right => {
                if self.player.is_playing() {
                    self.player.toggle_play();
                }
                self.step_forward();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                match self.player.reset() {
                    Ok(()) => self.status_message = "Reset".to_string(),
                    Err(e) => self.status_message = format!("Error: {}", e),
                }
                self.sync_tree();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let dataset = self.generator.dataset(visualizer, self.size);
                self.load(dataset);
            }
            KeyCode::Char(c @ ('+' | '=' | '-' | '_')) => {
                let profile = InputProfile::for_visualizer(visualizer);
                let size = if matches!(c, '+' | '=') {
                    self.size.saturating_add(1)
                } else {
                    self.size.saturating_sub(1)
                };
                let size = profile.clamp_size(size);
                if size == self.size {
                    self.status_message =
                        format!("Size stays within {}..={}", profile.min_size, profile.max_size);
                } else {
                    let dataset = self.generator.dataset(visualizer, size);
                    self.load(dataset);
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                let tier = (c as usize) - ('1' as usize);
                if let Some(speed) = SpeedTier::new(tier) {
                    self.player.set_speed(speed);
                    self.status_message = format!("Speed {}", speed.label());
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                if let Some(dataset) = self.player.dataset().cloned() {
                    match self.generator.target(&dataset.values) {
                        Some(target) if self.player.algorithm().is_search() => {
                            self.load(dataset.with_target(target));
                        }
                        _ => self.status_message = "Target only applies to searches".to_string(),
                    }
                }
            }
            KeyCode::Char(c @ ('[' | ']')) => self.nudge_target(if c == ']' { 1 } else { -1 }),
            KeyCode::Char('v') | KeyCode::Char('V') => {
                let views = self.player.algorithm().visualizers();
                let at = views.iter().position(|&v| v == visualizer).unwrap_or(0);
                let next = views[(at + 1) % views.len()];
                if next == visualizer {
                    self.status_message = format!("{} has a single view", self.player.algorithm());
                } else {
                    self.switch(self.player.algorithm(), next);
                }
            }
            KeyCode::Tab => {
                let algorithm = self.player.algorithm().next();
                self.switch(algorithm, algorithm.default_visualizer());
            }
            _ => {}
        }
    }

    fn nudge_target(&mut self, delta: i64) {
        if !self.player.algorithm().is_search() {
            self.status_message = "Target only applies to searches".to_string();
            return;
        }
        if let Some(dataset) = self.player.dataset().cloned() {
            let target = dataset.target.unwrap_or_default().saturating_add(delta);
            self.load(dataset.with_target(target));
            self.status_message = format!("Target {}", target);
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.player.step() {
            Ok(StepOutcome::Advanced) => {
                if let Some(step) = self.player.current_step() {
                    if let Some(tree_step) = step.as_tree() {
                        self.tree.apply(tree_step);
                    }
                    self.status_message = "Stepped forward".to_string();
                }
            }
            Ok(StepOutcome::Finished) => {
                self.status_message = "Run complete".to_string();
            }
            Ok(StepOutcome::AlreadyComplete) => {
                self.status_message = "Run complete, press r to replay".to_string();
            }
            Ok(StepOutcome::NotReady) => {
                self.status_message = "Nothing to step, press n or r".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
