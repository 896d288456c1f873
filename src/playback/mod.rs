//! Playback controller
//!
//! [`Player`] owns the producer of the current run and publishes the latest
//! [`Step`]. It advances in two ways:
//!
//! - [`Player::step`]: exactly one producer step, on demand
//! - auto-advance: while playing, one repeating timer is armed on the
//!   [`Scheduler`]; every firing delivered through [`Player::pump`] performs
//!   one `step`
//!
//! # Timer discipline
//!
//! At most one timer handle is live. It is cancelled whenever playback stops
//! (pause, completion, failure, `load`, `reset`, drop) before anything else
//! happens, and firings of any other handle are ignored. A speed change does
//! not touch the in-flight wait: the timer is re-armed with the new interval
//! when it next fires.

mod scheduler;
mod speed;

pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, TimerHandle};
pub use speed::SpeedTier;

use crate::dataset::Dataset;
use crate::errors::{PlaybackError, ProducerError};
use crate::producer::StepProducer;
use crate::registry::{Algorithm, Visualizer};
use crate::step::Step;
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Result of a single [`Player::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new step was published
    Advanced,
    /// The producer is exhausted; the run is now complete
    Finished,
    /// The run had already completed, nothing changed
    AlreadyComplete,
    /// Nothing is loaded
    NotReady,
}

pub struct Player<S: Scheduler> {
    scheduler: S,
    algorithm: Algorithm,
    visualizer: Visualizer,
    dataset: Option<Dataset>,
    producer: Option<Box<dyn StepProducer>>,
    current: Option<Step>,
    step_count: usize,
    playing: bool,
    complete: bool,
    speed: SpeedTier,
    /// Live timer and the interval it was armed with
    timer: Option<(TimerHandle, Duration)>,
    failure: Option<ProducerError>,
}

impl<S: Scheduler> Player<S> {
    pub fn new(scheduler: S, algorithm: Algorithm) -> Self {
        Player {
            scheduler,
            algorithm,
            visualizer: algorithm.default_visualizer(),
            dataset: None,
            producer: None,
            current: None,
            step_count: 0,
            playing: false,
            complete: false,
            speed: SpeedTier::default(),
            timer: None,
            failure: None,
        }
    }

    /// Replace the dataset and start a fresh run over it
    pub fn load(&mut self, dataset: Dataset) -> Result<(), PlaybackError> {
        debug!(
            algorithm = self.algorithm.id(),
            len = dataset.len(),
            target = ?dataset.target,
            "loading dataset"
        );
        self.dataset = Some(dataset);
        self.install()
    }

    /// Switch algorithm and view, rerunning the last dataset
    pub fn select(&mut self, algorithm: Algorithm, visualizer: Visualizer) -> Result<(), PlaybackError> {
        self.choose(algorithm, visualizer)?;
        if self.dataset.is_some() {
            self.install()
        } else {
            self.stop();
            Ok(())
        }
    }

    /// Switch algorithm and view and start a run over a new dataset
    pub fn switch(
        &mut self,
        algorithm: Algorithm,
        visualizer: Visualizer,
        dataset: Dataset,
    ) -> Result<(), PlaybackError> {
        self.choose(algorithm, visualizer)?;
        self.dataset = Some(dataset);
        self.install()
    }

    fn choose(&mut self, algorithm: Algorithm, visualizer: Visualizer) -> Result<(), PlaybackError> {
        if !algorithm.supports(visualizer) {
            return Err(PlaybackError::UnsupportedView {
                algorithm: algorithm.id(),
                visualizer: visualizer.name(),
            });
        }
        debug!(algorithm = algorithm.id(), %visualizer, "selecting algorithm");
        self.algorithm = algorithm;
        self.visualizer = visualizer;
        Ok(())
    }

    /// Replay the last dataset from the beginning
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        debug!(algorithm = self.algorithm.id(), "resetting run");
        if self.dataset.is_some() {
            self.install()
        } else {
            self.stop();
            Ok(())
        }
    }

    fn clear(&mut self) {
        self.stop();
        self.producer = None;
        self.current = None;
        self.step_count = 0;
        self.complete = false;
        self.failure = None;
    }

    fn install(&mut self) -> Result<(), PlaybackError> {
        self.clear();
        let Some(dataset) = self.dataset.as_ref() else {
            return Ok(());
        };
        let producer = self.algorithm.producer(self.visualizer, dataset)?;
        self.current = Some(self.algorithm.ready_step(self.visualizer, dataset)?);
        self.producer = Some(producer);
        Ok(())
    }

    /// Pull exactly one step from the producer
    pub fn step(&mut self) -> Result<StepOutcome, PlaybackError> {
        if self.complete {
            return Ok(StepOutcome::AlreadyComplete);
        }
        let Some(producer) = self.producer.as_mut() else {
            return Ok(StepOutcome::NotReady);
        };

        match producer.next_step() {
            Ok(Some(step)) => {
                self.step_count += 1;
                trace!(count = self.step_count, line = ?step.source_line(), "{}", step.description());
                self.current = Some(step);
                Ok(StepOutcome::Advanced)
            }
            Ok(None) => {
                self.complete = true;
                self.stop();
                info!(algorithm = self.algorithm.id(), steps = self.step_count, "run complete");
                Ok(StepOutcome::Finished)
            }
            Err(err) => {
                self.complete = true;
                self.stop();
                self.producer = None;
                error!(algorithm = self.algorithm.id(), error = %err, "producer failed");
                self.failure = Some(err.clone());
                Err(err.into())
            }
        }
    }

    /// Flip auto-advance, returning the new state. No-op once complete.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.stop();
        } else if !self.complete && self.producer.is_some() {
            self.playing = true;
            self.arm();
        }
        self.playing
    }

    /// Takes effect the next time the timer fires
    pub fn set_speed(&mut self, speed: SpeedTier) {
        debug!(speed = speed.label(), "speed changed");
        self.speed = speed;
    }

    /// Deliver due timer firings, one step each. Returns the steps advanced.
    pub fn pump(&mut self) -> Result<usize, PlaybackError> {
        self.pump_each(|_| {})
    }

    /// Like [`pump`](Self::pump), handing every published step to `on_step`
    ///
    /// Views that accumulate state across steps (the recursion tree) use this
    /// so a backlog of several firings never skips a step.
    pub fn pump_each(&mut self, mut on_step: impl FnMut(&Step)) -> Result<usize, PlaybackError> {
        let mut advanced = 0;
        for handle in self.scheduler.poll_due() {
            let Some((live, interval)) = self.timer else {
                break;
            };
            if handle != live {
                continue;
            }
            if self.step()? != StepOutcome::Advanced {
                break;
            }
            if let Some(step) = self.current.as_ref() {
                on_step(step);
            }
            advanced += 1;
            if interval != self.speed.interval() {
                self.arm();
            }
        }
        Ok(advanced)
    }

    fn arm(&mut self) {
        self.disarm();
        let interval = self.speed.interval();
        let handle = self.scheduler.schedule_repeating(interval);
        self.timer = Some((handle, interval));
    }

    fn disarm(&mut self) {
        if let Some((handle, _)) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn stop(&mut self) {
        self.playing = false;
        self.disarm();
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.current.as_ref()
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Loaded and not failed
    pub fn is_ready(&self) -> bool {
        self.producer.is_some()
    }

    pub fn speed(&self) -> SpeedTier {
        self.speed
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn visualizer(&self) -> Visualizer {
        self.visualizer
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Error that aborted the current run
    pub fn failure(&self) -> Option<&ProducerError> {
        self.failure.as_ref()
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Pseudocode of the running producer and the line to highlight
    pub fn source_view(&self) -> (&'static str, Option<usize>) {
        let source = self.algorithm.source(self.visualizer).unwrap_or_default();
        (source, self.current.as_ref().and_then(Step::source_line))
    }

    /// Run a producer that did not come from the registry
    ///
    /// The run has no dataset, so `reset` only stops it.
    pub fn load_producer(&mut self, producer: Box<dyn StepProducer>) {
        self.dataset = None;
        self.clear();
        self.producer = Some(producer);
    }
}

impl<S: Scheduler> Drop for Player<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(algorithm: Algorithm, values: &[i64]) -> Player<ManualScheduler> {
        let mut player = Player::new(ManualScheduler::new(), algorithm);
        player.load(Dataset::new(values.to_vec())).unwrap();
        player
    }

    #[test]
    fn test_load_shows_ready_placeholder() {
        let player = player(Algorithm::BubbleSort, &[3, 1, 2]);
        let ready = player.current_step().unwrap();

        assert_eq!(player.step_count(), 0);
        assert!(ready.description().starts_with("Ready"));
        assert_eq!(ready.source_line(), None);
        assert!(!player.is_complete());
    }

    #[test]
    fn test_step_until_finished() {
        let mut player = player(Algorithm::BubbleSort, &[2, 1]);
        let mut advanced = 0;
        loop {
            match player.step().unwrap() {
                StepOutcome::Advanced => advanced += 1,
                StepOutcome::Finished => break,
                other => panic!("unexpected {:?}", other),
            }
        }

        assert_eq!(player.step_count(), advanced);
        assert!(player.is_complete());
        assert_eq!(player.step().unwrap(), StepOutcome::AlreadyComplete);
        assert_eq!(player.step_count(), advanced);
    }

    #[test]
    fn test_not_ready_without_dataset() {
        let mut player = Player::new(ManualScheduler::new(), Algorithm::QuickSort);
        assert_eq!(player.step().unwrap(), StepOutcome::NotReady);
        assert!(!player.toggle_play());
    }

    #[test]
    fn test_search_without_target_stays_not_ready() {
        let mut player = Player::new(ManualScheduler::new(), Algorithm::LinearSearch);
        let err = player.load(Dataset::new(vec![1, 2, 3])).unwrap_err();

        assert_eq!(err, PlaybackError::MissingTarget { algorithm: "linear-search" });
        assert_eq!(player.step().unwrap(), StepOutcome::NotReady);
        assert!(player.current_step().is_none());
    }

    #[test]
    fn test_source_view_follows_current_step() {
        let mut player = player(Algorithm::InsertionSort, &[2, 1]);
        let (source, line) = player.source_view();
        assert!(source.starts_with("procedure insertionSort"));
        assert_eq!(line, None);

        player.step().unwrap();
        assert_eq!(player.source_view().1, Some(1));
    }

    #[test]
    fn test_select_rejects_unsupported_view() {
        let mut player = player(Algorithm::BubbleSort, &[1]);
        assert!(player.select(Algorithm::BubbleSort, Visualizer::Tree).is_err());
        assert_eq!(player.visualizer(), Visualizer::Bars);
    }
}
