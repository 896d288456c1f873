// Integration tests for the playback controller and its timer discipline

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use algoviz::dataset::Dataset;
use algoviz::errors::{PlaybackError, ProducerError};
use algoviz::playback::{ManualScheduler, Player, Scheduler, SpeedTier, StepOutcome, TimerHandle};
use algoviz::producer::ActionProducer;
use algoviz::projection::tree::TreeView;
use algoviz::registry::{Algorithm, Visualizer};
use algoviz::step::{SearchKind, SortStep, Step};

const ONE_X: Duration = Duration::from_millis(250);

fn playing(algorithm: Algorithm, values: &[i64]) -> Player<ManualScheduler> {
    let mut player = Player::new(ManualScheduler::new(), algorithm);
    player.load(Dataset::new(values.to_vec())).unwrap();
    assert!(player.toggle_play());
    player
}

fn advance(player: &mut Player<ManualScheduler>, dt: Duration) -> usize {
    player.scheduler_mut().advance(dt);
    player.pump().unwrap()
}

/// Scheduler shared with the test so it can be inspected after the player is gone
#[derive(Clone, Default)]
struct SharedScheduler(Rc<RefCell<ManualScheduler>>);

impl Scheduler for SharedScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.0.borrow_mut().schedule_repeating(interval)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().cancel(handle)
    }

    fn poll_due(&mut self) -> Vec<TimerHandle> {
        self.0.borrow_mut().poll_due()
    }

    fn active_timers(&self) -> usize {
        self.0.borrow().active_timers()
    }
}

/// Yields one step, then fails
struct Failing {
    pending: VecDeque<SortStep>,
    calls: usize,
}

impl Failing {
    fn new() -> Self {
        Failing {
            pending: VecDeque::new(),
            calls: 0,
        }
    }
}

impl ActionProducer for Failing {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        self.calls += 1;
        if self.calls == 1 {
            self.pending
                .push_back(SortStep::new(&[2, 1], &BTreeSet::new(), "first"));
            Ok(true)
        } else {
            Err(ProducerError::Failed {
                algorithm: "failing",
                message: "lost track of the array".to_string(),
            })
        }
    }
}

#[test]
fn test_one_step_per_tick() {
    let mut player = playing(Algorithm::BubbleSort, &[5, 4, 3, 2, 1]);

    assert_eq!(advance(&mut player, Duration::from_millis(249)), 0);
    assert_eq!(advance(&mut player, Duration::from_millis(1)), 1);
    assert_eq!(advance(&mut player, ONE_X * 3), 3);
    assert_eq!(player.step_count(), 4);
    assert_eq!(player.scheduler().active_timers(), 1);
}

#[test]
fn test_finish_cancels_timer() {
    let mut player = playing(Algorithm::InsertionSort, &[3, 1, 2]);
    advance(&mut player, Duration::from_secs(600));

    assert!(player.is_complete());
    assert!(!player.is_playing());
    assert!(!player.has_live_timer());
    assert_eq!(player.scheduler().active_timers(), 0);
    assert!(player.current_step().unwrap().is_terminal());

    // Nothing more arrives and play stays off
    let count = player.step_count();
    assert_eq!(advance(&mut player, Duration::from_secs(10)), 0);
    assert_eq!(player.step_count(), count);
    assert!(!player.toggle_play());
}

#[test]
fn test_pause_cancels_timer() {
    let mut player = playing(Algorithm::SelectionSort, &[4, 3, 2, 1]);
    advance(&mut player, ONE_X);

    assert!(!player.toggle_play());
    assert_eq!(player.scheduler().active_timers(), 0);
    assert_eq!(advance(&mut player, Duration::from_secs(5)), 0);
    assert_eq!(player.step_count(), 1);

    // Resuming arms exactly one timer again
    assert!(player.toggle_play());
    assert_eq!(player.scheduler().active_timers(), 1);
    assert_eq!(advance(&mut player, ONE_X), 1);
}

#[test]
fn test_reset_and_load_cancel_timer() {
    let mut player = playing(Algorithm::QuickSort, &[9, 7, 5, 3, 1]);
    advance(&mut player, ONE_X * 4);

    player.reset().unwrap();
    assert!(!player.is_playing());
    assert_eq!(player.scheduler().active_timers(), 0);
    assert_eq!(player.step_count(), 0);
    assert!(player.current_step().unwrap().description().starts_with("Ready"));

    assert!(player.toggle_play());
    player.load(Dataset::new(vec![1, 2])).unwrap();
    assert!(!player.is_playing());
    assert_eq!(player.scheduler().active_timers(), 0);
    assert_eq!(advance(&mut player, Duration::from_secs(1)), 0);
}

#[test]
fn test_reset_replays_the_same_run() {
    let mut player = Player::new(ManualScheduler::new(), Algorithm::MergeSort);
    player
        .select(Algorithm::MergeSort, Visualizer::Bars)
        .unwrap();
    player.load(Dataset::new(vec![4, 2, 3, 1])).unwrap();

    let mut first = Vec::new();
    while player.step().unwrap() == StepOutcome::Advanced {
        first.push(player.current_step().cloned().unwrap());
    }
    player.reset().unwrap();
    let mut second = Vec::new();
    while player.step().unwrap() == StepOutcome::Advanced {
        second.push(player.current_step().cloned().unwrap());
    }
    assert_eq!(first, second);
}

#[test]
fn test_drop_cancels_timer() {
    let shared = SharedScheduler::default();
    {
        let mut player = Player::new(shared.clone(), Algorithm::BubbleSort);
        player.load(Dataset::new(vec![2, 1])).unwrap();
        assert!(player.toggle_play());
        assert_eq!(shared.active_timers(), 1);
    }
    assert_eq!(shared.active_timers(), 0);
}

#[test]
fn test_speed_change_applies_at_next_tick() {
    let mut player = playing(Algorithm::BubbleSort, &[8, 7, 6, 5, 4, 3, 2, 1]);
    player.set_speed(SpeedTier::FASTEST);

    // The wait already in flight keeps the old interval
    assert_eq!(advance(&mut player, Duration::from_millis(200)), 0);
    assert_eq!(advance(&mut player, Duration::from_millis(50)), 1);

    // Re-armed at 50ms
    assert_eq!(advance(&mut player, Duration::from_millis(50)), 1);
    assert_eq!(advance(&mut player, Duration::from_millis(100)), 2);
    assert_eq!(player.scheduler().active_timers(), 1);
}

#[test]
fn test_stale_firings_are_ignored() {
    let mut player = playing(Algorithm::BubbleSort, &[8, 7, 6, 5, 4, 3, 2, 1]);
    player.set_speed(SpeedTier::FASTEST);

    // Four firings of the 1x timer are due; only the first counts, the rest
    // belong to a cancelled handle
    assert_eq!(advance(&mut player, ONE_X * 4), 1);
    assert_eq!(player.step_count(), 1);
    assert_eq!(player.scheduler().active_timers(), 1);
}

#[test]
fn test_failure_freezes_the_run() {
    let mut player = Player::new(ManualScheduler::new(), Algorithm::BubbleSort);
    player.load_producer(Box::new(Failing::new()));

    assert_eq!(player.step().unwrap(), StepOutcome::Advanced);
    let err = player.step().unwrap_err();
    assert!(matches!(err, PlaybackError::Producer(ProducerError::Failed { .. })));

    assert!(player.is_complete());
    assert!(!player.is_ready());
    assert!(player.failure().is_some());
    assert_eq!(player.step_count(), 1);
    assert_eq!(player.current_step().unwrap().description(), "first");

    assert_eq!(player.step().unwrap(), StepOutcome::AlreadyComplete);
    assert_eq!(player.step_count(), 1);
}

#[test]
fn test_failure_while_playing_stops_timer() {
    let mut player = Player::new(ManualScheduler::new(), Algorithm::BubbleSort);
    player.load_producer(Box::new(Failing::new()));
    assert!(player.toggle_play());

    player.scheduler_mut().advance(ONE_X * 3);
    assert!(player.pump().is_err());
    assert!(!player.is_playing());
    assert_eq!(player.scheduler().active_timers(), 0);
    assert_eq!(player.step_count(), 1);
}

#[test]
fn test_select_reruns_last_dataset() {
    let mut player = playing(Algorithm::BubbleSort, &[3, 1, 2]);
    advance(&mut player, ONE_X * 2);

    player.select(Algorithm::QuickSort, Visualizer::Tree).unwrap();
    assert_eq!(player.step_count(), 0);
    assert!(!player.is_playing());
    assert_eq!(player.scheduler().active_timers(), 0);
    let ready = player.current_step().and_then(Step::as_tree).unwrap();
    assert_eq!(ready.values, vec![3, 1, 2]);
}

#[test]
fn test_switch_to_search_with_initial_blocks() {
    let mut player = Player::new(ManualScheduler::new(), Algorithm::BubbleSort);
    player
        .switch(
            Algorithm::BinarySearch,
            Visualizer::Blocks,
            Dataset::initial(Visualizer::Blocks),
        )
        .unwrap();

    let ready = player.current_step().and_then(Step::as_search).unwrap();
    assert_eq!(ready.target, 45);
    assert!(ready.array.windows(2).all(|w| w[0] <= w[1]));

    while player.step().unwrap() == StepOutcome::Advanced {}
    let last = player.current_step().and_then(Step::as_search).unwrap();
    assert_eq!(last.kind, SearchKind::Found);
}

#[test]
fn test_pump_each_feeds_every_tree_step() {
    let values = vec![6, 2, 9, 1, 5, 3];
    let mut player = Player::new(ManualScheduler::new(), Algorithm::MergeSort);
    player.load(Dataset::new(values.clone())).unwrap();
    assert_eq!(player.visualizer(), Visualizer::Tree);

    let mut view = TreeView::new();
    if let Some(ready) = player.current_step().and_then(Step::as_tree) {
        view.apply(ready);
    }
    assert!(player.toggle_play());
    player.scheduler_mut().advance(Duration::from_secs(600));
    let advanced = player
        .pump_each(|step| {
            if let Some(tree_step) = step.as_tree() {
                view.apply(tree_step);
            }
        })
        .unwrap();

    assert_eq!(advanced, player.step_count());
    assert!(player.is_complete());
    let root = view.root().unwrap();
    assert_eq!(root.values, vec![1, 2, 3, 5, 6, 9]);
    assert_eq!(view.len(), 1);
}
