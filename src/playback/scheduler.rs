//! Repeating timers for auto-advance
//!
//! The controller never sleeps or spawns threads. A [`Scheduler`] hands out
//! [`TimerHandle`]s and reports which of them are due; the host loop decides
//! when to ask. Two implementations exist:
//!
//! - [`IntervalScheduler`] reads the wall clock, used by the TUI
//! - [`ManualScheduler`] only moves when told to, used by tests and headless
//!   runs

use std::time::{Duration, Instant};

/// Opaque id of one scheduled repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Start a timer that fires every `interval` until cancelled
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Stop a timer. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Firings that came due since the last poll, in order. Wall-clock
    /// implementations may fold a backlog into one firing per timer.
    fn poll_due(&mut self) -> Vec<TimerHandle>;

    /// Number of timers still armed
    fn active_timers(&self) -> usize;
}

#[derive(Debug)]
struct Timer<T> {
    handle: TimerHandle,
    interval: Duration,
    next_due: T,
}

/// What to do with firings missed between two polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backlog {
    /// Report every missed firing
    Replay,
    /// Report at most one firing per timer and drop the rest
    Coalesce,
}

/// Collect the firings of `timers` due at `now`, rescheduling as it goes
fn collect_due<T>(
    timers: &mut [Timer<T>],
    now: T,
    add: impl Fn(T, Duration) -> T,
    backlog: Backlog,
) -> Vec<TimerHandle>
where
    T: Copy + Ord,
{
    let mut due: Vec<(T, TimerHandle)> = Vec::new();
    for timer in timers.iter_mut() {
        // zero intervals would fire forever
        if timer.interval.is_zero() {
            continue;
        }
        if timer.next_due > now {
            continue;
        }
        due.push((timer.next_due, timer.handle));
        timer.next_due = add(timer.next_due, timer.interval);
        while timer.next_due <= now {
            if backlog == Backlog::Replay {
                due.push((timer.next_due, timer.handle));
            }
            timer.next_due = add(timer.next_due, timer.interval);
        }
    }
    due.sort_by_key(|&(at, _)| at);
    due.into_iter().map(|(_, handle)| handle).collect()
}

/// Deterministic clock, advanced explicitly
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<Duration>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `dt`
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(Timer {
            handle,
            interval,
            next_due: self.now + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    fn poll_due(&mut self) -> Vec<TimerHandle> {
        collect_due(&mut self.timers, self.now, |at, dt| at + dt, Backlog::Replay)
    }

    fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

/// Wall-clock scheduler polled by the event loop
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    timers: Vec<Timer<Instant>>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time until the earliest armed timer fires, if any
    pub fn until_next(&self) -> Option<Duration> {
        let now = Instant::now();
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_duration_since(now))
            .min()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(Timer {
            handle,
            interval,
            next_due: Instant::now() + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    /// A stalled event loop gets one firing per timer, not a burst
    fn poll_due(&mut self) -> Vec<TimerHandle> {
        collect_due(&mut self.timers, Instant::now(), |at, dt| at + dt, Backlog::Coalesce)
    }

    fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_fires_per_interval() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_repeating(Duration::from_millis(100));

        scheduler.advance(Duration::from_millis(99));
        assert!(scheduler.poll_due().is_empty());

        scheduler.advance(Duration::from_millis(201));
        assert_eq!(scheduler.poll_due(), vec![handle, handle, handle]);
        assert!(scheduler.poll_due().is_empty());
    }

    #[test]
    fn test_cancel_stops_firing() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_repeating(Duration::from_millis(10));
        scheduler.cancel(handle);
        scheduler.cancel(handle);

        scheduler.advance(Duration::from_secs(1));
        assert!(scheduler.poll_due().is_empty());
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_firings_are_ordered_across_timers() {
        let mut scheduler = ManualScheduler::new();
        let slow = scheduler.schedule_repeating(Duration::from_millis(30));
        let fast = scheduler.schedule_repeating(Duration::from_millis(20));

        scheduler.advance(Duration::from_millis(40));
        assert_eq!(scheduler.poll_due(), vec![fast, slow, fast]);
    }

    #[test]
    fn test_coalesced_backlog_fires_once() {
        let mut timers = vec![Timer {
            handle: TimerHandle(1),
            interval: Duration::from_millis(100),
            next_due: Duration::from_millis(100),
        }];

        let due = collect_due(&mut timers, Duration::from_millis(1050), |at, dt| at + dt, Backlog::Coalesce);
        assert_eq!(due, vec![TimerHandle(1)]);
        assert_eq!(timers[0].next_due, Duration::from_millis(1100));

        // the dropped firings do not come back later
        let due = collect_due(&mut timers, Duration::from_millis(1099), |at, dt| at + dt, Backlog::Coalesce);
        assert!(due.is_empty());
    }

    #[test]
    fn test_interval_scheduler_drops_missed_firings() {
        let mut scheduler = IntervalScheduler::new();
        let handle = scheduler.schedule_repeating(Duration::from_millis(1));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(scheduler.poll_due(), vec![handle]);
    }

    #[test]
    fn test_interval_scheduler_reports_wait() {
        let mut scheduler = IntervalScheduler::new();
        assert_eq!(scheduler.until_next(), None);

        scheduler.schedule_repeating(Duration::from_secs(60));
        let wait = scheduler.until_next().unwrap();
        assert!(wait > Duration::from_secs(50));
        assert!(scheduler.poll_due().is_empty());
    }
}
