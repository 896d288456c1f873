//! Step producers, one per algorithm
//!
//! A producer encodes one algorithm as a lazily evaluated, finite sequence of
//! [`Step`]s. Nothing runs between two calls to
//! [`StepProducer::next_step`]: each call performs at most one algorithm
//! action (a compare, a compare-and-swap, a shift, a write) and hands out the
//! snapshots that action produced.
//!
//! # Producers
//!
//! - [`bubble`], [`selection`], [`insertion`]: flat array sorts
//! - [`merge`], [`quick`]: in-place divide-and-conquer sorts driven by an
//!   explicit frame stack
//! - [`merge_tree`], [`quick_tree`]: the same two algorithms reported as
//!   events on their recursion tree
//! - [`linear_search`], [`binary_search`]
//!
//! Each module ships its canonical pseudocode as `SOURCE`; every
//! `source_line` it yields is a 1-based line of that text.
//!
//! # Contract
//!
//! - The input slice is copied; the caller's data is never touched.
//! - The first step describes the starting state, the last one is terminal.
//! - Every mutation of the working array is followed by a step showing the
//!   array after the mutation.
//! - A producer is single-pass. Build a new one to replay.

pub mod binary_search;
pub mod bubble;
pub mod insertion;
pub mod linear_search;
pub mod merge;
pub mod merge_tree;
pub mod quick;
pub mod quick_tree;
pub mod selection;

use crate::errors::ProducerError;
use crate::step::Step;
use std::collections::VecDeque;

/// A suspendable algorithm run
pub trait StepProducer {
    /// Next step of the run, `Ok(None)` once exhausted
    fn next_step(&mut self) -> Result<Option<Step>, ProducerError>;
}

/// A producer expressed as a sequence of single algorithm actions
///
/// Implementors only describe one action at a time; the blanket
/// [`StepProducer`] impl hands out the queued steps in order and asks for
/// the next action when the queue runs dry.
pub trait ActionProducer {
    type Output: Into<Step>;

    fn pending(&mut self) -> &mut VecDeque<Self::Output>;

    /// Perform one action, queueing its steps. `Ok(false)` ends the run.
    fn advance(&mut self) -> Result<bool, ProducerError>;
}

impl<P: ActionProducer> StepProducer for P {
    fn next_step(&mut self) -> Result<Option<Step>, ProducerError> {
        loop {
            if let Some(step) = self.pending().pop_front() {
                return Ok(Some(step.into()));
            }
            if !self.advance()? {
                return Ok(None);
            }
        }
    }
}

/// Run a producer to exhaustion
pub fn drain<P: StepProducer + ?Sized>(producer: &mut P) -> Result<Vec<Step>, ProducerError> {
    let mut steps = Vec::new();
    while let Some(step) = producer.next_step()? {
        steps.push(step);
    }
    Ok(steps)
}

/// Number of lines in a pseudocode text
pub fn line_count(source: &str) -> usize {
    source.lines().count()
}
