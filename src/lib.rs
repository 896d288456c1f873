//! # Introduction
//!
//! algoviz runs classic sorting and searching algorithms one step at a time
//! and shows every intermediate state in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Producer → Step → Player → Projection → TUI
//! ```
//!
//! 1. [`dataset`]: input profiles per view, fixed startup data and seeded
//!    random input generation.
//! 2. [`producer`]: one suspendable producer per algorithm; each call to
//!    [`producer::StepProducer::next_step`] performs a single algorithm
//!    action and yields immutable [`step::Step`] snapshots.
//! 3. [`playback`]: the [`playback::Player`] controller, single-stepping or
//!    auto-advancing on a [`playback::Scheduler`] timer.
//! 4. [`projection`]: pure mappings from a step to per-element visual
//!    categories, plus the recursion tree rebuilt from tree steps.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick (merge and quick
//! sort also as recursion trees).
//! Searching: linear, binary.

pub mod constants;
pub mod dataset;
pub mod errors;
pub mod playback;
pub mod producer;
pub mod projection;
pub mod registry;
pub mod step;
pub mod ui;
