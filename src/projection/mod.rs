//! Render projections
//!
//! Pure functions from a step to what each element should look like. They
//! keep no memory between calls and never touch the step, so the UI can call
//! them on every frame.
//!
//! - [`bars`]: one [`bars::BarCategory`] per array index of a sort step
//! - [`blocks`]: one [`blocks::BlockCategory`] per index of a search step
//! - [`tree`]: the recursion tree rebuilt from a sequence of tree steps; the
//!   only projection that folds over history

pub mod bars;
pub mod blocks;
pub mod tree;
