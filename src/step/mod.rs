//! Step schemas emitted by the producers
//!
//! A step is one immutable snapshot of an algorithm's progress. Three shapes
//! exist, one per visualizer family:
//! - [`SortStep`]: flat array snapshot with per-index markers (bars view)
//! - [`SearchStep`]: array, target and the search cursor (blocks view)
//! - [`TreeStep`]: one event on the divide-and-conquer call tree (tree view)
//!
//! All three travel through the playback controller as a [`Step`]. Every
//! step owns its data; nothing is shared with the producer that built it, so
//! holding on to an old step is always safe.

mod search;
mod sort;
mod tree;

pub use search::{SearchKind, SearchStep, SearchWindow};
pub use sort::SortStep;
pub use tree::{left_child, right_child, TreeEventKind, TreeStep, ROOT_NODE};

use serde::{Deserialize, Serialize};

/// Element type of every dataset.
pub type Value = i64;

/// A step of any shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Step {
    Sort(SortStep),
    Search(SearchStep),
    Tree(TreeStep),
}

impl Step {
    pub fn description(&self) -> &str {
        match self {
            Step::Sort(s) => &s.description,
            Step::Search(s) => &s.description,
            Step::Tree(s) => &s.description,
        }
    }

    /// 1-based line into the producer's pseudocode, if any
    pub fn source_line(&self) -> Option<usize> {
        match self {
            Step::Sort(s) => s.source_line,
            Step::Search(s) => s.source_line,
            Step::Tree(s) => s.source_line,
        }
    }

    /// Whether this is the closing step of a run
    pub fn is_terminal(&self) -> bool {
        match self {
            Step::Sort(s) => s.is_terminal(),
            Step::Search(s) => s.kind.is_terminal(),
            Step::Tree(s) => s.is_terminal(),
        }
    }

    pub fn as_sort(&self) -> Option<&SortStep> {
        match self {
            Step::Sort(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchStep> {
        match self {
            Step::Search(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeStep> {
        match self {
            Step::Tree(s) => Some(s),
            _ => None,
        }
    }
}

impl From<SortStep> for Step {
    fn from(step: SortStep) -> Self {
        Step::Sort(step)
    }
}

impl From<SearchStep> for Step {
    fn from(step: SearchStep) -> Self {
        Step::Search(step)
    }
}

impl From<TreeStep> for Step {
    fn from(step: TreeStep) -> Self {
        Step::Tree(step)
    }
}
