use super::Value;
use serde::{Deserialize, Serialize};

/// What a search step reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchKind {
    Init,
    #[serde(rename = "scanning-index")]
    Scan,
    #[serde(rename = "midpoint-check")]
    Midpoint,
    Found,
    NotFound,
    RangeNarrowed,
}

impl SearchKind {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchKind::Found | SearchKind::NotFound)
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::Init => "init",
            SearchKind::Scan => "scanning-index",
            SearchKind::Midpoint => "midpoint-check",
            SearchKind::Found => "found",
            SearchKind::NotFound => "not-found",
            SearchKind::RangeNarrowed => "range-narrowed",
        }
    }
}

/// Inclusive window still under consideration by binary search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub start: usize,
    pub end: usize,
}

impl SearchWindow {
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Snapshot of a search run at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub array: Vec<Value>,
    pub target: Value,
    pub kind: SearchKind,
    /// Index being scanned, checked or found
    pub index: Option<usize>,
    pub window: Option<SearchWindow>,
    pub description: String,
    pub source_line: Option<usize>,
}

impl SearchStep {
    pub fn new(array: &[Value], target: Value, kind: SearchKind, description: impl Into<String>) -> Self {
        SearchStep {
            array: array.to_vec(),
            target,
            kind,
            index: None,
            window: None,
            description: description.into(),
            source_line: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn window(mut self, window: Option<SearchWindow>) -> Self {
        self.window = window;
        self
    }

    pub fn line(mut self, line: usize) -> Self {
        self.source_line = Some(line);
        self
    }
}
