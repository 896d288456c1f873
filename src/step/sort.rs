use super::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a sorting run at one instant
///
/// `array` is always the full working array, never a diff. Marker fields are
/// transient: a step only carries the highlights of its own instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    pub array: Vec<Value>,
    /// Indices known to hold their final value
    pub sorted: BTreeSet<usize>,
    /// Indices under comparison (one or two)
    pub comparing: Vec<usize>,
    pub swapped: Option<(usize, usize)>,
    /// Selection sort: current minimum
    pub min_index: Option<usize>,
    /// Insertion sort: slot the key is travelling through
    pub key_index: Option<usize>,
    /// Insertion sort: element drawn lifted above the others
    pub lift_index: Option<usize>,
    pub pivot_index: Option<usize>,
    pub left_scan: Option<usize>,
    pub right_scan: Option<usize>,
    /// Inclusive `[start, end]` focus window
    pub active_range: Option<(usize, usize)>,
    /// Merge sort write flash
    pub overwrite_index: Option<usize>,
    pub description: String,
    pub source_line: Option<usize>,
    /// Set only on the step that closes the run
    #[serde(default)]
    pub complete: bool,
}

impl SortStep {
    pub fn new(array: &[Value], sorted: &BTreeSet<usize>, description: impl Into<String>) -> Self {
        SortStep {
            array: array.to_vec(),
            sorted: sorted.clone(),
            comparing: Vec::new(),
            swapped: None,
            min_index: None,
            key_index: None,
            lift_index: None,
            pivot_index: None,
            left_scan: None,
            right_scan: None,
            active_range: None,
            overwrite_index: None,
            description: description.into(),
            source_line: None,
            complete: false,
        }
    }

    /// Terminal step: every index is sorted
    pub fn finished(array: &[Value], description: impl Into<String>) -> Self {
        let sorted = (0..array.len()).collect();
        let mut step = SortStep::new(array, &sorted, description);
        step.complete = true;
        step
    }

    pub fn line(mut self, line: usize) -> Self {
        self.source_line = Some(line);
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }

    pub fn swapped(mut self, a: usize, b: usize) -> Self {
        self.swapped = Some((a, b));
        self
    }

    pub fn min_index(mut self, index: usize) -> Self {
        self.min_index = Some(index);
        self
    }

    pub fn key_index(mut self, index: usize) -> Self {
        self.key_index = Some(index);
        self
    }

    pub fn lift_index(mut self, index: usize) -> Self {
        self.lift_index = Some(index);
        self
    }

    pub fn pivot_index(mut self, index: usize) -> Self {
        self.pivot_index = Some(index);
        self
    }

    pub fn left_scan(mut self, index: usize) -> Self {
        self.left_scan = Some(index);
        self
    }

    pub fn right_scan(mut self, index: usize) -> Self {
        self.right_scan = Some(index);
        self
    }

    pub fn active_range(mut self, start: usize, end: usize) -> Self {
        self.active_range = Some((start, end));
        self
    }

    pub fn overwrite_index(mut self, index: usize) -> Self {
        self.overwrite_index = Some(index);
        self
    }

    /// Only the closing step counts; the sorted set can fill up a step or
    /// two before the run ends
    pub fn is_terminal(&self) -> bool {
        self.complete
    }

    pub fn in_active_range(&self, index: usize) -> bool {
        self.active_range
            .is_some_and(|(start, end)| (start..=end).contains(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_only_requested_markers() {
        let step = SortStep::new(&[3, 1, 2], &BTreeSet::new(), "compare")
            .comparing([0, 1])
            .line(6);

        assert_eq!(step.comparing, vec![0, 1]);
        assert_eq!(step.source_line, Some(6));
        assert!(step.swapped.is_none());
        assert!(step.pivot_index.is_none());
        assert!(!step.is_terminal());
    }

    #[test]
    fn test_finished_covers_every_index() {
        let step = SortStep::finished(&[1, 2, 3], "done");
        assert!(step.is_terminal());
        assert_eq!(step.sorted.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_array_is_terminal() {
        assert!(SortStep::finished(&[], "done").is_terminal());
    }

    #[test]
    fn test_full_sorted_set_is_not_terminal() {
        let sorted: BTreeSet<usize> = (0..3).collect();
        let step = SortStep::new(&[1, 2, 3], &sorted, "last element in place");
        assert!(!step.is_terminal());
    }

    #[test]
    fn test_active_range_is_inclusive() {
        let step = SortStep::new(&[0; 6], &BTreeSet::new(), "").active_range(1, 3);
        assert!(!step.in_active_range(0));
        assert!(step.in_active_range(1));
        assert!(step.in_active_range(3));
        assert!(!step.in_active_range(4));
    }
}
