//! Binary search over a sorted copy of the input
//!
//! The producer sorts its own copy first; every step, the first included,
//! shows the sorted array. Indices in the steps refer to that sorted copy.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SearchKind, SearchStep, SearchWindow, Value};
use std::collections::VecDeque;

pub const SOURCE: &str = "procedure binarySearch(A, target)
  sort(A)
  low := 0
  high := length(A) - 1
  while low <= high do
    mid := (low + high) / 2
    if A[mid] = target then
      return mid
    else if A[mid] < target then
      low := mid + 1
    else
      high := mid - 1
    end if
  end while
  return not found
end procedure";

pub struct BinarySearch {
    array: Vec<Value>,
    target: Value,
    /// Remaining window, `None` once it is empty
    window: Option<SearchWindow>,
    started: bool,
    done: bool,
    pending: VecDeque<SearchStep>,
}

impl BinarySearch {
    pub fn new(input: &[Value], target: Value) -> Self {
        let mut array = input.to_vec();
        array.sort_unstable();
        let window = array.len().checked_sub(1).map(|end| SearchWindow { start: 0, end });
        BinarySearch {
            array,
            target,
            window,
            started: false,
            done: false,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, kind: SearchKind, description: String) -> SearchStep {
        SearchStep::new(&self.array, self.target, kind, description).window(self.window)
    }

    fn not_found(&mut self) {
        let step = self
            .emit(
                SearchKind::NotFound,
                format!("{} is not in the array", self.target),
            )
            .line(15);
        self.pending.push_back(step);
        self.done = true;
    }
}

impl ActionProducer for BinarySearch {
    type Output = SearchStep;

    fn pending(&mut self) -> &mut VecDeque<SearchStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        if self.done {
            return Ok(false);
        }
        if !self.started {
            self.started = true;
            if self.array.is_empty() {
                self.not_found();
            } else {
                let step = self
                    .emit(
                        SearchKind::Init,
                        format!("Sorted the array, searching for {}", self.target),
                    )
                    .line(2);
                self.pending.push_back(step);
            }
            return Ok(true);
        }

        let Some(SearchWindow { start, end }) = self.window else {
            self.not_found();
            return Ok(true);
        };

        let mid = start + (end - start) / 2;
        let value = self.array[mid];
        let step = self
            .emit(
                SearchKind::Midpoint,
                format!("Checking middle index {}: {}", mid, value),
            )
            .at(mid)
            .line(7);
        self.pending.push_back(step);

        if value == self.target {
            let step = self
                .emit(SearchKind::Found, format!("Found {} at index {}", self.target, mid))
                .at(mid)
                .line(8);
            self.pending.push_back(step);
            self.done = true;
            return Ok(true);
        }

        let (line, description) = if value < self.target {
            self.window = (mid < end).then(|| SearchWindow { start: mid + 1, end });
            (10, format!("{} < {}, searching the right half", value, self.target))
        } else {
            self.window = mid
                .checked_sub(1)
                .filter(|&high| high >= start)
                .map(|high| SearchWindow { start, end: high });
            (12, format!("{} > {}, searching the left half", value, self.target))
        };
        let step = self
            .emit(SearchKind::RangeNarrowed, description)
            .at(mid)
            .line(line);
        self.pending.push_back(step);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::test_support::{assert_lines_within, search_steps};

    #[test]
    fn test_sorts_before_searching() {
        let steps = search_steps(BinarySearch::new(&[5, 3, 8, 1], 8));
        let last = steps.last().unwrap();

        assert_eq!(steps[0].array, vec![1, 3, 5, 8]);
        assert_eq!(last.kind, SearchKind::Found);
        assert_eq!(last.index, Some(3));
    }

    #[test]
    fn test_window_narrows() {
        let steps = search_steps(BinarySearch::new(&[1, 2, 3, 4, 5, 6, 7], 6));
        let first = steps
            .iter()
            .find(|s| s.kind == SearchKind::RangeNarrowed)
            .unwrap();

        assert_eq!(first.window, Some(SearchWindow { start: 4, end: 6 }));
    }

    #[test]
    fn test_absent_target_below_everything() {
        let steps = search_steps(BinarySearch::new(&[10, 20, 30], 5));
        let last = steps.last().unwrap();

        assert_eq!(last.kind, SearchKind::NotFound);
        assert_eq!(last.window, None);
    }

    #[test]
    fn test_absent_target_above_everything() {
        let steps = search_steps(BinarySearch::new(&[10, 20, 30], 99));
        assert_eq!(steps.last().unwrap().kind, SearchKind::NotFound);
    }

    #[test]
    fn test_empty_input() {
        let steps = search_steps(BinarySearch::new(&[], 3));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, SearchKind::NotFound);
    }

    #[test]
    fn test_lines_within_source() {
        let steps = search_steps(BinarySearch::new(&[9, 2, 7, 4, 5], 4));
        assert_lines_within(steps.iter().map(|s| s.source_line), SOURCE);
    }
}
