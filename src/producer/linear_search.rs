//! Linear search: scan left to right, stop at the first match.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SearchKind, SearchStep, Value};
use std::collections::VecDeque;

pub const SOURCE: &str = "procedure linearSearch(A, target)
  for i := 0 to length(A) - 1 do
    if A[i] = target then
      return i
    end if
  end for
  return not found
end procedure";

pub struct LinearSearch {
    array: Vec<Value>,
    target: Value,
    i: usize,
    started: bool,
    done: bool,
    pending: VecDeque<SearchStep>,
}

impl LinearSearch {
    pub fn new(input: &[Value], target: Value) -> Self {
        LinearSearch {
            array: input.to_vec(),
            target,
            i: 0,
            started: false,
            done: false,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, kind: SearchKind, description: String) -> SearchStep {
        SearchStep::new(&self.array, self.target, kind, description)
    }

    fn not_found(&mut self) {
        let step = self
            .emit(
                SearchKind::NotFound,
                format!("{} is not in the array", self.target),
            )
            .line(7);
        self.pending.push_back(step);
        self.done = true;
    }
}

impl ActionProducer for LinearSearch {
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
                        format!("Searching for {} from the left", self.target),
                    )
                    .line(1);
                self.pending.push_back(step);
            }
            return Ok(true);
        }

        let i = self.i;
        if i >= self.array.len() {
            self.not_found();
            return Ok(true);
        }

        let step = self
            .emit(
                SearchKind::Scan,
                format!("Checking index {}: {} = {}?", i, self.array[i], self.target),
            )
            .at(i)
            .line(3);
        self.pending.push_back(step);

        if self.array[i] == self.target {
            let step = self
                .emit(SearchKind::Found, format!("Found {} at index {}", self.target, i))
                .at(i)
                .line(4);
            self.pending.push_back(step);
            self.done = true;
        }
        self.i += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::test_support::{assert_lines_within, search_steps};

    #[test]
    fn test_finds_target() {
        let steps = search_steps(LinearSearch::new(&[5, 3, 8, 1], 8));
        let last = steps.last().unwrap();

        assert_eq!(last.kind, SearchKind::Found);
        assert_eq!(last.index, Some(2));
        assert_eq!(steps.iter().filter(|s| s.kind == SearchKind::Scan).count(), 3);
    }

    #[test]
    fn test_first_match_wins() {
        let steps = search_steps(LinearSearch::new(&[4, 7, 7], 7));
        assert_eq!(steps.last().unwrap().index, Some(1));
    }

    #[test]
    fn test_absent_target_scans_everything() {
        let steps = search_steps(LinearSearch::new(&[1, 2, 3], 9));
        let last = steps.last().unwrap();

        assert_eq!(last.kind, SearchKind::NotFound);
        assert_eq!(steps.iter().filter(|s| s.kind == SearchKind::Scan).count(), 3);
    }

    #[test]
    fn test_empty_input() {
        let steps = search_steps(LinearSearch::new(&[], 1));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, SearchKind::NotFound);
    }

    #[test]
    fn test_lines_within_source() {
        let steps = search_steps(LinearSearch::new(&[3, 1, 4, 1, 5], 5));
        assert_lines_within(steps.iter().map(|s| s.source_line), SOURCE);
    }
}
