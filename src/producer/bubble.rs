//! Bubble sort: adjacent compare-and-swap, the unsorted suffix shrinks by
//! one index per pass, early exit after a pass without swaps.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SortStep, Value};
use std::collections::{BTreeSet, VecDeque};

pub const SOURCE: &str = "procedure bubbleSort(A: list of sortable items)
  n := length(A)
  repeat
    swapped := false
    for i := 1 to n-1 inclusive do
      if A[i-1] > A[i] then
        swap(A[i-1], A[i])
        swapped := true
      end if
    end for
    n := n - 1
  until not swapped
end procedure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    PassStart,
    Compare,
    PassEnd,
    Finish,
    Done,
}

pub struct BubbleSort {
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
    /// Length of the unsorted prefix
    len: usize,
    i: usize,
    swapped: bool,
    phase: Phase,
    pending: VecDeque<SortStep>,
}

impl BubbleSort {
    pub fn new(input: &[Value]) -> Self {
        BubbleSort {
            array: input.to_vec(),
            sorted: BTreeSet::new(),
            len: input.len(),
            i: 1,
            swapped: false,
            phase: Phase::Start,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, description: String) -> SortStep {
        SortStep::new(&self.array, &self.sorted, description)
    }
}

impl ActionProducer for BubbleSort {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        match self.phase {
            Phase::Start => {
                let n = self.array.len();
                if n <= 1 {
                    let step = SortStep::finished(&self.array, "Already sorted").line(13);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                } else {
                    let step = self
                        .emit(format!("Starting Bubble Sort on {} elements", n))
                        .line(1);
                    self.pending.push_back(step);
                    self.phase = Phase::PassStart;
                }
            }
            Phase::PassStart => {
                self.swapped = false;
                self.i = 1;
                let step = self.emit(format!("Pass started. n = {}", self.len)).line(4);
                self.pending.push_back(step);
                self.phase = Phase::Compare;
            }
            Phase::Compare => {
                if self.i >= self.len {
                    self.phase = Phase::PassEnd;
                    return Ok(true);
                }
                let (a, b) = (self.i - 1, self.i);
                let step = self
                    .emit(format!("Comparing {} and {}", self.array[a], self.array[b]))
                    .comparing([a, b])
                    .line(6);
                self.pending.push_back(step);

                if self.array[a] > self.array[b] {
                    self.array.swap(a, b);
                    self.swapped = true;
                    let step = self
                        .emit(format!("Swapped {} and {}", self.array[b], self.array[a]))
                        .swapped(a, b)
                        .line(7);
                    self.pending.push_back(step);
                    let step = self.emit("Marked the pass as swapped".to_string()).line(8);
                    self.pending.push_back(step);
                }
                self.i += 1;
            }
            Phase::PassEnd => {
                self.len -= 1;
                self.sorted.insert(self.len);
                let step = self
                    .emit(format!("Pass complete. n reduced to {}", self.len))
                    .line(11);
                self.pending.push_back(step);
                self.phase = if self.swapped && self.len > 1 {
                    Phase::PassStart
                } else {
                    Phase::Finish
                };
            }
            Phase::Finish => {
                let step = SortStep::finished(&self.array, "Sorting complete").line(13);
                self.pending.push_back(step);
                self.phase = Phase::Done;
            }
            Phase::Done => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::test_support::{assert_lines_within, sort_steps};

    #[test]
    fn test_three_elements() {
        let steps = sort_steps(BubbleSort::new(&[3, 1, 2]));
        let last = steps.last().unwrap();

        assert_eq!(last.array, vec![1, 2, 3]);
        assert_eq!(last.sorted.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert_eq!(steps[0].source_line, Some(1));
    }

    #[test]
    fn test_swap_step_shows_array_after_swap() {
        let steps = sort_steps(BubbleSort::new(&[2, 1]));
        let swap = steps.iter().find(|s| s.swapped.is_some()).unwrap();

        assert_eq!(swap.swapped, Some((0, 1)));
        assert_eq!(swap.array, vec![1, 2]);
    }

    #[test]
    fn test_sorted_input_stops_after_one_pass() {
        let steps = sort_steps(BubbleSort::new(&[1, 2, 3, 4]));
        let passes = steps.iter().filter(|s| s.source_line == Some(4)).count();
        assert_eq!(passes, 1);
        assert!(steps.iter().all(|s| s.swapped.is_none()));
    }

    #[test]
    fn test_single_element_yields_one_step() {
        let steps = sort_steps(BubbleSort::new(&[7]));
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_terminal());
        assert_eq!(steps[0].description, "Already sorted");
    }

    #[test]
    fn test_empty_input_yields_one_step() {
        let steps = sort_steps(BubbleSort::new(&[]));
        assert_eq!(steps.len(), 1);
        assert!(steps[0].array.is_empty());
        assert!(steps[0].sorted.is_empty());
    }

    #[test]
    fn test_lines_within_source() {
        let steps = sort_steps(BubbleSort::new(&[5, 4, 3, 2, 1]));
        assert_lines_within(steps.iter().map(|s| s.source_line), SOURCE);
    }
}
