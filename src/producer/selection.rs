//! Selection sort: scan the unsorted suffix for its minimum (first one seen
//! wins ties), then one swap per pass.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SortStep, Value};
use std::collections::{BTreeSet, VecDeque};

pub const SOURCE: &str = "procedure selectionSort(A: list of sortable items)
  n := length(A)
  for i := 0 to n - 2 do
    min_idx := i
    for j := i + 1 to n - 1 do
      if A[j] < A[min_idx] then
        min_idx := j
      end if
    end for
    if min_idx != i then
      swap(A[i], A[min_idx])
    end if
  end for
end procedure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    PassStart,
    Scan,
    Place,
    Finish,
    Done,
}

pub struct SelectionSort {
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
    i: usize,
    j: usize,
    min: usize,
    phase: Phase,
    pending: VecDeque<SortStep>,
}

impl SelectionSort {
    pub fn new(input: &[Value]) -> Self {
        SelectionSort {
            array: input.to_vec(),
            sorted: BTreeSet::new(),
            i: 0,
            j: 0,
            min: 0,
            phase: Phase::Start,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, description: String) -> SortStep {
        SortStep::new(&self.array, &self.sorted, description)
    }
}

impl ActionProducer for SelectionSort {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        let n = self.array.len();
        match self.phase {
            Phase::Start => {
                if n <= 1 {
                    let step = SortStep::finished(&self.array, "Already sorted").line(14);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                } else {
                    let step = self
                        .emit(format!("Starting Selection Sort on {} elements", n))
                        .line(1);
                    self.pending.push_back(step);
                    self.phase = Phase::PassStart;
                }
            }
            Phase::PassStart => {
                if self.i + 1 >= n {
                    self.phase = Phase::Finish;
                    return Ok(true);
                }
                self.min = self.i;
                self.j = self.i + 1;
                let step = self
                    .emit(format!(
                        "Pass {}: assuming minimum at index {}",
                        self.i + 1,
                        self.i
                    ))
                    .min_index(self.min)
                    .line(4);
                self.pending.push_back(step);
                self.phase = Phase::Scan;
            }
            Phase::Scan => {
                if self.j >= n {
                    self.phase = Phase::Place;
                    return Ok(true);
                }
                let j = self.j;
                let step = self
                    .emit(format!(
                        "Checking if {} < {}",
                        self.array[j], self.array[self.min]
                    ))
                    .comparing([j])
                    .min_index(self.min)
                    .line(6);
                self.pending.push_back(step);

                if self.array[j] < self.array[self.min] {
                    self.min = j;
                    let step = self
                        .emit(format!("New minimum found: {} at index {}", self.array[j], j))
                        .comparing([j])
                        .min_index(j)
                        .line(7);
                    self.pending.push_back(step);
                }
                self.j += 1;
            }
            Phase::Place => {
                let (i, min) = (self.i, self.min);
                if min != i {
                    self.array.swap(i, min);
                    let step = self
                        .emit(format!(
                            "Swapped minimum {} into index {}",
                            self.array[i], i
                        ))
                        .swapped(i, min)
                        .min_index(i)
                        .line(11);
                    self.pending.push_back(step);
                }
                self.sorted.insert(i);
                let step = self
                    .emit(format!("Element {} is now sorted", self.array[i]))
                    .line(13);
                self.pending.push_back(step);
                self.i += 1;
                self.phase = Phase::PassStart;
            }
            Phase::Finish => {
                let step = SortStep::finished(&self.array, "Sorting complete").line(14);
                self.pending.push_back(step);
                self.phase = Phase::Done;
            }
            Phase::Done => return Ok(false),
        }
        Ok(true)
    }
}
