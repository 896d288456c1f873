//! Insertion sort: lift the key, shift larger elements right (strict `>`,
//! so equal elements keep their order), drop the key into the hole.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SortStep, Value};
use std::collections::{BTreeSet, VecDeque};

pub const SOURCE: &str = "procedure insertionSort(A: list of sortable items)
  i := 1
  while i < length(A)
    key := A[i]
    j := i - 1
    while j >= 0 and A[j] > key
      A[j + 1] = A[j]
      j := j - 1
    end while
    A[j + 1] = key
    i := i + 1
  end while
end procedure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Pick,
    Shift,
    Insert,
    Finish,
    Done,
}

pub struct InsertionSort {
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
    i: usize,
    /// Slot the key will land in if shifting stops now
    hole: usize,
    key: Value,
    phase: Phase,
    pending: VecDeque<SortStep>,
}

impl InsertionSort {
    pub fn new(input: &[Value]) -> Self {
        InsertionSort {
            array: input.to_vec(),
            sorted: BTreeSet::new(),
            i: 1,
            hole: 0,
            key: 0,
            phase: Phase::Start,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, description: String) -> SortStep {
        SortStep::new(&self.array, &self.sorted, description)
    }
}

impl ActionProducer for InsertionSort {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        let n = self.array.len();
        match self.phase {
            Phase::Start => {
                if n <= 1 {
                    let step = SortStep::finished(&self.array, "Already sorted").line(13);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                } else {
                    self.sorted.insert(0);
                    let step = self
                        .emit("Starting Insertion Sort. Element at 0 is a sorted sublist".to_string())
                        .line(1);
                    self.pending.push_back(step);
                    self.phase = Phase::Pick;
                }
            }
            Phase::Pick => {
                if self.i >= n {
                    self.phase = Phase::Finish;
                    return Ok(true);
                }
                self.key = self.array[self.i];
                self.hole = self.i;
                let step = self
                    .emit(format!("Picked key {} at index {}", self.key, self.i))
                    .key_index(self.i)
                    .lift_index(self.i)
                    .line(4);
                self.pending.push_back(step);
                self.phase = Phase::Shift;
            }
            Phase::Shift => {
                let hole = self.hole;
                if hole == 0 {
                    self.phase = Phase::Insert;
                    return Ok(true);
                }
                let left = self.array[hole - 1];
                if left > self.key {
                    let step = self
                        .emit(format!("Compared {} > {}. Shifting {} right", left, self.key, left))
                        .comparing([hole - 1])
                        .key_index(hole)
                        .line(6);
                    self.pending.push_back(step);

                    self.array[hole] = left;
                    let step = self
                        .emit(format!("Shifted {} to position {}", left, hole))
                        .overwrite_index(hole)
                        .key_index(hole - 1)
                        .lift_index(hole - 1)
                        .line(7);
                    self.pending.push_back(step);
                    self.hole -= 1;
                } else {
                    let step = self
                        .emit(format!(
                            "Compared {} <= {}. Insertion point found",
                            left, self.key
                        ))
                        .comparing([hole - 1])
                        .key_index(hole)
                        .line(6);
                    self.pending.push_back(step);
                    self.phase = Phase::Insert;
                }
            }
            Phase::Insert => {
                self.array[self.hole] = self.key;
                self.sorted.extend(0..=self.i);
                let step = self
                    .emit(format!("Inserted key {} at position {}", self.key, self.hole))
                    .line(10);
                self.pending.push_back(step);
                self.i += 1;
                self.phase = Phase::Pick;
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
