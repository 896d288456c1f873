//! Quick sort with Lomuto partitioning on the bars view
//!
//! Pending sub-ranges live on an explicit stack; empty ranges are never
//! pushed. The pivot is always the last element of its range, elements
//! strictly smaller than it move to the left side.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SortStep, Value};
use std::collections::{BTreeSet, VecDeque};

pub const SOURCE: &str = "procedure partition(A, lo, hi)
  pivot := A[hi]
  i := lo
  for j := lo to hi - 1 do
    if A[j] < pivot then
      swap(A[i], A[j])
      i := i + 1
    end if
  end for
  swap(A[i], A[hi])
  return i
end procedure

procedure quickSort(A, lo, hi)
  if lo < hi then
    p := partition(A, lo, hi)
    quickSort(A, lo, p - 1)
    quickSort(A, p + 1, hi)
  end if
end procedure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    lo: usize,
    hi: usize,
    /// Boundary of the `< pivot` region
    i: usize,
    j: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Run,
    Done,
}

pub struct QuickSort {
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
    phase: Phase,
    pending: VecDeque<SortStep>,
}

impl QuickSort {
    pub fn new(input: &[Value]) -> Self {
        QuickSort {
            array: input.to_vec(),
            sorted: BTreeSet::new(),
            ranges: Vec::new(),
            partition: None,
            phase: Phase::Start,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, description: String) -> SortStep {
        SortStep::new(&self.array, &self.sorted, description)
    }

    fn open_range(&mut self, lo: usize, hi: usize) {
        if lo == hi {
            self.sorted.insert(lo);
            let step = self
                .emit(format!("Element {} at index {} is in place", self.array[lo], lo))
                .active_range(lo, hi)
                .line(15);
            self.pending.push_back(step);
            return;
        }

        let step = self
            .emit(format!("Partitioning [{}..{}] around pivot {}", lo, hi, self.array[hi]))
            .pivot_index(hi)
            .active_range(lo, hi)
            .line(2);
        self.pending.push_back(step);
        let step = self
            .emit(format!("Boundary i starts at {}", lo))
            .pivot_index(hi)
            .left_scan(lo)
            .active_range(lo, hi)
            .line(3);
        self.pending.push_back(step);
        self.partition = Some(Partition { lo, hi, i: lo, j: lo });
    }

    fn partition_action(&mut self, mut p: Partition) {
        let pivot = self.array[p.hi];

        if p.j < p.hi {
            let j = p.j;
            let step = self
                .emit(format!("Comparing {} with pivot {}", self.array[j], pivot))
                .comparing([j])
                .pivot_index(p.hi)
                .left_scan(p.i)
                .right_scan(j)
                .active_range(p.lo, p.hi)
                .line(5);
            self.pending.push_back(step);

            if self.array[j] < pivot {
                if p.i != j {
                    self.array.swap(p.i, j);
                    let step = self
                        .emit(format!("Swapped {} and {}", self.array[p.i], self.array[j]))
                        .swapped(p.i, j)
                        .pivot_index(p.hi)
                        .left_scan(p.i)
                        .right_scan(j)
                        .active_range(p.lo, p.hi)
                        .line(6);
                    self.pending.push_back(step);
                }
                p.i += 1;
                let step = self
                    .emit(format!("Boundary i moves to {}", p.i))
                    .pivot_index(p.hi)
                    .left_scan(p.i)
                    .right_scan(j)
                    .active_range(p.lo, p.hi)
                    .line(7);
                self.pending.push_back(step);
            }
            p.j += 1;
            self.partition = Some(p);
            return;
        }

        let Partition { lo, hi, i, .. } = p;
        self.array.swap(i, hi);
        self.sorted.insert(i);
        let step = self
            .emit(format!("Pivot {} placed at index {}", pivot, i))
            .swapped(i, hi)
            .pivot_index(i)
            .active_range(lo, hi)
            .line(10);
        self.pending.push_back(step);

        if i < hi {
            self.ranges.push((i + 1, hi));
        }
        if i > lo {
            self.ranges.push((lo, i - 1));
        }
    }
}

impl ActionProducer for QuickSort {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        match self.phase {
            Phase::Start => {
                let n = self.array.len();
                if n <= 1 {
                    let step = SortStep::finished(&self.array, "Already sorted").line(15);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                } else {
                    let step = self
                        .emit(format!("Starting Quick Sort on {} elements", n))
                        .line(14);
                    self.pending.push_back(step);
                    self.ranges.push((0, n - 1));
                    self.phase = Phase::Run;
                }
            }
            Phase::Run => {
                if let Some(p) = self.partition.take() {
                    self.partition_action(p);
                } else if let Some((lo, hi)) = self.ranges.pop() {
                    self.open_range(lo, hi);
                } else {
                    let step = SortStep::finished(&self.array, "Sorting complete").line(20);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => return Ok(false),
        }
        Ok(true)
    }
}
