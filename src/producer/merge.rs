//! Top-down merge sort on the bars view
//!
//! The recursion is replaced by a stack of [`Frame`]s: a `Sort` frame splits
//! its range and schedules the two halves followed by a `Merge` of them. A
//! merge then runs one write per action through [`MergeCursor`], so the array
//! is shown after every single overwrite.
//!
//! Merging is stable: on ties the left run is taken first. Nothing is marked
//! sorted before the final step since any prefix may still move.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{SortStep, Value};
use std::collections::{BTreeSet, VecDeque};

pub const SOURCE: &str = "procedure mergeSort(A, lo, hi)
  if lo >= hi then
    return
  end if
  mid := (lo + hi) / 2
  mergeSort(A, lo, mid)
  mergeSort(A, mid + 1, hi)
  merge(A, lo, mid, hi)
end procedure

procedure merge(A, lo, mid, hi)
  left := A[lo..mid]; right := A[mid+1..hi]
  i := 0; j := 0; k := lo
  while i < length(left) and j < length(right) do
    if left[i] <= right[j] then
      A[k] := left[i]; i := i + 1
    else
      A[k] := right[j]; j := j + 1
    end if
    k := k + 1
  end while
  copy the rest of left into A[k..]
  copy the rest of right into A[k..]
end procedure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// An in-progress merge of `A[lo..=mid]` and `A[mid+1..=hi]`
#[derive(Debug)]
struct MergeCursor {
    lo: usize,
    mid: usize,
    hi: usize,
    left: Vec<Value>,
    right: Vec<Value>,
    i: usize,
    j: usize,
    k: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Run,
    Done,
}

pub struct MergeSort {
    array: Vec<Value>,
    frames: Vec<Frame>,
    cursor: Option<MergeCursor>,
    phase: Phase,
    pending: VecDeque<SortStep>,
}

impl MergeSort {
    pub fn new(input: &[Value]) -> Self {
        MergeSort {
            array: input.to_vec(),
            frames: Vec::new(),
            cursor: None,
            phase: Phase::Start,
            pending: VecDeque::new(),
        }
    }

    fn emit(&self, description: String) -> SortStep {
        SortStep::new(&self.array, &BTreeSet::new(), description)
    }

    fn open_frame(&mut self, frame: Frame) {
        match frame {
            Frame::Sort { lo, hi } => {
                if lo >= hi {
                    return;
                }
                let mid = lo + (hi - lo) / 2;
                self.frames.push(Frame::Merge { lo, mid, hi });
                self.frames.push(Frame::Sort { lo: mid + 1, hi });
                self.frames.push(Frame::Sort { lo, hi: mid });
                let step = self
                    .emit(format!("Splitting [{}..{}] at {}", lo, hi, mid))
                    .active_range(lo, hi)
                    .line(5);
                self.pending.push_back(step);
            }
            Frame::Merge { lo, mid, hi } => {
                self.cursor = Some(MergeCursor {
                    lo,
                    mid,
                    hi,
                    left: self.array[lo..=mid].to_vec(),
                    right: self.array[mid + 1..=hi].to_vec(),
                    i: 0,
                    j: 0,
                    k: lo,
                });
                let step = self
                    .emit(format!("Merging range [{}..{}]", lo, hi))
                    .active_range(lo, hi)
                    .line(11);
                self.pending.push_back(step);
            }
        }
    }

    /// One write of the current merge, dropping the cursor once both runs are spent
    fn merge_action(&mut self, mut cur: MergeCursor) {
        let (lo, hi, k) = (cur.lo, cur.hi, cur.k);
        let has_left = cur.i < cur.left.len();
        let has_right = cur.j < cur.right.len();

        if has_left && has_right {
            let (l, r) = (cur.left[cur.i], cur.right[cur.j]);
            let right_pos = cur.mid + 1 + cur.j;
            let step = self
                .emit(format!("Comparing {} and {}", l, r))
                .comparing([k, right_pos])
                .active_range(lo, hi)
                .line(15);
            self.pending.push_back(step);

            let line = if l <= r {
                self.array[k] = l;
                cur.i += 1;
                16
            } else {
                self.array[k] = r;
                cur.j += 1;
                18
            };
            let step = self
                .emit(format!("Wrote {} to index {}", self.array[k], k))
                .overwrite_index(k)
                .active_range(lo, hi)
                .line(line);
            self.pending.push_back(step);
        } else if has_left {
            self.array[k] = cur.left[cur.i];
            cur.i += 1;
            let step = self
                .emit(format!("Copied remaining {} to index {}", self.array[k], k))
                .overwrite_index(k)
                .active_range(lo, hi)
                .line(22);
            self.pending.push_back(step);
        } else if has_right {
            self.array[k] = cur.right[cur.j];
            cur.j += 1;
            let step = self
                .emit(format!("Copied remaining {} to index {}", self.array[k], k))
                .overwrite_index(k)
                .active_range(lo, hi)
                .line(23);
            self.pending.push_back(step);
        } else {
            return;
        }

        cur.k += 1;
        self.cursor = Some(cur);
    }
}

impl ActionProducer for MergeSort {
    type Output = SortStep;

    fn pending(&mut self) -> &mut VecDeque<SortStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        match self.phase {
            Phase::Start => {
                let n = self.array.len();
                if n <= 1 {
                    let step = SortStep::finished(&self.array, "Already sorted").line(3);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                } else {
                    let step = self
                        .emit(format!("Starting Merge Sort on {} elements", n))
                        .line(1);
                    self.pending.push_back(step);
                    self.frames.push(Frame::Sort { lo: 0, hi: n - 1 });
                    self.phase = Phase::Run;
                }
            }
            Phase::Run => {
                if let Some(cur) = self.cursor.take() {
                    self.merge_action(cur);
                } else if let Some(frame) = self.frames.pop() {
                    self.open_frame(frame);
                } else {
                    let step = SortStep::finished(&self.array, "Sorting complete").line(9);
                    self.pending.push_back(step);
                    self.phase = Phase::Done;
                }
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
    fn test_sorts_with_duplicates() {
        let steps = sort_steps(MergeSort::new(&[5, 1, 4, 1, 3, 9, 2]));
        assert_eq!(steps.last().unwrap().array, vec![1, 1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn test_sorted_set_stays_empty_until_terminal() {
        let steps = sort_steps(MergeSort::new(&[4, 3, 2, 1]));
        let (last, rest) = steps.split_last().unwrap();

        assert!(rest.iter().all(|s| s.sorted.is_empty()));
        assert!(last.is_terminal());
    }

    #[test]
    fn test_every_write_is_flagged() {
        let steps = sort_steps(MergeSort::new(&[2, 1]));
        let writes: Vec<&SortStep> = steps.iter().filter(|s| s.overwrite_index.is_some()).collect();

        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].array, vec![1, 1]);
        assert_eq!(writes[1].array, vec![1, 2]);
    }

    #[test]
    fn test_split_marks_active_range() {
        let steps = sort_steps(MergeSort::new(&[3, 2, 1]));
        let split = steps.iter().find(|s| s.source_line == Some(5)).unwrap();
        assert_eq!(split.active_range, Some((0, 2)));
    }

    #[test]
    fn test_single_element() {
        let steps = sort_steps(MergeSort::new(&[42]));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, "Already sorted");
    }

    #[test]
    fn test_lines_within_source() {
        let steps = sort_steps(MergeSort::new(&[8, 7, 6, 5, 4, 3, 2, 1]));
        assert_lines_within(steps.iter().map(|s| s.source_line), SOURCE);
    }
}
