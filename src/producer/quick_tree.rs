//! Quick sort reported as events on its recursion tree
//!
//! A node picks its last value as pivot, then partitions the rest into
//! `< pivot` (left child) and `>= pivot` (right child). Empty partitions are
//! still visited and merge immediately, so every split is answered by two
//! child merges.

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{left_child, right_child, TreeEventKind, TreeStep, Value, ROOT_NODE};
use std::collections::VecDeque;

pub const SOURCE: &str = "procedure quickSort(A)
  if length(A) <= 1 then
    return A
  end if
  pivot := A[length(A) - 1]
  left := [x in A[0..length(A)-1] if x < pivot]
  right := [x in A[0..length(A)-1] if x >= pivot]
  return quickSort(left) + [pivot] + quickSort(right)
end procedure";

const NAME: &str = "quick sort";

#[derive(Debug, Clone)]
struct Node {
    id: String,
    parent: Option<String>,
    level: usize,
}

#[derive(Debug)]
enum Frame {
    Enter { node: Node, values: Vec<Value> },
    Combine { node: Node, pivot: Value },
}

pub struct QuickSortTree {
    input: Vec<Value>,
    frames: Vec<Frame>,
    results: Vec<Vec<Value>>,
    started: bool,
    pending: VecDeque<TreeStep>,
}

impl QuickSortTree {
    pub fn new(input: &[Value]) -> Self {
        QuickSortTree {
            input: input.to_vec(),
            frames: Vec::new(),
            results: Vec::new(),
            started: false,
            pending: VecDeque::new(),
        }
    }

    fn step(kind: TreeEventKind, node: &Node, values: &[Value], description: String) -> TreeStep {
        TreeStep::new(kind, &node.id, node.parent.as_deref(), node.level, values, description)
    }

    fn enter(&mut self, node: Node, values: Vec<Value>) {
        if values.len() <= 1 {
            let step = Self::step(
                TreeEventKind::Merge,
                &node,
                &values,
                format!("Base case {:?} is already sorted", values),
            )
            .line(3);
            self.pending.push_back(step);
            self.results.push(values);
            return;
        }

        let pivot_at = values.len() - 1;
        let pivot = values[pivot_at];
        let rest = &values[..pivot_at];
        let step = Self::step(
            TreeEventKind::Pivot,
            &node,
            &values,
            format!("Chose pivot {}", pivot),
        )
        .pivot(pivot_at, pivot)
        .line(5);
        self.pending.push_back(step);

        let (left, right): (Vec<Value>, Vec<Value>) = rest.iter().copied().partition(|&x| x < pivot);
        let step = Self::step(
            TreeEventKind::Split,
            &node,
            &values,
            format!("Partitioned around {}: {:?} and {:?}", pivot, left, right),
        )
        .children(&left, &right)
        .pivot(pivot_at, pivot)
        .line(6);
        self.pending.push_back(step);

        let child = |id: String| Node {
            id,
            parent: Some(node.id.clone()),
            level: node.level + 1,
        };
        let left_node = child(left_child(&node.id));
        let right_node = child(right_child(&node.id));

        self.frames.push(Frame::Combine { node, pivot });
        self.frames.push(Frame::Enter { node: right_node, values: right });
        self.frames.push(Frame::Enter { node: left_node, values: left });
    }

    fn combine(&mut self, node: Node, pivot: Value) -> Result<(), ProducerError> {
        let underflow = ProducerError::FrameUnderflow {
            algorithm: NAME,
            context: "joining partitions",
        };
        let right = self.results.pop().ok_or_else(|| underflow.clone())?;
        let left = self.results.pop().ok_or(underflow)?;

        let mut joined = Vec::with_capacity(left.len() + right.len() + 1);
        joined.extend_from_slice(&left);
        joined.push(pivot);
        joined.extend_from_slice(&right);

        let step = Self::step(
            TreeEventKind::Merge,
            &node,
            &joined,
            format!("Joined {:?} + [{}] + {:?}", left, pivot, right),
        )
        .children(&left, &right)
        .pivot(left.len(), pivot)
        .line(8);
        self.pending.push_back(step);
        self.results.push(joined);
        Ok(())
    }
}

impl ActionProducer for QuickSortTree {
    type Output = TreeStep;

    fn pending(&mut self) -> &mut VecDeque<TreeStep> {
        &mut self.pending
    }

    fn advance(&mut self) -> Result<bool, ProducerError> {
        if !self.started {
            self.started = true;
            let root = Node {
                id: ROOT_NODE.to_string(),
                parent: None,
                level: 0,
            };
            let values = std::mem::take(&mut self.input);
            if values.len() > 1 {
                let step = Self::step(
                    TreeEventKind::Init,
                    &root,
                    &values,
                    format!("Starting Quick Sort on {:?}", values),
                )
                .line(1);
                self.pending.push_back(step);
            }
            self.frames.push(Frame::Enter { node: root, values });
            return Ok(true);
        }

        match self.frames.pop() {
            Some(Frame::Enter { node, values }) => self.enter(node, values),
            Some(Frame::Combine { node, pivot }) => self.combine(node, pivot)?,
            None => return Ok(false),
        }
        Ok(true)
    }
}
