//! Merge sort reported as events on its recursion tree
//!
//! Each node owns a contiguous slice of the input. A node longer than one
//! element splits at `len / 2`; once both children have merged, the node
//! merges their sorted values. Sub-results travel on an explicit stack, so
//! a `Combine` frame that finds fewer than two of them is a producer bug and
//! surfaces as [`ProducerError::FrameUnderflow`].

use super::ActionProducer;
use crate::errors::ProducerError;
use crate::step::{left_child, right_child, TreeEventKind, TreeStep, Value, ROOT_NODE};
use std::collections::VecDeque;

pub const SOURCE: &str = "procedure mergeSort(A)
  if length(A) <= 1 then
    return A
  end if
  mid := length(A) / 2
  left := mergeSort(A[0..mid])
  right := mergeSort(A[mid..end])
  return merge(left, right)
end procedure";

const NAME: &str = "merge sort";

#[derive(Debug, Clone)]
struct Node {
    id: String,
    parent: Option<String>,
    level: usize,
}

#[derive(Debug)]
enum Frame {
    Enter { node: Node, values: Vec<Value> },
    Combine { node: Node },
}

pub struct MergeSortTree {
    input: Vec<Value>,
    frames: Vec<Frame>,
    results: Vec<Vec<Value>>,
    started: bool,
    pending: VecDeque<TreeStep>,
}

impl MergeSortTree {
    pub fn new(input: &[Value]) -> Self {
        MergeSortTree {
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

        let mid = values.len() / 2;
        let (left, right) = values.split_at(mid);
        let step = Self::step(
            TreeEventKind::Split,
            &node,
            &values,
            format!("Splitting {:?} into {:?} and {:?}", values, left, right),
        )
        .children(left, right)
        .line(5);
        self.pending.push_back(step);

        let child = |id: String| Node {
            id,
            parent: Some(node.id.clone()),
            level: node.level + 1,
        };
        let left_node = child(left_child(&node.id));
        let right_node = child(right_child(&node.id));
        let (left, right) = (left.to_vec(), right.to_vec());

        self.frames.push(Frame::Combine { node });
        self.frames.push(Frame::Enter { node: right_node, values: right });
        self.frames.push(Frame::Enter { node: left_node, values: left });
    }

    fn combine(&mut self, node: Node) -> Result<(), ProducerError> {
        let underflow = ProducerError::FrameUnderflow {
            algorithm: NAME,
            context: "combining children",
        };
        let right = self.results.pop().ok_or_else(|| underflow.clone())?;
        let left = self.results.pop().ok_or(underflow)?;

        let merged = merge(&left, &right);
        let step = Self::step(
            TreeEventKind::Merge,
            &node,
            &merged,
            format!("Merged {:?} and {:?} into {:?}", left, right, merged),
        )
        .children(&left, &right)
        .line(8);
        self.pending.push_back(step);
        self.results.push(merged);
        Ok(())
    }
}

/// Stable two-way merge, ties taken from `left`
fn merge(left: &[Value], right: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

impl ActionProducer for MergeSortTree {
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
                    format!("Starting Merge Sort on {:?}", values),
                )
                .line(1);
                self.pending.push_back(step);
            }
            self.frames.push(Frame::Enter { node: root, values });
            return Ok(true);
        }

        match self.frames.pop() {
            Some(Frame::Enter { node, values }) => self.enter(node, values),
            Some(Frame::Combine { node }) => self.combine(node)?,
            None => return Ok(false),
        }
        Ok(true)
    }
}
