//! Recursion tree rebuilt from [`TreeStep`]s
//!
//! Unlike the array projections the tree needs history: a `Split` adds two
//! children that later steps refer to by id. [`TreeView::apply`] folds one
//! step at a time; feed it every step of a run in order.
//!
//! On `Merge` the node takes the sorted values and its whole subtree is
//! dropped, so the tree visibly collapses back towards the root as the run
//! completes.

use crate::step::{left_child, right_child, TreeEventKind, TreeStep, Value, ROOT_NODE};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Active,
    Split,
    Pivot,
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub level: usize,
    pub values: Vec<Value>,
    pub status: NodeStatus,
    pub pivot_index: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TreeView {
    /// Nodes in creation order; left siblings precede right ones
    nodes: Vec<TreeNode>,
    index: FxHashMap<String, usize>,
    focus: Option<String>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole run
    pub fn replay<'a>(steps: impl IntoIterator<Item = &'a TreeStep>) -> Self {
        let mut view = TreeView::new();
        for step in steps {
            view.apply(step);
        }
        view
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.focus = None;
    }

    pub fn apply(&mut self, step: &TreeStep) {
        match step.kind {
            TreeEventKind::Init => {
                self.clear();
                self.upsert(step);
            }
            TreeEventKind::Split => {
                let at = self.upsert(step);
                let node = &mut self.nodes[at];
                node.status = NodeStatus::Split;
                node.pivot_index = step.pivot_index;

                let level = step.level + 1;
                self.insert_child(left_child(&step.node_id), &step.node_id, level, &step.left);
                self.insert_child(right_child(&step.node_id), &step.node_id, level, &step.right);
            }
            TreeEventKind::Pivot => {
                let at = self.upsert(step);
                let node = &mut self.nodes[at];
                node.status = NodeStatus::Pivot;
                node.pivot_index = step.pivot_index;
            }
            TreeEventKind::Merge => {
                let at = self.upsert(step);
                let node = &mut self.nodes[at];
                node.values = step.values.clone();
                node.status = NodeStatus::Sorted;
                node.pivot_index = None;
                self.remove_descendants(&step.node_id);
            }
        }
        self.focus = Some(step.node_id.clone());
    }

    /// Position of the step's node, creating it if unseen
    fn upsert(&mut self, step: &TreeStep) -> usize {
        if let Some(&at) = self.index.get(&step.node_id) {
            let node = &mut self.nodes[at];
            if step.kind != TreeEventKind::Merge {
                node.values = step.values.clone();
            }
            return at;
        }
        self.push(TreeNode {
            id: step.node_id.clone(),
            parent_id: step.parent_id.clone(),
            level: step.level,
            values: step.values.clone(),
            status: NodeStatus::Active,
            pivot_index: None,
        })
    }

    fn insert_child(&mut self, id: String, parent: &str, level: usize, values: &[Value]) {
        if let Some(&at) = self.index.get(&id) {
            let node = &mut self.nodes[at];
            node.values = values.to_vec();
            node.status = NodeStatus::Active;
            return;
        }
        self.push(TreeNode {
            id,
            parent_id: Some(parent.to_string()),
            level,
            values: values.to_vec(),
            status: NodeStatus::Active,
            pivot_index: None,
        });
    }

    fn push(&mut self, node: TreeNode) -> usize {
        let at = self.nodes.len();
        self.index.insert(node.id.clone(), at);
        self.nodes.push(node);
        at
    }

    fn remove_descendants(&mut self, id: &str) {
        let prefix = format!("{}-", id);
        let before = self.nodes.len();
        self.nodes.retain(|n| !n.id.starts_with(&prefix));
        if self.nodes.len() != before {
            self.index = self
                .nodes
                .iter()
                .enumerate()
                .map(|(at, n)| (n.id.clone(), at))
                .collect();
        }
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.index.get(id).map(|&at| &self.nodes[at])
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.node(ROOT_NODE)
    }

    /// Node touched by the last applied step
    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.level + 1).max().unwrap_or(0)
    }

    /// Nodes grouped by level, top level first
    pub fn levels(&self) -> Vec<Vec<&TreeNode>> {
        let mut levels: Vec<Vec<&TreeNode>> = vec![Vec::new(); self.depth()];
        for node in &self.nodes {
            levels[node.level].push(node);
        }
        levels
    }
}
