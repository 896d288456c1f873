use super::Value;
use serde::{Deserialize, Serialize};

/// Id of the node for the whole input
pub const ROOT_NODE: &str = "root";

pub fn left_child(node_id: &str) -> String {
    format!("{}-L", node_id)
}

pub fn right_child(node_id: &str) -> String {
    format!("{}-R", node_id)
}

/// Tree mutation carried by a [`TreeStep`]
///
/// `Split` spawns the two children of a node (merge sort halving and quick
/// sort partitioning alike); `Merge` completes the subtree rooted at the node
/// and carries its sorted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeEventKind {
    #[serde(rename = "base")]
    Init,
    Split,
    Pivot,
    Merge,
}

/// One event on the recursion tree of merge or quick sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStep {
    pub kind: TreeEventKind,
    /// Path id such as `root`, `root-L`, `root-L-R`
    pub node_id: String,
    pub parent_id: Option<String>,
    /// Recursion depth, 0 at the root
    pub level: usize,
    /// Values held by the node (sorted values on `Merge`)
    pub values: Vec<Value>,
    /// Children spawned by a `Split`
    pub left: Vec<Value>,
    pub right: Vec<Value>,
    /// Quick sort pivot position within the node's values
    pub pivot_index: Option<usize>,
    pub pivot_value: Option<Value>,
    pub description: String,
    pub source_line: Option<usize>,
}

impl TreeStep {
    pub fn new(
        kind: TreeEventKind,
        node_id: &str,
        parent_id: Option<&str>,
        level: usize,
        values: &[Value],
        description: impl Into<String>,
    ) -> Self {
        TreeStep {
            kind,
            node_id: node_id.to_string(),
            parent_id: parent_id.map(str::to_string),
            level,
            values: values.to_vec(),
            left: Vec::new(),
            right: Vec::new(),
            pivot_index: None,
            pivot_value: None,
            description: description.into(),
            source_line: None,
        }
    }

    pub fn children(mut self, left: &[Value], right: &[Value]) -> Self {
        self.left = left.to_vec();
        self.right = right.to_vec();
        self
    }

    pub fn pivot(mut self, index: usize, value: Value) -> Self {
        self.pivot_index = Some(index);
        self.pivot_value = Some(value);
        self
    }

    pub fn line(mut self, line: usize) -> Self {
        self.source_line = Some(line);
        self
    }

    /// The root merge closes the run
    pub fn is_terminal(&self) -> bool {
        self.kind == TreeEventKind::Merge && self.node_id == ROOT_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_paths() {
        assert_eq!(left_child(ROOT_NODE), "root-L");
        assert_eq!(right_child(&left_child(ROOT_NODE)), "root-L-R");
    }

    #[test]
    fn test_only_root_merge_is_terminal() {
        let child = TreeStep::new(TreeEventKind::Merge, "root-L", Some("root"), 1, &[1], "");
        let root = TreeStep::new(TreeEventKind::Merge, ROOT_NODE, None, 0, &[1, 2], "");
        let split = TreeStep::new(TreeEventKind::Split, ROOT_NODE, None, 0, &[2, 1], "");

        assert!(!child.is_terminal());
        assert!(root.is_terminal());
        assert!(!split.is_terminal());
    }
}
