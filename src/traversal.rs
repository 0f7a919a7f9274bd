//! Depth-first and breadth-first traversal of a binary tree.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub value: i32,
    pub left: Option<Box<Tree>>,
    pub right: Option<Box<Tree>>,
}

impl Tree {
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: Tree) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Tree) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Pre-order: node, then left subtree, then right subtree.
    pub fn dfs(&self) -> Vec<i32> {
        let mut visited = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visited.push(node.value);
            // Right goes on first so the left subtree is popped before it.
            if let Some(right) = &node.right {
                stack.push(right);
            }
            if let Some(left) = &node.left {
                stack.push(left);
            }
        }
        visited
    }

    /// Level order, left to right.
    pub fn bfs(&self) -> Vec<i32> {
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            visited.push(node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        visited
    }
}

/// ```text
///       1
///     /   \
///    2     3
///   /     / \
///  4     5   6
/// ```
pub fn sample_tree() -> Tree {
    Tree::leaf(1)
        .with_left(Tree::leaf(2).with_left(Tree::leaf(4)))
        .with_right(Tree::leaf(3).with_left(Tree::leaf(5)).with_right(Tree::leaf(6)))
}

pub fn demo() -> Vec<String> {
    let tree = sample_tree();
    vec![
        format!("dfs: {:?}", tree.dfs()),
        format!("bfs: {:?}", tree.bfs()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_is_pre_order() {
        assert_eq!(sample_tree().dfs(), vec![1, 2, 4, 3, 5, 6]);
    }

    #[test]
    fn test_bfs_is_level_order() {
        assert_eq!(sample_tree().bfs(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_single_node() {
        let tree = Tree::leaf(7);
        assert_eq!(tree.dfs(), vec![7]);
        assert_eq!(tree.bfs(), vec![7]);
    }

    #[test]
    fn test_right_leaning_chain() {
        let tree = Tree::leaf(1).with_right(Tree::leaf(2).with_right(Tree::leaf(3)));
        assert_eq!(tree.dfs(), tree.bfs());
    }

    #[test]
    fn test_demo() {
        assert_eq!(demo(), vec!["dfs: [1, 2, 4, 3, 5, 6]", "bfs: [1, 2, 3, 4, 5, 6]"]);
    }
}
