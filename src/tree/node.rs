use super::BranchParameters;
use crate::animation::AnimatorId;

/// A node in the branching tree
///
/// Children are owned and kept in insertion order, which is also the
/// traversal and draw order. The animator is a handle into an
/// [`AnimatorPool`](crate::animation::AnimatorPool) owned elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub parameters: BranchParameters,
    pub children: Vec<TreeNode>,
    pub animator: Option<AnimatorId>,
}

impl TreeNode {
    pub fn new(parameters: BranchParameters) -> Self {
        Self {
            parameters,
            children: Vec::new(),
            animator: None,
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in subtree
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|c| c.count()).sum::<usize>()
    }

    /// Depth reached by always following the first child
    pub fn inverse_depth(&self) -> usize {
        let mut result = 0;
        let mut node = self;
        while let Some(first) = node.children.first() {
            result += 1;
            node = first;
        }
        result
    }

    /// Get all nodes in pre-order (self first, then children)
    pub fn iter_preorder(&self) -> impl Iterator<Item = &TreeNode> {
        PreorderNodeIter { stack: vec![self] }
    }
}

struct PreorderNodeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreorderNodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// A generated tree and its reference length scale
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub root: TreeNode,
    /// Reference size used for offsets and radii; fixed after construction
    pub size: f32,
}

impl Tree {
    pub fn new(size: f32, root: TreeNode) -> Self {
        Self { root, size }
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Number of nodes carrying an animator
    pub fn animated_count(&self) -> usize {
        self.root.iter_preorder().filter(|n| n.animator.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tree() -> Tree {
        let leaf = |angle| TreeNode::new(BranchParameters::child(angle, 0.4));
        let root = TreeNode::new(BranchParameters::default()).with_children(vec![
            leaf(0.0).with_children(vec![leaf(-60.0), leaf(60.0)]),
            leaf(180.0),
        ]);
        Tree::new(100.0, root)
    }

    #[test]
    fn test_node_count() {
        let tree = create_test_tree();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.root.children[1].count(), 1);
    }

    #[test]
    fn test_is_leaf() {
        let tree = create_test_tree();
        assert!(!tree.root.is_leaf());
        assert!(tree.root.children[1].is_leaf());
    }

    #[test]
    fn test_inverse_depth_follows_first_child() {
        let tree = create_test_tree();
        assert_eq!(tree.root.inverse_depth(), 2);
        assert_eq!(tree.root.children[1].inverse_depth(), 0);
    }

    #[test]
    fn test_preorder_iteration() {
        let tree = create_test_tree();
        let angles: Vec<f32> = tree
            .root
            .iter_preorder()
            .map(|n| n.parameters.terminus_angle)
            .collect();
        assert_eq!(angles, vec![0.0, 0.0, -60.0, 60.0, 180.0]);
    }

    #[test]
    fn test_new_nodes_are_unanimated() {
        let tree = create_test_tree();
        assert_eq!(tree.animated_count(), 0);
    }
}
