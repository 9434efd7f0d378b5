use super::Color;
use crate::math::Vec2;

/// A tree node resolved to screen space for one frame
///
/// Children mirror the source tree's children one-to-one and in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTreeNode {
    /// Absolute position of the branch origin
    pub position: Vec2,
    /// Cumulative uniform scale (the root is 1)
    pub scale: f32,
    /// Distance from the root
    pub depth: usize,
    /// Depth of the shallowest leaf in this subtree
    pub min_branch_depth: usize,
    /// Depth of the deepest leaf in this subtree
    pub max_branch_depth: usize,
    pub color: Color,
    pub children: Vec<RenderedTreeNode>,
}

impl RenderedTreeNode {
    pub fn new(position: Vec2, scale: f32, depth: usize) -> Self {
        Self {
            position,
            scale,
            depth,
            min_branch_depth: depth,
            max_branch_depth: depth,
            color: Color::default(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Radius of this node's circle for a tree of the given reference size
    pub fn radius(&self, tree_size: f32) -> f32 {
        self.scale * tree_size / 2.0
    }

    /// Levels between this node and the deepest leaf below it
    pub fn farthest_leaf_distance(&self) -> usize {
        self.max_branch_depth.saturating_sub(self.depth)
    }

    /// Levels between this node and the shallowest leaf below it
    pub fn nearest_leaf_distance(&self) -> usize {
        self.min_branch_depth.saturating_sub(self.depth)
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|c| c.count()).sum::<usize>()
    }

    /// Get all nodes in pre-order (self first, then children)
    pub fn iter_preorder(&self) -> impl Iterator<Item = &RenderedTreeNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// One frame's worth of resolved tree geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTree {
    pub root: RenderedTreeNode,
    /// Reference size of the source tree, for radii
    pub tree_size: f32,
}

impl RenderedTree {
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
