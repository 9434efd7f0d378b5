use super::{RenderedTree, RenderedTreeNode};
use crate::math::{Affine2, Vec2};
use crate::tree::{BranchParameters, Tree, TreeNode};
use crate::visit::{visit_all, TreeVisitor};

/// Resolves a tree's parametric branches into absolute positions
///
/// Walks the tree keeping a stack of accumulated transforms, pushed when a
/// branch is entered and popped when it is left. Each non-root branch
/// composes, in its parent's frame:
///
/// 1. rotate by `terminus_angle`
/// 2. translate by `(0, -size/2 - offset * size/2)` (tree size)
/// 3. scale by the branch `size`
/// 4. rotate by `branch_angle`
///
/// The root is left at the identity.
#[derive(Debug, Default)]
pub struct TreeRenderer {
    tree_size: f32,
    transforms: Vec<Affine2>,
    building: Vec<RenderedTreeNode>,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform a branch applies on top of its parent's frame
    pub fn branch_transform(parameters: &BranchParameters, tree_size: f32) -> Affine2 {
        Affine2::identity()
            .local_rotate_deg(parameters.terminus_angle)
            .local_translate(0.0, -tree_size / 2.0 - parameters.offset * tree_size / 2.0)
            .local_scale(parameters.size)
            .local_rotate_deg(parameters.branch_angle)
    }

    /// Produce this frame's rendered tree; a pure function of the tree's state
    pub fn render(&mut self, tree: &Tree) -> RenderedTree {
        self.tree_size = tree.size;
        self.transforms.clear();
        self.transforms.push(Affine2::IDENTITY);
        self.building.clear();

        visit_all(self, tree, (), None);

        let root = self
            .building
            .pop()
            .unwrap_or_else(|| RenderedTreeNode::new(Vec2::ZERO, 1.0, 0));
        tracing::trace!(nodes = root.count(), "rendered tree");

        RenderedTree {
            root,
            tree_size: tree.size,
        }
    }

    fn current(&self) -> Affine2 {
        self.transforms.last().copied().unwrap_or_default()
    }
}

impl TreeVisitor for TreeRenderer {
    type Data = ();
    /// Leaf depth range `(min, max)` seen so far, `None` before any leaf
    type UpData = Option<(usize, usize)>;

    fn pre_visit(&mut self, node: &TreeNode, _depth: usize, _data: &()) {
        let transform = self
            .current()
            .mul(&Self::branch_transform(&node.parameters, self.tree_size));
        self.transforms.push(transform);
    }

    fn visit_node(&mut self, _node: &TreeNode, depth: usize, _data: &()) {
        let transform = self.current();
        self.building.push(RenderedTreeNode::new(
            transform.transform_point(Vec2::ZERO),
            transform.uniform_scale(),
            depth,
        ));
    }

    fn visit_node_up(&mut self, _node: &TreeNode, _depth: usize, _data: &(), up: &Self::UpData) {
        // The finished child is still on top of the build stack; its parent sits below it.
        let Some((min, max)) = *up else {
            return;
        };
        let Some(index) = self.building.len().checked_sub(2) else {
            return;
        };
        let parent = &mut self.building[index];
        parent.min_branch_depth = min;
        parent.max_branch_depth = max;
    }

    fn post_visit(&mut self, _node: &TreeNode, _depth: usize, _data: &()) {
        self.transforms.pop();
        if let Some(child) = self.building.pop() {
            if let Some(parent) = self.building.last_mut() {
                parent.children.push(child);
            }
        }
    }

    fn modify_up_data(&mut self, depth: usize, node: &TreeNode, _up: Self::UpData) -> Self::UpData {
        if node.is_leaf() {
            Some((depth, depth))
        } else {
            None
        }
    }

    fn reduce_up_data(&mut self, child: Self::UpData, reduced: Self::UpData) -> Self::UpData {
        match (child, reduced) {
            (Some((a_min, a_max)), Some((b_min, b_max))) => Some((a_min.min(b_min), a_max.max(b_max))),
            (Some(range), None) | (None, Some(range)) => Some(range),
            (None, None) => None,
        }
    }
}
