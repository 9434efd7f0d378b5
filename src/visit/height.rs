use super::{visit_all, TreeVisitor};
use crate::tree::{Tree, TreeNode};

/// Counts edges on the longest root-to-leaf path
///
/// Up-data is incremented below the root and reduced with `max`.
#[derive(Debug, Default)]
pub struct SubtreeHeight;

impl SubtreeHeight {
    pub fn of(tree: &Tree) -> usize {
        visit_all(&mut SubtreeHeight, tree, (), 0)
    }
}

impl TreeVisitor for SubtreeHeight {
    type Data = ();
    type UpData = usize;

    fn modify_up_data(&mut self, depth: usize, _node: &TreeNode, up: usize) -> usize {
        if depth == 0 {
            up
        } else {
            up + 1
        }
    }

    fn reduce_up_data(&mut self, child: usize, reduced: usize) -> usize {
        child.max(reduced)
    }
}
