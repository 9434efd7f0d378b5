use super::AnimatorPool;
use crate::error::SketchError;
use crate::tree::{Tree, TreeNode};
use crate::visit::{visit_all_mut, TreeVisitorMut};

/// Advances every animated node once per frame
///
/// Each node with an installed animator has its parameters recomputed from
/// their current values and the absolute elapsed time.
pub struct TreeAnimator<'a> {
    pool: &'a AnimatorPool,
    error: Option<SketchError>,
}

impl<'a> TreeAnimator<'a> {
    pub fn new(pool: &'a AnimatorPool) -> Self {
        Self { pool, error: None }
    }

    pub fn tick(&mut self, tree: &mut Tree, elapsed: f32) -> Result<(), SketchError> {
        self.error = None;
        visit_all_mut(self, tree, elapsed, ());
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl TreeVisitorMut for TreeAnimator<'_> {
    type Data = f32;
    type UpData = ();

    fn visit_node(&mut self, node: &mut TreeNode, _depth: usize, elapsed: &f32) {
        let Some(id) = node.animator else {
            return;
        };
        match self.pool.get(id) {
            Ok(animator) => animator.apply_to(node, *elapsed),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
        }
    }
}
