//! Animator presets and the selectable animator choosers

use rand::Rng;

use super::{AnimatorId, AnimatorPool, Channel, NodeAnimator, NodeAnimatorFunctions, SketchRng};
use crate::error::SketchError;
use crate::tree::TreeNode;

/// Picks an animator (or none) for a node at a given depth
pub type AnimatorChooser = fn(&TreeNode, usize, &AnimatorPool, &mut SketchRng) -> Option<AnimatorId>;

/// A chooser selectable by index from the parameter document
#[derive(Debug, Clone, Copy)]
pub struct NamedAnimatorChooser {
    pub name: &'static str,
    pub choose: AnimatorChooser,
}

/// Choosers in `animatorChooserIndex` order
pub const ANIMATOR_CHOOSERS: [NamedAnimatorChooser; 4] = [
    NamedAnimatorChooser { name: "first", choose: choose_first },
    NamedAnimatorChooser { name: "random", choose: choose_random },
    NamedAnimatorChooser { name: "by_depth", choose: choose_by_depth },
    NamedAnimatorChooser { name: "sparse", choose: choose_sparse },
];

/// Resolve a configured chooser index
pub fn animator_chooser(index: usize) -> Result<NamedAnimatorChooser, SketchError> {
    ANIMATOR_CHOOSERS
        .get(index)
        .copied()
        .ok_or(SketchError::ChooserOutOfRange {
            pool: "animator",
            index,
            len: ANIMATOR_CHOOSERS.len(),
        })
}

/// Every node gets the first animator
pub fn choose_first(_node: &TreeNode, _depth: usize, pool: &AnimatorPool, _rng: &mut SketchRng) -> Option<AnimatorId> {
    pool.ids().next()
}

/// Uniform seeded pick from the pool
pub fn choose_random(_node: &TreeNode, _depth: usize, pool: &AnimatorPool, rng: &mut SketchRng) -> Option<AnimatorId> {
    if pool.is_empty() {
        return None;
    }
    Some(AnimatorId(rng.gen_range(0..pool.len())))
}

/// Nodes at the same depth share an animator
pub fn choose_by_depth(_node: &TreeNode, depth: usize, pool: &AnimatorPool, _rng: &mut SketchRng) -> Option<AnimatorId> {
    if pool.is_empty() {
        return None;
    }
    Some(AnimatorId(depth % pool.len()))
}

/// Roughly half the nodes stay still; the rest get a seeded pick
pub fn choose_sparse(node: &TreeNode, depth: usize, pool: &AnimatorPool, rng: &mut SketchRng) -> Option<AnimatorId> {
    if rng.gen_bool(0.5) {
        choose_random(node, depth, pool, rng)
    } else {
        None
    }
}

/// The sketch's stock animators
///
/// 0. terminus drift: +0.1 degrees per tick
/// 1. branch sway: `15 * sin(t)` degrees
/// 2. size pulse: `0.4 + 0.05 * sin(2t)`
/// 3. offset breathing: `0.5 + 0.5 * sin(t)`
pub fn default_animator_pool() -> AnimatorPool {
    [
        NodeAnimatorFunctions::default().with_terminus_angle(Channel::Step(0.1)),
        NodeAnimatorFunctions::default().with_branch_angle(Channel::wave(0.0, 15.0, 1.0)),
        NodeAnimatorFunctions::default().with_size(Channel::wave(0.4, 0.05, 2.0)),
        NodeAnimatorFunctions::default().with_offset(Channel::wave(0.5, 0.5, 1.0)),
    ]
    .into_iter()
    .map(NodeAnimator::new)
    .collect()
}
