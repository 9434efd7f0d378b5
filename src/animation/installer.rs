use std::iter::Peekable;
use std::vec;

use super::{AnimatorId, AnimatorPool, SketchRng};
use crate::error::SketchError;
use crate::tree::{Tree, TreeNode};
use crate::visit::{visit_all, visit_all_mut, TreeVisitor, TreeVisitorMut};

/// Whether the root takes part in animator installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPolicy {
    /// Leave the root untouched
    #[default]
    SkipRoot,
    IncludeRoot,
}

/// Assigns an animator to each node through a chooser
///
/// The chooser sees the node, its depth, the pool and the sketch RNG, and may
/// return `None` to leave a node unanimated. Runs once, before animation starts.
///
/// Every choice is made and checked against the pool before any node is
/// written, so a failed install leaves the tree as it was.
pub struct TreeAnimatorInstaller<'a, F> {
    pool: &'a AnimatorPool,
    chooser: F,
    rng: &'a mut SketchRng,
    policy: InstallPolicy,
    /// Pre-order index of each chosen node and its choice
    choices: Vec<(usize, Option<AnimatorId>)>,
    visited: usize,
    error: Option<SketchError>,
}

impl<'a, F> TreeAnimatorInstaller<'a, F>
where
    F: FnMut(&TreeNode, usize, &AnimatorPool, &mut SketchRng) -> Option<AnimatorId>,
{
    pub fn new(pool: &'a AnimatorPool, chooser: F, rng: &'a mut SketchRng) -> Self {
        Self {
            pool,
            chooser,
            rng,
            policy: InstallPolicy::default(),
            choices: Vec::new(),
            visited: 0,
            error: None,
        }
    }

    pub fn with_policy(mut self, policy: InstallPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Install animators across the tree, returning how many nodes got one
    pub fn install(mut self, tree: &mut Tree) -> Result<usize, SketchError> {
        visit_all(&mut self, &*tree, (), ());
        if let Some(err) = self.error {
            return Err(err);
        }

        let installed = self.choices.iter().filter(|(_, choice)| choice.is_some()).count();
        let mut writer = ChoiceWriter {
            pending: self.choices.into_iter().peekable(),
            visited: 0,
        };
        visit_all_mut(&mut writer, tree, (), ());

        tracing::debug!(installed, "installed node animators");
        Ok(installed)
    }
}

impl<F> TreeVisitor for TreeAnimatorInstaller<'_, F>
where
    F: FnMut(&TreeNode, usize, &AnimatorPool, &mut SketchRng) -> Option<AnimatorId>,
{
    type Data = ();
    type UpData = ();

    fn visit_node(&mut self, node: &TreeNode, depth: usize, _data: &()) {
        let index = self.visited;
        self.visited += 1;
        if self.error.is_some() || (depth == 0 && self.policy == InstallPolicy::SkipRoot) {
            return;
        }

        let choice = (self.chooser)(node, depth, self.pool, self.rng);
        if let Some(id) = choice {
            if !self.pool.contains(id) {
                self.error = Some(SketchError::AnimatorOutOfRange {
                    index: id.0,
                    len: self.pool.len(),
                });
                return;
            }
        }
        self.choices.push((index, choice));
    }
}

/// Writes validated choices back in the same pre-order
struct ChoiceWriter {
    pending: Peekable<vec::IntoIter<(usize, Option<AnimatorId>)>>,
    visited: usize,
}

impl TreeVisitorMut for ChoiceWriter {
    type Data = ();
    type UpData = ();

    fn visit_node(&mut self, node: &mut TreeNode, _depth: usize, _data: &()) {
        let index = self.visited;
        self.visited += 1;
        if let Some((_, choice)) = self.pending.next_if(|(at, _)| *at == index) {
            node.animator = choice;
        }
    }
}
