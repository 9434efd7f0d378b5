use super::{BranchParameters, Tree, TreeNode};

/// How many children an interior (non-root) node grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCount {
    /// Always the same number of children
    Fixed(usize),
    /// As many children as levels remain below the node
    MatchRemainingDepth,
}

impl BranchCount {
    fn resolve(self, remaining_depth: usize) -> usize {
        match self {
            BranchCount::Fixed(n) => n,
            BranchCount::MatchRemainingDepth => remaining_depth,
        }
    }
}

/// Parameters controlling tree generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Children of the root, spread over the full circle
    pub root_branches: usize,
    /// Children of every other non-leaf node, fanned forward
    pub branches: BranchCount,
    /// Size of every generated child relative to its parent
    pub child_scale: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            root_branches: 6,
            branches: BranchCount::Fixed(3),
            child_scale: 0.4,
        }
    }
}

/// Builds a [`Tree`] from a depth and the branching-angle rules
///
/// The root fans its children around the full circle (`i * 360 / N`).
/// Interior nodes fan `M` children forward at `i * 360 / (2M) - 360 / M`
/// for `i` in `1..=M`, a spread narrower than the root's.
#[derive(Debug, Clone, Default)]
pub struct TreeGenerator {
    pub params: GenerationParams,
}

impl TreeGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    /// Generate a tree with `depth - 1` levels below the root
    ///
    /// `size` is the radius of the root circle; the tree's reference size is
    /// its diameter. A depth of 0 or 1 yields a lone root.
    pub fn generate_tree(&self, depth: usize, size: f32) -> Tree {
        let root = self.generate_helper(depth.saturating_sub(1), BranchParameters::default(), true);
        Tree::new(size * 2.0, root)
    }

    fn generate_helper(&self, remaining_depth: usize, parameters: BranchParameters, initial: bool) -> TreeNode {
        let mut node = TreeNode::new(parameters);
        if remaining_depth == 0 {
            return node;
        }

        let angles = if initial {
            root_angles(self.params.root_branches)
        } else {
            interior_angles(self.params.branches.resolve(remaining_depth))
        };

        node.children = angles
            .into_iter()
            .map(|angle| {
                self.generate_helper(
                    remaining_depth - 1,
                    BranchParameters::child(angle, self.params.child_scale),
                    false,
                )
            })
            .collect();
        node
    }
}

/// Terminus angles for the root's children: the full circle
pub fn root_angles(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * 360.0 / n as f32).collect()
}

/// Terminus angles for an interior node's children: a forward fan
pub fn interior_angles(m: usize) -> Vec<f32> {
    (1..=m)
        .map(|i| i as f32 * 360.0 / (2.0 * m as f32) - 360.0 / m as f32)
        .collect()
}
