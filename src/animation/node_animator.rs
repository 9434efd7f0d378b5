use super::Channel;
use crate::tree::{BranchParameters, TreeNode};

/// One channel per animatable branch parameter
///
/// Every channel defaults to [`Channel::Constant`], so an animator only needs
/// to name the parameters it moves.
#[derive(Debug, Clone, Default)]
pub struct NodeAnimatorFunctions {
    pub aspect: Channel,
    pub branch_angle: Channel,
    pub terminus_angle: Channel,
    pub size: Channel,
    pub offset: Channel,
}

impl NodeAnimatorFunctions {
    pub fn with_aspect(mut self, channel: Channel) -> Self {
        self.aspect = channel;
        self
    }

    pub fn with_branch_angle(mut self, channel: Channel) -> Self {
        self.branch_angle = channel;
        self
    }

    pub fn with_terminus_angle(mut self, channel: Channel) -> Self {
        self.terminus_angle = channel;
        self
    }

    pub fn with_size(mut self, channel: Channel) -> Self {
        self.size = channel;
        self
    }

    pub fn with_offset(mut self, channel: Channel) -> Self {
        self.offset = channel;
        self
    }
}

/// Stateless strategy that advances a node's parameters
#[derive(Debug, Clone, Default)]
pub struct NodeAnimator {
    pub functions: NodeAnimatorFunctions,
}

impl NodeAnimator {
    pub fn new(functions: NodeAnimatorFunctions) -> Self {
        Self { functions }
    }

    /// Recompute all five parameters from their current values
    pub fn apply(&self, parameters: &BranchParameters, elapsed: f32) -> BranchParameters {
        let f = &self.functions;
        BranchParameters {
            aspect: f.aspect.apply(parameters.aspect, elapsed),
            branch_angle: f.branch_angle.apply(parameters.branch_angle, elapsed),
            terminus_angle: f.terminus_angle.apply(parameters.terminus_angle, elapsed),
            size: f.size.apply(parameters.size, elapsed),
            offset: f.offset.apply(parameters.offset, elapsed),
        }
    }

    pub fn apply_to(&self, node: &mut TreeNode, elapsed: f32) {
        node.parameters = self.apply(&node.parameters, elapsed);
    }
}
