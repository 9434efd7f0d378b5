use serde::{Deserialize, Serialize};

/// Local geometric state of one branch, relative to its parent
///
/// Angles are in degrees. `terminus_angle` turns the branch away from its
/// parent before the offset translation; `branch_angle` turns the branch's own
/// frame after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchParameters {
    pub aspect: f32,
    pub branch_angle: f32,
    pub terminus_angle: f32,
    /// Uniform scale of the branch frame relative to its parent (should be > 0)
    pub size: f32,
    /// Extra travel along the parent's up axis, as a fraction of half the tree size
    pub offset: f32,
}

impl BranchParameters {
    pub fn new(aspect: f32, branch_angle: f32, terminus_angle: f32, size: f32, offset: f32) -> Self {
        Self {
            aspect,
            branch_angle,
            terminus_angle,
            size,
            offset,
        }
    }

    /// A plain child branch leaving its parent at `terminus_angle`
    pub fn child(terminus_angle: f32, size: f32) -> Self {
        Self::new(1.0, 0.0, terminus_angle, size, 0.0)
    }
}
