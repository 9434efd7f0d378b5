//! Branching tree data model and procedural generation

pub mod branch;
pub mod node;
pub mod generator;

pub use branch::BranchParameters;
pub use node::{Tree, TreeNode};
pub use generator::{BranchCount, GenerationParams, TreeGenerator};
