//! Per-node procedural animation
//!
//! Animators are installed once on a generated tree, then ticked every frame
//! with the absolute elapsed time before the tree is rendered.

mod channel;
mod node_animator;
mod pool;
mod installer;
mod tree_animator;
pub mod choosers;

pub use channel::Channel;
pub use node_animator::{NodeAnimator, NodeAnimatorFunctions};
pub use pool::{AnimatorId, AnimatorPool};
pub use installer::{InstallPolicy, TreeAnimatorInstaller};
pub use tree_animator::TreeAnimator;
pub use choosers::{animator_chooser, default_animator_pool, AnimatorChooser, NamedAnimatorChooser};

/// Seeded generator threaded into every chooser that needs randomness
pub type SketchRng = rand_chacha::ChaCha8Rng;
