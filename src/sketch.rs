//! Sketch lifecycle: setup once, then update and draw every frame

use rand::SeedableRng;

use crate::animation::{
    animator_chooser, default_animator_pool, AnimatorPool, InstallPolicy, SketchRng, TreeAnimator,
    TreeAnimatorInstaller,
};
use crate::error::SketchError;
use crate::params::{BlendMode, RenderParameters, SketchParameters};
use crate::render::{
    color_chooser, draw_chooser, Color, DrawChooser, NamedColorChooser, Primitive, RenderedTreeDrawer,
    TreeRenderer,
};
use crate::tree::{Tree, TreeGenerator};

/// A resolved render pass configuration
#[derive(Debug, Clone, Copy)]
struct PassSetup {
    draw: DrawChooser,
    color: NamedColorChooser,
    blend_mode: BlendMode,
}

impl PassSetup {
    fn resolve(params: &RenderParameters) -> Result<Self, SketchError> {
        Ok(Self {
            draw: draw_chooser(params.draw_chooser_index)?,
            color: color_chooser(params.color_chooser_index)?,
            blend_mode: params.blend_mode,
        })
    }
}

/// Primitives for one pass, drawn with a single blend mode
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub blend_mode: BlendMode,
    pub primitives: Vec<Primitive>,
}

/// Everything the drawing host needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub passes: [RenderPass; 2],
}

impl Frame {
    /// Both passes' primitives, flattened back to back
    pub fn to_f32_data(&self) -> Vec<f32> {
        let count: usize = self.passes.iter().map(|p| p.primitives.len()).sum();
        let mut data = Vec::with_capacity(count * Primitive::STRIDE);
        for pass in &self.passes {
            for primitive in &pass.primitives {
                primitive.write_to(&mut data);
            }
        }
        data
    }
}

pub struct Sketch {
    params: SketchParameters,
    tree: Tree,
    pool: AnimatorPool,
    passes: [PassSetup; 2],
    background: Color,
    renderer: TreeRenderer,
}

impl Sketch {
    pub fn setup(params: SketchParameters) -> Result<Self, SketchError> {
        Self::setup_with_policy(params, InstallPolicy::default())
    }

    pub fn setup_with_policy(params: SketchParameters, policy: InstallPolicy) -> Result<Self, SketchError> {
        let passes = [
            PassSetup::resolve(&params.render_parameters1)?,
            PassSetup::resolve(&params.render_parameters2)?,
        ];
        let chooser = animator_chooser(params.animator_chooser_index)?;

        let mut tree = TreeGenerator::default().generate_tree(params.depth(), params.tree_size);
        let pool = default_animator_pool();
        let mut rng = SketchRng::seed_from_u64(params.random_seed);
        let animated = TreeAnimatorInstaller::new(&pool, chooser.choose, &mut rng)
            .with_policy(policy)
            .install(&mut tree)?;

        tracing::debug!(
            seed = params.random_seed,
            nodes = tree.node_count(),
            animated,
            animator_chooser = chooser.name,
            pass1 = passes[0].draw.name,
            pass2 = passes[1].draw.name,
            "sketch set up"
        );

        Ok(Self {
            background: params.background_color.to_color(),
            params,
            tree,
            pool,
            passes,
            renderer: TreeRenderer::new(),
        })
    }

    /// Advance every animated node to `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) -> Result<(), SketchError> {
        TreeAnimator::new(&self.pool).tick(&mut self.tree, elapsed)
    }

    pub fn draw(&mut self) -> Frame {
        let rendered = self.renderer.render(&self.tree);
        let passes = self.passes.map(|pass| RenderPass {
            blend_mode: pass.blend_mode,
            primitives: RenderedTreeDrawer::new(pass.draw.kind).draw(&rendered, pass.color.color, pass.draw.include),
        });
        tracing::trace!(
            first = passes[0].primitives.len(),
            second = passes[1].primitives.len(),
            "drew frame"
        );

        Frame {
            background: self.background,
            passes,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn params(&self) -> &SketchParameters {
        &self.params
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimatorId;

    fn params(json: &str) -> SketchParameters {
        SketchParameters::from_json(json)
    }

    #[test]
    fn test_setup_defaults() {
        let sketch = Sketch::setup(params("{}")).unwrap();
        assert_eq!(sketch.tree().node_count(), 25);
        assert_eq!(sketch.tree().root.animator, None);
        // Default chooser gives every non-root node the first animator
        assert_eq!(sketch.tree().animated_count(), 24);
        assert!(sketch.tree().root.children.iter().all(|c| c.animator == Some(AnimatorId(0))));
    }

    #[test]
    fn test_include_root_policy() {
        let sketch = Sketch::setup_with_policy(params("{}"), InstallPolicy::IncludeRoot).unwrap();
        assert_eq!(sketch.tree().animated_count(), 25);
    }

    #[test]
    fn test_bad_chooser_indices() {
        let err = Sketch::setup(params(r#"{ "animatorChooserIndex": 9 }"#)).err();
        assert_eq!(err, Some(SketchError::ChooserOutOfRange { pool: "animator", index: 9, len: 4 }));

        let err = Sketch::setup(params(r#"{ "renderParameters2": { "colorChooserIndex": 12 } }"#)).err();
        assert_eq!(err, Some(SketchError::ChooserOutOfRange { pool: "color", index: 12, len: 4 }));
    }

    #[test]
    fn test_same_seed_same_installation() {
        let json = r#"{ "randomSeed": 1234, "animatorChooserIndex": 1 }"#;
        let a = Sketch::setup(params(json)).unwrap();
        let b = Sketch::setup(params(json)).unwrap();
        assert_eq!(a.tree(), b.tree());
    }

    #[test]
    fn test_update_moves_animated_nodes() {
        let mut sketch = Sketch::setup(params("{}")).unwrap();
        let before = sketch.tree().clone();
        sketch.update(0.5).unwrap();

        assert_eq!(sketch.tree().root.parameters, before.root.parameters);
        assert_ne!(sketch.tree().root.children[0].parameters, before.root.children[0].parameters);
    }

    #[test]
    fn test_draw_frame() {
        let json = r#"{
            "treeDepth": 2,
            "renderParameters1": { "drawChooserIndex": 0, "colorChooserIndex": 0, "blendMode": 1 },
            "renderParameters2": { "drawChooserIndex": 3, "colorChooserIndex": 2, "blendMode": 2 },
            "backgroundColor": { "hue": 0, "saturation": 0, "brightness": 0, "alpha": 255 }
        }"#;
        let mut sketch = Sketch::setup(params(json)).unwrap();
        let frame = sketch.draw();

        assert_eq!(frame.background, Color::BLACK);
        assert_eq!(frame.passes[0].blend_mode, BlendMode::Alpha);
        assert_eq!(frame.passes[0].primitives.len(), 7);
        assert_eq!(frame.passes[1].blend_mode, BlendMode::Add);
        assert_eq!(frame.passes[1].primitives.len(), 6);
        assert_eq!(frame.to_f32_data().len(), 13 * Primitive::STRIDE);
    }

    #[test]
    fn test_negative_depth_draws_lone_root() {
        let mut sketch = Sketch::setup(params(r#"{ "treeDepth": -2 }"#)).unwrap();
        assert_eq!(sketch.tree().node_count(), 1);
        sketch.update(1.0).unwrap();
        assert_eq!(sketch.draw().passes[0].primitives.len(), 1);
    }
}
