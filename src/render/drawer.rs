use super::{Color, RenderedTree, RenderedTreeNode};
use crate::math::Vec2;

/// Shape a render pass emits for each included node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Point,
    /// From the parent's position to the node's; the root has none
    Line,
    /// Circle of the node's radius
    Circle,
}

/// A drawable shape in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Point { at: Vec2, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
}

impl Primitive {
    /// Floats per primitive in [`Primitive::write_to`]'s layout
    pub const STRIDE: usize = 10;

    /// Append a fixed-width record: `[kind, x0, y0, x1, y1, radius, r, g, b, a]`
    ///
    /// `kind` is 0 for points, 1 for lines and 2 for circles. Unused slots are 0.
    pub fn write_to(&self, out: &mut Vec<f32>) {
        let (kind, p0, p1, radius, color) = match *self {
            Primitive::Point { at, color } => (0.0, at, Vec2::ZERO, 0.0, color),
            Primitive::Line { from, to, color } => (1.0, from, to, 0.0, color),
            Primitive::Circle { center, radius, color } => (2.0, center, Vec2::ZERO, radius, color),
        };
        out.extend_from_slice(&[kind, p0.x, p0.y, p1.x, p1.y, radius]);
        out.extend_from_slice(&color.to_array());
    }

    pub fn color(&self) -> Color {
        match *self {
            Primitive::Point { color, .. } | Primitive::Line { color, .. } | Primitive::Circle { color, .. } => color,
        }
    }
}

/// Turns a rendered tree into primitives
///
/// Excluded nodes emit nothing but their children are still considered.
#[derive(Debug, Clone, Copy)]
pub struct RenderedTreeDrawer {
    pub kind: PrimitiveKind,
}

impl RenderedTreeDrawer {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    pub fn draw<C, I>(&self, tree: &RenderedTree, color: C, include: I) -> Vec<Primitive>
    where
        C: Fn(&RenderedTreeNode) -> Color,
        I: Fn(&RenderedTreeNode) -> bool,
    {
        let mut out = Vec::with_capacity(tree.node_count());
        self.draw_node(&tree.root, None, tree.tree_size, &color, &include, &mut out);
        out
    }

    fn draw_node<C, I>(
        &self,
        node: &RenderedTreeNode,
        parent: Option<Vec2>,
        tree_size: f32,
        color: &C,
        include: &I,
        out: &mut Vec<Primitive>,
    ) where
        C: Fn(&RenderedTreeNode) -> Color,
        I: Fn(&RenderedTreeNode) -> bool,
    {
        if include(node) {
            let c = color(node);
            let primitive = match self.kind {
                PrimitiveKind::Point => Some(Primitive::Point { at: node.position, color: c }),
                PrimitiveKind::Line => parent.map(|from| Primitive::Line {
                    from,
                    to: node.position,
                    color: c,
                }),
                PrimitiveKind::Circle => Some(Primitive::Circle {
                    center: node.position,
                    radius: node.radius(tree_size),
                    color: c,
                }),
            };
            out.extend(primitive);
        }

        for child in &node.children {
            self.draw_node(child, Some(node.position), tree_size, color, include, out);
        }
    }
}
