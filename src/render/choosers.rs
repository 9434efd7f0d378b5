//! Selectable colour and draw choosers for render passes

use super::{Color, PrimitiveKind, RenderedTreeNode};
use crate::error::SketchError;

pub type ColorChooser = fn(&RenderedTreeNode) -> Color;
pub type InclusionPredicate = fn(&RenderedTreeNode) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct NamedColorChooser {
    pub name: &'static str,
    pub color: ColorChooser,
}

/// What shape a pass draws and for which nodes
#[derive(Debug, Clone, Copy)]
pub struct DrawChooser {
    pub name: &'static str,
    pub kind: PrimitiveKind,
    pub include: InclusionPredicate,
}

/// Colour choosers in `colorChooserIndex` order
pub const COLOR_CHOOSERS: [NamedColorChooser; 4] = [
    NamedColorChooser { name: "pale", color: pale },
    NamedColorChooser { name: "by_depth", color: by_depth },
    NamedColorChooser { name: "leaf_highlight", color: leaf_highlight },
    NamedColorChooser { name: "by_scale", color: by_scale },
];

/// Draw choosers in `drawChooserIndex` order
pub const DRAW_CHOOSERS: [DrawChooser; 5] = [
    DrawChooser { name: "all_circles", kind: PrimitiveKind::Circle, include: everything },
    DrawChooser { name: "leaf_circles", kind: PrimitiveKind::Circle, include: leaves },
    DrawChooser { name: "interior_circles", kind: PrimitiveKind::Circle, include: interior },
    DrawChooser { name: "branch_lines", kind: PrimitiveKind::Line, include: below_root },
    DrawChooser { name: "near_leaf_points", kind: PrimitiveKind::Point, include: near_leaves },
];

pub fn color_chooser(index: usize) -> Result<NamedColorChooser, SketchError> {
    COLOR_CHOOSERS.get(index).copied().ok_or(SketchError::ChooserOutOfRange {
        pool: "color",
        index,
        len: COLOR_CHOOSERS.len(),
    })
}

pub fn draw_chooser(index: usize) -> Result<DrawChooser, SketchError> {
    DRAW_CHOOSERS.get(index).copied().ok_or(SketchError::ChooserOutOfRange {
        pool: "draw",
        index,
        len: DRAW_CHOOSERS.len(),
    })
}

const PALE: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 220.0 / 255.0, 1.0);

pub fn pale(_node: &RenderedTreeNode) -> Color {
    PALE
}

/// Hue walks around the wheel one step per level
pub fn by_depth(node: &RenderedTreeNode) -> Color {
    let hue = (node.depth as f32 * 40.0) % 255.0;
    Color::from_hsb255(hue, 160.0, 240.0, 220.0)
}

/// Red for nodes whose deepest leaf is one level down
pub fn leaf_highlight(node: &RenderedTreeNode) -> Color {
    if node.farthest_leaf_distance() == 1 {
        Color::from_rgba8(255, 0, 0, 255)
    } else {
        Color::from_rgba8(200, 200, 220, 200)
    }
}

/// Smaller branches fade toward dark blue
pub fn by_scale(node: &RenderedTreeNode) -> Color {
    let dark = Color::from_rgba8(20, 30, 90, 255);
    dark.lerp(&PALE, node.scale.clamp(0.0, 1.0))
}

pub fn everything(_node: &RenderedTreeNode) -> bool {
    true
}

pub fn leaves(node: &RenderedTreeNode) -> bool {
    node.is_leaf()
}

pub fn interior(node: &RenderedTreeNode) -> bool {
    !node.is_leaf()
}

pub fn below_root(node: &RenderedTreeNode) -> bool {
    node.depth > 0
}

pub fn near_leaves(node: &RenderedTreeNode) -> bool {
    node.farthest_leaf_distance() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn node(depth: usize, max_branch_depth: usize, scale: f32) -> RenderedTreeNode {
        let mut n = RenderedTreeNode::new(Vec2::ZERO, scale, depth);
        n.max_branch_depth = max_branch_depth;
        n
    }

    #[test]
    fn test_lookups() {
        assert_eq!(color_chooser(2).unwrap().name, "leaf_highlight");
        assert_eq!(draw_chooser(3).unwrap().kind, PrimitiveKind::Line);
        assert_eq!(
            draw_chooser(5).unwrap_err(),
            SketchError::ChooserOutOfRange { pool: "draw", index: 5, len: 5 }
        );
        assert!(color_chooser(4).is_err());
    }

    #[test]
    fn test_leaf_highlight() {
        assert_eq!(leaf_highlight(&node(1, 2, 0.4)), Color::from_rgba8(255, 0, 0, 255));
        assert_ne!(leaf_highlight(&node(0, 2, 1.0)), Color::from_rgba8(255, 0, 0, 255));
        assert_ne!(leaf_highlight(&node(2, 2, 0.16)), Color::from_rgba8(255, 0, 0, 255));
    }

    #[test]
    fn test_by_scale_endpoints() {
        let full = by_scale(&node(0, 0, 1.0));
        assert!((full.r - PALE.r).abs() < 0.0001 && (full.b - PALE.b).abs() < 0.0001);
        assert_eq!(by_scale(&node(0, 0, 0.0)), Color::from_rgba8(20, 30, 90, 255));
    }

    #[test]
    fn test_by_depth_varies() {
        assert_ne!(by_depth(&node(0, 2, 1.0)), by_depth(&node(1, 2, 0.4)));
    }

    #[test]
    fn test_predicates() {
        let mut parent = node(0, 1, 1.0);
        parent.children.push(node(1, 1, 0.4));

        assert!(interior(&parent) && !leaves(&parent));
        assert!(leaves(&parent.children[0]));
        assert!(!below_root(&parent) && below_root(&parent.children[0]));
        assert!(near_leaves(&parent) && near_leaves(&parent.children[0]));
        assert!(!near_leaves(&node(0, 2, 1.0)));
        assert!(everything(&parent));
    }
}
