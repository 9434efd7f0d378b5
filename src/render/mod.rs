//! Hierarchical-transform rendering and the drawing boundary
//!
//! [`TreeRenderer`] resolves a tree into a fresh [`RenderedTree`] every frame;
//! [`RenderedTreeDrawer`] turns that into primitives using a colour chooser
//! and an inclusion predicate.

pub mod color;
pub mod rendered;
pub mod renderer;
pub mod drawer;
pub mod choosers;

pub use color::Color;
pub use rendered::{RenderedTree, RenderedTreeNode};
pub use renderer::TreeRenderer;
pub use drawer::{Primitive, PrimitiveKind, RenderedTreeDrawer};
pub use choosers::{color_chooser, draw_chooser, DrawChooser, NamedColorChooser};
