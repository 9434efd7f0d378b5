//! Generic depth-first tree traversal

pub mod visitor;
pub mod height;

pub use visitor::{visit_all, visit_all_mut, TreeVisitor, TreeVisitorMut};
pub use height::SubtreeHeight;
