//! Depth-first traversal engine with downward data and reduced upward data
//!
//! For every node, in order:
//! 1. `visit_node(node, depth, data)`
//! 2. `new_data = modify_data(depth, node, data)` for the children
//! 3. `new_up = modify_up_data(depth, node, up)` seeds the reduction
//! 4. for each child in insertion order: `pre_visit(child)`, recurse (seeded
//!    with `new_up`), fold the child's result with `reduce_up_data`,
//!    `visit_node_up(node, ...)` with the running reduction, `post_visit(child)`
//! 5. the reduction is returned to the caller
//!
//! `pre_visit` and `post_visit` bracket a child's whole subtree exactly once,
//! so state pushed in one must be popped in the other.

use crate::tree::{Tree, TreeNode};

/// Read-only visitor over a [`Tree`]
///
/// All hooks default to no-ops; data transforms default to passing values
/// through, and the reduction keeps the child's value.
pub trait TreeVisitor {
    /// Threaded downward; each node may derive new data for its children
    type Data: Clone;
    /// Threaded upward as a left fold over children
    type UpData: Clone;

    fn pre_visit(&mut self, _node: &TreeNode, _depth: usize, _data: &Self::Data) {}

    fn visit_node(&mut self, _node: &TreeNode, _depth: usize, _data: &Self::Data) {}

    fn visit_node_up(&mut self, _node: &TreeNode, _depth: usize, _data: &Self::Data, _up: &Self::UpData) {}

    fn post_visit(&mut self, _node: &TreeNode, _depth: usize, _data: &Self::Data) {}

    fn modify_data(&mut self, _depth: usize, _node: &TreeNode, data: &Self::Data) -> Self::Data {
        data.clone()
    }

    fn modify_up_data(&mut self, _depth: usize, _node: &TreeNode, up: Self::UpData) -> Self::UpData {
        up
    }

    fn reduce_up_data(&mut self, child: Self::UpData, _reduced: Self::UpData) -> Self::UpData {
        child
    }
}

/// Visitor allowed to mutate nodes in place
///
/// Same contract as [`TreeVisitor`]; only the hooks that see a node get it mutably.
pub trait TreeVisitorMut {
    type Data: Clone;
    type UpData: Clone;

    fn pre_visit(&mut self, _node: &mut TreeNode, _depth: usize, _data: &Self::Data) {}

    fn visit_node(&mut self, _node: &mut TreeNode, _depth: usize, _data: &Self::Data) {}

    fn visit_node_up(&mut self, _node: &mut TreeNode, _depth: usize, _data: &Self::Data, _up: &Self::UpData) {}

    fn post_visit(&mut self, _node: &mut TreeNode, _depth: usize, _data: &Self::Data) {}

    fn modify_data(&mut self, _depth: usize, _node: &TreeNode, data: &Self::Data) -> Self::Data {
        data.clone()
    }

    fn modify_up_data(&mut self, _depth: usize, _node: &TreeNode, up: Self::UpData) -> Self::UpData {
        up
    }

    fn reduce_up_data(&mut self, child: Self::UpData, _reduced: Self::UpData) -> Self::UpData {
        child
    }
}

/// Walk the whole tree from the root (depth 0)
pub fn visit_all<V: TreeVisitor>(visitor: &mut V, tree: &Tree, data: V::Data, up: V::UpData) -> V::UpData {
    visit_helper(visitor, &tree.root, 0, &data, up)
}

fn visit_helper<V: TreeVisitor>(
    visitor: &mut V,
    node: &TreeNode,
    depth: usize,
    data: &V::Data,
    up: V::UpData,
) -> V::UpData {
    visitor.visit_node(node, depth, data);

    let new_data = visitor.modify_data(depth, node, data);
    let seed = visitor.modify_up_data(depth, node, up);
    let mut reduced = seed.clone();

    for child in &node.children {
        visitor.pre_visit(child, depth + 1, &new_data);
        let child_up = visit_helper(visitor, child, depth + 1, &new_data, seed.clone());
        reduced = visitor.reduce_up_data(child_up, reduced);
        visitor.visit_node_up(node, depth + 1, &new_data, &reduced);
        visitor.post_visit(child, depth + 1, &new_data);
    }

    reduced
}

/// Walk the whole tree from the root (depth 0), allowing mutation
pub fn visit_all_mut<V: TreeVisitorMut>(visitor: &mut V, tree: &mut Tree, data: V::Data, up: V::UpData) -> V::UpData {
    visit_helper_mut(visitor, &mut tree.root, 0, &data, up)
}

fn visit_helper_mut<V: TreeVisitorMut>(
    visitor: &mut V,
    node: &mut TreeNode,
    depth: usize,
    data: &V::Data,
    up: V::UpData,
) -> V::UpData {
    visitor.visit_node(node, depth, data);

    let new_data = visitor.modify_data(depth, node, data);
    let seed = visitor.modify_up_data(depth, node, up);
    let mut reduced = seed.clone();

    for i in 0..node.children.len() {
        visitor.pre_visit(&mut node.children[i], depth + 1, &new_data);
        let child_up = visit_helper_mut(visitor, &mut node.children[i], depth + 1, &new_data, seed.clone());
        reduced = visitor.reduce_up_data(child_up, reduced);
        visitor.visit_node_up(node, depth + 1, &new_data, &reduced);
        visitor.post_visit(&mut node.children[i], depth + 1, &new_data);
    }

    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{BranchParameters, TreeGenerator};

    fn small_tree() -> Tree {
        let node = |angle| TreeNode::new(BranchParameters::child(angle, 0.4));
        let root = TreeNode::new(BranchParameters::default())
            .with_children(vec![node(1.0).with_children(vec![node(2.0)]), node(3.0)]);
        Tree::new(10.0, root)
    }

    /// Records every hook call as a short event string
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl TreeVisitor for Recorder {
        type Data = ();
        type UpData = ();

        fn pre_visit(&mut self, node: &TreeNode, depth: usize, _data: &()) {
            self.events.push(format!("pre {} @{}", node.parameters.terminus_angle, depth));
        }

        fn visit_node(&mut self, node: &TreeNode, depth: usize, _data: &()) {
            self.events.push(format!("visit {} @{}", node.parameters.terminus_angle, depth));
        }

        fn visit_node_up(&mut self, node: &TreeNode, depth: usize, _data: &(), _up: &()) {
            self.events.push(format!("up {} @{}", node.parameters.terminus_angle, depth));
        }

        fn post_visit(&mut self, node: &TreeNode, depth: usize, _data: &()) {
            self.events.push(format!("post {} @{}", node.parameters.terminus_angle, depth));
        }
    }

    const SMALL_TREE_EVENTS: [&str; 13] = [
        "visit 0 @0",
        "pre 1 @1",
        "visit 1 @1",
        "pre 2 @2",
        "visit 2 @2",
        "up 1 @2",
        "post 2 @2",
        "up 0 @1",
        "post 1 @1",
        "pre 3 @1",
        "visit 3 @1",
        "up 0 @1",
        "post 3 @1",
    ];

    #[test]
    fn test_hook_order() {
        let tree = small_tree();
        let mut recorder = Recorder::default();
        visit_all(&mut recorder, &tree, (), ());

        assert_eq!(recorder.events, SMALL_TREE_EVENTS);
    }

    /// Same as [`Recorder`] over the mutating engine, also tracking the
    /// `pre_visit`/`post_visit` bracket and the running reduction
    #[derive(Default)]
    struct MutRecorder {
        events: Vec<String>,
        open: Vec<f32>,
        reductions: Vec<usize>,
    }

    impl TreeVisitorMut for MutRecorder {
        type Data = ();
        type UpData = usize;

        fn pre_visit(&mut self, node: &mut TreeNode, depth: usize, _data: &()) {
            self.open.push(node.parameters.terminus_angle);
            self.events.push(format!("pre {} @{}", node.parameters.terminus_angle, depth));
        }

        fn visit_node(&mut self, node: &mut TreeNode, depth: usize, _data: &()) {
            self.events.push(format!("visit {} @{}", node.parameters.terminus_angle, depth));
        }

        fn visit_node_up(&mut self, node: &mut TreeNode, depth: usize, _data: &(), up: &usize) {
            self.reductions.push(*up);
            self.events.push(format!("up {} @{}", node.parameters.terminus_angle, depth));
        }

        fn post_visit(&mut self, node: &mut TreeNode, depth: usize, _data: &()) {
            assert_eq!(self.open.pop(), Some(node.parameters.terminus_angle));
            self.events.push(format!("post {} @{}", node.parameters.terminus_angle, depth));
        }

        fn modify_up_data(&mut self, _depth: usize, node: &TreeNode, up: usize) -> usize {
            if node.is_leaf() {
                1
            } else {
                up
            }
        }

        fn reduce_up_data(&mut self, child: usize, reduced: usize) -> usize {
            child + reduced
        }
    }

    #[test]
    fn test_hook_order_mut() {
        let mut tree = small_tree();
        let mut recorder = MutRecorder::default();
        let leaves = visit_all_mut(&mut recorder, &mut tree, (), 0);

        assert_eq!(recorder.events, SMALL_TREE_EVENTS);
        assert!(recorder.open.is_empty());
        // Running leaf count after each child: under node 1, then at the root twice.
        assert_eq!(recorder.reductions, vec![1, 1, 2]);
        assert_eq!(leaves, 2);
    }

    /// Sums terminus angles downward and collects the path sums at leaves
    struct PathSums;

    impl TreeVisitor for PathSums {
        type Data = f32;
        type UpData = Vec<f32>;

        fn modify_data(&mut self, _depth: usize, node: &TreeNode, data: &f32) -> f32 {
            data + node.parameters.terminus_angle
        }

        fn modify_up_data(&mut self, _depth: usize, node: &TreeNode, up: Vec<f32>) -> Vec<f32> {
            if node.is_leaf() {
                vec![node.parameters.terminus_angle]
            } else {
                up
            }
        }

        fn reduce_up_data(&mut self, child: Vec<f32>, mut reduced: Vec<f32>) -> Vec<f32> {
            reduced.extend(child);
            reduced
        }
    }

    #[test]
    fn test_up_data_folds_left_to_right() {
        let tree = small_tree();
        let leaves = visit_all(&mut PathSums, &tree, 0.0, Vec::new());
        assert_eq!(leaves, vec![2.0, 3.0]);
    }

    /// Records the data seen at each visit
    #[derive(Default)]
    struct DataSpy {
        seen: Vec<(usize, f32)>,
    }

    impl TreeVisitor for DataSpy {
        type Data = f32;
        type UpData = ();

        fn visit_node(&mut self, _node: &TreeNode, depth: usize, data: &f32) {
            self.seen.push((depth, *data));
        }

        fn modify_data(&mut self, _depth: usize, node: &TreeNode, data: &f32) -> f32 {
            data + node.parameters.terminus_angle
        }
    }

    #[test]
    fn test_data_threads_downward_per_subtree() {
        let tree = small_tree();
        let mut spy = DataSpy::default();
        visit_all(&mut spy, &tree, 100.0, ());
        assert_eq!(spy.seen, vec![(0, 100.0), (1, 100.0), (2, 101.0), (1, 100.0)]);
    }

    #[test]
    fn test_default_reduction_keeps_child_value() {
        struct Count;
        impl TreeVisitor for Count {
            type Data = ();
            type UpData = usize;
            fn modify_up_data(&mut self, depth: usize, _node: &TreeNode, _up: usize) -> usize {
                depth
            }
        }

        let tree = small_tree();
        // The last child visited at the root is the leaf at depth 1.
        assert_eq!(visit_all(&mut Count, &tree, (), 0), 1);
    }

    struct Doubler;

    impl TreeVisitorMut for Doubler {
        type Data = ();
        type UpData = usize;

        fn visit_node(&mut self, node: &mut TreeNode, _depth: usize, _data: &()) {
            node.parameters.size *= 2.0;
        }

        fn modify_up_data(&mut self, _depth: usize, _node: &TreeNode, up: usize) -> usize {
            up + 1
        }

        fn reduce_up_data(&mut self, child: usize, reduced: usize) -> usize {
            child.max(reduced)
        }
    }

    #[test]
    fn test_mutating_walk() {
        let mut tree = TreeGenerator::default().generate_tree(3, 10.0);
        let longest = visit_all_mut(&mut Doubler, &mut tree, (), 0);

        assert_eq!(longest, 3);
        assert!(tree.root.children.iter().all(|c| (c.parameters.size - 0.8).abs() < 0.0001));
        assert!((tree.root.children[0].children[2].parameters.size - 0.8).abs() < 0.0001);
    }
}
