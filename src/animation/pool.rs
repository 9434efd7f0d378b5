use super::NodeAnimator;
use crate::error::SketchError;

/// Handle to an animator in an [`AnimatorPool`]
///
/// Many nodes may share one handle; the pool must outlive the tree's
/// animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimatorId(pub usize);

/// Owns the animators installed on a tree
#[derive(Debug, Clone, Default)]
pub struct AnimatorPool {
    animators: Vec<NodeAnimator>,
}

impl AnimatorPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animator: NodeAnimator) -> AnimatorId {
        self.animators.push(animator);
        AnimatorId(self.animators.len() - 1)
    }

    /// Look up an animator, failing loudly on a stale or foreign handle
    pub fn get(&self, id: AnimatorId) -> Result<&NodeAnimator, SketchError> {
        self.animators.get(id.0).ok_or(SketchError::AnimatorOutOfRange {
            index: id.0,
            len: self.animators.len(),
        })
    }

    pub fn contains(&self, id: AnimatorId) -> bool {
        id.0 < self.animators.len()
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AnimatorId> {
        (0..self.animators.len()).map(AnimatorId)
    }
}

impl FromIterator<NodeAnimator> for AnimatorPool {
    fn from_iter<I: IntoIterator<Item = NodeAnimator>>(iter: I) -> Self {
        Self {
            animators: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_sequential_ids() {
        let mut pool = AnimatorPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.push(NodeAnimator::default()), AnimatorId(0));
        assert_eq!(pool.push(NodeAnimator::default()), AnimatorId(1));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.ids().collect::<Vec<_>>(), vec![AnimatorId(0), AnimatorId(1)]);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let pool: AnimatorPool = std::iter::repeat(NodeAnimator::default()).take(2).collect();
        assert!(pool.get(AnimatorId(1)).is_ok());
        assert!(!pool.contains(AnimatorId(2)));
        assert_eq!(
            pool.get(AnimatorId(2)).unwrap_err(),
            SketchError::AnimatorOutOfRange { index: 2, len: 2 }
        );
    }
}
