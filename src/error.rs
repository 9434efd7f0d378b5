//! Errors raised by the sketch core
//!
//! Only lookups into the animator and chooser pools can fail; parameter
//! parsing recovers field by field and never surfaces an error.

use thiserror::Error;

/// Errors that can occur while wiring or running a sketch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// A node carries (or a chooser returned) an animator handle outside the pool.
    #[error("animator index {index} out of range for pool of {len}")]
    AnimatorOutOfRange {
        /// The offending handle.
        index: usize,
        /// Size of the animator pool.
        len: usize,
    },

    /// A configured chooser index is outside its pool.
    #[error("{pool} chooser index {index} out of range for pool of {len}")]
    ChooserOutOfRange {
        /// Which pool was indexed ("animator", "draw", "color").
        pool: &'static str,
        /// The configured index.
        index: usize,
        /// Size of that pool.
        len: usize,
    },
}
