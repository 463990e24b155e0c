//! Error types for puzzle generation.
//!
//! All operations return structured errors rather than panicking.
//! Note that a random placement finding no valid slot is *not* an error:
//! it is signaled through a boolean flag and the caller continues with the
//! sequence unchanged (see `sequence::randomly_place_element`).

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Length mismatch: the element-wise combine primitives (`add`, `subtract`)
///   were given sequences of different lengths
/// - Unknown task: a registry lookup for a task name that does not exist
#[derive(Debug, Error)]
pub enum Error {
    /// Element-wise combine primitives require equal-length inputs.
    ///
    /// This is a precondition violation: it aborts the current generator
    /// call and is never produced by the shipped generators, which only
    /// combine sequences they sized identically.
    #[error("sequence length mismatch: left has {left} symbols, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// No generator is registered under the requested task name.
    #[error("unknown task: {0:?}")]
    UnknownTask(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
