//! string-patterns-core: procedural generators for pattern-recognition puzzles
//!
//! This library synthesizes small "infer the rule" puzzles used as evaluation
//! samples. Each puzzle is a handful of worked question/answer pairs sharing
//! one latent transformation rule, plus a final query whose answer is withheld
//! so a model under test must infer the rule and complete it.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `sequence`: generic symbol-sequence primitives (placement search,
//!   overlay/subtract combinators, sliding-window dilation)
//! - `puzzle`: the puzzle data model and canonical text rendering
//! - `generators`: the eight independent rule families and the task registry
//! - `builder`: drives a generator N times to produce a batch for one task
//! - `record`: the serialized sample shape consumed by the persistence layer
//!
//! # Design Principles
//!
//! - **No panics**: precondition violations are structured errors
//! - **No hidden randomness**: every generator takes an explicit seeded
//!   `ChaCha8Rng`, so runs are reproducible given the same seed
//! - **No I/O**: file and registry emission belongs to the application layer

pub mod builder;
pub mod error;
pub mod generators;
pub mod puzzle;
pub mod record;
pub mod sequence;

// Re-export commonly used types
pub use error::{Error, Result};
pub use puzzle::{Puzzle, PuzzleExample, RenderOptions, SymbolSeq};
