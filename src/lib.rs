//! # arbora: enumeration of unordered rooted trees
//!
//! This library enumerates every unordered rooted tree with exactly `N`
//! nodes and at most `M` leaves, emitting each isomorphism class exactly
//! once in canonical form. Counted with `M = N`, the sequence is OEIS
//! A000081.
//!
//! ## Architecture
//!
//! - **Canonical form**: a tree serializes to `"(" + children + ")"` with
//!   siblings sorted lexicographically; the canonical string doubles as the
//!   deduplication key and a pruning device.
//! - **Memoized core**: a recursion over integer partitions of the root's
//!   remaining nodes, cached per `(nodes, max_leaves)` subproblem.
//! - **Small-leaf specializer**: closed-form constructions for leaf budgets
//!   up to four, used both as an accelerator and as a cross-validation
//!   oracle for the general path.
//! - **Parallel driver**: the root's partitions are distributed to workers
//!   that each extend a private copy of a pre-warmed cache; results are
//!   merged and deduplicated single-threaded before emission.
//!
//! ## Example
//!
//! ```
//! use arbora::Generator;
//!
//! let mut generator = Generator::new();
//! let mut reprs = Vec::new();
//! let count = generator
//!     .generate(3, 2, false, |tree| reprs.push(tree.to_string()))
//!     .unwrap();
//! assert_eq!(count, 2);
//! reprs.sort();
//! assert_eq!(reprs, ["((()))", "((),())"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Tree value type and canonical-form operations
pub mod tree;

/// Enumeration engine: core generator, partitions, specializer, parallelism
pub mod generate;

/// Timing, progress and memory utilities
pub mod utils;

// Re-export commonly used types
pub use generate::Generator;
pub use tree::Tree;

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed tree serialization
    #[error("invalid tree: {0}")]
    InvalidTree(String),

    /// Node count beyond the hard limit
    #[error("N={n} is too large; the maximum supported is N={max}")]
    TooManyNodes {
        /// Requested node count
        n: usize,
        /// Hard limit on node count
        max: usize,
    },

    /// Estimated memory exceeds what the system has available
    #[error(
        "insufficient memory for N={n}: estimated ~{estimated_gib} GiB, \
         available ~{available_gib} GiB; try a smaller N (N <= 20 is safe)"
    )]
    InsufficientMemory {
        /// Requested node count
        n: usize,
        /// Estimated peak memory in GiB
        estimated_gib: u64,
        /// Available system memory in GiB
        available_gib: u64,
    },

    /// Worker thread pool construction failed
    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{generate::Generator, tree::Tree, Error, Result};
}
