//! Generalized search tree (GiST) support functions for genomic loci.
//!
//! A balanced search tree over [`Locus`](glocus_core::models::Locus) keys
//! needs four things from its keys, and this crate supplies them:
//!
//! - **union**: the bounding box of a set of keys ([`merge`])
//! - **penalty**: how much a box grows to take a new key ([`penalty`])
//! - **pick split**: how to divide an overfull page ([`split`])
//! - **consistent**: whether an entry can satisfy a query ([`consistent`])
//!
//! The tree itself (pages, traversal, locking) lives elsewhere and talks to
//! these functions through the [`GistOpClass`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use glocus_core::models::Locus;
//! use glocus_gist::{GistOpClass, LocusOpClass, NodeKind, Strategy, Verdict};
//!
//! let page: Vec<(usize, Locus)> = ["chr1:100-200", "chr1:150-300", "chr1:5000-6000", "chr2:10-20"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, s)| (i, s.parse().unwrap()))
//!     .collect();
//!
//! let split = LocusOpClass::pick_split(&page).unwrap();
//! let query: Locus = "chr1:180-190".parse().unwrap();
//!
//! // the left half (chr2:10-20 and chr1:100-200) may hold a match
//! assert_eq!(
//!     LocusOpClass::consistent(NodeKind::Internal, &split.left_box, &query, Strategy::Overlap),
//!     Verdict::Descend
//! );
//! ```

/// Consistency checks for leaf and internal entries.
pub mod consistent;

/// Error types.
pub mod errors;

/// Bounding boxes.
pub mod merge;

/// Insertion penalty.
pub mod penalty;

/// Page splitting.
pub mod split;

/// Query strategies.
pub mod strategy;

/// The operator class trait.
pub mod traits;

// re-exports
pub use self::consistent::{NodeKind, Verdict};
pub use self::errors::GistError;
pub use self::split::PickSplit;
pub use self::strategy::Strategy;
pub use self::traits::{GistOpClass, LocusOpClass};
