//! Core types for glocus: genomic loci and the algebra an interval index is
//! built on.
//!
//! A [`Locus`](models::Locus) is a contig name plus an inclusive integer
//! range. Contig names are ordered naturally (`chr2 < chr10`), loci are
//! ordered by contig, then start, then end.
//!
//! ## Quick Start
//!
//! ```rust
//! use glocus_core::models::{Contig, Locus};
//!
//! let a: Locus = "chr1:100-200".parse().unwrap();
//! let b: Locus = "chr1:150-300".parse().unwrap();
//!
//! assert!(a.overlap(&b));
//! assert_eq!(a.union(&b).to_string(), "chr1:100-300");
//! assert_eq!(a.intersection(&b).to_string(), "chr1:150-200");
//!
//! // merging across contigs gives a box on the sentinel contig
//! let c: Locus = "chr2:10-20".parse().unwrap();
//! assert_eq!(a.union(&c).contig(), &Contig::Any);
//! ```

/// Interval algebra on [`models::Locus`].
pub mod algebra;

/// Error types.
pub mod errors;

/// Value types: contigs, loci and locus files.
pub mod models;

/// Natural ordering and file helpers.
pub mod utils;
