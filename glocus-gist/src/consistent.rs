//! Deciding which index entries a query has to look at.
//!
//! A leaf entry holds a real locus and is checked exactly. An internal entry
//! holds the bounding box of everything below it and is checked
//! conservatively: it is only pruned when no locus inside the box can
//! possibly satisfy the query. A pruned internal entry is never wrong, an
//! accepted one may lead to leaves that do not match.
//!
//! | strategy       | leaf              | internal            |
//! |----------------|-------------------|---------------------|
//! | `Left`         | `left`            | `!over_right`       |
//! | `OverLeft`     | `over_left`       | `!right`            |
//! | `Overlap`      | `overlap`         | `overlap`           |
//! | `OverRight`    | `over_right`      | `!left`             |
//! | `Right`        | `right`           | `!over_left`        |
//! | `Same`         | `equals`          | `contains`          |
//! | `Contains`     | `contains`        | `contains`          |
//! | `ContainedBy`  | `contained`       | `overlap`           |

use log::debug;

use glocus_core::models::Locus;

use crate::strategy::Strategy;

/// Whether a key sits in a leaf or in an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Internal,
}

///
/// Outcome of checking one index entry against a query.
///
/// # Variants
///
/// * `Match` - a leaf key satisfying the query; exact, no recheck needed
/// * `Descend` - an internal box that may hold matching leaves
/// * `Prune` - nothing at or below this entry can match
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Descend,
    Prune,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }

    pub fn is_pruned(&self) -> bool {
        matches!(self, Verdict::Prune)
    }
}

/// Exact check of a stored locus against the query.
pub fn leaf_consistent(key: &Locus, query: &Locus, strategy: Strategy) -> bool {
    match strategy {
        Strategy::Left => key.left(query),
        Strategy::OverLeft => key.over_left(query),
        Strategy::Overlap => key.overlap(query),
        Strategy::OverRight => key.over_right(query),
        Strategy::Right => key.right(query),
        Strategy::Same => key.equals(query),
        Strategy::Contains => key.contains(query),
        Strategy::ContainedBy => key.contained(query),
    }
}

/// Could any locus inside the bounding box `key` satisfy the query?
pub fn internal_consistent(key: &Locus, query: &Locus, strategy: Strategy) -> bool {
    match strategy {
        Strategy::Left => !key.over_right(query),
        Strategy::OverLeft => !key.right(query),
        Strategy::Overlap => key.overlap(query),
        Strategy::OverRight => !key.left(query),
        Strategy::Right => !key.over_left(query),
        Strategy::Same | Strategy::Contains => key.contains(query),
        Strategy::ContainedBy => key.overlap(query),
    }
}

///
/// Check one index entry against a query.
///
/// # Arguments
/// - kind: whether `key` is a stored locus or a bounding box
/// - key: the entry's key
/// - query: the query locus
/// - strategy: the relation asked for
///
pub fn consistent(kind: NodeKind, key: &Locus, query: &Locus, strategy: Strategy) -> Verdict {
    match kind {
        NodeKind::Leaf if leaf_consistent(key, query, strategy) => Verdict::Match,
        NodeKind::Internal if internal_consistent(key, query, strategy) => Verdict::Descend,
        _ => Verdict::Prune,
    }
}

///
/// Same as [`consistent`] for callers that carry R-tree strategy numbers.
/// An unrecognized number prunes the entry.
///
pub fn consistent_by_number(kind: NodeKind, key: &Locus, query: &Locus, number: u16) -> Verdict {
    match Strategy::from_number(number) {
        Some(strategy) => consistent(kind, key, query, strategy),
        None => {
            debug!("unrecognized strategy number {}, pruning", number);
            Verdict::Prune
        }
    }
}
