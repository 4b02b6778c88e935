use glocus_core::models::Locus;

use crate::consistent::{NodeKind, Verdict, consistent};
use crate::errors::GistError;
use crate::merge::bounding_box;
use crate::penalty::penalty;
use crate::split::{PickSplit, pick_split};
use crate::strategy::Strategy;

///
/// The support functions a generalized search tree needs from a key type.
///
/// The tree owns pages, traversal and concurrency; an operator class only
/// answers questions about keys. All methods are associated functions so an
/// implementation carries no state and is trivially `Send + Sync`.
///
pub trait GistOpClass {
    type Key: Clone + Send + Sync;

    /// Smallest key covering all `entries`, `None` when there are none.
    fn union(entries: &[Self::Key]) -> Option<Self::Key>;

    /// Cost of inserting `new` below `original`; lower is better.
    fn penalty(original: &Self::Key, new: &Self::Key) -> f32;

    /// Split an overfull page into two.
    fn pick_split<Id: Clone>(
        entries: &[(Id, Self::Key)],
    ) -> Result<PickSplit<Id, Self::Key>, GistError>;

    /// Check one entry against a query.
    fn consistent(kind: NodeKind, key: &Self::Key, query: &Self::Key, strategy: Strategy)
    -> Verdict;

    /// Key equality, used by the tree to detect unchanged parent keys.
    fn same(a: &Self::Key, b: &Self::Key) -> bool;
}

/// [`GistOpClass`] for [`Locus`] keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocusOpClass;

impl GistOpClass for LocusOpClass {
    type Key = Locus;

    fn union(entries: &[Locus]) -> Option<Locus> {
        bounding_box(entries)
    }

    fn penalty(original: &Locus, new: &Locus) -> f32 {
        penalty(original, new)
    }

    fn pick_split<Id: Clone>(entries: &[(Id, Locus)]) -> Result<PickSplit<Id>, GistError> {
        pick_split(entries)
    }

    fn consistent(kind: NodeKind, key: &Locus, query: &Locus, strategy: Strategy) -> Verdict {
        consistent(kind, key, query, strategy)
    }

    fn same(a: &Locus, b: &Locus) -> bool {
        a.equals(b)
    }
}
